//! The static answer catalog.
//!
//! Reference data mapping integer answer ids to their tag and point
//! contributions. Ids line up with the option ids in
//! [`crate::questionnaire`].

use std::sync::LazyLock;

use motoria_core::models::answer::AnswerRecord;

/// An answer with the given id and no contributions; fill in fields with
/// struct update syntax.
fn answer(answer_id: i64) -> AnswerRecord {
    AnswerRecord {
        answer_id,
        complaints: None,
        recommendation_for_user: None,
        recommendation_for_doctor: None,
        am: None,
        av: None,
        sp: None,
        nfr_points: None,
        kfr_points: None,
        symptoms_points: None,
    }
}

static CATALOG: LazyLock<Vec<AnswerRecord>> = LazyLock::new(|| {
    vec![
        // Module 1 — reported complaints.
        AnswerRecord {
            complaints: Some("tremor at rest".to_string()),
            recommendation_for_doctor: Some("assess tremor amplitude and frequency".to_string()),
            am: Some("AM-1".to_string()),
            symptoms_points: Some(3),
            ..answer(1)
        },
        AnswerRecord {
            complaints: Some("hand stiffness".to_string()),
            recommendation_for_user: Some("warm-up exercises before fine motor work".to_string()),
            nfr_points: Some(1),
            symptoms_points: Some(2),
            ..answer(2)
        },
        AnswerRecord {
            complaints: Some("grip weakness".to_string()),
            recommendation_for_doctor: Some("hand dynamometry".to_string()),
            kfr_points: Some(1),
            symptoms_points: Some(2),
            ..answer(3)
        },
        AnswerRecord {
            complaints: Some("numbness in fingers".to_string()),
            av: Some("AV-3".to_string()),
            symptoms_points: Some(2),
            ..answer(4)
        },
        // "None of the above" — contributes nothing.
        answer(5),
        // Module 2 — trouble with buttons and zips, never → always.
        answer(6),
        AnswerRecord {
            kfr_points: Some(1),
            ..answer(7)
        },
        AnswerRecord {
            recommendation_for_user: Some("occupational therapy consultation".to_string()),
            kfr_points: Some(2),
            ..answer(8)
        },
        AnswerRecord {
            complaints: Some("difficulty with fasteners".to_string()),
            recommendation_for_user: Some("occupational therapy consultation".to_string()),
            kfr_points: Some(3),
            ..answer(9)
        },
        // Module 2 — handwriting changes, none → marked.
        answer(10),
        AnswerRecord {
            nfr_points: Some(1),
            ..answer(11)
        },
        AnswerRecord {
            am: Some("AM-2".to_string()),
            nfr_points: Some(2),
            ..answer(12)
        },
        AnswerRecord {
            complaints: Some("handwriting has become smaller".to_string()),
            recommendation_for_doctor: Some("micrographia workup".to_string()),
            am: Some("AM-2".to_string()),
            nfr_points: Some(3),
            ..answer(13)
        },
        // Module 3 — difficulty with utensils, none → severe.
        answer(14),
        AnswerRecord {
            sp: Some("SP-1".to_string()),
            symptoms_points: Some(1),
            ..answer(15)
        },
        AnswerRecord {
            sp: Some("SP-2".to_string()),
            symptoms_points: Some(2),
            ..answer(16)
        },
        AnswerRecord {
            complaints: Some("difficulty using utensils".to_string()),
            recommendation_for_user: Some("adaptive utensil grips".to_string()),
            sp: Some("SP-3".to_string()),
            symptoms_points: Some(3),
            ..answer(17)
        },
    ]
});

/// The whole catalog, in id order.
pub fn all_answers() -> &'static [AnswerRecord] {
    &CATALOG
}

/// Look up the catalog entries for a set of selected ids.
///
/// Returns matches in catalog order; unknown ids are silently ignored, so an
/// entirely unknown selection comes back empty.
pub fn answers_by_ids(ids: &[i64]) -> Vec<AnswerRecord> {
    CATALOG
        .iter()
        .filter(|a| ids.contains(&a.answer_id))
        .cloned()
        .collect()
}
