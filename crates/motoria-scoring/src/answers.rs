//! Questionnaire answer aggregation.

use std::collections::BTreeSet;

use motoria_core::models::answer::{AnswerRecord, AnswerSummary};

use crate::error::ScoringError;

/// Merge a set of selected answers into a deduplicated summary.
///
/// Each of the six tag fields accumulates into its own set (empty values are
/// skipped), and each of the three point fields adds into a running total
/// with absent values counting as zero. The tag lists come out in sorted
/// order; callers must not rely on any particular order.
///
/// Fails when `selected` is empty — the catalog lookup found nothing for the
/// requested ids.
pub fn aggregate(selected: &[AnswerRecord]) -> Result<AnswerSummary, ScoringError> {
    if selected.is_empty() {
        return Err(ScoringError::NoAnswersSelected);
    }

    let mut complaints = BTreeSet::new();
    let mut recommendation_for_user = BTreeSet::new();
    let mut recommendation_for_doctor = BTreeSet::new();
    let mut am = BTreeSet::new();
    let mut av = BTreeSet::new();
    let mut sp = BTreeSet::new();

    let mut nfr_points = 0;
    let mut kfr_points = 0;
    let mut symptoms_points = 0;

    for answer in selected {
        insert_tag(&mut complaints, &answer.complaints);
        insert_tag(&mut recommendation_for_user, &answer.recommendation_for_user);
        insert_tag(&mut recommendation_for_doctor, &answer.recommendation_for_doctor);
        insert_tag(&mut am, &answer.am);
        insert_tag(&mut av, &answer.av);
        insert_tag(&mut sp, &answer.sp);

        nfr_points += answer.nfr_points.unwrap_or(0);
        kfr_points += answer.kfr_points.unwrap_or(0);
        symptoms_points += answer.symptoms_points.unwrap_or(0);
    }

    Ok(AnswerSummary {
        complaints: complaints.into_iter().collect(),
        recommendation_for_user: recommendation_for_user.into_iter().collect(),
        recommendation_for_doctor: recommendation_for_doctor.into_iter().collect(),
        am: am.into_iter().collect(),
        av: av.into_iter().collect(),
        sp: sp.into_iter().collect(),
        nfr_points,
        kfr_points,
        symptoms_points,
    })
}

fn insert_tag(set: &mut BTreeSet<String>, value: &Option<String>) {
    if let Some(tag) = value
        && !tag.is_empty()
    {
        set.insert(tag.clone());
    }
}
