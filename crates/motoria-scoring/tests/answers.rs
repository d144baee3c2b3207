use motoria_core::models::answer::AnswerRecord;
use motoria_scoring::answers::aggregate;
use motoria_scoring::catalog::{all_answers, answers_by_ids};
use motoria_scoring::error::ScoringError;
use motoria_scoring::questionnaire::test_modules;

fn record(answer_id: i64) -> AnswerRecord {
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

#[test]
fn empty_selection_is_an_error() {
    let err = aggregate(&[]).expect_err("empty selection must fail");
    assert!(matches!(err, ScoringError::NoAnswersSelected));
}

#[test]
fn tags_are_deduplicated_and_points_summed() {
    let selected = vec![
        AnswerRecord {
            complaints: Some("tremor".to_string()),
            recommendation_for_user: Some("rest".to_string()),
            nfr_points: Some(2),
            symptoms_points: Some(1),
            ..record(1)
        },
        AnswerRecord {
            complaints: Some("tremor".to_string()),
            am: Some("AM-1".to_string()),
            nfr_points: Some(3),
            kfr_points: Some(4),
            ..record(2)
        },
    ];

    let summary = aggregate(&selected).expect("non-empty selection aggregates");
    assert_eq!(summary.complaints, vec!["tremor"]);
    assert_eq!(summary.recommendation_for_user, vec!["rest"]);
    assert_eq!(summary.am, vec!["AM-1"]);
    assert!(summary.av.is_empty());
    assert_eq!(summary.nfr_points, 5);
    assert_eq!(summary.kfr_points, 4);
    assert_eq!(summary.symptoms_points, 1);
}

#[test]
fn absent_points_count_as_zero() {
    let summary = aggregate(&[record(1), record(2)]).expect("aggregates");
    assert_eq!(summary.nfr_points, 0);
    assert_eq!(summary.kfr_points, 0);
    assert_eq!(summary.symptoms_points, 0);
    assert!(summary.complaints.is_empty());
}

#[test]
fn empty_string_tags_are_skipped() {
    let selected = vec![AnswerRecord {
        complaints: Some(String::new()),
        sp: Some("SP-1".to_string()),
        ..record(1)
    }];

    let summary = aggregate(&selected).expect("aggregates");
    assert!(summary.complaints.is_empty());
    assert_eq!(summary.sp, vec!["SP-1"]);
}

#[test]
fn tag_lists_contain_no_duplicates() {
    let summary = aggregate(&answers_by_ids(&[8, 9])).expect("aggregates");
    // Both options carry the same user recommendation.
    assert_eq!(
        summary.recommendation_for_user,
        vec!["occupational therapy consultation"]
    );
    assert_eq!(summary.kfr_points, 5);
}

#[test]
fn lookup_ignores_unknown_ids() {
    assert!(answers_by_ids(&[9999]).is_empty());
    let found = answers_by_ids(&[1, 9999, 3]);
    let ids: Vec<i64> = found.iter().map(|a| a.answer_id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn catalog_ids_are_unique_and_cover_every_questionnaire_option() {
    let mut seen = std::collections::BTreeSet::new();
    for a in all_answers() {
        assert!(seen.insert(a.answer_id), "duplicate catalog id {}", a.answer_id);
    }

    for module in test_modules() {
        for question in &module.questions {
            for opt in &question.options {
                assert!(
                    seen.contains(&opt.answer_id),
                    "questionnaire option {} has no catalog entry",
                    opt.answer_id
                );
            }
        }
    }
}
