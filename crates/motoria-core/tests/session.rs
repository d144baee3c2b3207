use jiff::civil::date;
use uuid::Uuid;

use motoria_core::error::CoreError;
use motoria_core::models::answer::AnswerSummary;
use motoria_core::models::session::{SubtestSlot, TestSession, TestStatus};

fn new_session() -> TestSession {
    TestSession::create(
        Uuid::new_v4(),
        "Alex Morgan".to_string(),
        date(1987, 3, 14),
        "+1-555-0142".to_string(),
    )
}

fn summary() -> AnswerSummary {
    AnswerSummary {
        complaints: vec!["tremor".to_string(), "stiffness".to_string()],
        recommendation_for_user: vec!["daily stretching".to_string()],
        recommendation_for_doctor: vec!["order EMG".to_string()],
        am: vec!["AM-2".to_string()],
        av: vec![],
        sp: vec!["SP-1".to_string()],
        nfr_points: 4,
        kfr_points: 2,
        symptoms_points: 7,
    }
}

#[test]
fn created_session_has_no_scores_or_answers() {
    let session = new_session();
    assert_eq!(session.status, TestStatus::Created);
    assert!(session.first_test.is_none());
    assert!(session.gestures_result.is_none());
    assert!(session.complaints.is_none());
    assert!(!session.answers_submitted());
}

#[test]
fn fourth_slot_sums_all_recorded_slots() {
    let mut session = new_session();
    session.record_subtest(SubtestSlot::First, 2);
    session.record_subtest(SubtestSlot::Second, 2);
    session.record_subtest(SubtestSlot::Third, 2);
    session.record_subtest(SubtestSlot::Fourth, 2);
    assert_eq!(session.gestures_result, Some(8));
}

#[test]
fn missing_sibling_slots_count_as_zero() {
    let mut session = new_session();
    session.record_subtest(SubtestSlot::Fourth, 3);
    assert_eq!(session.first_test, None);
    assert_eq!(session.gestures_result, Some(3));
}

#[test]
fn slots_overwrite_and_fourth_recomputes_the_total() {
    let mut session = new_session();
    session.record_subtest(SubtestSlot::Second, 5);
    session.record_subtest(SubtestSlot::Second, 1);
    assert_eq!(session.second_test, Some(1));

    session.record_subtest(SubtestSlot::Fourth, 2);
    assert_eq!(session.gestures_result, Some(3));

    // Re-recording the fourth slot recomputes the sum.
    session.record_subtest(SubtestSlot::Fourth, 4);
    assert_eq!(session.gestures_result, Some(5));
}

#[test]
fn recording_scores_does_not_change_status() {
    let mut session = new_session();
    session.record_subtest(SubtestSlot::Fourth, 2);
    assert_eq!(session.status, TestStatus::Created);
}

#[test]
fn apply_answers_completes_the_session() {
    let mut session = new_session();
    session
        .apply_answers(summary(), 178.0, 71.5)
        .expect("first submission should succeed");

    assert_eq!(session.status, TestStatus::Complete);
    assert!(session.answers_submitted());
    assert_eq!(session.nfr_points, Some(4));
    assert_eq!(session.kfr_points, Some(2));
    assert_eq!(session.symptoms_points, Some(7));
    assert_eq!(session.height, Some(178.0));
    assert_eq!(session.weight, Some(71.5));
}

#[test]
fn second_submission_is_rejected() {
    let mut session = new_session();
    session
        .apply_answers(summary(), 178.0, 71.5)
        .expect("first submission should succeed");

    let err = session
        .apply_answers(summary(), 180.0, 72.0)
        .expect_err("second submission must be rejected");
    assert!(matches!(err, CoreError::AlreadySubmitted));

    // The first submission's values are untouched.
    assert_eq!(session.height, Some(178.0));
}

#[test]
fn empty_complaints_does_not_block_submission() {
    // The guard is a non-empty complaints list, so a summary whose
    // complaints list came out empty leaves the session re-submittable.
    let mut session = new_session();
    let mut empty = summary();
    empty.complaints = vec![];
    session
        .apply_answers(empty, 160.0, 55.0)
        .expect("submission with empty complaints should succeed");
    assert!(!session.answers_submitted());
    assert!(session.apply_answers(summary(), 161.0, 56.0).is_ok());
}

#[test]
fn patient_view_excludes_doctor_fields() {
    let mut session = new_session();
    session.diagnosis = Some("essential tremor".to_string());
    session.degree = Some("mild".to_string());
    session.record_subtest(SubtestSlot::Fourth, 6);
    session
        .apply_answers(summary(), 178.0, 71.5)
        .expect("submission should succeed");

    let view = session.patient_view();
    assert_eq!(view.patient_name, session.patient_name);
    assert_eq!(view.recommendation_for_user, vec!["daily stretching"]);
    assert_eq!(view.gestures_result, Some(6));
    assert_eq!(view.nfr_points, Some(4));

    let json = serde_json::to_value(&view).expect("view serializes");
    let obj = json.as_object().expect("view is an object");
    assert!(!obj.contains_key("diagnosis"));
    assert!(!obj.contains_key("degree"));
    assert!(!obj.contains_key("complaints"));
    assert!(!obj.contains_key("recommendation_for_doctor"));
}

#[test]
fn slot_numbers_round_trip() {
    for n in 1..=4u8 {
        let slot = SubtestSlot::from_number(n).expect("1-4 are valid slots");
        assert_eq!(slot.number(), n);
    }
    assert!(SubtestSlot::from_number(0).is_none());
    assert!(SubtestSlot::from_number(5).is_none());
}
