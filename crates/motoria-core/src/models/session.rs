use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

use super::answer::AnswerSummary;

/// Lifecycle status of a test session. One-way: `Created` → `Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum TestStatus {
    Created,
    Complete,
}

/// One of the four fixed gesture sub-test positions on a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtestSlot {
    First,
    Second,
    Third,
    Fourth,
}

impl SubtestSlot {
    /// Map the client-supplied 1–4 index to a slot.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            4 => Some(Self::Fourth),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
        }
    }
}

/// A patient test attempt, accumulated across multiple submission calls.
///
/// Created by a doctor, then mutated in place by up to four gesture-scoring
/// calls and exactly one answer submission. Diagnosis and degree are
/// unconditional writes at any point in the lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub patient_name: String,
    pub patient_birth_date: jiff::civil::Date,
    pub patient_phone_number: String,
    pub created_at: jiff::Timestamp,
    pub status: TestStatus,
    pub diagnosis: Option<String>,
    pub degree: Option<String>,
    pub complaints: Option<Vec<String>>,
    pub recommendation_for_user: Option<Vec<String>>,
    pub recommendation_for_doctor: Option<Vec<String>>,
    pub am: Option<Vec<String>>,
    pub av: Option<Vec<String>>,
    pub sp: Option<Vec<String>>,
    pub nfr_points: Option<i64>,
    pub kfr_points: Option<i64>,
    pub symptoms_points: Option<i64>,
    pub first_test: Option<i64>,
    pub second_test: Option<i64>,
    pub third_test: Option<i64>,
    pub fourth_test: Option<i64>,
    pub gestures_result: Option<i64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

impl TestSession {
    /// New session in `Created` status with all score and answer fields unset.
    pub fn create(
        user_id: Uuid,
        patient_name: String,
        patient_birth_date: jiff::civil::Date,
        patient_phone_number: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            patient_name,
            patient_birth_date,
            patient_phone_number,
            created_at: jiff::Timestamp::now(),
            status: TestStatus::Created,
            diagnosis: None,
            degree: None,
            complaints: None,
            recommendation_for_user: None,
            recommendation_for_doctor: None,
            am: None,
            av: None,
            sp: None,
            nfr_points: None,
            kfr_points: None,
            symptoms_points: None,
            first_test: None,
            second_test: None,
            third_test: None,
            fourth_test: None,
            gestures_result: None,
            height: None,
            weight: None,
        }
    }

    /// Write a gesture sub-score into its slot. Recording the fourth slot
    /// also writes `gestures_result` as the sum of all four slots, with
    /// unrecorded slots counting as zero.
    ///
    /// Slots may be recorded in any order and overwritten freely; the status
    /// is never touched here.
    pub fn record_subtest(&mut self, slot: SubtestSlot, score: i64) {
        match slot {
            SubtestSlot::First => self.first_test = Some(score),
            SubtestSlot::Second => self.second_test = Some(score),
            SubtestSlot::Third => self.third_test = Some(score),
            SubtestSlot::Fourth => {
                self.fourth_test = Some(score);
                self.gestures_result = Some(
                    self.first_test.unwrap_or(0)
                        + self.second_test.unwrap_or(0)
                        + self.third_test.unwrap_or(0)
                        + score,
                );
            }
        }
    }

    /// Whether the questionnaire has already been submitted. The guard is
    /// a non-empty `complaints` list, not the status field.
    pub fn answers_submitted(&self) -> bool {
        self.complaints.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Merge an aggregated answer summary onto the session and flip the
    /// status to `Complete`. Rejects re-submission.
    pub fn apply_answers(
        &mut self,
        summary: AnswerSummary,
        height: f64,
        weight: f64,
    ) -> Result<(), CoreError> {
        if self.answers_submitted() {
            return Err(CoreError::AlreadySubmitted);
        }

        self.complaints = Some(summary.complaints);
        self.recommendation_for_user = Some(summary.recommendation_for_user);
        self.recommendation_for_doctor = Some(summary.recommendation_for_doctor);
        self.am = Some(summary.am);
        self.av = Some(summary.av);
        self.sp = Some(summary.sp);
        self.nfr_points = Some(summary.nfr_points);
        self.kfr_points = Some(summary.kfr_points);
        self.symptoms_points = Some(summary.symptoms_points);
        self.height = Some(height);
        self.weight = Some(weight);
        self.status = TestStatus::Complete;

        Ok(())
    }

    /// The patient-facing projection of a completed session.
    ///
    /// Diagnosis, degree and the raw tag lists other than
    /// `recommendation_for_user` are deliberately excluded.
    pub fn patient_view(&self) -> PatientReport {
        PatientReport {
            patient_name: self.patient_name.clone(),
            patient_birth_date: self.patient_birth_date,
            patient_phone_number: self.patient_phone_number.clone(),
            recommendation_for_user: self.recommendation_for_user.clone().unwrap_or_default(),
            nfr_points: self.nfr_points,
            kfr_points: self.kfr_points,
            symptoms_points: self.symptoms_points,
            height: self.height,
            weight: self.weight,
            gestures_result: self.gestures_result,
            created_at: self.created_at,
        }
    }
}

/// What a patient (or the kiosk frontend) sees of a completed session.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientReport {
    pub patient_name: String,
    pub patient_birth_date: jiff::civil::Date,
    pub patient_phone_number: String,
    pub recommendation_for_user: Vec<String>,
    pub nfr_points: Option<i64>,
    pub kfr_points: Option<i64>,
    pub symptoms_points: Option<i64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub gestures_result: Option<i64>,
    pub created_at: jiff::Timestamp,
}
