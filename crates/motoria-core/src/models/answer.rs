use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One entry of the static answer catalog.
///
/// The six tag fields carry categorical strings that end up deduplicated on
/// the test session; `am`, `av` and `sp` are clinician-facing category codes
/// carried through from the catalog as-is. The three point fields contribute
/// to running totals, with absent values counting as zero.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerRecord {
    pub answer_id: i64,
    pub complaints: Option<String>,
    pub recommendation_for_user: Option<String>,
    pub recommendation_for_doctor: Option<String>,
    pub am: Option<String>,
    pub av: Option<String>,
    pub sp: Option<String>,
    pub nfr_points: Option<i64>,
    pub kfr_points: Option<i64>,
    pub symptoms_points: Option<i64>,
}

/// The merged result of a set of selected answers: six deduplicated tag
/// lists plus three summed point totals. Emission order of each list is not
/// part of the contract.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerSummary {
    pub complaints: Vec<String>,
    pub recommendation_for_user: Vec<String>,
    pub recommendation_for_doctor: Vec<String>,
    pub am: Vec<String>,
    pub av: Vec<String>,
    pub sp: Vec<String>,
    pub nfr_points: i64,
    pub kfr_points: i64,
    pub symptoms_points: i64,
}
