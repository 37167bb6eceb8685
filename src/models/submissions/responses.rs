use crate::models::submissions::entities::Submission;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListResponse {
    pub items: Vec<Submission>,
    pub total: i64,
}

/// 判分结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmitResultResponse {
    pub submission: Submission,
    pub score: i64,
    pub total_questions: i64,
    pub correct_count: i64,
}
