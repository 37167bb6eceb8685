use crate::models::assessments::entities::{Assessment, AssessmentProgressStatus};
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct AssessmentListResponse {
    pub items: Vec<Assessment>,
    pub pagination: PaginationInfo,
}

/// 学习者视角的单条测评视图
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct LearnerAssessmentView {
    pub assessment: Assessment,
    pub progress: AssessmentProgressStatus,
    /// 距截止日期的有符号天数，负数表示已过期
    pub days_until_due: i64,
    pub score: Option<i64>,
}

/// 学习者视角的测评总览
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct LearnerAssessmentsResponse {
    pub items: Vec<LearnerAssessmentView>,
    pub upcoming_count: i64,
    pub in_progress_count: i64,
    pub missed_count: i64,
    pub completed_count: i64,
}
