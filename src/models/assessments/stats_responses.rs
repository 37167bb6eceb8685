use serde::Serialize;
use ts_rs::TS;

/// 测评统计响应（教师视角）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct AssessmentStatsResponse {
    pub assessment_id: i64,
    pub total_learners: i64,
    pub upcoming_count: i64,
    pub in_progress_count: i64,
    pub missed_count: i64,
    pub completed_count: i64,
    /// 已完成提交的平均得分；无已完成提交时为 None，前端渲染为 "—"
    pub average_score: Option<i64>,
    /// 尚无已完成提交的学习者 ID
    pub pending_learner_ids: Vec<i64>,
}
