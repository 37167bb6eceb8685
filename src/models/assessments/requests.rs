use crate::models::assessments::entities::{AssessmentStatus, AudienceKind};
use crate::models::common::pagination::PaginationQuery;
use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

/// 创建测评请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct CreateAssessmentRequest {
    pub review_id: i64,
    pub title: String,
    pub subject: String,
    pub grade: String,
    pub description: Option<String>,
    pub start_date: NaiveDate, // ISO 8601 日期，如 "2025-03-20"
    pub end_date: NaiveDate,
    pub audience: AudienceKind,
    pub class_ids: Option<Vec<i64>>,
    pub group_ids: Option<Vec<i64>>,
    pub learner_ids: Option<Vec<i64>>,
    /// true 时直接进入 scheduled，否则保存为草稿
    pub as_scheduled: bool,
}

/// 调整日期窗口请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct RescheduleAssessmentRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// 测评列表查询参数（教师视角）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct AssessmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<AssessmentStatus>,
    pub subject: Option<String>,
    pub created_by: Option<i64>,
    /// 仅保留窗口与该区间有交集的测评
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone, Default)]
pub struct AssessmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<AssessmentStatus>,
    pub subject: Option<String>,
    pub created_by: Option<i64>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub search: Option<String>,
}

impl From<AssessmentListParams> for AssessmentListQuery {
    fn from(params: AssessmentListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            status: params.status,
            subject: params.subject,
            created_by: params.created_by,
            from_date: params.from_date,
            to_date: params.to_date,
            search: params.search,
        }
    }
}
