use super::AssessmentService;
use crate::errors::Result;
use crate::models::assessments::{
    requests::AssessmentListParams, responses::AssessmentListResponse,
};

/// 列出测评（教师视角，分页 + 过滤）
pub async fn list_assessments(
    service: &AssessmentService,
    params: AssessmentListParams,
) -> Result<AssessmentListResponse> {
    service
        .storage()
        .list_assessments_with_pagination(params.into())
        .await
}
