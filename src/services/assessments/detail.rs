use super::AssessmentService;
use crate::errors::{AssessmentError, Result};
use crate::models::assessments::entities::Assessment;

/// 获取测评详情
pub async fn get_assessment(
    service: &AssessmentService,
    assessment_id: i64,
) -> Result<Assessment> {
    service
        .storage()
        .get_assessment_by_id(assessment_id)
        .await?
        .ok_or_else(|| AssessmentError::not_found(format!("测评不存在: {assessment_id}")))
}
