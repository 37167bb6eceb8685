use tracing::info;

use super::AssessmentService;
use crate::errors::{AssessmentError, Result};
use crate::models::assessments::entities::{Assessment, AssessmentStatus};

/// 取消测评：scheduled|active -> cancelled，幂等
pub async fn cancel_assessment(
    service: &AssessmentService,
    assessment_id: i64,
) -> Result<Assessment> {
    let assessment = super::detail::get_assessment(service, assessment_id).await?;

    // 已取消直接返回，不报错
    if assessment.status == AssessmentStatus::Cancelled {
        return Ok(assessment);
    }

    if !assessment
        .status
        .can_transition_to(AssessmentStatus::Cancelled)
    {
        return Err(AssessmentError::state_transition(format!(
            "测评 {assessment_id} 当前状态为 {}，不能取消",
            assessment.status
        )));
    }

    let updated = service
        .storage()
        .update_assessment_status(assessment_id, AssessmentStatus::Cancelled)
        .await?
        .ok_or_else(|| AssessmentError::not_found(format!("测评不存在: {assessment_id}")))?;

    info!(assessment_id, "Assessment cancelled");
    Ok(updated)
}
