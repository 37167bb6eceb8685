use tracing::info;

use super::AssessmentService;
use crate::errors::{AssessmentError, Result};
use crate::models::assessments::entities::{Assessment, AssessmentStatus};

/// 草稿排期：draft -> scheduled
pub async fn publish_assessment(
    service: &AssessmentService,
    assessment_id: i64,
) -> Result<Assessment> {
    let assessment = super::detail::get_assessment(service, assessment_id).await?;

    if !assessment
        .status
        .can_transition_to(AssessmentStatus::Scheduled)
    {
        return Err(AssessmentError::state_transition(format!(
            "测评 {assessment_id} 当前状态为 {}，不能排期",
            assessment.status
        )));
    }

    let updated = service
        .storage()
        .update_assessment_status(assessment_id, AssessmentStatus::Scheduled)
        .await?
        .ok_or_else(|| AssessmentError::not_found(format!("测评不存在: {assessment_id}")))?;

    info!(assessment_id, "Assessment published to schedule");
    Ok(updated)
}
