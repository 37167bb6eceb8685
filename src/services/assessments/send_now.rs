use tracing::info;

use super::AssessmentService;
use crate::errors::{AssessmentError, Result};
use crate::models::assessments::entities::{Assessment, AssessmentStatus};

/// 立即下发：scheduled -> active，无视开始日期
pub async fn send_assessment_now(
    service: &AssessmentService,
    assessment_id: i64,
) -> Result<Assessment> {
    let assessment = super::detail::get_assessment(service, assessment_id).await?;

    if !assessment.status.can_transition_to(AssessmentStatus::Active) {
        return Err(AssessmentError::state_transition(format!(
            "测评 {assessment_id} 当前状态为 {}，不能立即下发",
            assessment.status
        )));
    }

    let updated = service
        .storage()
        .update_assessment_status(assessment_id, AssessmentStatus::Active)
        .await?
        .ok_or_else(|| AssessmentError::not_found(format!("测评不存在: {assessment_id}")))?;

    info!(assessment_id, "Assessment sent to learners immediately");
    Ok(updated)
}
