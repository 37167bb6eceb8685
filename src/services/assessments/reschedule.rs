use tracing::info;

use super::AssessmentService;
use crate::errors::{AssessmentError, Result};
use crate::models::assessments::{
    entities::Assessment, requests::RescheduleAssessmentRequest,
};
use crate::utils::validate::validate_date_range;

/// 调整日期窗口
///
/// 仅草稿与已排期可调整；已下发/已取消一律拒绝。
pub async fn reschedule_assessment(
    service: &AssessmentService,
    assessment_id: i64,
    req: RescheduleAssessmentRequest,
) -> Result<Assessment> {
    validate_date_range(req.start_date, req.end_date).map_err(AssessmentError::validation)?;

    let assessment = super::detail::get_assessment(service, assessment_id).await?;
    if !assessment.status.allows_reschedule() {
        return Err(AssessmentError::state_transition(format!(
            "测评 {assessment_id} 当前状态为 {}，不能调整日期",
            assessment.status
        )));
    }

    let updated = service
        .storage()
        .update_assessment_window(assessment_id, req.start_date, req.end_date)
        .await?
        .ok_or_else(|| AssessmentError::not_found(format!("测评不存在: {assessment_id}")))?;

    info!(
        assessment_id,
        start_date = %updated.start_date,
        end_date = %updated.end_date,
        "Assessment rescheduled"
    );
    Ok(updated)
}
