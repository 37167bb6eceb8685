use chrono::NaiveDate;
use tracing::info;

use super::{NotificationDispatcher, ReminderService};
use crate::errors::Result;

/// 下发提醒，返回实际提醒人数
///
/// 名单为空时不触发投递。
pub async fn send_reminders(
    service: &ReminderService,
    dispatcher: &dyn NotificationDispatcher,
    assessment_id: i64,
    today: NaiveDate,
) -> Result<i64> {
    let recipients = super::recipients::collect_recipients(service, assessment_id, today).await?;
    if recipients.is_empty() {
        return Ok(0);
    }

    let assessment = service
        .storage()
        .get_assessment_by_id(assessment_id)
        .await?
        .ok_or_else(|| {
            crate::errors::AssessmentError::not_found(format!("测评不存在: {assessment_id}"))
        })?;

    let message = if today < assessment.start_date {
        format!(
            "测评《{}》将于 {} 开始，{} 截止，请按时作答",
            assessment.title, assessment.start_date, assessment.end_date
        )
    } else {
        format!(
            "测评《{}》将于 {} 截止，尚未提交，请尽快完成",
            assessment.title, assessment.end_date
        )
    };

    dispatcher
        .dispatch(assessment_id, &recipients, &message)
        .await?;

    let count = recipients.len() as i64;
    info!(assessment_id, count, "Reminders dispatched");
    Ok(count)
}
