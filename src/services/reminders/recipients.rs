use chrono::NaiveDate;
use tracing::debug;

use super::ReminderService;
use crate::config::AppConfig;
use crate::errors::{AssessmentError, Result};
use crate::models::assessments::entities::AssessmentProgressStatus;
use crate::services::assessments::stats::resolve_roster;

/// 计算提醒对象
///
/// 测评进行中、或临近开始（提前天数由 reminders.lead_days 控制）时，
/// 名单内尚无已完成提交的学习者进入提醒名单。已错过的不再提醒；
/// 草稿/已取消的测评没有提醒对象。
pub async fn collect_recipients(
    service: &ReminderService,
    assessment_id: i64,
    today: NaiveDate,
) -> Result<Vec<i64>> {
    let storage = service.storage();

    let assessment = storage
        .get_assessment_by_id(assessment_id)
        .await?
        .ok_or_else(|| AssessmentError::not_found(format!("测评不存在: {assessment_id}")))?;

    if !assessment.status.is_learner_visible() {
        return Ok(vec![]);
    }

    // 进度与学习者无关（完成与否在下面逐人判断），先整体定档
    let in_reminder_window = match assessment.effective_progress_status(today, false) {
        AssessmentProgressStatus::InProgress => true,
        AssessmentProgressStatus::Upcoming => {
            let lead_days = AppConfig::get().reminders.lead_days;
            (assessment.start_date - today).num_days() <= lead_days
        }
        AssessmentProgressStatus::Missed | AssessmentProgressStatus::Completed => false,
    };
    if !in_reminder_window {
        return Ok(vec![]);
    }

    let roster = resolve_roster(storage, &assessment).await?;
    let mut recipients = Vec::new();
    for learner_id in roster {
        let submission = storage
            .get_submission(learner_id, assessment.review_id)
            .await?;
        if submission.as_ref().is_some_and(|s| s.is_completed()) {
            continue;
        }
        recipients.push(learner_id);
    }

    debug!(
        assessment_id,
        recipient_count = recipients.len(),
        "Reminder recipients resolved"
    );
    Ok(recipients)
}
