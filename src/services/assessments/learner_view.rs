use chrono::NaiveDate;

use super::AssessmentService;
use crate::errors::Result;
use crate::models::assessments::{
    entities::{AssessmentProgressStatus, AssessmentStatus},
    responses::{LearnerAssessmentView, LearnerAssessmentsResponse},
};

/// 学习者视角的测评总览
///
/// 仅 scheduled/active 参与分类（草稿不可见，已取消整体剔除）；
/// 受众解析后按注入的"今天"与提交记录分桶。
pub async fn list_for_learner(
    service: &AssessmentService,
    learner_id: i64,
    today: NaiveDate,
) -> Result<LearnerAssessmentsResponse> {
    let storage = service.storage();

    let membership = storage.get_learner_membership(learner_id).await?;
    let visible = storage
        .list_assessments_by_statuses(&[AssessmentStatus::Scheduled, AssessmentStatus::Active])
        .await?;

    let mut items = Vec::new();
    let mut upcoming_count = 0i64;
    let mut in_progress_count = 0i64;
    let mut missed_count = 0i64;
    let mut completed_count = 0i64;

    for assessment in visible {
        if !assessment.applies_to(learner_id, &membership.classroom_ids, &membership.group_ids) {
            continue;
        }

        let submission = storage
            .get_submission(learner_id, assessment.review_id)
            .await?;
        let has_completed = submission.as_ref().is_some_and(|s| s.is_completed());
        let score = submission.as_ref().and_then(|s| s.score);

        let progress = assessment.effective_progress_status(today, has_completed);
        match progress {
            AssessmentProgressStatus::Upcoming => upcoming_count += 1,
            AssessmentProgressStatus::InProgress => in_progress_count += 1,
            AssessmentProgressStatus::Missed => missed_count += 1,
            AssessmentProgressStatus::Completed => completed_count += 1,
        }

        let days_until_due = assessment.days_until_due(today);
        items.push(LearnerAssessmentView {
            assessment,
            progress,
            days_until_due,
            score,
        });
    }

    Ok(LearnerAssessmentsResponse {
        items,
        upcoming_count,
        in_progress_count,
        missed_count,
        completed_count,
    })
}
