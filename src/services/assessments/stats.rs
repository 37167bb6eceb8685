use std::sync::Arc;

use chrono::NaiveDate;

use super::AssessmentService;
use crate::errors::Result;
use crate::models::assessments::{
    entities::{Assessment, AssessmentProgressStatus, AudienceKind},
    stats_responses::AssessmentStatsResponse,
};
use crate::storage::Storage;

/// 解析测评的应试名单：受众集合经归属事实展开为学习者 ID
pub(crate) async fn resolve_roster(
    storage: &Arc<dyn Storage>,
    assessment: &Assessment,
) -> Result<Vec<i64>> {
    let mut roster = match assessment.audience {
        AudienceKind::Class => {
            storage
                .list_learners_in_classes(&assessment.class_ids)
                .await?
        }
        AudienceKind::Group => storage.list_learners_in_groups(&assessment.group_ids).await?,
        AudienceKind::Individual => assessment.learner_ids.clone(),
    };
    roster.sort_unstable();
    roster.dedup();
    Ok(roster)
}

/// 测评统计（教师视角）
///
/// 总人数、各进度桶人数、已完成提交的平均得分。平均分仅统计
/// 已完成提交；一份都没有时为 None，由前端渲染为 "—" 而非 0。
pub async fn get_assessment_stats(
    service: &AssessmentService,
    assessment_id: i64,
    today: NaiveDate,
) -> Result<AssessmentStatsResponse> {
    let storage = service.storage();
    let assessment = super::detail::get_assessment(service, assessment_id).await?;

    let roster = resolve_roster(storage, &assessment).await?;

    let mut upcoming_count = 0i64;
    let mut in_progress_count = 0i64;
    let mut missed_count = 0i64;
    let mut completed_count = 0i64;
    let mut scores: Vec<i64> = Vec::new();
    let mut pending_learner_ids: Vec<i64> = Vec::new();

    for learner_id in &roster {
        let submission = storage
            .get_submission(*learner_id, assessment.review_id)
            .await?;
        let has_completed = submission.as_ref().is_some_and(|s| s.is_completed());

        match assessment.effective_progress_status(today, has_completed) {
            AssessmentProgressStatus::Upcoming => upcoming_count += 1,
            AssessmentProgressStatus::InProgress => in_progress_count += 1,
            AssessmentProgressStatus::Missed => missed_count += 1,
            AssessmentProgressStatus::Completed => completed_count += 1,
        }

        if has_completed {
            if let Some(score) = submission.as_ref().and_then(|s| s.score) {
                scores.push(score);
            }
        } else {
            pending_learner_ids.push(*learner_id);
        }
    }

    let average_score = if scores.is_empty() {
        None
    } else {
        let sum: i64 = scores.iter().sum();
        Some(((sum as f64) / (scores.len() as f64)).round() as i64)
    };

    Ok(AssessmentStatsResponse {
        assessment_id,
        total_learners: roster.len() as i64,
        upcoming_count,
        in_progress_count,
        missed_count,
        completed_count,
        average_score,
        pending_learner_ids,
    })
}
