use tracing::info;

use super::SubmissionService;
use crate::errors::{AssessmentError, Result};
use crate::models::submissions::{entities::Submission, requests::GradeFeedbackRequest};

/// 写入教师评语
///
/// 只触碰教师侧字段；与学习者的进度保存并发时逐字段合并，
/// 互不覆盖（由存储层保证）。
pub async fn grade_submission(
    service: &SubmissionService,
    learner_id: i64,
    review_id: i64,
    req: GradeFeedbackRequest,
) -> Result<Submission> {
    let submission = service
        .storage()
        .update_submission_feedback(learner_id, review_id, req.feedback)
        .await?
        .ok_or_else(|| {
            AssessmentError::not_found(format!(
                "学习者 {learner_id} 对题组 {review_id} 尚无提交记录"
            ))
        })?;

    info!(learner_id, review_id, "Feedback recorded");
    Ok(submission)
}
