use super::SubmissionService;
use crate::errors::{AssessmentError, Result};
use crate::models::submissions::entities::Submission;

/// 获取提交详情
pub async fn get_submission(
    service: &SubmissionService,
    learner_id: i64,
    review_id: i64,
) -> Result<Submission> {
    service
        .storage()
        .get_submission(learner_id, review_id)
        .await?
        .ok_or_else(|| {
            AssessmentError::not_found(format!(
                "学习者 {learner_id} 对题组 {review_id} 尚无提交记录"
            ))
        })
}
