use tracing::info;

use super::ReviewService;
use crate::errors::{AssessmentError, Result};
use crate::models::assessments::entities::AssessmentStatus;
use crate::models::reviews::{entities::Review, requests::UpdateReviewRequest};
use crate::utils::validate::validate_title;

/// 更新题组
///
/// 一旦有引用该题组的测评对学习者生效（scheduled/active），
/// 题组即视为冻结，拒绝修改。
pub async fn update_review(
    service: &ReviewService,
    review_id: i64,
    req: UpdateReviewRequest,
) -> Result<Review> {
    let storage = service.storage();

    let referencing = storage
        .count_assessments_for_review(
            review_id,
            &[AssessmentStatus::Scheduled, AssessmentStatus::Active],
        )
        .await?;
    if referencing > 0 {
        return Err(AssessmentError::validation(format!(
            "题组 {review_id} 已被 {referencing} 个生效中的测评引用，不可修改"
        )));
    }

    if let Some(ref title) = req.title {
        validate_title(title).map_err(AssessmentError::validation)?;
    }
    if let Some(ref questions) = req.questions {
        super::create::validate_questions(questions)?;
    }

    let review = storage
        .update_review(review_id, req)
        .await?
        .ok_or_else(|| AssessmentError::not_found(format!("题组不存在: {review_id}")))?;

    info!(review_id, "Review updated");
    Ok(review)
}
