use super::ReviewService;
use crate::errors::{AssessmentError, Result};
use crate::models::reviews::responses::ReviewDetailResponse;

/// 获取题组详情（含有序题目）
pub async fn get_review(service: &ReviewService, review_id: i64) -> Result<ReviewDetailResponse> {
    let storage = service.storage();

    let review = storage
        .get_review_by_id(review_id)
        .await?
        .ok_or_else(|| AssessmentError::not_found(format!("题组不存在: {review_id}")))?;
    let questions = storage.list_review_questions(review_id).await?;

    Ok(ReviewDetailResponse { review, questions })
}
