use tracing::info;

use super::ReviewService;
use crate::errors::{AssessmentError, Result};
use crate::models::reviews::{
    entities::Review,
    requests::{CreateQuestionRequest, CreateReviewRequest},
};
use crate::utils::validate::validate_title;

/// 题目内容体检：至少两个选项，正确答案必须是本题选项之一
pub(crate) fn validate_questions(questions: &[CreateQuestionRequest]) -> Result<()> {
    if questions.is_empty() {
        return Err(AssessmentError::validation("题组至少需要一道题目"));
    }
    for (index, question) in questions.iter().enumerate() {
        if question.prompt.trim().is_empty() {
            return Err(AssessmentError::validation(format!(
                "第 {} 题题干为空",
                index + 1
            )));
        }
        if question.options.len() < 2 {
            return Err(AssessmentError::validation(format!(
                "第 {} 题至少需要两个选项",
                index + 1
            )));
        }
        if !question.options.contains(&question.answer) {
            return Err(AssessmentError::validation(format!(
                "第 {} 题的正确答案必须是选项之一",
                index + 1
            )));
        }
    }
    Ok(())
}

/// 创建题组
pub async fn create_review(
    service: &ReviewService,
    created_by: i64,
    req: CreateReviewRequest,
) -> Result<Review> {
    validate_title(&req.title).map_err(AssessmentError::validation)?;
    validate_questions(&req.questions)?;

    let review = service.storage().create_review(created_by, req).await?;
    info!(review_id = review.id, "Review created");
    Ok(review)
}
