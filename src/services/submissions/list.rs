use super::SubmissionService;
use crate::errors::Result;
use crate::models::submissions::responses::SubmissionListResponse;

/// 列出某题组的全部提交（教师批阅视图）
pub async fn list_submissions(
    service: &SubmissionService,
    review_id: i64,
) -> Result<SubmissionListResponse> {
    let items = service.storage().list_submissions_by_review(review_id).await?;
    let total = items.len() as i64;
    Ok(SubmissionListResponse { items, total })
}
