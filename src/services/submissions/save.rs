use tracing::{debug, warn};

use super::SubmissionService;
use crate::errors::{AssessmentError, Result};
use crate::models::submissions::{entities::Submission, requests::SaveProgressRequest};
use crate::utils::validate::is_well_formed_answer_letter;

/// 保存答题进度
///
/// (learner_id, review_id) 上 upsert，首存建行；新答案逐题覆盖旧答案，
/// 未涉及的题保持原状。字母格式异常只告警不拒收，判分时按答错处理。
/// 后端无法原子 upsert 而报冲突时，按更新重试一次。
pub async fn save_progress(
    service: &SubmissionService,
    learner_id: i64,
    review_id: i64,
    req: SaveProgressRequest,
) -> Result<Submission> {
    let storage = service.storage();

    storage
        .get_review_by_id(review_id)
        .await?
        .ok_or_else(|| AssessmentError::not_found(format!("题组不存在: {review_id}")))?;

    for (question_id, letter) in &req.answers {
        if !is_well_formed_answer_letter(letter) {
            warn!(
                learner_id,
                review_id,
                question_id,
                letter = %letter,
                "Saved answer letter is malformed, will count as wrong at scoring"
            );
        }
    }

    let submission = match storage
        .save_submission_progress(learner_id, review_id, req.answers.clone())
        .await
    {
        Ok(submission) => submission,
        Err(e) if e.is_retryable_as_update() => {
            // 并发首存撞上唯一约束：行已存在，改为更新重试
            warn!(learner_id, review_id, "Concurrent insert detected, retrying as update");
            storage
                .save_submission_progress(learner_id, review_id, req.answers)
                .await?
        }
        Err(e) => return Err(e),
    };

    debug!(
        learner_id,
        review_id,
        answered = submission.answers.len(),
        "Progress saved"
    );
    Ok(submission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reviews::requests::{CreateQuestionRequest, CreateReviewRequest};
    use crate::models::submissions::entities::SubmissionStatus;
    use crate::services::ReviewService;
    use crate::storage::memory_storage::MemoryStorage;
    use std::collections::HashMap;
    use std::sync::Arc;

    async fn seed_review(storage: &Arc<MemoryStorage>) -> i64 {
        ReviewService::new(storage.clone())
            .create_review(
                1,
                CreateReviewRequest {
                    title: "单元测验".to_string(),
                    subject: "math".to_string(),
                    grade: "grade-8".to_string(),
                    questions: vec![CreateQuestionRequest {
                        prompt: "1+1=?".to_string(),
                        options: vec!["1".into(), "2".into()],
                        answer: "2".to_string(),
                        explanation: None,
                        hint: None,
                    }],
                },
            )
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_save_progress_creates_incomplete_row() {
        let storage = Arc::new(MemoryStorage::new());
        let review_id = seed_review(&storage).await;
        let service = SubmissionService::new(storage);

        let submission = service
            .save_progress(
                42,
                review_id,
                SaveProgressRequest {
                    answers: HashMap::from([(1, "A".to_string())]),
                },
            )
            .await
            .unwrap();
        assert_eq!(submission.status, SubmissionStatus::Incomplete);
        assert_eq!(submission.score, None);
        assert_eq!(submission.submitted_at, None);
    }

    #[tokio::test]
    async fn test_save_progress_rejects_unknown_review() {
        let service = SubmissionService::new(Arc::new(MemoryStorage::new()));
        let err = service
            .save_progress(
                42,
                999,
                SaveProgressRequest {
                    answers: HashMap::new(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E002");
    }

    #[tokio::test]
    async fn test_save_progress_tolerates_malformed_letters() {
        let storage = Arc::new(MemoryStorage::new());
        let review_id = seed_review(&storage).await;
        let service = SubmissionService::new(storage);

        // 异常字母不拒收，原样保存
        let submission = service
            .save_progress(
                42,
                review_id,
                SaveProgressRequest {
                    answers: HashMap::from([(1, "AB".to_string())]),
                },
            )
            .await
            .unwrap();
        assert_eq!(submission.answers.get(&1).map(String::as_str), Some("AB"));
    }
}
