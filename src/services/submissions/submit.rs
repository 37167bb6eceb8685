use tracing::{info, warn};

use super::SubmissionService;
use crate::errors::{AssessmentError, Result};
use crate::models::submissions::{
    requests::SubmitAnswersRequest, responses::SubmitResultResponse,
};
use crate::utils::scoring::{count_correct, score_submission};
use crate::utils::validate::is_well_formed_answer_letter;

/// 正式提交并判分
///
/// 先把本次答案合并到已保存的进度上（同题覆盖，未覆盖的保留），
/// 再对合并后的答案卷判分，最后定稿：completed + 得分 + 提交时间。
/// 对同一份输入重复提交会得到同一得分。
pub async fn submit_answers(
    service: &SubmissionService,
    learner_id: i64,
    review_id: i64,
    req: SubmitAnswersRequest,
) -> Result<SubmitResultResponse> {
    let storage = service.storage();

    storage
        .get_review_by_id(review_id)
        .await?
        .ok_or_else(|| AssessmentError::not_found(format!("题组不存在: {review_id}")))?;

    let questions = storage.list_review_questions(review_id).await?;
    if questions.is_empty() {
        // 数据错误：创建侧已保证题组非空，走到这里说明数据被绕过写入
        warn!(review_id, "Scoring a review with no questions, score defined as 0");
    }

    for (question_id, letter) in &req.answers {
        if !is_well_formed_answer_letter(letter) {
            warn!(
                learner_id,
                review_id,
                question_id,
                letter = %letter,
                "Submitted answer letter is malformed, counted as wrong"
            );
        }
    }

    // 合并已保存进度：本次未覆盖的题保留旧答案
    let mut merged = storage
        .get_submission(learner_id, review_id)
        .await?
        .map(|s| s.answers)
        .unwrap_or_default();
    merged.extend(req.answers);

    let score = score_submission(&merged, &questions);
    let correct_count = count_correct(&merged, &questions);
    let total_questions = questions.len() as i64;

    let submission = storage
        .finalize_submission(learner_id, review_id, merged, score, chrono::Utc::now())
        .await?;

    info!(
        learner_id,
        review_id, score, correct_count, total_questions, "Submission finalized"
    );

    Ok(SubmitResultResponse {
        submission,
        score,
        total_questions,
        correct_count,
    })
}
