//! 提交存储操作
//!
//! (learner_id, review_id) 上保持单行。学习者侧字段（答案/状态/得分/
//! 提交时间）与教师侧字段（评语）走不同方法，逐字段合并，互不覆盖。

use std::collections::HashMap;

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::submissions::entities::{Submission, SubmissionStatus};

impl MemoryStorage {
    fn blank_submission(&self, learner_id: i64, review_id: i64) -> Submission {
        let now = chrono::Utc::now();
        Submission {
            id: self.next_id(),
            learner_id,
            review_id,
            answers: HashMap::new(),
            status: SubmissionStatus::Incomplete,
            score: None,
            submitted_at: None,
            feedback: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 获取学习者对某题组的提交记录
    pub async fn get_submission_impl(
        &self,
        learner_id: i64,
        review_id: i64,
    ) -> Result<Option<Submission>> {
        Ok(self
            .submissions
            .get(&(learner_id, review_id))
            .map(|s| s.clone()))
    }

    /// 保存答题进度（原子 upsert，新答案逐题覆盖旧答案）
    pub async fn save_submission_progress_impl(
        &self,
        learner_id: i64,
        review_id: i64,
        answers: HashMap<i64, String>,
    ) -> Result<Submission> {
        let mut entry = self
            .submissions
            .entry((learner_id, review_id))
            .or_insert_with(|| self.blank_submission(learner_id, review_id));

        let submission = entry.value_mut();
        submission.answers.extend(answers);
        submission.updated_at = chrono::Utc::now();

        Ok(submission.clone())
    }

    /// 定稿提交：写入合并后的答案、得分与提交时间
    pub async fn finalize_submission_impl(
        &self,
        learner_id: i64,
        review_id: i64,
        answers: HashMap<i64, String>,
        score: i64,
        submitted_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<Submission> {
        let mut entry = self
            .submissions
            .entry((learner_id, review_id))
            .or_insert_with(|| self.blank_submission(learner_id, review_id));

        let submission = entry.value_mut();
        submission.answers = answers;
        submission.status = SubmissionStatus::Completed;
        submission.score = Some(score);
        submission.submitted_at = Some(submitted_at);
        submission.updated_at = chrono::Utc::now();

        Ok(submission.clone())
    }

    /// 写入教师评语（仅教师侧字段）
    pub async fn update_submission_feedback_impl(
        &self,
        learner_id: i64,
        review_id: i64,
        feedback: String,
    ) -> Result<Option<Submission>> {
        let Some(mut submission) = self.submissions.get_mut(&(learner_id, review_id)) else {
            return Ok(None);
        };
        submission.feedback = Some(feedback);
        submission.updated_at = chrono::Utc::now();
        Ok(Some(submission.clone()))
    }

    /// 列出某题组的全部提交
    pub async fn list_submissions_by_review_impl(&self, review_id: i64) -> Result<Vec<Submission>> {
        let mut items: Vec<Submission> = self
            .submissions
            .iter()
            .filter(|entry| entry.value().review_id == review_id)
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by_key(|s| s.learner_id);
        Ok(items)
    }
}
