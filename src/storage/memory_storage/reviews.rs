//! 题组存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::reviews::{
    entities::{Question, Review},
    requests::{CreateQuestionRequest, CreateReviewRequest, UpdateReviewRequest},
};

impl MemoryStorage {
    fn build_questions(&self, review_id: i64, requests: Vec<CreateQuestionRequest>) -> Vec<Question> {
        requests
            .into_iter()
            .map(|q| Question {
                id: self.next_id(),
                review_id,
                prompt: q.prompt,
                options: q.options,
                answer: q.answer,
                explanation: q.explanation,
                hint: q.hint,
            })
            .collect()
    }

    /// 创建题组（含有序题目）
    pub async fn create_review_impl(
        &self,
        created_by: i64,
        req: CreateReviewRequest,
    ) -> Result<Review> {
        let now = chrono::Utc::now();
        let review_id = self.next_id();

        let review = Review {
            id: review_id,
            title: req.title,
            subject: req.subject,
            grade: req.grade,
            created_by,
            created_at: now,
            updated_at: now,
        };

        let questions = self.build_questions(review_id, req.questions);
        self.questions.insert(review_id, questions);
        self.reviews.insert(review_id, review.clone());

        Ok(review)
    }

    /// 通过 ID 获取题组
    pub async fn get_review_by_id_impl(&self, review_id: i64) -> Result<Option<Review>> {
        Ok(self.reviews.get(&review_id).map(|r| r.clone()))
    }

    /// 更新题组（标题 / 整组替换题目）
    pub async fn update_review_impl(
        &self,
        review_id: i64,
        update: UpdateReviewRequest,
    ) -> Result<Option<Review>> {
        let Some(mut review) = self.reviews.get_mut(&review_id) else {
            return Ok(None);
        };

        if let Some(title) = update.title {
            review.title = title;
        }
        if let Some(questions) = update.questions {
            let rebuilt = self.build_questions(review_id, questions);
            self.questions.insert(review_id, rebuilt);
        }
        review.updated_at = chrono::Utc::now();

        Ok(Some(review.clone()))
    }

    /// 获取题组的有序题目列表，题组不存在时返回空表
    pub async fn list_review_questions_impl(&self, review_id: i64) -> Result<Vec<Question>> {
        Ok(self
            .questions
            .get(&review_id)
            .map(|q| q.clone())
            .unwrap_or_default())
    }
}
