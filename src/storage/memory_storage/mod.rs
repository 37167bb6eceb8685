//! 内存存储实现
//!
//! 基于 DashMap 的参考实现，供测试与嵌入式调用方使用；
//! 生产部署针对自身数据库实现 Storage trait 即可替换。

mod assessments;
mod memberships;
mod reviews;
mod submissions;

use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;
use tracing::info;

use crate::models::{
    assessments::entities::Assessment,
    memberships::entities::LearnerMembership,
    reviews::entities::{Question, Review},
    submissions::entities::Submission,
};

/// 内存存储实例
pub struct MemoryStorage {
    pub(crate) reviews: DashMap<i64, Review>,
    // 题组 ID -> 有序题目列表
    pub(crate) questions: DashMap<i64, Vec<Question>>,
    pub(crate) assessments: DashMap<i64, Assessment>,
    // (learner_id, review_id) 上保持单行，entry API 保证 upsert 原子性
    pub(crate) submissions: DashMap<(i64, i64), Submission>,
    pub(crate) memberships: DashMap<i64, LearnerMembership>,
    next_id: AtomicI64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        info!("Memory storage initialized");
        Self {
            reviews: DashMap::new(),
            questions: DashMap::new(),
            assessments: DashMap::new(),
            submissions: DashMap::new(),
            memberships: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub(crate) fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// 写入学习者归属事实（测试与嵌入方种子数据用；trait 侧只读）
    pub fn put_learner_membership(&self, membership: LearnerMembership) {
        self.memberships.insert(membership.learner_id, membership);
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

// Storage trait 实现
use std::collections::HashMap;

use chrono::NaiveDate;

use crate::errors::Result;
use crate::models::{
    assessments::{
        entities::AssessmentStatus,
        requests::{AssessmentListQuery, CreateAssessmentRequest},
        responses::AssessmentListResponse,
    },
    reviews::requests::{CreateReviewRequest, UpdateReviewRequest},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for MemoryStorage {
    // 题组模块
    async fn create_review(&self, created_by: i64, review: CreateReviewRequest) -> Result<Review> {
        self.create_review_impl(created_by, review).await
    }

    async fn get_review_by_id(&self, review_id: i64) -> Result<Option<Review>> {
        self.get_review_by_id_impl(review_id).await
    }

    async fn update_review(
        &self,
        review_id: i64,
        update: UpdateReviewRequest,
    ) -> Result<Option<Review>> {
        self.update_review_impl(review_id, update).await
    }

    async fn list_review_questions(&self, review_id: i64) -> Result<Vec<Question>> {
        self.list_review_questions_impl(review_id).await
    }

    // 测评模块
    async fn create_assessment(
        &self,
        created_by: i64,
        status: AssessmentStatus,
        assessment: CreateAssessmentRequest,
    ) -> Result<Assessment> {
        self.create_assessment_impl(created_by, status, assessment)
            .await
    }

    async fn get_assessment_by_id(&self, assessment_id: i64) -> Result<Option<Assessment>> {
        self.get_assessment_by_id_impl(assessment_id).await
    }

    async fn update_assessment_status(
        &self,
        assessment_id: i64,
        status: AssessmentStatus,
    ) -> Result<Option<Assessment>> {
        self.update_assessment_status_impl(assessment_id, status)
            .await
    }

    async fn update_assessment_window(
        &self,
        assessment_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Option<Assessment>> {
        self.update_assessment_window_impl(assessment_id, start_date, end_date)
            .await
    }

    async fn list_assessments_with_pagination(
        &self,
        query: AssessmentListQuery,
    ) -> Result<AssessmentListResponse> {
        self.list_assessments_with_pagination_impl(query).await
    }

    async fn list_assessments_by_statuses(
        &self,
        statuses: &[AssessmentStatus],
    ) -> Result<Vec<Assessment>> {
        self.list_assessments_by_statuses_impl(statuses).await
    }

    async fn count_assessments_for_review(
        &self,
        review_id: i64,
        statuses: &[AssessmentStatus],
    ) -> Result<i64> {
        self.count_assessments_for_review_impl(review_id, statuses)
            .await
    }

    // 提交模块
    async fn get_submission(
        &self,
        learner_id: i64,
        review_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_submission_impl(learner_id, review_id).await
    }

    async fn save_submission_progress(
        &self,
        learner_id: i64,
        review_id: i64,
        answers: HashMap<i64, String>,
    ) -> Result<Submission> {
        self.save_submission_progress_impl(learner_id, review_id, answers)
            .await
    }

    async fn finalize_submission(
        &self,
        learner_id: i64,
        review_id: i64,
        answers: HashMap<i64, String>,
        score: i64,
        submitted_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<Submission> {
        self.finalize_submission_impl(learner_id, review_id, answers, score, submitted_at)
            .await
    }

    async fn update_submission_feedback(
        &self,
        learner_id: i64,
        review_id: i64,
        feedback: String,
    ) -> Result<Option<Submission>> {
        self.update_submission_feedback_impl(learner_id, review_id, feedback)
            .await
    }

    async fn list_submissions_by_review(&self, review_id: i64) -> Result<Vec<Submission>> {
        self.list_submissions_by_review_impl(review_id).await
    }

    // 归属事实模块
    async fn get_learner_membership(&self, learner_id: i64) -> Result<LearnerMembership> {
        self.get_learner_membership_impl(learner_id).await
    }

    async fn list_learners_in_classes(&self, class_ids: &[i64]) -> Result<Vec<i64>> {
        self.list_learners_in_classes_impl(class_ids).await
    }

    async fn list_learners_in_groups(&self, group_ids: &[i64]) -> Result<Vec<i64>> {
        self.list_learners_in_groups_impl(group_ids).await
    }
}
