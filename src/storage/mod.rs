use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::{
    assessments::{
        entities::{Assessment, AssessmentStatus},
        requests::{AssessmentListQuery, CreateAssessmentRequest},
        responses::AssessmentListResponse,
    },
    memberships::entities::LearnerMembership,
    reviews::{
        entities::{Question, Review},
        requests::{CreateReviewRequest, UpdateReviewRequest},
    },
    submissions::entities::Submission,
};

use crate::config::AppConfig;
use crate::errors::{AssessmentError, Result};

pub mod memory_storage;

/// 持久化接口
///
/// 本核心不绑定具体存储技术；宿主按自身数据库实现本 trait。
/// 内置的内存实现供测试与嵌入式调用方使用。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 题组管理方法
    // 创建题组（含题目）
    async fn create_review(&self, created_by: i64, review: CreateReviewRequest) -> Result<Review>;
    // 通过ID获取题组
    async fn get_review_by_id(&self, review_id: i64) -> Result<Option<Review>>;
    // 更新题组（标题/整组替换题目）
    async fn update_review(
        &self,
        review_id: i64,
        update: UpdateReviewRequest,
    ) -> Result<Option<Review>>;
    // 获取题组的有序题目列表
    async fn list_review_questions(&self, review_id: i64) -> Result<Vec<Question>>;

    /// 测评管理方法
    // 创建测评
    async fn create_assessment(
        &self,
        created_by: i64,
        status: AssessmentStatus,
        assessment: CreateAssessmentRequest,
    ) -> Result<Assessment>;
    // 通过ID获取测评
    async fn get_assessment_by_id(&self, assessment_id: i64) -> Result<Option<Assessment>>;
    // 更新管理状态（状态机校验由服务层完成）
    async fn update_assessment_status(
        &self,
        assessment_id: i64,
        status: AssessmentStatus,
    ) -> Result<Option<Assessment>>;
    // 更新日期窗口
    async fn update_assessment_window(
        &self,
        assessment_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Option<Assessment>>;
    // 列出测评（分页 + 过滤）
    async fn list_assessments_with_pagination(
        &self,
        query: AssessmentListQuery,
    ) -> Result<AssessmentListResponse>;
    // 按状态列出全部测评（学习者视图与提醒扫描用）
    async fn list_assessments_by_statuses(
        &self,
        statuses: &[AssessmentStatus],
    ) -> Result<Vec<Assessment>>;
    // 统计引用某题组且处于给定状态的测评数
    async fn count_assessments_for_review(
        &self,
        review_id: i64,
        statuses: &[AssessmentStatus],
    ) -> Result<i64>;

    /// 提交管理方法
    // 获取学习者对某题组的提交记录
    async fn get_submission(&self, learner_id: i64, review_id: i64)
    -> Result<Option<Submission>>;
    // 保存答题进度：(learner_id, review_id) 原子 upsert，新答案逐题覆盖旧答案。
    // 无法原子 upsert 的后端在并发插入时返回 Conflict，由调用方改为更新重试
    async fn save_submission_progress(
        &self,
        learner_id: i64,
        review_id: i64,
        answers: HashMap<i64, String>,
    ) -> Result<Submission>;
    // 定稿提交：写入合并后的答案、得分与提交时间，状态置为 completed。
    // 仅触碰学习者侧字段
    async fn finalize_submission(
        &self,
        learner_id: i64,
        review_id: i64,
        answers: HashMap<i64, String>,
        score: i64,
        submitted_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<Submission>;
    // 写入教师评语：仅触碰教师侧字段，与学习者进度保存互不覆盖
    async fn update_submission_feedback(
        &self,
        learner_id: i64,
        review_id: i64,
        feedback: String,
    ) -> Result<Option<Submission>>;
    // 列出某题组的全部提交
    async fn list_submissions_by_review(&self, review_id: i64) -> Result<Vec<Submission>>;

    /// 归属事实（外部协作方维护，本核心只读）
    // 获取学习者的班级/小组归属
    async fn get_learner_membership(&self, learner_id: i64) -> Result<LearnerMembership>;
    // 列出给定班级中的学习者
    async fn list_learners_in_classes(&self, class_ids: &[i64]) -> Result<Vec<i64>>;
    // 列出给定小组中的学习者
    async fn list_learners_in_groups(&self, group_ids: &[i64]) -> Result<Vec<i64>>;
}

pub fn create_storage() -> Result<Arc<dyn Storage>> {
    let config = AppConfig::get();
    match config.storage.storage_type.as_str() {
        "memory" => Ok(Arc::new(memory_storage::MemoryStorage::new())),
        other => Err(AssessmentError::storage_backend_not_found(format!(
            "未知的存储后端: {other}. 内置后端: memory；其他后端请自行实现 Storage trait"
        ))),
    }
}
