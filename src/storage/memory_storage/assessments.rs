//! 测评存储操作

use chrono::NaiveDate;

use super::MemoryStorage;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::{
    PaginationInfo,
    assessments::{
        entities::{Assessment, AssessmentStatus},
        requests::{AssessmentListQuery, CreateAssessmentRequest},
        responses::AssessmentListResponse,
    },
};

impl MemoryStorage {
    /// 创建测评
    pub async fn create_assessment_impl(
        &self,
        created_by: i64,
        status: AssessmentStatus,
        req: CreateAssessmentRequest,
    ) -> Result<Assessment> {
        let now = chrono::Utc::now();
        let assessment = Assessment {
            id: self.next_id(),
            review_id: req.review_id,
            title: req.title,
            subject: req.subject,
            grade: req.grade,
            description: req.description,
            start_date: req.start_date,
            end_date: req.end_date,
            status,
            audience: req.audience,
            class_ids: req.class_ids.unwrap_or_default(),
            group_ids: req.group_ids.unwrap_or_default(),
            learner_ids: req.learner_ids.unwrap_or_default(),
            created_by,
            created_at: now,
            updated_at: now,
        };

        self.assessments.insert(assessment.id, assessment.clone());
        Ok(assessment)
    }

    /// 通过 ID 获取测评
    pub async fn get_assessment_by_id_impl(
        &self,
        assessment_id: i64,
    ) -> Result<Option<Assessment>> {
        Ok(self.assessments.get(&assessment_id).map(|a| a.clone()))
    }

    /// 更新管理状态
    pub async fn update_assessment_status_impl(
        &self,
        assessment_id: i64,
        status: AssessmentStatus,
    ) -> Result<Option<Assessment>> {
        let Some(mut assessment) = self.assessments.get_mut(&assessment_id) else {
            return Ok(None);
        };
        assessment.status = status;
        assessment.updated_at = chrono::Utc::now();
        Ok(Some(assessment.clone()))
    }

    /// 更新日期窗口
    pub async fn update_assessment_window_impl(
        &self,
        assessment_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Option<Assessment>> {
        let Some(mut assessment) = self.assessments.get_mut(&assessment_id) else {
            return Ok(None);
        };
        assessment.start_date = start_date;
        assessment.end_date = end_date;
        assessment.updated_at = chrono::Utc::now();
        Ok(Some(assessment.clone()))
    }

    /// 列出测评（分页）
    pub async fn list_assessments_with_pagination_impl(
        &self,
        query: AssessmentListQuery,
    ) -> Result<AssessmentListResponse> {
        let max_size = AppConfig::get().storage.max_page_size;
        let page = query.page.unwrap_or(1).max(1);
        let size = query.size.unwrap_or(10).clamp(1, max_size);

        let mut items: Vec<Assessment> = self
            .assessments
            .iter()
            .filter(|entry| {
                let a = entry.value();
                if let Some(status) = query.status
                    && a.status != status
                {
                    return false;
                }
                if let Some(ref subject) = query.subject
                    && &a.subject != subject
                {
                    return false;
                }
                if let Some(created_by) = query.created_by
                    && a.created_by != created_by
                {
                    return false;
                }
                // 日期区间过滤：保留窗口与区间有交集的测评
                if let Some(from) = query.from_date
                    && a.end_date < from
                {
                    return false;
                }
                if let Some(to) = query.to_date
                    && a.start_date > to
                {
                    return false;
                }
                if let Some(ref search) = query.search {
                    let needle = search.to_lowercase();
                    if !a.title.to_lowercase().contains(&needle) {
                        return false;
                    }
                }
                true
            })
            .map(|entry| entry.value().clone())
            .collect();

        // 按开始日期倒序，同日按 ID 倒序
        items.sort_by(|a, b| {
            b.start_date
                .cmp(&a.start_date)
                .then_with(|| b.id.cmp(&a.id))
        });

        let total = items.len() as i64;
        let total_pages = (total as u64).div_ceil(size as u64) as i64;
        let skip = ((page - 1) * size) as usize;
        let items: Vec<Assessment> = items.into_iter().skip(skip).take(size as usize).collect();

        Ok(AssessmentListResponse {
            items,
            pagination: PaginationInfo {
                page,
                page_size: size,
                total,
                total_pages,
            },
        })
    }

    /// 按状态列出全部测评
    pub async fn list_assessments_by_statuses_impl(
        &self,
        statuses: &[AssessmentStatus],
    ) -> Result<Vec<Assessment>> {
        let mut items: Vec<Assessment> = self
            .assessments
            .iter()
            .filter(|entry| statuses.contains(&entry.value().status))
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by(|a, b| {
            a.start_date
                .cmp(&b.start_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(items)
    }

    /// 统计引用某题组且处于给定状态的测评数
    pub async fn count_assessments_for_review_impl(
        &self,
        review_id: i64,
        statuses: &[AssessmentStatus],
    ) -> Result<i64> {
        Ok(self
            .assessments
            .iter()
            .filter(|entry| {
                let a = entry.value();
                a.review_id == review_id && statuses.contains(&a.status)
            })
            .count() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assessments::entities::AudienceKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_request(title: &str, start: NaiveDate, end: NaiveDate) -> CreateAssessmentRequest {
        CreateAssessmentRequest {
            review_id: 1,
            title: title.to_string(),
            subject: "math".to_string(),
            grade: "grade-8".to_string(),
            description: None,
            start_date: start,
            end_date: end,
            audience: AudienceKind::Class,
            class_ids: Some(vec![5]),
            group_ids: None,
            learner_ids: None,
            as_scheduled: true,
        }
    }

    #[tokio::test]
    async fn test_list_filters_by_status_and_window() {
        let storage = MemoryStorage::new();
        storage
            .create_assessment_impl(
                1,
                AssessmentStatus::Scheduled,
                create_request("三月卷", date(2025, 3, 20), date(2025, 3, 27)),
            )
            .await
            .unwrap();
        storage
            .create_assessment_impl(
                1,
                AssessmentStatus::Cancelled,
                create_request("被取消", date(2025, 3, 21), date(2025, 3, 25)),
            )
            .await
            .unwrap();
        storage
            .create_assessment_impl(
                1,
                AssessmentStatus::Scheduled,
                create_request("五月卷", date(2025, 5, 1), date(2025, 5, 7)),
            )
            .await
            .unwrap();

        let query = AssessmentListQuery {
            status: Some(AssessmentStatus::Scheduled),
            from_date: Some(date(2025, 3, 1)),
            to_date: Some(date(2025, 3, 31)),
            ..Default::default()
        };
        let response = storage
            .list_assessments_with_pagination_impl(query)
            .await
            .unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].title, "三月卷");
        assert_eq!(response.pagination.total, 1);
    }

    #[tokio::test]
    async fn test_list_pagination_clamps_and_counts() {
        let storage = MemoryStorage::new();
        for i in 0..25 {
            storage
                .create_assessment_impl(
                    1,
                    AssessmentStatus::Scheduled,
                    create_request(&format!("卷 {i}"), date(2025, 3, 1), date(2025, 3, 7)),
                )
                .await
                .unwrap();
        }

        let query = AssessmentListQuery {
            page: Some(2),
            size: Some(10),
            ..Default::default()
        };
        let response = storage
            .list_assessments_with_pagination_impl(query)
            .await
            .unwrap();
        assert_eq!(response.items.len(), 10);
        assert_eq!(response.pagination.total, 25);
        assert_eq!(response.pagination.total_pages, 3);

        // 页码/页长非法时收敛到合法值
        let query = AssessmentListQuery {
            page: Some(0),
            size: Some(0),
            ..Default::default()
        };
        let response = storage
            .list_assessments_with_pagination_impl(query)
            .await
            .unwrap();
        assert_eq!(response.pagination.page, 1);
        assert_eq!(response.pagination.page_size, 1);
    }

    #[tokio::test]
    async fn test_count_assessments_for_review() {
        let storage = MemoryStorage::new();
        storage
            .create_assessment_impl(
                1,
                AssessmentStatus::Active,
                create_request("已下发", date(2025, 3, 1), date(2025, 3, 7)),
            )
            .await
            .unwrap();
        storage
            .create_assessment_impl(
                1,
                AssessmentStatus::Draft,
                create_request("草稿", date(2025, 4, 1), date(2025, 4, 7)),
            )
            .await
            .unwrap();

        let active = storage
            .count_assessments_for_review_impl(1, &[AssessmentStatus::Active])
            .await
            .unwrap();
        assert_eq!(active, 1);
        let any = storage
            .count_assessments_for_review_impl(
                1,
                &[
                    AssessmentStatus::Draft,
                    AssessmentStatus::Scheduled,
                    AssessmentStatus::Active,
                ],
            )
            .await
            .unwrap();
        assert_eq!(any, 2);
    }
}
