//! 归属事实存储操作（只读视图）

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::memberships::entities::LearnerMembership;

impl MemoryStorage {
    /// 获取学习者归属；无记录时视为不属于任何班级/小组
    pub async fn get_learner_membership_impl(&self, learner_id: i64) -> Result<LearnerMembership> {
        Ok(self
            .memberships
            .get(&learner_id)
            .map(|m| m.clone())
            .unwrap_or(LearnerMembership {
                learner_id,
                classroom_ids: vec![],
                group_ids: vec![],
            }))
    }

    /// 列出给定班级中的学习者
    pub async fn list_learners_in_classes_impl(&self, class_ids: &[i64]) -> Result<Vec<i64>> {
        let mut learners: Vec<i64> = self
            .memberships
            .iter()
            .filter(|entry| {
                entry
                    .value()
                    .classroom_ids
                    .iter()
                    .any(|id| class_ids.contains(id))
            })
            .map(|entry| entry.value().learner_id)
            .collect();
        learners.sort_unstable();
        learners.dedup();
        Ok(learners)
    }

    /// 列出给定小组中的学习者
    pub async fn list_learners_in_groups_impl(&self, group_ids: &[i64]) -> Result<Vec<i64>> {
        let mut learners: Vec<i64> = self
            .memberships
            .iter()
            .filter(|entry| {
                entry
                    .value()
                    .group_ids
                    .iter()
                    .any(|id| group_ids.contains(id))
            })
            .map(|entry| entry.value().learner_id)
            .collect();
        learners.sort_unstable();
        learners.dedup();
        Ok(learners)
    }
}
