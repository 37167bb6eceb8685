use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学习者的班级/小组归属事实，由外部协作方维护，本核心只读
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/membership.ts")]
pub struct LearnerMembership {
    pub learner_id: i64,
    // 当前所在班级 ID
    pub classroom_ids: Vec<i64>,
    // 当前所在小组 ID
    pub group_ids: Vec<i64>,
}
