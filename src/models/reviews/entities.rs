use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 题组：测评引用的题目容器
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct Review {
    // 唯一 ID
    pub id: i64,
    // 题组标题
    pub title: String,
    // 学科
    pub subject: String,
    // 年级
    pub grade: String,
    // 创建者 ID
    pub created_by: i64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 题目：选项为有序列表，正确答案存选项值而非位置字母
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct Question {
    // 唯一 ID
    pub id: i64,
    // 所属题组 ID
    pub review_id: i64,
    // 题干
    pub prompt: String,
    // 选项值，有序；字母按 0 起始位置映射到本题自身的选项表
    pub options: Vec<String>,
    // 正确选项的值
    pub answer: String,
    // 解析
    pub explanation: Option<String>,
    // 提示
    pub hint: Option<String>,
}
