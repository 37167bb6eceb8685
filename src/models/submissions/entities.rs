use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

// 提交状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionStatus {
    Incomplete, // 进行中，仅保存进度
    Completed,  // 已提交并判分
}

impl SubmissionStatus {
    pub const INCOMPLETE: &'static str = "incomplete";
    pub const COMPLETED: &'static str = "completed";
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            SubmissionStatus::INCOMPLETE => Ok(SubmissionStatus::Incomplete),
            SubmissionStatus::COMPLETED => Ok(SubmissionStatus::Completed),
            _ => Err(serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持的状态: incomplete, completed"
            ))),
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Incomplete => write!(f, "{}", SubmissionStatus::INCOMPLETE),
            SubmissionStatus::Completed => write!(f, "{}", SubmissionStatus::COMPLETED),
        }
    }
}

// 学习者对某题组的唯一提交记录，(learner_id, review_id) 上保持单行
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    // 唯一 ID
    pub id: i64,
    // 学习者 ID
    pub learner_id: i64,
    // 题组 ID（非测评 ID，题组可被多次开考）
    pub review_id: i64,
    // 答案映射：题目 ID -> 提交的字母（"A".."D" 等）
    pub answers: HashMap<i64, String>,
    // 提交状态
    pub status: SubmissionStatus,
    // 百分制整数得分，判分前为 None
    pub score: Option<i64>,
    // 正式提交时间，仅保存进度时为 None
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    // 教师评语（教师侧字段，与学习者侧字段分开写入）
    pub feedback: Option<String>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Submission {
    pub fn is_completed(&self) -> bool {
        self.status == SubmissionStatus::Completed
    }
}
