use serde::Deserialize;
use std::collections::HashMap;
use ts_rs::TS;

/// 保存答题进度请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SaveProgressRequest {
    /// 题目 ID -> 字母，覆盖同题旧答案，未涉及的题保持原状
    pub answers: HashMap<i64, String>,
}

/// 正式提交请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmitAnswersRequest {
    pub answers: HashMap<i64, String>,
}

/// 教师评语请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeFeedbackRequest {
    pub feedback: String,
}
