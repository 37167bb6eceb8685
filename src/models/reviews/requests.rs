use serde::Deserialize;
use ts_rs::TS;

/// 创建题组请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct CreateReviewRequest {
    pub title: String,
    pub subject: String,
    pub grade: String,
    pub questions: Vec<CreateQuestionRequest>,
}

/// 创建题目请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct CreateQuestionRequest {
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
    pub explanation: Option<String>,
    pub hint: Option<String>,
}

/// 更新题组请求（整组替换题目）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct UpdateReviewRequest {
    pub title: Option<String>,
    pub questions: Option<Vec<CreateQuestionRequest>>,
}
