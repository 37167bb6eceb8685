use crate::models::reviews::entities::{Question, Review};
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewDetailResponse {
    pub review: Review,
    pub questions: Vec<Question>,
}
