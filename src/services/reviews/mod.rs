pub mod create;
pub mod detail;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::reviews::{
    entities::Review,
    requests::{CreateReviewRequest, UpdateReviewRequest},
    responses::ReviewDetailResponse,
};
use crate::storage::Storage;

pub struct ReviewService {
    storage: Arc<dyn Storage>,
}

impl ReviewService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub async fn create_review(&self, created_by: i64, req: CreateReviewRequest) -> Result<Review> {
        create::create_review(self, created_by, req).await
    }

    pub async fn get_review(&self, review_id: i64) -> Result<ReviewDetailResponse> {
        detail::get_review(self, review_id).await
    }

    pub async fn update_review(
        &self,
        review_id: i64,
        req: UpdateReviewRequest,
    ) -> Result<Review> {
        update::update_review(self, review_id, req).await
    }
}
