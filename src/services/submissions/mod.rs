pub mod detail;
pub mod grade;
pub mod list;
pub mod save;
pub mod submit;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::submissions::{
    entities::Submission,
    requests::{GradeFeedbackRequest, SaveProgressRequest, SubmitAnswersRequest},
    responses::{SubmissionListResponse, SubmitResultResponse},
};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Arc<dyn Storage>,
}

impl SubmissionService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub async fn save_progress(
        &self,
        learner_id: i64,
        review_id: i64,
        req: SaveProgressRequest,
    ) -> Result<Submission> {
        save::save_progress(self, learner_id, review_id, req).await
    }

    pub async fn submit_answers(
        &self,
        learner_id: i64,
        review_id: i64,
        req: SubmitAnswersRequest,
    ) -> Result<SubmitResultResponse> {
        submit::submit_answers(self, learner_id, review_id, req).await
    }

    pub async fn grade_submission(
        &self,
        learner_id: i64,
        review_id: i64,
        req: GradeFeedbackRequest,
    ) -> Result<Submission> {
        grade::grade_submission(self, learner_id, review_id, req).await
    }

    pub async fn get_submission(&self, learner_id: i64, review_id: i64) -> Result<Submission> {
        detail::get_submission(self, learner_id, review_id).await
    }

    pub async fn list_submissions(&self, review_id: i64) -> Result<SubmissionListResponse> {
        list::list_submissions(self, review_id).await
    }
}
