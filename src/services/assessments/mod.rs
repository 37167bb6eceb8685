pub mod cancel;
pub mod create;
pub mod detail;
pub mod learner_view;
pub mod list;
pub mod publish;
pub mod reschedule;
pub mod send_now;
pub mod stats;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::errors::Result;
use crate::models::assessments::{
    entities::Assessment,
    requests::{AssessmentListParams, CreateAssessmentRequest, RescheduleAssessmentRequest},
    responses::{AssessmentListResponse, LearnerAssessmentsResponse},
    stats_responses::AssessmentStatsResponse,
};
use crate::storage::Storage;

pub struct AssessmentService {
    storage: Arc<dyn Storage>,
}

impl AssessmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub async fn create_assessment(
        &self,
        created_by: i64,
        req: CreateAssessmentRequest,
    ) -> Result<Assessment> {
        create::create_assessment(self, created_by, req).await
    }

    pub async fn get_assessment(&self, assessment_id: i64) -> Result<Assessment> {
        detail::get_assessment(self, assessment_id).await
    }

    pub async fn list_assessments(
        &self,
        params: AssessmentListParams,
    ) -> Result<AssessmentListResponse> {
        list::list_assessments(self, params).await
    }

    pub async fn publish_assessment(&self, assessment_id: i64) -> Result<Assessment> {
        publish::publish_assessment(self, assessment_id).await
    }

    pub async fn reschedule_assessment(
        &self,
        assessment_id: i64,
        req: RescheduleAssessmentRequest,
    ) -> Result<Assessment> {
        reschedule::reschedule_assessment(self, assessment_id, req).await
    }

    pub async fn send_assessment_now(&self, assessment_id: i64) -> Result<Assessment> {
        send_now::send_assessment_now(self, assessment_id).await
    }

    pub async fn cancel_assessment(&self, assessment_id: i64) -> Result<Assessment> {
        cancel::cancel_assessment(self, assessment_id).await
    }

    pub async fn list_for_learner(
        &self,
        learner_id: i64,
        today: NaiveDate,
    ) -> Result<LearnerAssessmentsResponse> {
        learner_view::list_for_learner(self, learner_id, today).await
    }

    pub async fn get_assessment_stats(
        &self,
        assessment_id: i64,
        today: NaiveDate,
    ) -> Result<AssessmentStatsResponse> {
        stats::get_assessment_stats(self, assessment_id, today).await
    }
}
