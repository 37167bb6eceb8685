pub mod recipients;
pub mod send;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::errors::Result;
use crate::storage::Storage;

/// 通知投递接口
///
/// 本核心只决定提醒对象，投递（站内信/邮件）由宿主实现。
#[async_trait::async_trait]
pub trait NotificationDispatcher: Send + Sync {
    async fn dispatch(
        &self,
        assessment_id: i64,
        learner_ids: &[i64],
        message: &str,
    ) -> Result<()>;
}

pub struct ReminderService {
    storage: Arc<dyn Storage>,
}

impl ReminderService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub async fn collect_recipients(
        &self,
        assessment_id: i64,
        today: NaiveDate,
    ) -> Result<Vec<i64>> {
        recipients::collect_recipients(self, assessment_id, today).await
    }

    pub async fn send_reminders(
        &self,
        dispatcher: &dyn NotificationDispatcher,
        assessment_id: i64,
        today: NaiveDate,
    ) -> Result<i64> {
        send::send_reminders(self, dispatcher, assessment_id, today).await
    }
}
