pub mod assessments;
pub mod reminders;
pub mod reviews;
pub mod submissions;

pub use assessments::AssessmentService;
pub use reminders::{NotificationDispatcher, ReminderService};
pub use reviews::ReviewService;
pub use submissions::SubmissionService;
