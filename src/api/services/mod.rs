//! Services module - the editorial workflow business logic.

pub mod decision_service;
pub mod error;
pub mod mailer;
pub mod notification_service;
pub mod page_cache;
pub mod publication_service;
pub mod review_service;
pub mod submission_service;

// Re-export for convenience
pub use decision_service::DecisionService;
pub use error::WorkflowError;
pub use mailer::{MailConfig, Mailer};
pub use notification_service::{NotificationService, decision_notice};
pub use page_cache::{NoopInvalidator, PageCache, PageInvalidator, publication_paths};
pub use publication_service::PublicationService;
pub use review_service::ReviewService;
pub use submission_service::SubmissionService;
