// Models module - workflow entities and enums

pub mod actor;
pub mod decision;
#[path = "enums.rs"]
pub mod enums;
pub mod issue;
pub mod journal;
pub mod notification;
pub mod review;
pub mod submission;
pub mod user;

pub use actor::Actor;
pub use decision::EditorialDecision;
pub use enums::{
    AppRole, DecisionStatus, NotificationType, ReviewRecommendation, SubmissionStatus,
};
pub use issue::{Issue, normalize_issue_image_url};
pub use journal::Journal;
pub use notification::Notification;
pub use review::{Review, parse_score};
pub use submission::{Contributor, NewSubmission, Submission};
pub use user::User;
