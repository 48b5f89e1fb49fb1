//! OpenAPI specification definition.
//!
//! Aggregates all route handlers and schemas for OpenAPI documentation generation.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Submissions
        crate::routes::submissions::create_submission,
        crate::routes::submissions::get_submission,
        crate::routes::submissions::set_submission_status,
        // Reviews
        crate::routes::reviews::assign_reviewer,
        crate::routes::reviews::submit_review,
        crate::routes::reviews::list_reviews_for_submission,
        // Decisions
        crate::routes::decisions::record_decision,
        crate::routes::decisions::list_decisions,
        // Publications
        crate::routes::publications::create_issue,
        crate::routes::publications::get_issue,
        crate::routes::publications::assign_submission_to_issue,
        crate::routes::publications::publish_issue,
        crate::routes::publications::update_issue_featured_image,
        // Notifications
        crate::routes::notifications::list_notifications,
        crate::routes::notifications::unread_count,
        crate::routes::notifications::mark_notification_read,
        crate::routes::notifications::mark_all_notifications_read,
        // OpenAPI
        crate::routes::openapi::serve_openapi_json,
    ),
    components(schemas(
        crate::routes::submissions::ContributorInput,
        crate::routes::submissions::CreateSubmissionRequest,
        crate::routes::submissions::SetStatusRequest,
        crate::routes::reviews::AssignReviewerRequest,
        crate::routes::reviews::SubmitReviewRequest,
        crate::routes::decisions::RecordDecisionRequest,
        crate::routes::publications::CreateIssueRequest,
        crate::routes::publications::AssignSubmissionRequest,
        crate::routes::publications::FeaturedImageRequest,
    )),
    tags(
        (name = "Submissions", description = "Manuscript submission lifecycle"),
        (name = "Reviews", description = "Reviewer assignment and recommendations"),
        (name = "Decisions", description = "Editorial decision recording"),
        (name = "Publications", description = "Issue creation and publishing"),
        (name = "Notifications", description = "Per-user notification feed"),
        (name = "OpenAPI", description = "OpenAPI specification"),
    ),
    info(
        title = "Journal Workflow API",
        description = "Editorial workflow engine: submissions, peer review, decisions, and issue publication",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
