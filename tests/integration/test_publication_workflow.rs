//! Issue creation, assignment, and publication scenarios.

use journal_workflow_api::models::{
    Actor, AppRole, NewSubmission, SubmissionStatus, User,
};
use journal_workflow_api::routes::AppState;
use journal_workflow_api::services::WorkflowError;
use uuid::Uuid;

async fn seed_user(state: &AppState, email: &str, role: AppRole) -> User {
    state
        .store
        .create_user(email.to_string(), None, role)
        .await
        .unwrap()
}

async fn seed_journal(state: &AppState, slug: &str, editor_id: Uuid) -> Uuid {
    state
        .store
        .create_journal(slug.to_string(), slug.to_string(), editor_id)
        .await
        .unwrap()
        .id
}

async fn accepted_submission(state: &AppState, journal_id: Uuid, editor: &Actor) -> Uuid {
    let author = seed_user(
        state,
        &format!("{}@example.org", Uuid::new_v4()),
        AppRole::Author,
    )
    .await;
    let submission = state
        .submissions
        .create_submission(
            NewSubmission {
                journal_id,
                title: "A Manuscript".to_string(),
                r#abstract: "Abstract.".to_string(),
                keywords: vec![],
                manuscript_url: None,
                contributors: vec![],
            },
            &Actor::new(author.id, AppRole::Author),
        )
        .await
        .unwrap();
    state
        .decisions
        .record_decision(submission.id, "ACCEPTED".parse().unwrap(), None, editor)
        .await
        .unwrap();
    submission.id
}

#[tokio::test]
async fn test_publish_issue_flips_assigned_submissions() {
    let state = AppState::new();
    let editor_user = seed_user(&state, "editor@example.org", AppRole::Editor).await;
    let editor = Actor::new(editor_user.id, AppRole::Editor);
    let journal_id = seed_journal(&state, "acta-chem", editor_user.id).await;

    let issue = state
        .publications
        .create_issue(journal_id, 1, 1, 2025, Some("Spring".to_string()), None, &editor)
        .await
        .unwrap();
    assert!(!issue.is_published());

    let submission_id = accepted_submission(&state, journal_id, &editor).await;
    let assigned = state
        .publications
        .assign_submission_to_issue(issue.id, submission_id, &editor)
        .await
        .unwrap();
    // Assigning to a draft issue leaves the submission ACCEPTED.
    assert_eq!(assigned.status, SubmissionStatus::Accepted);
    assert_eq!(assigned.issue_id, Some(issue.id));

    let published = state.publications.publish_issue(issue.id, &editor).await.unwrap();
    assert!(published.is_published());

    let submission = state.submissions.get_submission(submission_id).await.unwrap();
    assert_eq!(submission.status, SubmissionStatus::Published);
}

#[tokio::test]
async fn test_republishing_preserves_original_timestamp() {
    let state = AppState::new();
    let editor_user = seed_user(&state, "editor@example.org", AppRole::Editor).await;
    let editor = Actor::new(editor_user.id, AppRole::Editor);
    let journal_id = seed_journal(&state, "acta-chem", editor_user.id).await;

    let issue = state
        .publications
        .create_issue(journal_id, 1, 1, 2025, None, None, &editor)
        .await
        .unwrap();

    let first = state.publications.publish_issue(issue.id, &editor).await.unwrap();
    let second = state.publications.publish_issue(issue.id, &editor).await.unwrap();
    assert_eq!(second.published_at, first.published_at);
}

#[tokio::test]
async fn test_assigning_to_published_issue_publishes_immediately() {
    let state = AppState::new();
    let editor_user = seed_user(&state, "editor@example.org", AppRole::Editor).await;
    let editor = Actor::new(editor_user.id, AppRole::Editor);
    let journal_id = seed_journal(&state, "acta-chem", editor_user.id).await;

    let issue = state
        .publications
        .create_issue(journal_id, 1, 1, 2025, None, None, &editor)
        .await
        .unwrap();
    state.publications.publish_issue(issue.id, &editor).await.unwrap();

    let submission_id = accepted_submission(&state, journal_id, &editor).await;
    let assigned = state
        .publications
        .assign_submission_to_issue(issue.id, submission_id, &editor)
        .await
        .unwrap();
    assert_eq!(assigned.status, SubmissionStatus::Published);
}

#[tokio::test]
async fn test_only_accepted_or_published_submissions_can_be_assigned() {
    let state = AppState::new();
    let editor_user = seed_user(&state, "editor@example.org", AppRole::Editor).await;
    let author = seed_user(&state, "author@example.org", AppRole::Author).await;
    let editor = Actor::new(editor_user.id, AppRole::Editor);
    let journal_id = seed_journal(&state, "acta-chem", editor_user.id).await;

    let issue = state
        .publications
        .create_issue(journal_id, 1, 1, 2025, None, None, &editor)
        .await
        .unwrap();

    let submission = state
        .submissions
        .create_submission(
            NewSubmission {
                journal_id,
                title: "Still in review".to_string(),
                r#abstract: "Abstract.".to_string(),
                keywords: vec![],
                manuscript_url: None,
                contributors: vec![],
            },
            &Actor::new(author.id, AppRole::Author),
        )
        .await
        .unwrap();

    let err = state
        .publications
        .assign_submission_to_issue(issue.id, submission.id, &editor)
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Conflict(_)));
}

#[tokio::test]
async fn test_cross_journal_assignment_is_rejected() {
    let state = AppState::new();
    let admin_user = seed_user(&state, "admin@example.org", AppRole::Admin).await;
    let admin = Actor::new(admin_user.id, AppRole::Admin);
    let journal_a = seed_journal(&state, "journal-a", admin_user.id).await;
    let journal_b = seed_journal(&state, "journal-b", admin_user.id).await;

    let issue = state
        .publications
        .create_issue(journal_a, 1, 1, 2025, None, None, &admin)
        .await
        .unwrap();
    let submission_id = accepted_submission(&state, journal_b, &admin).await;

    let err = state
        .publications
        .assign_submission_to_issue(issue.id, submission_id, &admin)
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Conflict(_)));

    // The submission was not touched.
    let submission = state.submissions.get_submission(submission_id).await.unwrap();
    assert_eq!(submission.issue_id, None);
}

#[tokio::test]
async fn test_duplicate_issue_surfaces_conflict() {
    let state = AppState::new();
    let editor_user = seed_user(&state, "editor@example.org", AppRole::Editor).await;
    let editor = Actor::new(editor_user.id, AppRole::Editor);
    let journal_id = seed_journal(&state, "acta-chem", editor_user.id).await;

    state
        .publications
        .create_issue(journal_id, 3, 2, 2025, None, None, &editor)
        .await
        .unwrap();
    let err = state
        .publications
        .create_issue(journal_id, 3, 2, 2025, None, None, &editor)
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Conflict(_)));
}

#[tokio::test]
async fn test_featured_image_validation() {
    let state = AppState::new();
    let editor_user = seed_user(&state, "editor@example.org", AppRole::Editor).await;
    let editor = Actor::new(editor_user.id, AppRole::Editor);
    let journal_id = seed_journal(&state, "acta-chem", editor_user.id).await;

    // An invalid image rejects creation outright.
    let err = state
        .publications
        .create_issue(journal_id, 1, 1, 2025, None, Some("covers/a.png"), &editor)
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidImage(_)));

    let issue = state
        .publications
        .create_issue(journal_id, 1, 1, 2025, None, Some("/covers/a.png"), &editor)
        .await
        .unwrap();
    assert_eq!(issue.featured_image_url.as_deref(), Some("/covers/a.png"));

    // Updating with an http URL works, with garbage does not, empty clears.
    let issue = state
        .publications
        .update_issue_featured_image(issue.id, "https://cdn.example.org/b.png", &editor)
        .await
        .unwrap();
    assert_eq!(
        issue.featured_image_url.as_deref(),
        Some("https://cdn.example.org/b.png")
    );

    let err = state
        .publications
        .update_issue_featured_image(issue.id, "ftp://x/y.png", &editor)
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidImage(_)));

    let issue = state
        .publications
        .update_issue_featured_image(issue.id, "", &editor)
        .await
        .unwrap();
    assert_eq!(issue.featured_image_url, None);
}

#[tokio::test]
async fn test_issue_submission_listing() {
    let state = AppState::new();
    let editor_user = seed_user(&state, "editor@example.org", AppRole::Editor).await;
    let editor = Actor::new(editor_user.id, AppRole::Editor);
    let journal_id = seed_journal(&state, "acta-chem", editor_user.id).await;

    let issue = state
        .publications
        .create_issue(journal_id, 1, 1, 2025, None, None, &editor)
        .await
        .unwrap();
    assert!(state
        .publications
        .list_issue_submissions(issue.id)
        .await
        .unwrap()
        .is_empty());

    let first = accepted_submission(&state, journal_id, &editor).await;
    let second = accepted_submission(&state, journal_id, &editor).await;
    state
        .publications
        .assign_submission_to_issue(issue.id, first, &editor)
        .await
        .unwrap();
    state
        .publications
        .assign_submission_to_issue(issue.id, second, &editor)
        .await
        .unwrap();

    let listed = state.publications.list_issue_submissions(issue.id).await.unwrap();
    assert_eq!(listed.len(), 2);
}
