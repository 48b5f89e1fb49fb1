//! Role and ownership enforcement across the workflow services.

use journal_workflow_api::models::{Actor, AppRole, NewSubmission, SubmissionStatus, User};
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

async fn seed_submission(state: &AppState, journal_id: Uuid, author_id: Uuid) -> Uuid {
    state
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
            &Actor::new(author_id, AppRole::Author),
        )
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn test_reviewer_cannot_record_decision() {
    let state = AppState::new();
    let editor = seed_user(&state, "editor@example.org", AppRole::Editor).await;
    let author = seed_user(&state, "author@example.org", AppRole::Author).await;
    let reviewer = seed_user(&state, "reviewer@example.org", AppRole::Reviewer).await;
    let journal_id = seed_journal(&state, "acta-chem", editor.id).await;
    let submission_id = seed_submission(&state, journal_id, author.id).await;

    for role in [AppRole::Reviewer, AppRole::Author] {
        let err = state
            .decisions
            .record_decision(
                submission_id,
                "ACCEPTED".parse().unwrap(),
                None,
                &Actor::new(reviewer.id, role),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Forbidden));
    }
}

#[tokio::test]
async fn test_author_cannot_override_status() {
    let state = AppState::new();
    let editor = seed_user(&state, "editor@example.org", AppRole::Editor).await;
    let author = seed_user(&state, "author@example.org", AppRole::Author).await;
    let journal_id = seed_journal(&state, "acta-chem", editor.id).await;
    let submission_id = seed_submission(&state, journal_id, author.id).await;

    let err = state
        .submissions
        .set_status(
            submission_id,
            SubmissionStatus::Accepted,
            &Actor::new(author.id, AppRole::Author),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Forbidden));
}

#[tokio::test]
async fn test_draft_is_not_settable_via_override() {
    let state = AppState::new();
    let editor = seed_user(&state, "editor@example.org", AppRole::Editor).await;
    let author = seed_user(&state, "author@example.org", AppRole::Author).await;
    let journal_id = seed_journal(&state, "acta-chem", editor.id).await;
    let submission_id = seed_submission(&state, journal_id, author.id).await;

    let err = state
        .submissions
        .set_status(
            submission_id,
            SubmissionStatus::Draft,
            &Actor::new(editor.id, AppRole::Editor),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidStatus(_)));
}

#[tokio::test]
async fn test_only_the_assigned_reviewer_may_submit() {
    let state = AppState::new();
    let editor = seed_user(&state, "editor@example.org", AppRole::Editor).await;
    let author = seed_user(&state, "author@example.org", AppRole::Author).await;
    let reviewer = seed_user(&state, "reviewer@example.org", AppRole::Reviewer).await;
    let other = seed_user(&state, "other@example.org", AppRole::Reviewer).await;
    let journal_id = seed_journal(&state, "acta-chem", editor.id).await;
    let submission_id = seed_submission(&state, journal_id, author.id).await;

    let review = state
        .reviews
        .assign_reviewer(submission_id, reviewer.id, &Actor::new(editor.id, AppRole::Editor))
        .await
        .unwrap();

    // Another reviewer is refused.
    let err = state
        .reviews
        .submit_review(review.id, "ACCEPT", None, "", "", &Actor::new(other.id, AppRole::Reviewer))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Forbidden));

    // So is the assigned user acting under an editorial role.
    let err = state
        .reviews
        .submit_review(review.id, "ACCEPT", None, "", "", &Actor::new(reviewer.id, AppRole::Editor))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Forbidden));
}

#[tokio::test]
async fn test_missing_review_reports_not_found_before_ownership() {
    let state = AppState::new();
    let reviewer = seed_user(&state, "reviewer@example.org", AppRole::Reviewer).await;

    let err = state
        .reviews
        .submit_review(
            Uuid::new_v4(),
            "ACCEPT",
            None,
            "",
            "",
            &Actor::new(reviewer.id, AppRole::Reviewer),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::NotFound { .. }));
}

#[tokio::test]
async fn test_non_editorial_roles_cannot_assign_reviewers() {
    let state = AppState::new();
    let editor = seed_user(&state, "editor@example.org", AppRole::Editor).await;
    let author = seed_user(&state, "author@example.org", AppRole::Author).await;
    let journal_id = seed_journal(&state, "acta-chem", editor.id).await;
    let submission_id = seed_submission(&state, journal_id, author.id).await;

    for role in [AppRole::Reviewer, AppRole::Author] {
        let err = state
            .reviews
            .assign_reviewer(submission_id, Uuid::new_v4(), &Actor::new(author.id, role))
            .await
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Forbidden));
    }
}

#[tokio::test]
async fn test_reviewer_cannot_create_submissions() {
    let state = AppState::new();
    let editor = seed_user(&state, "editor@example.org", AppRole::Editor).await;
    let reviewer = seed_user(&state, "reviewer@example.org", AppRole::Reviewer).await;
    let journal_id = seed_journal(&state, "acta-chem", editor.id).await;

    let err = state
        .submissions
        .create_submission(
            NewSubmission {
                journal_id,
                title: "t".to_string(),
                r#abstract: "a".to_string(),
                keywords: vec![],
                manuscript_url: None,
                contributors: vec![],
            },
            &Actor::new(reviewer.id, AppRole::Reviewer),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Forbidden));
}

#[tokio::test]
async fn test_editor_only_manages_their_own_journal() {
    let state = AppState::new();
    let owner = seed_user(&state, "owner@example.org", AppRole::Editor).await;
    let other = seed_user(&state, "other@example.org", AppRole::Editor).await;
    let journal_id = seed_journal(&state, "acta-chem", owner.id).await;

    // A different editor may not create issues for this journal.
    let err = state
        .publications
        .create_issue(journal_id, 1, 1, 2025, None, None, &Actor::new(other.id, AppRole::Editor))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Forbidden));

    // The managing editor may; an ADMIN always may.
    state
        .publications
        .create_issue(journal_id, 1, 1, 2025, None, None, &Actor::new(owner.id, AppRole::Editor))
        .await
        .unwrap();
    state
        .publications
        .create_issue(journal_id, 1, 2, 2025, None, None, &Actor::new(Uuid::new_v4(), AppRole::Admin))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_non_owning_editor_cannot_publish() {
    let state = AppState::new();
    let owner = seed_user(&state, "owner@example.org", AppRole::Editor).await;
    let other = seed_user(&state, "other@example.org", AppRole::Editor).await;
    let journal_id = seed_journal(&state, "acta-chem", owner.id).await;

    let issue = state
        .publications
        .create_issue(journal_id, 1, 1, 2025, None, None, &Actor::new(owner.id, AppRole::Editor))
        .await
        .unwrap();

    let err = state
        .publications
        .publish_issue(issue.id, &Actor::new(other.id, AppRole::Editor))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Forbidden));
}
