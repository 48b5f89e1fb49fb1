//! Tests for the in-memory storage backend.

use chrono::Utc;
use journal_workflow_api::models::{
    AppRole, Contributor, DecisionStatus, NewSubmission, ReviewRecommendation, SubmissionStatus,
};
use journal_workflow_api::storage::{
    MemoryWorkflowStore, NewIssue, NewNotification, ReviewSubmission, StorageError, WorkflowStore,
};
use uuid::Uuid;

fn new_submission(journal_id: Uuid, title: &str) -> NewSubmission {
    NewSubmission {
        journal_id,
        title: title.to_string(),
        r#abstract: "Abstract.".to_string(),
        keywords: vec![],
        manuscript_url: None,
        contributors: vec![],
    }
}

async fn seed_journal(store: &MemoryWorkflowStore) -> (Uuid, Uuid) {
    let editor = store
        .create_user("editor@example.org".to_string(), None, AppRole::Editor)
        .await
        .unwrap();
    let journal = store
        .create_journal("Acta Chemica".to_string(), "acta-chem".to_string(), editor.id)
        .await
        .unwrap();
    (journal.id, editor.id)
}

#[tokio::test]
async fn test_duplicate_user_email_conflicts() {
    let store = MemoryWorkflowStore::new();
    store
        .create_user("a@example.org".to_string(), None, AppRole::Author)
        .await
        .unwrap();

    let err = store
        .create_user("a@example.org".to_string(), None, AppRole::Reviewer)
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Conflict(_)));
}

#[tokio::test]
async fn test_duplicate_journal_slug_conflicts() {
    let store = MemoryWorkflowStore::new();
    let (_, editor_id) = seed_journal(&store).await;

    let err = store
        .create_journal("Other".to_string(), "acta-chem".to_string(), editor_id)
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Conflict(_)));
}

#[tokio::test]
async fn test_create_submission_requires_existing_journal() {
    let store = MemoryWorkflowStore::new();
    let err = store
        .create_submission(Uuid::new_v4(), new_submission(Uuid::new_v4(), "x"), Utc::now())
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn test_create_submission_normalizes_contributors() {
    let store = MemoryWorkflowStore::new();
    let (journal_id, _) = seed_journal(&store).await;

    let mut input = new_submission(journal_id, "Ordered");
    input.contributors = vec![
        Contributor {
            given_name: "Second".to_string(),
            family_name: "B".to_string(),
            email: None,
            affiliation: None,
            orcid: None,
            sequence: 9,
        },
        Contributor {
            given_name: "First".to_string(),
            family_name: "A".to_string(),
            email: None,
            affiliation: None,
            orcid: None,
            sequence: 2,
        },
    ];

    let created = store
        .create_submission(Uuid::new_v4(), input, Utc::now())
        .await
        .unwrap();

    assert_eq!(created.status, SubmissionStatus::Submitted);
    assert_eq!(created.contributors[0].given_name, "First");
    assert_eq!(created.contributors[0].sequence, 0);
    assert_eq!(created.contributors[1].given_name, "Second");
    assert_eq!(created.contributors[1].sequence, 1);
}

#[tokio::test]
async fn test_duplicate_review_assignment_conflicts() {
    let store = MemoryWorkflowStore::new();
    let (journal_id, _) = seed_journal(&store).await;
    let submission = store
        .create_submission(Uuid::new_v4(), new_submission(journal_id, "s"), Utc::now())
        .await
        .unwrap();

    let reviewer_id = Uuid::new_v4();
    store.create_review(submission.id, reviewer_id).await.unwrap();
    let err = store
        .create_review(submission.id, reviewer_id)
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Conflict(_)));

    // A second reviewer is still fine.
    store
        .create_review(submission.id, Uuid::new_v4())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_submit_review_fills_fields_once() {
    let store = MemoryWorkflowStore::new();
    let (journal_id, _) = seed_journal(&store).await;
    let submission = store
        .create_submission(Uuid::new_v4(), new_submission(journal_id, "s"), Utc::now())
        .await
        .unwrap();
    let review = store
        .create_review(submission.id, Uuid::new_v4())
        .await
        .unwrap();
    assert!(review.is_pending());

    let submitted_at = Utc::now();
    let updated = store
        .submit_review(
            review.id,
            ReviewSubmission {
                recommendation: ReviewRecommendation::MinorRevision,
                score: Some(4),
                comments_to_author: Some("Tighten section 2.".to_string()),
                comments_to_editor: None,
                submitted_at,
            },
        )
        .await
        .unwrap();

    assert!(!updated.is_pending());
    assert_eq!(updated.recommendation, Some(ReviewRecommendation::MinorRevision));
    assert_eq!(updated.score, Some(4));
    assert_eq!(updated.submitted_at, Some(submitted_at));
}

#[tokio::test]
async fn test_record_decision_updates_status_and_appends() {
    let store = MemoryWorkflowStore::new();
    let (journal_id, editor_id) = seed_journal(&store).await;
    let submission = store
        .create_submission(Uuid::new_v4(), new_submission(journal_id, "s"), Utc::now())
        .await
        .unwrap();

    let (decision, updated) = store
        .record_decision(
            submission.id,
            editor_id,
            DecisionStatus::Accepted,
            Some("Strong results.".to_string()),
            Utc::now(),
        )
        .await
        .unwrap();

    assert_eq!(updated.status, SubmissionStatus::Accepted);
    assert_eq!(decision.submission_id, submission.id);
    assert_eq!(decision.decided_by_id, editor_id);

    // Append-only: a second decision adds a row, newest first.
    store
        .record_decision(submission.id, editor_id, DecisionStatus::Rejected, None, Utc::now())
        .await
        .unwrap();
    let history = store.list_decisions(submission.id).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].status, DecisionStatus::Rejected);
    assert_eq!(history[1].status, DecisionStatus::Accepted);
}

#[tokio::test]
async fn test_record_decision_on_missing_submission_writes_nothing() {
    let store = MemoryWorkflowStore::new();
    let missing = Uuid::new_v4();

    let err = store
        .record_decision(missing, Uuid::new_v4(), DecisionStatus::Accepted, None, Utc::now())
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
    assert!(store.list_decisions(missing).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_issue_key_conflicts() {
    let store = MemoryWorkflowStore::new();
    let (journal_id, _) = seed_journal(&store).await;

    let issue = NewIssue {
        journal_id,
        volume: 1,
        issue_number: 2,
        year: 2025,
        title: None,
        featured_image_url: None,
    };
    store.create_issue(issue.clone()).await.unwrap();
    let err = store.create_issue(issue).await.unwrap_err();
    assert!(matches!(err, StorageError::Conflict(_)));
}

#[tokio::test]
async fn test_publish_issue_flips_assigned_submissions() {
    let store = MemoryWorkflowStore::new();
    let (journal_id, editor_id) = seed_journal(&store).await;
    let issue = store
        .create_issue(NewIssue {
            journal_id,
            volume: 1,
            issue_number: 1,
            year: 2025,
            title: None,
            featured_image_url: None,
        })
        .await
        .unwrap();

    let first = store
        .create_submission(Uuid::new_v4(), new_submission(journal_id, "a"), Utc::now())
        .await
        .unwrap();
    let second = store
        .create_submission(Uuid::new_v4(), new_submission(journal_id, "b"), Utc::now())
        .await
        .unwrap();
    store
        .record_decision(first.id, editor_id, DecisionStatus::Accepted, None, Utc::now())
        .await
        .unwrap();
    store
        .set_submission_issue(first.id, issue.id, SubmissionStatus::Accepted)
        .await
        .unwrap();

    let published_at = Utc::now();
    let (published, flipped) = store.publish_issue(issue.id, published_at).await.unwrap();

    assert_eq!(published.published_at, Some(published_at));
    assert_eq!(flipped, 1);
    let first = store.get_submission(first.id).await.unwrap().unwrap();
    assert_eq!(first.status, SubmissionStatus::Published);
    // Unassigned submissions are untouched.
    let second = store.get_submission(second.id).await.unwrap().unwrap();
    assert_eq!(second.status, SubmissionStatus::Submitted);
}

#[tokio::test]
async fn test_republish_is_a_no_op_preserving_timestamp() {
    let store = MemoryWorkflowStore::new();
    let (journal_id, _) = seed_journal(&store).await;
    let issue = store
        .create_issue(NewIssue {
            journal_id,
            volume: 2,
            issue_number: 1,
            year: 2025,
            title: None,
            featured_image_url: None,
        })
        .await
        .unwrap();

    let first_publish = Utc::now();
    store.publish_issue(issue.id, first_publish).await.unwrap();

    let later = first_publish + chrono::Duration::hours(1);
    let (republished, flipped) = store.publish_issue(issue.id, later).await.unwrap();
    assert_eq!(republished.published_at, Some(first_publish));
    assert_eq!(flipped, 0);
}

#[tokio::test]
async fn test_notification_read_tracking_is_owner_scoped() {
    let store = MemoryWorkflowStore::new();
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    let notification = store
        .create_notification(NewNotification {
            user_id: owner,
            r#type: journal_workflow_api::models::NotificationType::System,
            title: "Hello".to_string(),
            message: "World".to_string(),
            link: None,
        })
        .await
        .unwrap();
    assert!(!notification.read);
    assert_eq!(store.unread_notification_count(owner).await.unwrap(), 1);

    // A non-owner sees NotFound, not the row.
    let err = store
        .mark_notification_read(notification.id, stranger)
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));

    let read = store
        .mark_notification_read(notification.id, owner)
        .await
        .unwrap();
    assert!(read.read);
    assert_eq!(store.unread_notification_count(owner).await.unwrap(), 0);
}

#[tokio::test]
async fn test_mark_all_notifications_read_counts_unread_only() {
    let store = MemoryWorkflowStore::new();
    let user = Uuid::new_v4();

    for i in 0..3 {
        store
            .create_notification(NewNotification {
                user_id: user,
                r#type: journal_workflow_api::models::NotificationType::System,
                title: format!("n{}", i),
                message: "m".to_string(),
                link: None,
            })
            .await
            .unwrap();
    }

    assert_eq!(store.mark_all_notifications_read(user).await.unwrap(), 3);
    assert_eq!(store.mark_all_notifications_read(user).await.unwrap(), 0);
}
