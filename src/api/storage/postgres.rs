//! PostgreSQL storage backend implementation.
//!
//! Uses sqlx for database operations and implements the WorkflowStore trait.
//! Enum-valued columns are stored as TEXT in the SCREAMING_SNAKE_CASE wire
//! form and parsed on read. Compound operations run inside a single
//! transaction; `publish_issue` takes a row lock on the issue so concurrent
//! publishes cannot double-fire the bulk status flip.

use super::{
    StorageError,
    traits::{NewIssue, NewNotification, ReviewSubmission, WorkflowStore},
};
use crate::models::{
    AppRole, Contributor, DecisionStatus, EditorialDecision, Issue, Journal, NewSubmission,
    Notification, Review, Submission, SubmissionStatus, User,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

/// PostgreSQL storage backend implementation.
pub struct PostgresWorkflowStore {
    pool: PgPool,
}

impl PostgresWorkflowStore {
    /// Create a new PostgreSQL storage backend.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn contributors_for(
        &self,
        submission_id: Uuid,
    ) -> Result<Vec<Contributor>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT given_name, family_name, email, affiliation, orcid, sequence
            FROM contributors
            WHERE submission_id = $1
            ORDER BY sequence
            "#,
        )
        .bind(submission_id)
        .fetch_all(&self.pool)
        .await
        .map_err(conn_err)?;

        rows.iter().map(contributor_from_row).collect()
    }
}

fn conn_err(e: sqlx::Error) -> StorageError {
    StorageError::ConnectionError(e.to_string())
}

/// Map an insert failure, surfacing unique key violations as `Conflict`.
fn insert_err(e: sqlx::Error, conflict: &str) -> StorageError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StorageError::Conflict(conflict.to_string())
        }
        _ => StorageError::ConnectionError(e.to_string()),
    }
}

fn col<'r, T>(row: &'r PgRow, name: &str) -> Result<T, StorageError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| StorageError::Other(format!("Failed to decode column {}: {}", name, e)))
}

fn parse_enum<T>(value: String, what: &str) -> Result<T, StorageError>
where
    T: std::str::FromStr<Err = String>,
{
    value
        .parse::<T>()
        .map_err(|e| StorageError::Other(format!("Corrupt {} column: {}", what, e)))
}

fn user_from_row(row: &PgRow) -> Result<User, StorageError> {
    Ok(User {
        id: col(row, "id")?,
        email: col(row, "email")?,
        name: col(row, "name")?,
        role: parse_enum::<AppRole>(col(row, "role")?, "role")?,
        created_at: col(row, "created_at")?,
    })
}

fn journal_from_row(row: &PgRow) -> Result<Journal, StorageError> {
    Ok(Journal {
        id: col(row, "id")?,
        name: col(row, "name")?,
        slug: col(row, "slug")?,
        editor_id: col(row, "editor_id")?,
        created_at: col(row, "created_at")?,
        updated_at: col(row, "updated_at")?,
    })
}

fn contributor_from_row(row: &PgRow) -> Result<Contributor, StorageError> {
    Ok(Contributor {
        given_name: col(row, "given_name")?,
        family_name: col(row, "family_name")?,
        email: col(row, "email")?,
        affiliation: col(row, "affiliation")?,
        orcid: col(row, "orcid")?,
        sequence: col(row, "sequence")?,
    })
}

fn submission_from_row(row: &PgRow, contributors: Vec<Contributor>) -> Result<Submission, StorageError> {
    Ok(Submission {
        id: col(row, "id")?,
        journal_id: col(row, "journal_id")?,
        author_id: col(row, "author_id")?,
        title: col(row, "title")?,
        r#abstract: col(row, "abstract")?,
        keywords: col(row, "keywords")?,
        manuscript_url: col(row, "manuscript_url")?,
        doi: col(row, "doi")?,
        status: parse_enum::<SubmissionStatus>(col(row, "status")?, "status")?,
        issue_id: col(row, "issue_id")?,
        contributors,
        submitted_at: col(row, "submitted_at")?,
        created_at: col(row, "created_at")?,
        updated_at: col(row, "updated_at")?,
    })
}

fn review_from_row(row: &PgRow) -> Result<Review, StorageError> {
    let recommendation: Option<String> = col(row, "recommendation")?;
    Ok(Review {
        id: col(row, "id")?,
        submission_id: col(row, "submission_id")?,
        reviewer_id: col(row, "reviewer_id")?,
        recommendation: recommendation
            .map(|r| parse_enum(r, "recommendation"))
            .transpose()?,
        score: col(row, "score")?,
        comments_to_author: col(row, "comments_to_author")?,
        comments_to_editor: col(row, "comments_to_editor")?,
        submitted_at: col(row, "submitted_at")?,
        created_at: col(row, "created_at")?,
    })
}

fn decision_from_row(row: &PgRow) -> Result<EditorialDecision, StorageError> {
    Ok(EditorialDecision {
        id: col(row, "id")?,
        submission_id: col(row, "submission_id")?,
        decided_by_id: col(row, "decided_by_id")?,
        status: parse_enum::<DecisionStatus>(col(row, "status")?, "status")?,
        notes: col(row, "notes")?,
        decided_at: col(row, "decided_at")?,
    })
}

fn issue_from_row(row: &PgRow) -> Result<Issue, StorageError> {
    Ok(Issue {
        id: col(row, "id")?,
        journal_id: col(row, "journal_id")?,
        volume: col(row, "volume")?,
        issue_number: col(row, "issue_number")?,
        year: col(row, "year")?,
        title: col(row, "title")?,
        featured_image_url: col(row, "featured_image_url")?,
        published_at: col(row, "published_at")?,
        created_at: col(row, "created_at")?,
    })
}

fn notification_from_row(row: &PgRow) -> Result<Notification, StorageError> {
    Ok(Notification {
        id: col(row, "id")?,
        user_id: col(row, "user_id")?,
        r#type: parse_enum(col::<String>(row, "type")?, "type")?,
        title: col(row, "title")?,
        message: col(row, "message")?,
        link: col(row, "link")?,
        read: col(row, "read")?,
        created_at: col(row, "created_at")?,
    })
}

const SUBMISSION_COLS: &str = "id, journal_id, author_id, title, abstract, keywords, \
     manuscript_url, doi, status, issue_id, submitted_at, created_at, updated_at";

const ISSUE_COLS: &str = "id, journal_id, volume, issue_number, year, title, \
     featured_image_url, published_at, created_at";

#[async_trait]
impl WorkflowStore for PostgresWorkflowStore {
    async fn create_user(
        &self,
        email: String,
        name: Option<String>,
        role: AppRole,
    ) -> Result<User, StorageError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, role, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(&email)
        .bind(&name)
        .bind(role.as_str())
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| insert_err(e, "User with this email already exists"))?;

        Ok(User {
            id,
            email,
            name,
            role,
            created_at: now,
        })
    }

    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>, StorageError> {
        let row = sqlx::query("SELECT id, email, name, role, created_at FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(conn_err)?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn create_journal(
        &self,
        name: String,
        slug: String,
        editor_id: Uuid,
    ) -> Result<Journal, StorageError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO journals (id, name, slug, editor_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            "#,
        )
        .bind(id)
        .bind(&name)
        .bind(&slug)
        .bind(editor_id)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| insert_err(e, "Journal with this slug already exists"))?;

        Ok(Journal {
            id,
            name,
            slug,
            editor_id,
            created_at: now,
            updated_at: now,
        })
    }

    async fn get_journal(&self, journal_id: Uuid) -> Result<Option<Journal>, StorageError> {
        let row = sqlx::query(
            "SELECT id, name, slug, editor_id, created_at, updated_at FROM journals WHERE id = $1",
        )
        .bind(journal_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(conn_err)?;

        row.as_ref().map(journal_from_row).transpose()
    }

    async fn create_submission(
        &self,
        author_id: Uuid,
        submission: NewSubmission,
        submitted_at: DateTime<Utc>,
    ) -> Result<Submission, StorageError> {
        let id = Uuid::new_v4();
        let mut contributors = submission.contributors;
        super::traits::normalize_contributor_order(&mut contributors);

        let mut tx = self.pool.begin().await.map_err(conn_err)?;

        sqlx::query(
            r#"
            INSERT INTO submissions
                (id, journal_id, author_id, title, abstract, keywords, manuscript_url,
                 status, submitted_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
            "#,
        )
        .bind(id)
        .bind(submission.journal_id)
        .bind(author_id)
        .bind(&submission.title)
        .bind(&submission.r#abstract)
        .bind(&submission.keywords)
        .bind(&submission.manuscript_url)
        .bind(SubmissionStatus::Submitted.as_str())
        .bind(submitted_at)
        .bind(submitted_at)
        .execute(&mut *tx)
        .await
        .map_err(conn_err)?;

        for contributor in &contributors {
            sqlx::query(
                r#"
                INSERT INTO contributors
                    (id, submission_id, given_name, family_name, email, affiliation, orcid, sequence)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(id)
            .bind(&contributor.given_name)
            .bind(&contributor.family_name)
            .bind(&contributor.email)
            .bind(&contributor.affiliation)
            .bind(&contributor.orcid)
            .bind(contributor.sequence)
            .execute(&mut *tx)
            .await
            .map_err(conn_err)?;
        }

        tx.commit().await.map_err(conn_err)?;

        Ok(Submission {
            id,
            journal_id: submission.journal_id,
            author_id,
            title: submission.title,
            r#abstract: submission.r#abstract,
            keywords: submission.keywords,
            manuscript_url: submission.manuscript_url,
            doi: None,
            status: SubmissionStatus::Submitted,
            issue_id: None,
            contributors,
            submitted_at: Some(submitted_at),
            created_at: submitted_at,
            updated_at: submitted_at,
        })
    }

    async fn get_submission(
        &self,
        submission_id: Uuid,
    ) -> Result<Option<Submission>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM submissions WHERE id = $1",
            SUBMISSION_COLS
        ))
        .bind(submission_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(conn_err)?;

        match row {
            Some(row) => {
                let contributors = self.contributors_for(submission_id).await?;
                submission_from_row(&row, contributors).map(Some)
            }
            None => Ok(None),
        }
    }

    async fn update_submission_status(
        &self,
        submission_id: Uuid,
        status: SubmissionStatus,
    ) -> Result<Submission, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE submissions SET status = $2, updated_at = $3 WHERE id = $1 RETURNING {}",
            SUBMISSION_COLS
        ))
        .bind(submission_id)
        .bind(status.as_str())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(conn_err)?
        .ok_or_else(|| StorageError::not_found("Submission", submission_id))?;

        let contributors = self.contributors_for(submission_id).await?;
        submission_from_row(&row, contributors)
    }

    async fn set_submission_issue(
        &self,
        submission_id: Uuid,
        issue_id: Uuid,
        status: SubmissionStatus,
    ) -> Result<Submission, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE submissions SET issue_id = $2, status = $3, updated_at = $4 \
             WHERE id = $1 RETURNING {}",
            SUBMISSION_COLS
        ))
        .bind(submission_id)
        .bind(issue_id)
        .bind(status.as_str())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(conn_err)?
        .ok_or_else(|| StorageError::not_found("Submission", submission_id))?;

        let contributors = self.contributors_for(submission_id).await?;
        submission_from_row(&row, contributors)
    }

    async fn list_submissions_for_issue(
        &self,
        issue_id: Uuid,
    ) -> Result<Vec<Submission>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM submissions WHERE issue_id = $1 ORDER BY created_at",
            SUBMISSION_COLS
        ))
        .bind(issue_id)
        .fetch_all(&self.pool)
        .await
        .map_err(conn_err)?;

        let mut submissions = Vec::with_capacity(rows.len());
        for row in &rows {
            let id: Uuid = col(row, "id")?;
            let contributors = self.contributors_for(id).await?;
            submissions.push(submission_from_row(row, contributors)?);
        }
        Ok(submissions)
    }

    async fn create_review(
        &self,
        submission_id: Uuid,
        reviewer_id: Uuid,
    ) -> Result<Review, StorageError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO reviews (id, submission_id, reviewer_id, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id)
        .bind(submission_id)
        .bind(reviewer_id)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| insert_err(e, "Reviewer is already assigned to this submission"))?;

        Ok(Review {
            id,
            submission_id,
            reviewer_id,
            recommendation: None,
            score: None,
            comments_to_author: None,
            comments_to_editor: None,
            submitted_at: None,
            created_at: now,
        })
    }

    async fn get_review(&self, review_id: Uuid) -> Result<Option<Review>, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT id, submission_id, reviewer_id, recommendation, score,
                   comments_to_author, comments_to_editor, submitted_at, created_at
            FROM reviews
            WHERE id = $1
            "#,
        )
        .bind(review_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(conn_err)?;

        row.as_ref().map(review_from_row).transpose()
    }

    async fn submit_review(
        &self,
        review_id: Uuid,
        fields: ReviewSubmission,
    ) -> Result<Review, StorageError> {
        let row = sqlx::query(
            r#"
            UPDATE reviews
            SET recommendation = $2, score = $3, comments_to_author = $4,
                comments_to_editor = $5, submitted_at = $6
            WHERE id = $1
            RETURNING id, submission_id, reviewer_id, recommendation, score,
                      comments_to_author, comments_to_editor, submitted_at, created_at
            "#,
        )
        .bind(review_id)
        .bind(fields.recommendation.as_str())
        .bind(fields.score)
        .bind(&fields.comments_to_author)
        .bind(&fields.comments_to_editor)
        .bind(fields.submitted_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(conn_err)?
        .ok_or_else(|| StorageError::not_found("Review", review_id))?;

        review_from_row(&row)
    }

    async fn list_reviews_for_submission(
        &self,
        submission_id: Uuid,
    ) -> Result<Vec<Review>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT id, submission_id, reviewer_id, recommendation, score,
                   comments_to_author, comments_to_editor, submitted_at, created_at
            FROM reviews
            WHERE submission_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(submission_id)
        .fetch_all(&self.pool)
        .await
        .map_err(conn_err)?;

        rows.iter().map(review_from_row).collect()
    }

    async fn record_decision(
        &self,
        submission_id: Uuid,
        decided_by_id: Uuid,
        status: DecisionStatus,
        notes: Option<String>,
        decided_at: DateTime<Utc>,
    ) -> Result<(EditorialDecision, Submission), StorageError> {
        let mut tx = self.pool.begin().await.map_err(conn_err)?;

        let row = sqlx::query(&format!(
            "UPDATE submissions SET status = $2, updated_at = $3 WHERE id = $1 RETURNING {}",
            SUBMISSION_COLS
        ))
        .bind(submission_id)
        .bind(status.as_submission_status().as_str())
        .bind(decided_at)
        .fetch_optional(&mut *tx)
        .await
        .map_err(conn_err)?
        .ok_or_else(|| StorageError::not_found("Submission", submission_id))?;

        let decision_id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO editorial_decisions
                (id, submission_id, decided_by_id, status, notes, decided_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(decision_id)
        .bind(submission_id)
        .bind(decided_by_id)
        .bind(status.as_str())
        .bind(&notes)
        .bind(decided_at)
        .execute(&mut *tx)
        .await
        .map_err(conn_err)?;

        tx.commit().await.map_err(conn_err)?;

        let contributors = self.contributors_for(submission_id).await?;
        let submission = submission_from_row(&row, contributors)?;
        let decision = EditorialDecision {
            id: decision_id,
            submission_id,
            decided_by_id,
            status,
            notes,
            decided_at,
        };
        Ok((decision, submission))
    }

    async fn list_decisions(
        &self,
        submission_id: Uuid,
    ) -> Result<Vec<EditorialDecision>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT id, submission_id, decided_by_id, status, notes, decided_at
            FROM editorial_decisions
            WHERE submission_id = $1
            ORDER BY decided_at DESC
            "#,
        )
        .bind(submission_id)
        .fetch_all(&self.pool)
        .await
        .map_err(conn_err)?;

        rows.iter().map(decision_from_row).collect()
    }

    async fn create_issue(&self, issue: NewIssue) -> Result<Issue, StorageError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO issues
                (id, journal_id, volume, issue_number, year, title, featured_image_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(id)
        .bind(issue.journal_id)
        .bind(issue.volume)
        .bind(issue.issue_number)
        .bind(issue.year)
        .bind(&issue.title)
        .bind(&issue.featured_image_url)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| insert_err(e, "Issue with this volume/number/year already exists"))?;

        Ok(Issue {
            id,
            journal_id: issue.journal_id,
            volume: issue.volume,
            issue_number: issue.issue_number,
            year: issue.year,
            title: issue.title,
            featured_image_url: issue.featured_image_url,
            published_at: None,
            created_at: now,
        })
    }

    async fn get_issue(&self, issue_id: Uuid) -> Result<Option<Issue>, StorageError> {
        let row = sqlx::query(&format!("SELECT {} FROM issues WHERE id = $1", ISSUE_COLS))
            .bind(issue_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(conn_err)?;

        row.as_ref().map(issue_from_row).transpose()
    }

    async fn update_issue_featured_image(
        &self,
        issue_id: Uuid,
        featured_image_url: Option<String>,
    ) -> Result<Issue, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE issues SET featured_image_url = $2 WHERE id = $1 RETURNING {}",
            ISSUE_COLS
        ))
        .bind(issue_id)
        .bind(&featured_image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(conn_err)?
        .ok_or_else(|| StorageError::not_found("Issue", issue_id))?;

        issue_from_row(&row)
    }

    async fn publish_issue(
        &self,
        issue_id: Uuid,
        published_at: DateTime<Utc>,
    ) -> Result<(Issue, u64), StorageError> {
        let mut tx = self.pool.begin().await.map_err(conn_err)?;

        let row = sqlx::query(&format!(
            "SELECT {} FROM issues WHERE id = $1 FOR UPDATE",
            ISSUE_COLS
        ))
        .bind(issue_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(conn_err)?
        .ok_or_else(|| StorageError::not_found("Issue", issue_id))?;

        let mut issue = issue_from_row(&row)?;

        // Idempotency guard: the first publish wins and keeps its timestamp.
        if issue.published_at.is_some() {
            tx.rollback().await.map_err(conn_err)?;
            return Ok((issue, 0));
        }

        sqlx::query("UPDATE issues SET published_at = $2 WHERE id = $1")
            .bind(issue_id)
            .bind(published_at)
            .execute(&mut *tx)
            .await
            .map_err(conn_err)?;

        let result = sqlx::query(
            r#"
            UPDATE submissions
            SET status = $2, updated_at = $3
            WHERE issue_id = $1 AND status <> $2
            "#,
        )
        .bind(issue_id)
        .bind(SubmissionStatus::Published.as_str())
        .bind(published_at)
        .execute(&mut *tx)
        .await
        .map_err(conn_err)?;

        tx.commit().await.map_err(conn_err)?;

        issue.published_at = Some(published_at);
        Ok((issue, result.rows_affected()))
    }

    async fn create_notification(
        &self,
        notification: NewNotification,
    ) -> Result<Notification, StorageError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO notifications (id, user_id, type, title, message, link, read, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, FALSE, $7)
            "#,
        )
        .bind(id)
        .bind(notification.user_id)
        .bind(notification.r#type.as_str())
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(&notification.link)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(conn_err)?;

        Ok(Notification {
            id,
            user_id: notification.user_id,
            r#type: notification.r#type,
            title: notification.title,
            message: notification.message,
            link: notification.link,
            read: false,
            created_at: now,
        })
    }

    async fn mark_notification_read(
        &self,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> Result<Notification, StorageError> {
        let row = sqlx::query(
            r#"
            UPDATE notifications SET read = TRUE
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, type, title, message, link, read, created_at
            "#,
        )
        .bind(notification_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(conn_err)?
        .ok_or_else(|| StorageError::not_found("Notification", notification_id))?;

        notification_from_row(&row)
    }

    async fn mark_all_notifications_read(&self, user_id: Uuid) -> Result<u64, StorageError> {
        let result =
            sqlx::query("UPDATE notifications SET read = TRUE WHERE user_id = $1 AND read = FALSE")
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(conn_err)?;

        Ok(result.rows_affected())
    }

    async fn unread_notification_count(&self, user_id: Uuid) -> Result<i64, StorageError> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS unread FROM notifications WHERE user_id = $1 AND read = FALSE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(conn_err)?;

        col(&row, "unread")
    }

    async fn list_notifications(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Notification>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, type, title, message, link, read, created_at
            FROM notifications
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(conn_err)?;

        rows.iter().map(notification_from_row).collect()
    }
}
