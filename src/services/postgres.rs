use std::collections::HashMap;
use std::time::Duration;

use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use thiserror::Error;

use crate::core::{attribute_list, ReconcileAction, Reconciler};
use crate::models::{
    Internship, InternshipStatus, MatchDetails, MatchRecord, MatchStatus, Mentor, Student,
};

/// Errors that can occur when interacting with the portal database
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("{entity} not found with id {id}")]
    NotFound { entity: &'static str, id: i64 },
}

/// Counters for one reconciliation sweep
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepStats {
    pub pairs_scored: usize,
    pub created: usize,
    pub refreshed: usize,
    pub left_untouched: usize,
    pub skipped: usize,
}

/// PostgreSQL client for the internship portal store
///
/// Supplies entity snapshots to the reconciler and persists match records.
/// Profile and internship rows are written by the portal's CRUD services;
/// this client only reads them.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL with URL: {}", url);

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Fetch one student snapshot by id
    pub async fn get_student(&self, student_id: i64) -> Result<Student, PostgresError> {
        let query = r#"
            SELECT id, first_name, last_name, major, skills, interests, profile_picture_url
            FROM students
            WHERE id = $1
        "#;

        sqlx::query(query)
            .bind(student_id)
            .fetch_optional(&self.pool)
            .await?
            .map(|row| student_from_row(&row))
            .ok_or(PostgresError::NotFound {
                entity: "Student",
                id: student_id,
            })
    }

    /// Fetch one mentor snapshot by id
    pub async fn get_mentor(&self, mentor_id: i64) -> Result<Mentor, PostgresError> {
        let query = r#"
            SELECT id, first_name, last_name, job_title, company, expertise_areas,
                   skills, interests, profile_picture_url
            FROM mentors
            WHERE id = $1
        "#;

        sqlx::query(query)
            .bind(mentor_id)
            .fetch_optional(&self.pool)
            .await?
            .map(|row| mentor_from_row(&row))
            .ok_or(PostgresError::NotFound {
                entity: "Mentor",
                id: mentor_id,
            })
    }

    /// Fetch all internships currently open for applications
    pub async fn list_active_internships(&self) -> Result<Vec<Internship>, PostgresError> {
        let query = r#"
            SELECT id, title, company_name, location, description, requirements,
                   skills_required, status
            FROM internships
            WHERE status = $1
        "#;

        let rows = sqlx::query(query)
            .bind(InternshipStatus::Active)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(internship_from_row).collect())
    }

    /// Run the full student x mentor reconciliation sweep
    ///
    /// Snapshots, scoring and all qualifying writes happen inside a single
    /// transaction so readers never observe a half-applied run. The per-pair
    /// decision comes from [`Reconciler::reconcile_pair`]; this method only
    /// executes it.
    pub async fn run_matching_sweep(
        &self,
        reconciler: &Reconciler,
    ) -> Result<SweepStats, PostgresError> {
        let mut tx = self.pool.begin().await?;

        let students: Vec<Student> = sqlx::query(
            r#"
            SELECT id, first_name, last_name, major, skills, interests, profile_picture_url
            FROM students
            "#,
        )
        .fetch_all(&mut *tx)
        .await?
        .iter()
        .map(student_from_row)
        .collect();

        let mentors: Vec<Mentor> = sqlx::query(
            r#"
            SELECT id, first_name, last_name, job_title, company, expertise_areas,
                   skills, interests, profile_picture_url
            FROM mentors
            "#,
        )
        .fetch_all(&mut *tx)
        .await?
        .iter()
        .map(mentor_from_row)
        .collect();

        // One read of the whole match table instead of a lookup per pair;
        // cohort-scale tables make this the cheaper side of the trade.
        let existing: HashMap<(i64, i64), MatchRecord> = sqlx::query(
            r#"
            SELECT id, student_id, mentor_id, match_score, status, matched_at, notes
            FROM mentor_student_matches
            "#,
        )
        .fetch_all(&mut *tx)
        .await?
        .iter()
        .map(match_record_from_row)
        .map(|record| ((record.student_id, record.mentor_id), record))
        .collect();

        tracing::debug!(
            "Sweep snapshot: {} students, {} mentors, {} existing matches",
            students.len(),
            mentors.len(),
            existing.len()
        );

        let mut stats = SweepStats::default();

        for student in &students {
            for mentor in &mentors {
                let score = reconciler.score_pair(student, mentor);
                stats.pairs_scored += 1;

                let prior = existing.get(&(student.id, mentor.id));
                match reconciler.reconcile_pair(score, prior) {
                    ReconcileAction::Insert { score } => {
                        sqlx::query(
                            r#"
                            INSERT INTO mentor_student_matches
                                (student_id, mentor_id, match_score, status)
                            VALUES ($1, $2, $3, $4)
                            "#,
                        )
                        .bind(student.id)
                        .bind(mentor.id)
                        .bind(score)
                        .bind(MatchStatus::Suggested)
                        .execute(&mut *tx)
                        .await?;
                        stats.created += 1;
                    }
                    ReconcileAction::Refresh { score } => {
                        sqlx::query(
                            r#"
                            UPDATE mentor_student_matches
                            SET match_score = $3
                            WHERE student_id = $1 AND mentor_id = $2 AND status = $4
                            "#,
                        )
                        .bind(student.id)
                        .bind(mentor.id)
                        .bind(score)
                        .bind(MatchStatus::Suggested)
                        .execute(&mut *tx)
                        .await?;
                        stats.refreshed += 1;
                    }
                    ReconcileAction::Leave => stats.left_untouched += 1,
                    ReconcileAction::Skip => stats.skipped += 1,
                }
            }
        }

        tx.commit().await?;

        Ok(stats)
    }

    /// List persisted match records for a mentor, enriched with student
    /// display fields
    ///
    /// A mentor with no matches yields an empty list; an unknown mentor id is
    /// a not-found error.
    pub async fn matches_for_mentor(
        &self,
        mentor_id: i64,
    ) -> Result<Vec<MatchDetails>, PostgresError> {
        // Existence check first so an unknown id is distinguishable from an
        // empty match list.
        self.get_mentor(mentor_id).await?;
        self.list_match_details("m.mentor_id = $1", mentor_id).await
    }

    /// List persisted match records for a student, enriched with mentor
    /// display fields
    pub async fn matches_for_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<MatchDetails>, PostgresError> {
        self.get_student(student_id).await?;
        self.list_match_details("m.student_id = $1", student_id)
            .await
    }

    async fn list_match_details(
        &self,
        filter: &str,
        id: i64,
    ) -> Result<Vec<MatchDetails>, PostgresError> {
        let query = format!(
            r#"
            SELECT m.id, m.match_score, m.status, m.matched_at, m.notes,
                   me.id AS mentor_id, me.first_name AS mentor_first_name,
                   me.last_name AS mentor_last_name, me.job_title AS mentor_job_title,
                   me.company AS mentor_company, me.expertise_areas AS mentor_expertise_areas,
                   s.id AS student_id, s.first_name AS student_first_name,
                   s.last_name AS student_last_name, s.major AS student_major
            FROM mentor_student_matches m
            JOIN mentors me ON me.id = m.mentor_id
            JOIN students s ON s.id = m.student_id
            WHERE {}
            "#,
            filter
        );

        let rows = sqlx::query(&query).bind(id).fetch_all(&self.pool).await?;

        Ok(rows
            .iter()
            .map(|row| {
                let expertise: Option<String> = row.get("mentor_expertise_areas");
                MatchDetails {
                    id: row.get("id"),
                    match_score: row.get("match_score"),
                    status: row.get("status"),
                    matched_at: row.get("matched_at"),
                    notes: row.get("notes"),
                    mentor_id: row.get("mentor_id"),
                    mentor_first_name: row.get("mentor_first_name"),
                    mentor_last_name: row.get("mentor_last_name"),
                    mentor_job_title: row.get("mentor_job_title"),
                    mentor_company: row.get("mentor_company"),
                    mentor_expertise_areas: attribute_list(expertise.as_deref()),
                    student_id: row.get("student_id"),
                    student_first_name: row.get("student_first_name"),
                    student_last_name: row.get("student_last_name"),
                    student_major: row.get("student_major"),
                }
            })
            .collect())
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn student_from_row(row: &PgRow) -> Student {
    Student {
        id: row.get("id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        major: row.get("major"),
        skills: row.get("skills"),
        interests: row.get("interests"),
        profile_picture_url: row.get("profile_picture_url"),
    }
}

fn mentor_from_row(row: &PgRow) -> Mentor {
    Mentor {
        id: row.get("id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        job_title: row.get("job_title"),
        company: row.get("company"),
        expertise_areas: row.get("expertise_areas"),
        skills: row.get("skills"),
        interests: row.get("interests"),
        profile_picture_url: row.get("profile_picture_url"),
    }
}

fn internship_from_row(row: &PgRow) -> Internship {
    Internship {
        id: row.get("id"),
        title: row.get("title"),
        company_name: row.get("company_name"),
        location: row.get("location"),
        description: row.get("description"),
        requirements: row.get("requirements"),
        skills_required: row.get("skills_required"),
        status: row.get("status"),
    }
}

fn match_record_from_row(row: &PgRow) -> MatchRecord {
    MatchRecord {
        id: row.get("id"),
        student_id: row.get("student_id"),
        mentor_id: row.get("mentor_id"),
        match_score: row.get("match_score"),
        status: row.get("status"),
        matched_at: row.get("matched_at"),
        notes: row.get("notes"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity_and_id() {
        let err = PostgresError::NotFound {
            entity: "Student",
            id: 42,
        };
        assert_eq!(err.to_string(), "Student not found with id 42");
    }
}
