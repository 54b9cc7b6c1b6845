use serde::{Deserialize, Serialize};

/// Student profile snapshot used during one matching run
///
/// Attribute fields (`skills`, `interests`) hold the raw comma-separated
/// text from the profile store; they are parsed into sets on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(rename = "profilePictureUrl", default)]
    pub profile_picture_url: Option<String>,
}

/// Mentor profile snapshot used during one matching run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mentor {
    pub id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "jobTitle", default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(rename = "expertiseAreas", default)]
    pub expertise_areas: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(rename = "profilePictureUrl", default)]
    pub profile_picture_url: Option<String>,
}

/// Internship posting snapshot
///
/// Only ACTIVE internships are eligible for student matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Internship {
    pub id: i64,
    pub title: String,
    #[serde(rename = "companyName")]
    pub company_name: String,
    pub location: String,
    pub description: String,
    pub requirements: String,
    #[serde(rename = "skillsRequired", default)]
    pub skills_required: Option<String>,
    pub status: InternshipStatus,
}

/// Lifecycle status of an internship posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "internship_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InternshipStatus {
    Active,
    Closed,
    Filled,
}

/// Lifecycle status of a mentor/student match record
///
/// The reconciler only ever creates records as `Suggested` and only ever
/// rewrites records that are still `Suggested`. Every other status is set by
/// mentors or admins and is never touched by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "match_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Suggested,
    Accepted,
    Rejected,
    Completed,
}

/// Persisted match record for a (student, mentor) pair
///
/// At most one record exists per pair, enforced by a unique constraint on
/// (student_id, mentor_id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: i64,
    #[serde(rename = "studentId")]
    pub student_id: i64,
    #[serde(rename = "mentorId")]
    pub mentor_id: i64,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    pub status: MatchStatus,
    #[serde(rename = "matchedAt")]
    pub matched_at: chrono::DateTime<chrono::Utc>,
    pub notes: Option<String>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub skills: f64,
    pub interests: f64,
    pub major: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 50.0,
            interests: 30.0,
            major: 20.0,
        }
    }
}
