use serde::{Deserialize, Serialize};
use crate::models::domain::MatchStatus;

/// Match record enriched with counterpart display fields, as returned by the
/// match query endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDetails {
    pub id: i64,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    pub status: MatchStatus,
    #[serde(rename = "matchedAt")]
    pub matched_at: chrono::DateTime<chrono::Utc>,
    pub notes: Option<String>,

    #[serde(rename = "mentorId")]
    pub mentor_id: i64,
    #[serde(rename = "mentorFirstName")]
    pub mentor_first_name: String,
    #[serde(rename = "mentorLastName")]
    pub mentor_last_name: String,
    #[serde(rename = "mentorJobTitle")]
    pub mentor_job_title: Option<String>,
    #[serde(rename = "mentorCompany")]
    pub mentor_company: Option<String>,
    #[serde(rename = "mentorExpertiseAreas")]
    pub mentor_expertise_areas: Vec<String>,

    #[serde(rename = "studentId")]
    pub student_id: i64,
    #[serde(rename = "studentFirstName")]
    pub student_first_name: String,
    #[serde(rename = "studentLastName")]
    pub student_last_name: String,
    #[serde(rename = "studentMajor")]
    pub student_major: Option<String>,
}

/// Response for the sweep trigger endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSweepResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "runId")]
    pub run_id: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
