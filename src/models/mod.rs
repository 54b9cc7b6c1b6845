// Model exports
pub mod domain;
pub mod responses;

pub use domain::{
    Internship, InternshipStatus, MatchRecord, MatchStatus, Mentor, ScoringWeights, Student,
};
pub use responses::{ErrorResponse, HealthResponse, MatchDetails, RunSweepResponse};
