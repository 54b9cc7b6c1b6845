//! Intern Match - matching service for the university internship portal
//!
//! This library provides the mentor/student/internship matching core used by
//! the portal backend: normalized attribute parsing, weighted set-overlap
//! scoring, and the reconciliation sweep that maintains suggested matches.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    mentor_student_score, parse_attribute_set, student_internship_score, Reconciler,
};
pub use models::{Internship, MatchRecord, MatchStatus, Mentor, ScoringWeights, Student};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let set = parse_attribute_set(Some("Python, SQL"));
        assert!(set.contains("python"));
    }
}
