// Core algorithm exports
pub mod attributes;
pub mod reconciler;
pub mod scoring;

pub use attributes::{attribute_list, parse_attribute_set};
pub use reconciler::{ReconcileAction, Reconciler, DEFAULT_MIN_SUGGESTION_SCORE};
pub use scoring::{mentor_student_score, student_internship_score};
