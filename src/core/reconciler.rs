use crate::core::scoring::{mentor_student_score, student_internship_score};
use crate::models::{Internship, MatchRecord, MatchStatus, Mentor, ScoringWeights, Student};

/// Persistence decision for one (student, mentor) pair after scoring
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReconcileAction {
    /// No record exists and the pair cleared the threshold: insert a new
    /// SUGGESTED record with this score.
    Insert { score: f64 },
    /// A SUGGESTED record exists: rewrite its stored score to this value.
    Refresh { score: f64 },
    /// A record exists but a human has moved it out of SUGGESTED. The fresh
    /// score is computed and then dropped; the stored record stays untouched.
    Leave,
    /// Below the suggestion threshold: nothing is created or touched.
    Skip,
}

/// Match reconciler: scoring weights plus the suggestion threshold and the
/// policy that turns a computed score into a persistence decision
///
/// The reconciler is pure; the storage layer drives the all-pairs sweep and
/// applies the returned actions inside one transaction.
#[derive(Debug, Clone)]
pub struct Reconciler {
    weights: ScoringWeights,
    min_suggestion_score: f64,
}

/// Minimum normalized score for a pair to produce or retain a suggestion
pub const DEFAULT_MIN_SUGGESTION_SCORE: f64 = 30.0;

impl Reconciler {
    pub fn new(weights: ScoringWeights, min_suggestion_score: f64) -> Self {
        Self {
            weights,
            min_suggestion_score,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), DEFAULT_MIN_SUGGESTION_SCORE)
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn min_suggestion_score(&self) -> f64 {
        self.min_suggestion_score
    }

    /// Score one (student, mentor) pair
    pub fn score_pair(&self, student: &Student, mentor: &Mentor) -> f64 {
        mentor_student_score(student, mentor, &self.weights)
    }

    /// Decide what to persist for a pair given its fresh score and the
    /// previously stored record, if any
    ///
    /// The threshold is inclusive. An existing record is only ever rewritten
    /// while its status is still SUGGESTED; once a mentor or admin has
    /// accepted or rejected a match, re-running the sweep leaves it alone
    /// even when the fresh score is higher. Re-running with unchanged inputs
    /// therefore converges: SUGGESTED scores settle on the latest computed
    /// value, everything else is byte-for-byte stable.
    pub fn reconcile_pair(&self, score: f64, existing: Option<&MatchRecord>) -> ReconcileAction {
        if score < self.min_suggestion_score {
            return ReconcileAction::Skip;
        }

        match existing {
            None => ReconcileAction::Insert { score },
            Some(record) if record.status == MatchStatus::Suggested => {
                ReconcileAction::Refresh { score }
            }
            Some(_) => ReconcileAction::Leave,
        }
    }

    /// Score a student against ACTIVE internships and keep those at or above
    /// the suggestion threshold
    ///
    /// Read path only; nothing is persisted.
    pub fn matched_internships(
        &self,
        student: &Student,
        internships: Vec<Internship>,
    ) -> Vec<Internship> {
        internships
            .into_iter()
            .filter(|internship| {
                student_internship_score(student, internship, &self.weights)
                    >= self.min_suggestion_score
            })
            .collect()
    }
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
