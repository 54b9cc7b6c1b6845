use std::collections::HashSet;

use crate::core::attributes::parse_attribute_set;
use crate::models::{Internship, Mentor, ScoringWeights, Student};

/// Calculate the mentor/student compatibility score (0-100)
///
/// Raw score:
///     |shared skills|    * skills weight (50)
///   + |shared interests| * interests weight (30)
///   + major bonus (20) when the student's major equals one of the mentor's
///     expertise areas, case-insensitively
///
/// The raw score is normalized against the theoretical maximum this pair
/// could reach given the sizes of their attribute sets, then clamped to
/// [0, 100]. A pair with nothing to compare scores 0.
pub fn mentor_student_score(student: &Student, mentor: &Mentor, weights: &ScoringWeights) -> f64 {
    let student_skills = parse_attribute_set(student.skills.as_deref());
    let mentor_skills = parse_attribute_set(mentor.skills.as_deref());
    let student_interests = parse_attribute_set(student.interests.as_deref());
    let mentor_interests = parse_attribute_set(mentor.interests.as_deref());

    let mut score = overlap(&student_skills, &mentor_skills) as f64 * weights.skills;
    score += overlap(&student_interests, &mentor_interests) as f64 * weights.interests;

    if let Some(major) = student.major.as_deref() {
        let expertise = parse_attribute_set(mentor.expertise_areas.as_deref());
        if expertise.contains(&major.trim().to_lowercase()) {
            score += weights.major;
        }
    }

    let max_possible = pair_max(&student_skills, &mentor_skills, weights.skills)
        + pair_max(&student_interests, &mentor_interests, weights.interests)
        + weights.major;

    normalize(score, max_possible)
}

/// Calculate the student/internship compatibility score (0-100)
///
/// Same weights and clamping as the mentor variant, but internships carry no
/// interests, and the major bonus is granted on a case-insensitive substring
/// match against the internship's description or requirements text rather
/// than an exact token match. The asymmetry is intentional: postings describe
/// fields of study in prose, mentor expertise is a token list.
pub fn student_internship_score(
    student: &Student,
    internship: &Internship,
    weights: &ScoringWeights,
) -> f64 {
    let student_skills = parse_attribute_set(student.skills.as_deref());
    let internship_skills = parse_attribute_set(internship.skills_required.as_deref());

    let mut score = overlap(&student_skills, &internship_skills) as f64 * weights.skills;

    if let Some(major) = student.major.as_deref() {
        let needle = major.trim().to_lowercase();
        if !needle.is_empty()
            && (internship.description.to_lowercase().contains(&needle)
                || internship.requirements.to_lowercase().contains(&needle))
        {
            score += weights.major;
        }
    }

    let max_possible = pair_max(&student_skills, &internship_skills, weights.skills) + weights.major;

    normalize(score, max_possible)
}

#[inline]
fn overlap(a: &HashSet<String>, b: &HashSet<String>) -> usize {
    a.intersection(b).count()
}

/// Maximum raw contribution one weighted term can reach for a pair of sets
///
/// An empty set on either side makes the term unreachable, so it contributes
/// nothing to the denominator.
#[inline]
fn pair_max(a: &HashSet<String>, b: &HashSet<String>, weight: f64) -> f64 {
    if a.is_empty() || b.is_empty() {
        0.0
    } else {
        a.len().min(b.len()) as f64 * weight
    }
}

#[inline]
fn normalize(score: f64, max_possible: f64) -> f64 {
    if max_possible > 0.0 {
        (score / max_possible * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(major: Option<&str>, skills: Option<&str>, interests: Option<&str>) -> Student {
        Student {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            major: major.map(String::from),
            skills: skills.map(String::from),
            interests: interests.map(String::from),
            profile_picture_url: None,
        }
    }

    fn mentor(expertise: Option<&str>, skills: Option<&str>, interests: Option<&str>) -> Mentor {
        Mentor {
            id: 7,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            job_title: None,
            company: None,
            expertise_areas: expertise.map(String::from),
            skills: skills.map(String::from),
            interests: interests.map(String::from),
            profile_picture_url: None,
        }
    }

    fn internship(description: &str, requirements: &str, skills: Option<&str>) -> Internship {
        Internship {
            id: 3,
            title: "Backend Intern".to_string(),
            company_name: "Acme".to_string(),
            location: "Remote".to_string(),
            description: description.to_string(),
            requirements: requirements.to_string(),
            skills_required: skills.map(String::from),
            status: crate::models::InternshipStatus::Active,
        }
    }

    #[test]
    fn test_shared_skills_no_major_match() {
        // common skills = {python}, raw = 50
        // max = min(2,2)*50 + 0 (one interest side empty) + 20 = 120
        let s = student(None, Some("python,sql"), None);
        let m = mentor(None, Some("python,java"), None);
        let score = mentor_student_score(&s, &m, &ScoringWeights::default());
        assert!((score - 50.0 / 120.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_major_match_is_case_insensitive_exact_token() {
        let s = student(Some("Computer Science"), None, None);
        let m = mentor(Some("computer science, ml"), None, None);
        let score = mentor_student_score(&s, &m, &ScoringWeights::default());
        // only the major term is achievable: 20 / 20 * 100
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_major_substring_does_not_match_mentor_expertise() {
        let s = student(Some("Science"), None, None);
        let m = mentor(Some("computer science"), None, None);
        let score = mentor_student_score(&s, &m, &ScoringWeights::default());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let s = student(Some("Biology"), Some("python"), Some("chess"));
        let m = mentor(Some("finance"), Some("java"), Some("golf"));
        let score = mentor_student_score(&s, &m, &ScoringWeights::default());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_profiles_score_zero() {
        let s = student(None, None, None);
        let m = mentor(None, None, None);
        let score = mentor_student_score(&s, &m, &ScoringWeights::default());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_zero_theoretical_max_never_divides_by_zero() {
        // With the major weight zeroed out, two empty profiles have a zero
        // denominator; the score must be 0, not NaN.
        let weights = ScoringWeights {
            skills: 50.0,
            interests: 30.0,
            major: 0.0,
        };
        let s = student(None, None, None);
        let m = mentor(None, None, None);
        let score = mentor_student_score(&s, &m, &weights);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_score_is_bounded() {
        let s = student(Some("cs"), Some("a,b,c"), Some("x,y"));
        let m = mentor(Some("cs"), Some("a,b,c,d"), Some("x,y,z"));
        let score = mentor_student_score(&s, &m, &ScoringWeights::default());
        assert!((0.0..=100.0).contains(&score));
        // full overlap on the smaller sets plus major bonus is a perfect score
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_internship_major_bonus_is_substring() {
        let s = student(Some("Computer Science"), None, None);
        let i = internship(
            "Work on data pipelines",
            "Pursuing a degree in computer science or related field",
            None,
        );
        let score = student_internship_score(&s, &i, &ScoringWeights::default());
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_internship_skill_overlap() {
        // common = {rust}, raw = 50, max = min(1,2)*50 + 20 = 70
        let s = student(None, Some("rust"), None);
        let i = internship("desc", "reqs", Some("rust,go"));
        let score = student_internship_score(&s, &i, &ScoringWeights::default());
        assert!((score - 50.0 / 70.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_internship_no_interest_term() {
        // interests never contribute to the internship variant
        let s = student(None, None, Some("hiking"));
        let i = internship("hiking trails startup", "none", None);
        let score = student_internship_score(&s, &i, &ScoringWeights::default());
        assert_eq!(score, 0.0);
    }
}
