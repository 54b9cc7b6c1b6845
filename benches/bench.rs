// Criterion benchmarks for the matching core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use intern_match::core::Reconciler;
use intern_match::models::{Mentor, Student};

const SKILL_POOL: &[&str] = &[
    "python", "sql", "java", "rust", "go", "javascript", "docker", "kubernetes", "excel", "r",
];

const INTEREST_POOL: &[&str] = &[
    "machine learning", "fintech", "robotics", "open source", "climate", "security",
];

const MAJOR_POOL: &[&str] = &[
    "Computer Science", "Data Science", "Mechanical Engineering", "Finance",
];

fn pick(pool: &[&str], seed: usize, count: usize) -> String {
    (0..count)
        .map(|i| pool[(seed + i * 3) % pool.len()])
        .collect::<Vec<_>>()
        .join(", ")
}

fn create_student(id: usize) -> Student {
    Student {
        id: id as i64,
        first_name: format!("Student{}", id),
        last_name: "Test".to_string(),
        major: Some(MAJOR_POOL[id % MAJOR_POOL.len()].to_string()),
        skills: Some(pick(SKILL_POOL, id, 4)),
        interests: Some(pick(INTEREST_POOL, id, 2)),
        profile_picture_url: None,
    }
}

fn create_mentor(id: usize) -> Mentor {
    Mentor {
        id: id as i64,
        first_name: format!("Mentor{}", id),
        last_name: "Test".to_string(),
        job_title: Some("Engineer".to_string()),
        company: Some("Acme".to_string()),
        expertise_areas: Some(MAJOR_POOL[id % MAJOR_POOL.len()].to_lowercase()),
        skills: Some(pick(SKILL_POOL, id + 1, 5)),
        interests: Some(pick(INTEREST_POOL, id + 1, 3)),
        profile_picture_url: None,
    }
}

fn bench_pair_scoring(c: &mut Criterion) {
    let reconciler = Reconciler::with_default_weights();
    let student = create_student(1);
    let mentor = create_mentor(2);

    c.bench_function("score_single_pair", |b| {
        b.iter(|| reconciler.score_pair(black_box(&student), black_box(&mentor)))
    });
}

fn bench_all_pairs_sweep(c: &mut Criterion) {
    let reconciler = Reconciler::with_default_weights();
    let mut group = c.benchmark_group("all_pairs_scoring");

    for cohort in [50usize, 200, 500] {
        let students: Vec<Student> = (0..cohort).map(create_student).collect();
        let mentors: Vec<Mentor> = (0..cohort / 5).map(create_mentor).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(cohort),
            &(students, mentors),
            |b, (students, mentors)| {
                b.iter(|| {
                    let mut suggestions = 0usize;
                    for student in students {
                        for mentor in mentors {
                            let score = reconciler.score_pair(student, mentor);
                            if score >= reconciler.min_suggestion_score() {
                                suggestions += 1;
                            }
                        }
                    }
                    black_box(suggestions)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pair_scoring, bench_all_pairs_sweep);
criterion_main!(benches);
