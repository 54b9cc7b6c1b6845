use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::core::Reconciler;
use crate::models::{ErrorResponse, HealthResponse, RunSweepResponse};
use crate::services::{PostgresClient, PostgresError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub reconciler: Reconciler,
    /// Single-flight guard for the sweep: concurrent triggers would race on
    /// the same (student, mentor) rows, so only one run may be in flight.
    pub sweep_lock: Arc<Mutex<()>>,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matching/run", web::post().to(run_matching_sweep))
        .route("/mentors/{id}/matches", web::get().to(get_mentor_matches))
        .route("/students/{id}/matches", web::get().to(get_student_matches))
        .route(
            "/students/{id}/internships",
            web::get().to(get_matched_internships),
        );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Trigger the full student x mentor matching sweep
///
/// POST /api/v1/matching/run
///
/// The sweep runs on a background task; the response only acknowledges the
/// trigger. A second trigger while one run is in flight is rejected with 409.
async fn run_matching_sweep(state: web::Data<AppState>) -> impl Responder {
    let guard = match state.sweep_lock.clone().try_lock_owned() {
        Ok(guard) => guard,
        Err(_) => {
            tracing::info!("Rejected sweep trigger: a sweep is already in flight");
            return HttpResponse::Conflict().json(ErrorResponse {
                error: "Sweep already running".to_string(),
                message: "A matching sweep is already in progress".to_string(),
                status_code: 409,
            });
        }
    };

    let run_id = uuid::Uuid::new_v4().to_string();
    tracing::info!("Starting matching sweep {}", run_id);

    let postgres = state.postgres.clone();
    let reconciler = state.reconciler.clone();
    let task_run_id = run_id.clone();

    tokio::spawn(async move {
        // Hold the guard for the lifetime of the run.
        let _guard = guard;

        match postgres.run_matching_sweep(&reconciler).await {
            Ok(stats) => {
                tracing::info!(
                    "Sweep {} finished: {} pairs scored, {} created, {} refreshed, {} left, {} skipped",
                    task_run_id,
                    stats.pairs_scored,
                    stats.created,
                    stats.refreshed,
                    stats.left_untouched,
                    stats.skipped
                );
            }
            Err(e) => {
                tracing::error!("Sweep {} failed, no changes applied: {}", task_run_id, e);
            }
        }
    });

    HttpResponse::Accepted().json(RunSweepResponse {
        success: true,
        message: "Matching sweep triggered successfully. Matches will be updated shortly."
            .to_string(),
        run_id,
    })
}

/// List persisted matches for a mentor
///
/// GET /api/v1/mentors/{id}/matches
async fn get_mentor_matches(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let mentor_id = path.into_inner();

    match state.postgres.matches_for_mentor(mentor_id).await {
        Ok(matches) => {
            tracing::debug!("Returning {} matches for mentor {}", matches.len(), mentor_id);
            HttpResponse::Ok().json(matches)
        }
        Err(e) => store_error_response("fetch mentor matches", e),
    }
}

/// List persisted matches for a student
///
/// GET /api/v1/students/{id}/matches
async fn get_student_matches(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let student_id = path.into_inner();

    match state.postgres.matches_for_student(student_id).await {
        Ok(matches) => {
            tracing::debug!(
                "Returning {} matches for student {}",
                matches.len(),
                student_id
            );
            HttpResponse::Ok().json(matches)
        }
        Err(e) => store_error_response("fetch student matches", e),
    }
}

/// List ACTIVE internships matching a student, threshold-filtered
///
/// GET /api/v1/students/{id}/internships
///
/// Read path only: scores are computed on the fly and nothing is persisted.
async fn get_matched_internships(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let student_id = path.into_inner();

    let student = match state.postgres.get_student(student_id).await {
        Ok(student) => student,
        Err(e) => return store_error_response("fetch student", e),
    };

    let internships = match state.postgres.list_active_internships().await {
        Ok(internships) => internships,
        Err(e) => return store_error_response("fetch active internships", e),
    };

    let matched = state.reconciler.matched_internships(&student, internships);

    tracing::debug!(
        "Returning {} matched internships for student {}",
        matched.len(),
        student_id
    );

    HttpResponse::Ok().json(matched)
}

fn store_error_response(context: &str, err: PostgresError) -> HttpResponse {
    match err {
        PostgresError::NotFound { .. } => {
            tracing::info!("Failed to {}: {}", context, err);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Not found".to_string(),
                message: err.to_string(),
                status_code: 404,
            })
        }
        _ => {
            tracing::error!("Failed to {}: {}", context, err);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: format!("Failed to {}", context),
                message: err.to_string(),
                status_code: 500,
            })
        }
    }
}
