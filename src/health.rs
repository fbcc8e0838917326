use std::sync::Arc;

use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::modules::content::application::ports::outgoing::snapshot_store::SnapshotStore;
use crate::shared::config::AppConfig;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    snapshot_store: &'static str,
    uploads_dir: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Probes the snapshot store with a read and checks the uploads dir.
#[get("/ready")]
pub async fn readiness(
    store: web::Data<Arc<dyn SnapshotStore>>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    let store_status = match store.load_raw("readiness_probe") {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    };

    let uploads_status = if config.uploads_dir.is_dir() {
        "ok"
    } else {
        "unhealthy"
    };

    if store_status == "ok" && uploads_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            snapshot_store: store_status,
            uploads_dir: uploads_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            snapshot_store: store_status,
            uploads_dir: uploads_status,
        })
    }
}
