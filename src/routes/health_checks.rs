use actix_web::{get, HttpResponse, Responder};

#[tracing::instrument(name = "Health check.")]
#[get("")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().finish()
}
