use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::dto::api::ReadingsQuery;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::api as api_service;

#[get("/v1/readings")]
pub async fn api_v1_readings(
    params: web::Query<ReadingsQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::list_readings(repo.get_ref(), &user, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(err) => {
            error!("Failed to list readings: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
