use actix_identity::Identity;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::dto::main::IndexQuery;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template, service_error_response};
use crate::services::main as main_service;

#[get("/")]
pub async fn show_index(
    params: web::Query<IndexQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match main_service::load_index_page(
        repo.get_ref(),
        &user,
        params.into_inner(),
    ) {
        Ok(data) => data,
        Err(err) => return service_error_response(err),
    };

    let mut context = base_context(&user, &server_config.auth_service_url, "index", &flash_messages);
    context.insert("readings", &data.readings);
    context.insert("categories", &data.categories);
    context.insert("category", &data.category);
    if let Some(search_query) = &data.search_query {
        context.insert("search_query", search_query);
    }

    render_template(&tera, "main/index.html", &context)
}

#[get("/na")]
pub async fn not_assigned(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&user, &server_config.auth_service_url, "index", &flash_messages);
    render_template(&tera, "main/not_assigned.html", &context)
}

#[post("/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect("/")
}
