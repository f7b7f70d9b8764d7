use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::decks::DecksQuery;
use crate::forms::decks::AddDeckForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template, service_error_response};
use crate::services::decks as decks_service;

#[get("/decks")]
pub async fn show_decks(
    params: web::Query<DecksQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data =
        match decks_service::load_decks_page(repo.get_ref(), &user, params.into_inner()) {
            Ok(data) => data,
            Err(err) => return service_error_response(err),
        };

    let mut context =
        base_context(&user, &server_config.auth_service_url, "decks", &flash_messages);
    context.insert("decks", &data.decks);
    if let Some(search_query) = &data.search_query {
        context.insert("search_query", search_query);
    }

    render_template(&tera, "decks/index.html", &context)
}

#[post("/decks/add")]
pub async fn add_deck(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddDeckForm>,
) -> impl Responder {
    match decks_service::add_deck(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Колода добавлена.".to_string()).send();
            redirect("/decks")
        }
        Err(err) => service_error_response(err),
    }
}

#[post("/deck/{deck_id}/delete")]
pub async fn delete_deck(
    deck_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match decks_service::delete_deck(repo.get_ref(), &user, deck_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Колода удалена.".to_string()).send();
            redirect("/decks")
        }
        Err(err) => service_error_response(err),
    }
}
