use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::cards::CardsQuery;
use crate::forms::cards::AddCardForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template, service_error_response};
use crate::services::cards as cards_service;

#[get("/deck/{deck_id}/cards")]
pub async fn show_cards(
    deck_id: web::Path<i32>,
    params: web::Query<CardsQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match cards_service::load_cards_page(
        repo.get_ref(),
        &user,
        deck_id.into_inner(),
        params.into_inner(),
    ) {
        Ok(data) => data,
        Err(err) => return service_error_response(err),
    };

    let mut context =
        base_context(&user, &server_config.auth_service_url, "decks", &flash_messages);
    context.insert("deck", &data.deck);
    context.insert("cards", &data.cards);
    context.insert("arcana", &data.arcana);
    if let Some(search_query) = &data.search_query {
        context.insert("search_query", search_query);
    }

    render_template(&tera, "cards/index.html", &context)
}

#[post("/cards/add")]
pub async fn add_card(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddCardForm>,
) -> impl Responder {
    let deck_id = form.deck_id;
    match cards_service::add_card(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Карта добавлена.".to_string()).send();
            redirect(&format!("/deck/{deck_id}/cards"))
        }
        Err(err) => service_error_response(err),
    }
}

#[post("/card/{card_id}/delete")]
pub async fn delete_card(
    card_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match cards_service::delete_card(repo.get_ref(), &user, card_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Карта удалена.".to_string()).send();
            redirect("/decks")
        }
        Err(err) => service_error_response(err),
    }
}
