use actix_multipart::form::MultipartForm;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::readings::{AddReadingForm, SaveReadingForm, UploadImageForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template, service_error_response};
use crate::services::readings as readings_service;

#[get("/reading/{reading_id}")]
pub async fn show_reading(
    reading_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match readings_service::load_reading_page(
        repo.get_ref(),
        &user,
        reading_id.into_inner(),
    ) {
        Ok(data) => data,
        Err(err) => return service_error_response(err),
    };

    let mut context =
        base_context(&user, &server_config.auth_service_url, "index", &flash_messages);
    context.insert("reading", &data.reading);
    context.insert("decks_with_cards", &data.decks_with_cards);

    render_template(&tera, "readings/show.html", &context)
}

#[post("/reading/add")]
pub async fn add_reading(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddReadingForm>,
) -> impl Responder {
    match readings_service::add_reading(repo.get_ref(), &user, form) {
        Ok(reading) => {
            FlashMessage::success("Расклад записан.".to_string()).send();
            redirect(&format!("/reading/{}", reading.id))
        }
        Err(err) => service_error_response(err),
    }
}

#[post("/reading/save")]
pub async fn save_reading(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveReadingForm>,
) -> impl Responder {
    let reading_id = form.id;
    match readings_service::save_reading(repo.get_ref(), &user, form) {
        Ok(_) => {
            FlashMessage::success("Запись обновлена.".to_string()).send();
            redirect(&format!("/reading/{reading_id}"))
        }
        Err(err) => service_error_response(err),
    }
}

#[post("/reading/{reading_id}/delete")]
pub async fn delete_reading(
    reading_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match readings_service::delete_reading(
        repo.get_ref(),
        &user,
        reading_id.into_inner(),
        &server_config.upload_dir,
    ) {
        Ok(()) => {
            FlashMessage::success("Запись удалена.".to_string()).send();
            redirect("/")
        }
        Err(err) => service_error_response(err),
    }
}

#[post("/reading/{reading_id}/image")]
pub async fn attach_image(
    reading_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    MultipartForm(form): MultipartForm<UploadImageForm>,
) -> impl Responder {
    let reading_id = reading_id.into_inner();
    match readings_service::attach_image(
        repo.get_ref(),
        &user,
        reading_id,
        form.image,
        &server_config.upload_dir,
    ) {
        Ok(_) => {
            FlashMessage::success("Изображение сохранено.".to_string()).send();
            redirect(&format!("/reading/{reading_id}"))
        }
        Err(err) => service_error_response(err),
    }
}
