//! Route handlers and the helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::models::auth::AuthenticatedUser;
use crate::services::{ServiceError, ServiceResult};

pub mod api;
pub mod cards;
pub mod decks;
pub mod main;
pub mod readings;

/// Maps a flash message level onto the alert style used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// A `303 See Other` redirect to `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Renders `template` or logs and returns a 500 when rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template {template}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Whether `roles` contains `role`.
pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|r| r == role)
}

/// Fails with [`ServiceError::Unauthorized`] unless the user carries `role`.
pub fn ensure_role(user: &AuthenticatedUser, role: &str) -> ServiceResult<()> {
    if check_role(role, &user.roles) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// Context entries every page template expects.
pub fn base_context(
    user: &AuthenticatedUser,
    home_url: &str,
    current_page: &str,
    flash_messages: &IncomingFlashMessages,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", user);
    context.insert("current_page", current_page);
    context.insert("home_url", home_url);
    context
}

/// Uniform translation of service failures for HTML routes.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => redirect("/na"),
        ServiceError::NotFound => {
            FlashMessage::error("Запись не найдена.").send();
            redirect("/")
        }
        ServiceError::Form(message) | ServiceError::Upload(message) => {
            FlashMessage::error(message).send();
            redirect("/")
        }
        ServiceError::Repository(e) => {
            log::error!("Repository failure: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
