use actix_web::http::{StatusCode, header};
use actix_web_flash_messages::Level;

use tarot_journal::routes::{alert_level_to_str, check_role, redirect};

#[test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[test]
fn test_redirect_is_see_other() {
    let response = redirect("/decks");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/decks");
}

#[test]
fn test_check_role() {
    let roles = vec!["tarot".to_string()];
    assert!(check_role("tarot", &roles));
    assert!(!check_role("tarot_admin", &roles));
    assert!(!check_role("tarot", &[]));
}
