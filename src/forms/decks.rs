use serde::Deserialize;
use validator::Validate;

use crate::domain::deck::NewDeck;

#[derive(Deserialize, Validate)]
/// Form data for adding a deck to the catalog.
pub struct AddDeckForm {
    /// Deck display name.
    #[validate(length(min = 1))]
    pub name: String,
    /// Optional description shown on the catalog page.
    pub description: Option<String>,
}

impl From<&AddDeckForm> for NewDeck {
    fn from(form: &AddDeckForm) -> Self {
        NewDeck::new(form.name.clone(), form.description.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_fails_validation() {
        let form = AddDeckForm {
            name: String::new(),
            description: None,
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn converts_into_new_deck() {
        let form = AddDeckForm {
            name: " Rider-Waite ".to_string(),
            description: Some("The classic".to_string()),
        };
        let deck: NewDeck = (&form).into();
        assert_eq!(deck.name, "Rider-Waite");
        assert_eq!(deck.description.as_deref(), Some("The classic"));
    }
}
