//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::card::{Card, NewCard};
use crate::domain::deck::{Deck, NewDeck, UpdateDeck};
use crate::domain::reading::{NewReading, Reading, UpdateReading};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CardReader, CardWriter, DeckReader, DeckWriter, ReadingReader, ReadingWriter,
};

mock! {
    pub Repository {}

    impl DeckReader for Repository {
        fn get_deck_by_id(&self, id: i32) -> RepositoryResult<Option<Deck>>;
        fn list_decks(&self) -> RepositoryResult<Vec<Deck>>;
    }

    impl DeckWriter for Repository {
        fn create_decks(&self, new_decks: &[NewDeck]) -> RepositoryResult<usize>;
        fn update_deck(&self, deck_id: i32, updates: &UpdateDeck) -> RepositoryResult<Deck>;
        fn delete_deck(&self, deck_id: i32) -> RepositoryResult<()>;
    }

    impl CardReader for Repository {
        fn get_card_by_id(&self, id: i32) -> RepositoryResult<Option<Card>>;
        fn list_cards(&self, deck_id: i32) -> RepositoryResult<Vec<Card>>;
    }

    impl CardWriter for Repository {
        fn create_cards(&self, new_cards: &[NewCard]) -> RepositoryResult<usize>;
        fn delete_card(&self, card_id: i32) -> RepositoryResult<()>;
    }

    impl ReadingReader for Repository {
        fn get_reading_by_id(&self, id: i32) -> RepositoryResult<Option<Reading>>;
        fn list_readings(&self, user_email: &str) -> RepositoryResult<Vec<Reading>>;
    }

    impl ReadingWriter for Repository {
        fn create_reading(&self, new_reading: &NewReading) -> RepositoryResult<Reading>;
        fn update_reading(
            &self,
            reading_id: i32,
            updates: &UpdateReading,
        ) -> RepositoryResult<Reading>;
        fn delete_reading(&self, reading_id: i32) -> RepositoryResult<()>;
        fn set_reading_image(&self, reading_id: i32, image: &str) -> RepositoryResult<Reading>;
    }
}
