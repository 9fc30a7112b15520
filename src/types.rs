use std::error::Error;
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

/// One booking conversation per chat. The answers collected so far travel
/// inside the state itself, so parallel conversations can't overwrite each
/// other's selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BookingState {
    #[default]
    Idle,
    AwaitingDate,
    AwaitingTime {
        date: String,
    },
    AwaitingLocation {
        date: String,
        time: String,
    },
}

pub type BookingDialogue = Dialogue<BookingState, InMemStorage<BookingState>>;

pub type HandlerResult = Result<(), Box<dyn Error + Send + Sync>>;

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::ChatId;

    #[tokio::test]
    async fn interleaved_chats_keep_answers_separate() {
        let storage = InMemStorage::<BookingState>::new();
        let first = BookingDialogue::new(storage.clone(), ChatId(1));
        let second = BookingDialogue::new(storage.clone(), ChatId(2));

        first.update(BookingState::AwaitingDate).await.unwrap();
        second.update(BookingState::AwaitingDate).await.unwrap();
        first
            .update(BookingState::AwaitingTime {
                date: "10 March 2024".to_string(),
            })
            .await
            .unwrap();
        second
            .update(BookingState::AwaitingTime {
                date: "11 March 2024".to_string(),
            })
            .await
            .unwrap();
        first
            .update(BookingState::AwaitingLocation {
                date: "10 March 2024".to_string(),
                time: "09:00".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(
            first.get().await.unwrap(),
            Some(BookingState::AwaitingLocation {
                date: "10 March 2024".to_string(),
                time: "09:00".to_string(),
            })
        );
        assert_eq!(
            second.get().await.unwrap(),
            Some(BookingState::AwaitingTime {
                date: "11 March 2024".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn cancelling_discards_the_answers_and_persists_nothing() {
        use crate::entity::orders;
        use crate::migration::Migrator;
        use sea_orm::{ConnectOptions, Database, EntityTrait};
        use sea_orm_migration::MigratorTrait;

        let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
        options.max_connections(1);
        let connection = Database::connect(options).await.unwrap();
        Migrator::up(&connection, None).await.unwrap();

        let storage = InMemStorage::<BookingState>::new();
        let dialogue = BookingDialogue::new(storage, ChatId(1));
        dialogue
            .update(BookingState::AwaitingLocation {
                date: "10 March 2024".to_string(),
                time: "12:00".to_string(),
            })
            .await
            .unwrap();

        // The reset transition: back to entry-ready without touching the store.
        dialogue.update(BookingState::Idle).await.unwrap();

        assert_eq!(dialogue.get().await.unwrap(), Some(BookingState::Idle));
        let rows = orders::Entity::find().all(&connection).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn restarting_overwrites_the_previous_conversation() {
        let storage = InMemStorage::<BookingState>::new();
        let dialogue = BookingDialogue::new(storage, ChatId(1));

        dialogue
            .update(BookingState::AwaitingLocation {
                date: "10 March 2024".to_string(),
                time: "18:00".to_string(),
            })
            .await
            .unwrap();
        dialogue.update(BookingState::AwaitingDate).await.unwrap();

        assert_eq!(
            dialogue.get().await.unwrap(),
            Some(BookingState::AwaitingDate)
        );
    }
}
