use steve_bot::bot::handlers::BotHandler;
use steve_bot::bot::persona::Persona;
use steve_bot::bot::state::State;
use steve_bot::database::connection::DatabaseManager;
use steve_bot::services::high_scores::HighScoreService;
use teloxide::dispatching::dialogue::{InMemStorage, Storage};
use teloxide::types::ChatId;
use tempfile::TempDir;

async fn test_handler() -> (BotHandler, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let db = DatabaseManager::new(&db_url)
        .await
        .expect("Failed to create test database");
    db.run_migrations().await.expect("Failed to run migrations");

    let persona = Persona::new("Steve", vec!["Rust has no null.".to_string()], 8);
    (BotHandler::new(HighScoreService::new(db), persona), temp_dir)
}

#[tokio::test]
async fn test_dialogue_storage_setup() {
    let (handler, _temp_dir) = test_handler().await;

    // Building the schema and its dependencies must not panic
    let _schema = BotHandler::schema();
    let _deps = handler.dependencies();
}

#[tokio::test]
async fn test_chats_start_idle() {
    let storage = InMemStorage::<State>::new();
    let state = storage.clone().get_dialogue(ChatId(1)).await.unwrap();
    assert!(state.is_none());
    assert!(State::default().is_idle());
}

#[tokio::test]
async fn test_storage_is_per_chat() {
    let storage = InMemStorage::<State>::new();

    storage
        .clone()
        .update_dialogue(ChatId(1), State::ChoosingGame)
        .await
        .unwrap();

    let first = storage.clone().get_dialogue(ChatId(1)).await.unwrap();
    let second = storage.clone().get_dialogue(ChatId(2)).await.unwrap();
    assert!(matches!(first, Some(State::ChoosingGame)));
    assert!(second.is_none());

    storage.clone().remove_dialogue(ChatId(1)).await.unwrap();
    assert!(storage.get_dialogue(ChatId(1)).await.unwrap().is_none());
}

#[test]
fn test_update_replaces_previous_state() {
    tokio_test::block_on(async {
        let storage = InMemStorage::<State>::new();

        storage
            .clone()
            .update_dialogue(ChatId(7), State::ChoosingGame)
            .await
            .unwrap();
        storage
            .clone()
            .update_dialogue(ChatId(7), State::Idle)
            .await
            .unwrap();

        let state = storage.get_dialogue(ChatId(7)).await.unwrap();
        assert!(state.is_some_and(|s| s.is_idle()));
    });
}
