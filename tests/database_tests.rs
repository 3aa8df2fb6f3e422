use anyhow::Result;
use steve_bot::database::{connection::DatabaseManager, models::*};
use steve_bot::game::HighScore;
use steve_bot::services::high_scores::HighScoreService;
use tempfile::{tempdir, TempDir};

async fn setup_test_db() -> Result<(DatabaseManager, TempDir)> {
    let temp_dir = tempdir()?;
    let db_path = temp_dir.path().join("test.db");
    let database_url = format!("sqlite:{}", db_path.display());

    let db_manager = DatabaseManager::new(&database_url).await?;
    db_manager.run_migrations().await?;

    Ok((db_manager, temp_dir))
}

#[tokio::test]
async fn test_database_created_in_missing_directory() -> Result<()> {
    let temp_dir = tempdir()?;
    let db_path = temp_dir.path().join("nested").join("data").join("steve.db");
    let database_url = format!("sqlite:{}", db_path.display());

    let db = DatabaseManager::new(&database_url).await?;
    db.run_migrations().await?;

    assert!(db_path.exists());
    assert_eq!(HighScoreRecord::count(&db.pool).await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_migrations_are_idempotent() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    db.run_migrations().await?;
    db.run_migrations().await?;
    Ok(())
}

#[tokio::test]
async fn test_record_not_found() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    let found = HighScoreRecord::find_by_chat_id(&db.pool, 99999).await?;
    assert!(found.is_none());

    Ok(())
}

#[tokio::test]
async fn test_upsert_win_creates_and_updates() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let chat_id = -1001234567890i64;

    let record = HighScoreRecord::upsert_win(&db.pool, chat_id, 15).await?;
    assert_eq!(record.chat_id, chat_id);
    assert_eq!(record.best_moves, 15);
    assert_eq!(record.games_won, 1);
    assert!(!record.updated_at.is_empty());

    let record = HighScoreRecord::upsert_win(&db.pool, chat_id, 12).await?;
    assert_eq!(record.best_moves, 12);
    assert_eq!(record.games_won, 2);

    assert_eq!(HighScoreRecord::count(&db.pool).await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_service_load_defaults_to_unset() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let service = HighScoreService::new(db);

    assert_eq!(service.load(42).await?, HighScore::UNSET);
    assert_eq!(service.load_or_unset(42).await, HighScore::UNSET);
    Ok(())
}

#[tokio::test]
async fn test_service_keeps_the_lowest_score() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let service = HighScoreService::new(db);
    let chat_id = 12345i64;

    assert_eq!(service.record_win(chat_id, 14).await?, HighScore::from_moves(14));
    assert_eq!(service.record_win(chat_id, 20).await?, HighScore::from_moves(14));
    assert_eq!(service.record_win(chat_id, 9).await?, HighScore::from_moves(9));
    assert_eq!(service.record_win(chat_id, 9).await?, HighScore::from_moves(9));

    assert_eq!(service.load(chat_id).await?, HighScore::from_moves(9));

    let record = HighScoreRecord::find_by_chat_id(&service.database().pool, chat_id)
        .await?
        .unwrap();
    assert_eq!(record.games_won, 4);
    Ok(())
}

#[tokio::test]
async fn test_scores_are_per_chat() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let service = HighScoreService::new(db);

    service.record_win(1, 10).await?;
    service.record_win(2, 30).await?;

    assert_eq!(service.load(1).await?, HighScore::from_moves(10));
    assert_eq!(service.load(2).await?, HighScore::from_moves(30));
    assert_eq!(service.load(3).await?, HighScore::UNSET);
    assert_eq!(service.tracked_chats().await?, 2);
    Ok(())
}

#[tokio::test]
async fn test_scores_survive_reopening() -> Result<()> {
    let temp_dir = tempdir()?;
    let database_url = format!("sqlite:{}", temp_dir.path().join("steve.db").display());

    {
        let db = DatabaseManager::new(&database_url).await?;
        db.run_migrations().await?;
        HighScoreService::new(db).record_win(7, 13).await?;
    }

    let db = DatabaseManager::new(&database_url).await?;
    db.run_migrations().await?;
    assert_eq!(HighScoreService::new(db).load(7).await?, HighScore::from_moves(13));
    Ok(())
}

#[tokio::test]
async fn test_concurrent_wins_are_not_lost() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let service = HighScoreService::new(db);
    let chat_id = 555i64;

    let mut handles = Vec::new();
    for moves in [17u32, 12, 25, 8, 30, 11, 9, 40] {
        let service = service.clone();
        handles.push(tokio::spawn(async move { service.record_win(chat_id, moves).await }));
    }
    for handle in handles {
        handle.await??;
    }

    assert_eq!(service.load(chat_id).await?, HighScore::from_moves(8));
    let record = HighScoreRecord::find_by_chat_id(&service.database().pool, chat_id)
        .await?
        .unwrap();
    assert_eq!(record.games_won, 8);
    Ok(())
}

#[tokio::test]
async fn test_large_private_chat_id_keeps_its_score() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let service = HighScoreService::new(db);
    let chat_id = 6_123_456_789i64;

    assert!(steve_bot::utils::validation::validate_telegram_chat_id(chat_id).is_ok());
    assert_eq!(service.record_win(chat_id, 13).await?, HighScore::from_moves(13));
    assert_eq!(service.load(chat_id).await?, HighScore::from_moves(13));

    let record = HighScoreRecord::find_by_chat_id(&service.database().pool, chat_id)
        .await?
        .unwrap();
    assert_eq!(record.chat_id, chat_id);
    Ok(())
}
