use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Best result and win count of one chat.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub chat_id: i64,
    /// Fewest moves any win in this chat took.
    pub best_moves: i64,
    pub games_won: i64,
    /// RFC 3339 time of the last win.
    pub updated_at: String,
}

impl HighScoreRecord {
    pub async fn find_by_chat_id(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, HighScoreRecord>(
            "SELECT chat_id, best_moves, games_won, updated_at FROM high_scores WHERE chat_id = ?"
        )
        .bind(chat_id)
        .fetch_optional(pool)
        .await
    }

    /// Stores `best_moves` for the chat and counts one more win.
    pub async fn upsert_win(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        best_moves: i64,
    ) -> Result<Self, sqlx::Error> {
        let updated_at = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO high_scores (chat_id, best_moves, games_won, updated_at)
            VALUES (?, ?, 1, ?)
            ON CONFLICT(chat_id) DO UPDATE SET
                best_moves = excluded.best_moves,
                games_won = high_scores.games_won + 1,
                updated_at = excluded.updated_at
            "#
        )
        .bind(chat_id)
        .bind(best_moves)
        .bind(&updated_at)
        .execute(pool)
        .await?;

        Self::find_by_chat_id(pool, chat_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Number of chats with a recorded win.
    pub async fn count(pool: &sqlx::SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM high_scores")
            .fetch_one(pool)
            .await
    }
}
