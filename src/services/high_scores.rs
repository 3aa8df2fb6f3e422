use std::sync::Arc;
use tokio::sync::Mutex;

use crate::database::{connection::DatabaseManager, models::HighScoreRecord};
use crate::game::HighScore;
use crate::utils::logging::{log_database_error, log_database_operation};

/// Per-chat best scores backed by the `high_scores` table.
///
/// Reads go straight to the pool. Wins take a process-wide write lock around
/// the read-merge-write so two games finishing at once cannot lose an update.
#[derive(Clone)]
pub struct HighScoreService {
    db: DatabaseManager,
    write_lock: Arc<Mutex<()>>,
}

impl HighScoreService {
    pub fn new(db: DatabaseManager) -> Self {
        Self {
            db,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Stored best for the chat, unset if it never won.
    pub async fn load(&self, chat_id: i64) -> Result<HighScore, sqlx::Error> {
        log_database_operation("SELECT", "high_scores", Some(&format!("chat {chat_id}")));
        let record = HighScoreRecord::find_by_chat_id(&self.db.pool, chat_id).await?;
        Ok(record.map_or(HighScore::UNSET, |r| to_high_score(r.best_moves)))
    }

    /// Same as [`load`](Self::load), but a storage failure yields an unset score.
    pub async fn load_or_unset(&self, chat_id: i64) -> HighScore {
        match self.load(chat_id).await {
            Ok(score) => score,
            Err(e) => {
                log_database_error("SELECT", "high_scores", &e.to_string(), Some(&format!("chat {chat_id}")));
                HighScore::UNSET
            }
        }
    }

    /// Merges a finished game into the stored record and returns the new best.
    pub async fn record_win(&self, chat_id: i64, moves: u32) -> Result<HighScore, sqlx::Error> {
        let _guard = self.write_lock.lock().await;

        let previous = self.load(chat_id).await?;
        let merged = previous.merge(moves);

        log_database_operation(
            "UPSERT",
            "high_scores",
            Some(&format!("chat {chat_id}: {previous} -> {merged} ({moves} moves)")),
        );
        let record = HighScoreRecord::upsert_win(&self.db.pool, chat_id, i64::from(merged.moves())).await?;

        Ok(to_high_score(record.best_moves))
    }

    /// Number of chats with a stored score.
    pub async fn tracked_chats(&self) -> Result<i64, sqlx::Error> {
        HighScoreRecord::count(&self.db.pool).await
    }

    pub fn database(&self) -> &DatabaseManager {
        &self.db
    }
}

fn to_high_score(best_moves: i64) -> HighScore {
    u32::try_from(best_moves).map_or(HighScore::UNSET, HighScore::from_moves)
}
