use teloxide::prelude::*;
use teloxide::types::InlineKeyboardMarkup;
use teloxide::{ApiError, RequestError};

use crate::bot::board::{board_keyboard, board_text, flashed_cells, PLAYING_HEADLINE, WON_HEADLINE};
use crate::bot::state::{GameDialogue, HandlerResult, MatrixSession, State};
use crate::game::{HighScore, WinSignal};
use crate::services::high_scores::HighScoreService;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{log_game_event, log_validation_error};
use crate::utils::validation::{parse_cell_callback, validate_telegram_chat_id};

/// Toast for buttons of a board that is no longer running.
pub const STALE_BOARD: &str = "This game is no longer active. Use /games to start a new one.";

/// A tap on the board of the chat's running game.
pub async fn matrix_callback(
    bot: Bot,
    q: CallbackQuery,
    dialogue: GameDialogue,
    session: MatrixSession,
    high_scores: HighScoreService,
) -> HandlerResult {
    let Some(message) = q.message.as_ref() else {
        bot.answer_callback_query(q.id).text(STALE_BOARD).await?;
        return Ok(());
    };

    if message.id != session.board_message {
        bot.answer_callback_query(q.id).text(STALE_BOARD).await?;
        return Ok(());
    }

    let chat_id = message.chat.id;
    let data = q.data.as_deref().unwrap_or_default();
    let coord = match parse_cell_callback(data) {
        Ok(coord) => coord,
        Err(e) => {
            log_validation_error("board tap", data, &e.to_string(), chat_id.0);
            bot.answer_callback_query(q.id).text("❌ That's not a cell on this board").await?;
            return Ok(());
        }
    };

    let MatrixSession { mut game, high_score, board_message } = session;
    let turn = game.select(coord);

    if !turn.changed() {
        // Matched cells are inert: no move, no redraw
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    }

    log_game_event(
        "tap",
        chat_id.0,
        game.moves(),
        Some(&format!("({}, {}) -> {:?}", coord.row(), coord.col(), turn.resolution)),
    );

    if let Some(WinSignal { moves }) = turn.win {
        let best = record_win(&bot, &high_scores, chat_id, high_score, moves).await?;
        dialogue.exit().await?;

        let text = board_text(WON_HEADLINE, best, moves);
        edit_board(&bot, chat_id, board_message, text, board_keyboard(&game.render())).await?;
        bot.answer_callback_query(q.id).text("🎉").await?;
        return Ok(());
    }

    let peek = flashed_cells(turn.resolution);
    let text = board_text(PLAYING_HEADLINE, high_score, game.moves());
    let keyboard = board_keyboard(&game.render_revealing(&peek));

    dialogue
        .update(State::Matrix(MatrixSession { game, high_score, board_message }))
        .await?;

    edit_board(&bot, chat_id, board_message, text, keyboard).await?;
    bot.answer_callback_query(q.id).await?;
    Ok(())
}

/// Buttons of a board that was finished, cancelled, or replaced.
pub async fn stale_callback(bot: Bot, q: CallbackQuery) -> HandlerResult {
    bot.answer_callback_query(q.id).text(STALE_BOARD).await?;
    Ok(())
}

/// Persists the win. If storage fails the player still sees the merged score.
async fn record_win(
    bot: &Bot,
    high_scores: &HighScoreService,
    chat_id: ChatId,
    high_score: HighScore,
    moves: u32,
) -> Result<HighScore, RequestError> {
    log_game_event("won", chat_id.0, moves, None);

    match persist_win(high_scores, chat_id.0, high_score, moves).await {
        Ok(best) => Ok(best),
        Err(merged) => {
            CommandFeedback::new(bot.clone(), chat_id)
                .warning("Your score could not be saved this time.")
                .await?;
            Ok(merged)
        }
    }
}

/// Stores the win and returns the chat's new best. `Err` carries the merged
/// score when nothing was written.
async fn persist_win(
    high_scores: &HighScoreService,
    chat_id: i64,
    high_score: HighScore,
    moves: u32,
) -> Result<HighScore, HighScore> {
    if let Err(e) = validate_telegram_chat_id(chat_id) {
        log_validation_error("highscore chat", &chat_id.to_string(), &e.to_string(), chat_id);
        return Err(high_score.merge(moves));
    }

    high_scores.record_win(chat_id, moves).await.map_err(|e| {
        tracing::error!("Failed to save highscore for chat {}: {}", chat_id, e);
        high_score.merge(moves)
    })
}

async fn edit_board(
    bot: &Bot,
    chat_id: ChatId,
    board_message: teloxide::types::MessageId,
    text: String,
    keyboard: InlineKeyboardMarkup,
) -> HandlerResult {
    match bot
        .edit_message_text(chat_id, board_message, text)
        .reply_markup(keyboard)
        .await
    {
        Ok(_) | Err(RequestError::Api(ApiError::MessageNotModified)) => Ok(()),
        Err(e) => Err(e.into()),
    }
}
