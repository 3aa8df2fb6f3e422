use teloxide::prelude::*;
use teloxide::types::{DiceEmoji, KeyboardButton, KeyboardMarkup, KeyboardRemove};

use crate::bot::board::{board_keyboard, board_text, PLAYING_HEADLINE};
use crate::bot::state::{GameDialogue, HandlerResult, MatrixSession, State};
use crate::game::{random_theme, MatchingGame};
use crate::services::high_scores::HighScoreService;
use crate::utils::feedback::{CommandFeedback, FeedbackType};
use crate::utils::logging::{log_game_event, log_validation_error};

/// Keyboard label that starts a matching game.
pub const MATRIX_GAME: &str = "Escape the matrix";
/// Reply to text that is not on the games keyboard.
pub const INVALID_CHOICE: &str = "Please choose a game from the keyboard provided.";

/// Something picked from the games keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameChoice {
    /// "Escape the matrix".
    Matrix,
    /// One of Telegram's animated dice.
    Dice(DiceEmoji),
}

impl GameChoice {
    /// Maps a keyboard label to the game it starts.
    pub fn parse(text: &str) -> Option<Self> {
        let choice = match text.trim() {
            MATRIX_GAME => GameChoice::Matrix,
            "🎯" => GameChoice::Dice(DiceEmoji::Darts),
            "🎰" => GameChoice::Dice(DiceEmoji::SlotMachine),
            "🎲" => GameChoice::Dice(DiceEmoji::Dice),
            "🏀" => GameChoice::Dice(DiceEmoji::Basketball),
            "⚽️" | "⚽" => GameChoice::Dice(DiceEmoji::Football),
            "🎳" => GameChoice::Dice(DiceEmoji::Bowling),
            _ => return None,
        };
        Some(choice)
    }
}

/// Reply keyboard shown by /games.
pub fn games_keyboard() -> KeyboardMarkup {
    let rows = [
        vec!["🎯", "🎰", "🎲"],
        vec!["🏀", "⚽️", "🎳"],
        vec![MATRIX_GAME],
    ];

    KeyboardMarkup::new(
        rows.into_iter()
            .map(|row| row.into_iter().map(KeyboardButton::new).collect::<Vec<_>>()),
    )
    .input_field_placeholder("Games".to_string())
}

/// Shows the games keyboard and waits for a pick.
pub async fn handle_games(bot: Bot, msg: Message, dialogue: GameDialogue) -> HandlerResult {
    bot.send_message(
        msg.chat.id,
        "Choose a game!\n\nPress /cancel to terminate the operation.",
    )
    .reply_markup(games_keyboard())
    .await?;

    dialogue.update(State::ChoosingGame).await?;
    Ok(())
}

/// Text sent while the games keyboard is up.
pub async fn handle_game_choice(
    bot: Bot,
    msg: Message,
    dialogue: GameDialogue,
    high_scores: HighScoreService,
) -> HandlerResult {
    let text = msg.text().unwrap_or_default();

    match GameChoice::parse(text) {
        Some(GameChoice::Matrix) => start_matrix(bot, msg, dialogue, &high_scores).await,
        Some(GameChoice::Dice(emoji)) => {
            bot.send_dice(msg.chat.id).emoji(emoji).await?;
            Ok(())
        }
        None => {
            log_validation_error("game choice", text, "not on the games keyboard", msg.chat.id.0);
            bot.send_message(msg.chat.id, INVALID_CHOICE).await?;
            Ok(())
        }
    }
}

/// Deals a fresh board from a random theme and posts it.
async fn start_matrix(
    bot: Bot,
    msg: Message,
    dialogue: GameDialogue,
    high_scores: &HighScoreService,
) -> HandlerResult {
    let chat_id = msg.chat.id;
    let high_score = high_scores.load_or_unset(chat_id.0).await;

    let theme = random_theme(&mut rand::thread_rng());
    let game = match MatchingGame::new(&theme) {
        Ok(game) => game,
        Err(e) => {
            tracing::error!("Failed to deal a board for chat {}: {}", chat_id.0, e);
            dialogue.exit().await?;
            CommandFeedback::new(bot, chat_id)
                .send_with_markup(FeedbackType::Error, "Could not deal a new board.", KeyboardRemove::new())
                .await?;
            return Ok(());
        }
    };

    bot.send_message(chat_id, "😳")
        .reply_markup(KeyboardRemove::new())
        .await?;
    let board = bot
        .send_message(chat_id, board_text(PLAYING_HEADLINE, high_score, game.moves()))
        .reply_markup(board_keyboard(&game.render()))
        .await?;

    log_game_event("started", chat_id.0, 0, Some(&format!("highscore {high_score}")));

    dialogue
        .update(State::Matrix(MatrixSession {
            game,
            high_score,
            board_message: board.id,
        }))
        .await?;
    Ok(())
}
