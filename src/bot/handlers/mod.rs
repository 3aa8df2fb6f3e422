/// Inline keyboard taps.
pub mod callback;
/// Text that is not a known command.
pub mod general_message;
/// Command dispatch.
pub mod message;

use std::sync::Arc;
use teloxide::{
    dispatching::{
        dialogue::{self, InMemStorage},
        UpdateHandler,
    },
    dptree::di::DependencyMap,
    prelude::*,
};

use crate::bot::commands::{games::handle_game_choice, Command};
use crate::bot::persona::Persona;
use crate::bot::state::State;
use crate::services::high_scores::HighScoreService;

/// Shared state for the dispatcher.
pub struct BotHandler {
    pub high_scores: HighScoreService,
    pub persona: Arc<Persona>,
}

impl BotHandler {
    pub fn new(high_scores: HighScoreService, persona: Persona) -> Self {
        Self {
            high_scores,
            persona: Arc::new(persona),
        }
    }

    /// Everything the endpoints ask for besides what teloxide injects itself.
    /// The dialogue storage is the per-chat session store.
    pub fn dependencies(&self) -> DependencyMap {
        dptree::deps![
            InMemStorage::<State>::new(),
            self.high_scores.clone(),
            self.persona.clone()
        ]
    }

    /// Update routing: commands first, then the dialogue state decides.
    pub fn schema() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        use dptree::case;

        let message_handler = Update::filter_message()
            .branch(
                dptree::entry()
                    .filter_command::<Command>()
                    .endpoint(message::command_handler),
            )
            .branch(
                dptree::filter(general_message::is_command_like)
                    .endpoint(general_message::handle_unknown_command),
            )
            .branch(case![State::ChoosingGame].endpoint(handle_game_choice))
            .branch(dptree::endpoint(general_message::handle_general_message));

        let callback_handler = Update::filter_callback_query()
            .branch(case![State::Matrix(session)].endpoint(callback::matrix_callback))
            .branch(dptree::endpoint(callback::stale_callback));

        dialogue::enter::<Update, InMemStorage<State>, State, _>()
            .branch(message_handler)
            .branch(callback_handler)
    }
}
