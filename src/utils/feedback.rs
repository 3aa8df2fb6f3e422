use teloxide::prelude::*;
use teloxide::types::{ParseMode, ReplyMarkup};
use crate::utils::markdown::escape_markdown;

/// Feedback types for different command outcomes
#[derive(Debug, Clone)]
pub enum FeedbackType {
    Warning,
    Error,
    Info,
}

impl FeedbackType {
    fn emoji(&self) -> &'static str {
        match self {
            FeedbackType::Warning => "⚠️",
            FeedbackType::Error => "❌",
            FeedbackType::Info => "ℹ️",
        }
    }
}

/// Formats a feedback line as MarkdownV2 text.
pub fn format_feedback(feedback_type: &FeedbackType, message: &str) -> String {
    format!("{} {}", feedback_type.emoji(), escape_markdown(message))
}

/// Centralized feedback system for bot replies that are not part of the game board
pub struct CommandFeedback {
    bot: Bot,
    chat_id: ChatId,
}

impl CommandFeedback {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    /// Send immediate feedback message
    pub async fn send(&self, feedback_type: FeedbackType, message: &str) -> ResponseResult<Message> {
        self.bot
            .send_message(self.chat_id, format_feedback(&feedback_type, message))
            .parse_mode(ParseMode::MarkdownV2)
            .await
    }

    /// Send feedback and swap the reply keyboard in the same message
    pub async fn send_with_markup(
        &self,
        feedback_type: FeedbackType,
        message: &str,
        markup: impl Into<ReplyMarkup>,
    ) -> ResponseResult<Message> {
        self.bot
            .send_message(self.chat_id, format_feedback(&feedback_type, message))
            .parse_mode(ParseMode::MarkdownV2)
            .reply_markup(markup)
            .await
    }

    /// Send warning feedback
    pub async fn warning(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Warning, message).await
    }

    /// Send info feedback
    pub async fn info(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Info, message).await
    }
}
