/// Telegram update handlers: menu, practice pages and fallbacks.
use crate::catalog::{
    self, Practice, BACK_LABEL, EXPIRED_BUTTON_TEXT, MENU_CALLBACK, MENU_LAYOUT,
    UNKNOWN_COMMAND_TEXT, WELCOME_TEXT,
};
use crate::visitors::VisitorTracker;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{
    CallbackQuery, InlineKeyboardButton, InlineKeyboardMarkup, ParseMode, UserId,
};
use tracing::{debug, warn};

/// Shared bot state injected into every handler.
#[derive(Clone)]
pub struct BotState {
    pub visitors: Arc<VisitorTracker>,
}

impl BotState {
    pub fn new(visitors: Arc<VisitorTracker>) -> Self {
        Self { visitors }
    }
}

/// What the bot shows in response to an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Menu,
    Practice(&'static Practice),
    UnknownCommand,
    ExpiredButton,
}

/// A fully built outgoing message.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: &'static str,
    pub parse_mode: Option<ParseMode>,
    pub keyboard: Option<InlineKeyboardMarkup>,
}

impl View {
    // Practice bodies are written in legacy Markdown (`**`, `_`), not MarkdownV2.
    #[allow(deprecated)]
    pub fn render(self) -> Reply {
        match self {
            View::Menu => Reply {
                text: WELCOME_TEXT,
                parse_mode: None,
                keyboard: Some(menu_keyboard()),
            },
            View::Practice(practice) => Reply {
                text: practice.body,
                parse_mode: Some(ParseMode::Markdown),
                keyboard: Some(back_keyboard()),
            },
            View::UnknownCommand => Reply {
                text: UNKNOWN_COMMAND_TEXT,
                parse_mode: None,
                keyboard: None,
            },
            View::ExpiredButton => Reply {
                text: EXPIRED_BUTTON_TEXT,
                parse_mode: None,
                keyboard: Some(menu_keyboard()),
            },
        }
    }
}

/// Practice buttons arranged by the menu layout.
pub fn menu_keyboard() -> InlineKeyboardMarkup {
    let rows = MENU_LAYOUT.iter().map(|row| {
        row.iter()
            .filter_map(|id| catalog::find(id))
            .map(|p| InlineKeyboardButton::callback(p.button_label, p.callback_data()))
            .collect::<Vec<_>>()
    });
    InlineKeyboardMarkup::new(rows)
}

/// Single "back to menu" button shown under a practice.
pub fn back_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        BACK_LABEL,
        MENU_CALLBACK,
    )]])
}

/// Maps callback data to the view it opens. Never records a visit.
pub fn route_callback(data: &str) -> View {
    if data == MENU_CALLBACK {
        return View::Menu;
    }

    match catalog::find_by_callback(data) {
        Some(practice) => View::Practice(practice),
        None => View::ExpiredButton,
    }
}

/// The `/start` transition: counts the sender as a visitor and opens the menu.
pub async fn open_menu(visitors: &VisitorTracker, user: Option<UserId>) -> View {
    if let Some(user_id) = user {
        visitors.record_visit(user_id).await;
    }
    View::Menu
}

/// Sends a reply. Failures are logged and dropped, there is no retry.
pub async fn deliver(bot: &Bot, chat_id: ChatId, reply: Reply) {
    let mut request = bot.send_message(chat_id, reply.text);
    if let Some(mode) = reply.parse_mode {
        request = request.parse_mode(mode);
    }
    if let Some(keyboard) = reply.keyboard {
        request = request.reply_markup(keyboard);
    }

    if let Err(e) = request.await {
        warn!(chat_id = chat_id.0, error = %e, "Failed to send reply");
    }
}

/// Handler for the /start command.
pub async fn handle_start(bot: Bot, msg: Message, state: BotState) -> ResponseResult<()> {
    let user = msg.from().map(|u| u.id);
    let view = open_menu(&state.visitors, user).await;
    deliver(&bot, msg.chat.id, view.render()).await;
    Ok(())
}

/// Handler for any message that is not a recognized command.
pub async fn handle_unknown(bot: Bot, msg: Message) -> ResponseResult<()> {
    debug!(chat_id = msg.chat.id.0, text = ?msg.text(), "Unrecognized message");
    deliver(&bot, msg.chat.id, View::UnknownCommand.render()).await;
    Ok(())
}

/// Handler for inline button callbacks.
pub async fn handle_callback(bot: Bot, q: CallbackQuery) -> ResponseResult<()> {
    if let Err(e) = bot.answer_callback_query(&q.id).await {
        warn!(user_id = q.from.id.0, error = %e, "Failed to answer callback query");
    }

    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };

    let view = route_callback(data);
    if view == View::ExpiredButton {
        warn!(user_id = q.from.id.0, data, "Unknown callback data");
    }

    let chat_id = q
        .message
        .as_ref()
        .map(|m| m.chat.id)
        .unwrap_or_else(|| q.from.id.into());

    deliver(&bot, chat_id, view.render()).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    fn callback_data(button: &InlineKeyboardButton) -> &str {
        match &button.kind {
            InlineKeyboardButtonKind::CallbackData(data) => data,
            other => panic!("unexpected button kind: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_start_renders_menu_and_records_one_visit() {
        let visitors = VisitorTracker::new();

        let reply = open_menu(&visitors, Some(UserId(100))).await.render();

        assert_eq!(visitors.unique_count().await, 1);
        assert_eq!(reply.text, WELCOME_TEXT);
        assert_eq!(reply.parse_mode, None);

        let keyboard = reply.keyboard.unwrap();
        let row_sizes: Vec<usize> = keyboard.inline_keyboard.iter().map(Vec::len).collect();
        assert_eq!(row_sizes, vec![1, 2, 2, 2, 1]);

        let data: Vec<&str> = keyboard
            .inline_keyboard
            .iter()
            .flatten()
            .map(callback_data)
            .collect();
        assert_eq!(
            data,
            vec![
                "practice_1",
                "practice_2",
                "practice_3",
                "practice_4",
                "practice_5",
                "practice_6",
                "practice_7",
                "practice_8",
            ]
        );
        assert_eq!(keyboard.inline_keyboard[0][0].text, "🧘‍♀️ Это всё я");
    }

    #[tokio::test]
    async fn test_repeated_start_counts_user_once() {
        let visitors = VisitorTracker::new();

        open_menu(&visitors, Some(UserId(1))).await;
        open_menu(&visitors, Some(UserId(1))).await;

        assert_eq!(visitors.unique_count().await, 1);
    }

    #[tokio::test]
    async fn test_start_without_sender_records_nothing() {
        let visitors = VisitorTracker::new();

        let view = open_menu(&visitors, None).await;

        assert_eq!(view, View::Menu);
        assert_eq!(visitors.unique_count().await, 0);
    }

    #[test]
    #[allow(deprecated)]
    fn test_practice_view_shows_body_and_back_button() {
        let reply = route_callback("practice_3").render();

        assert_eq!(reply.text, catalog::find("3").unwrap().body);
        assert_eq!(reply.parse_mode, Some(ParseMode::Markdown));

        let keyboard = reply.keyboard.unwrap();
        assert_eq!(keyboard.inline_keyboard.len(), 1);
        assert_eq!(keyboard.inline_keyboard[0].len(), 1);
        assert_eq!(keyboard.inline_keyboard[0][0].text, "Назад");
        assert_eq!(callback_data(&keyboard.inline_keyboard[0][0]), "menu");
    }

    #[test]
    fn test_every_menu_button_opens_its_practice() {
        for button in menu_keyboard().inline_keyboard.iter().flatten() {
            match route_callback(callback_data(button)) {
                View::Practice(practice) => assert_eq!(practice.button_label, button.text),
                other => panic!("button {} routed to {other:?}", button.text),
            }
        }
    }

    #[tokio::test]
    async fn test_menu_callback_rebuilds_start_menu_without_counting() {
        let visitors = VisitorTracker::new();
        let from_start = open_menu(&visitors, Some(UserId(9))).await.render();

        let from_back = route_callback("menu").render();

        assert_eq!(from_back, from_start);
        assert_eq!(visitors.unique_count().await, 1);
    }

    #[test]
    fn test_unknown_command_reply() {
        let reply = View::UnknownCommand.render();

        assert_eq!(reply.text, "Команда не распознана. Введите /start для начала.");
        assert!(reply.keyboard.is_none());
        assert!(reply.parse_mode.is_none());
    }

    #[test]
    fn test_unknown_callback_offers_menu_again() {
        for data in ["practice_42", "practice_0", ""] {
            assert_eq!(route_callback(data), View::ExpiredButton);
        }

        let reply = View::ExpiredButton.render();
        assert_eq!(reply.text, EXPIRED_BUTTON_TEXT);
        assert_eq!(reply.keyboard, Some(menu_keyboard()));
    }
}
