/// Mirrors ("Зеркала") Telegram bot - Main entry point.
///
/// Serves a fixed menu of self-help practices written by the project's
/// psychologists through inline buttons, and keeps a rough in-memory count
/// of unique daily visitors.
///
/// Operational notes:
/// - All content is compiled into the binary
/// - Visitor statistics live only in memory and reset on a fixed interval
/// - Log records are appended to a local file as well as the console
mod bot;
mod catalog;
mod config;
mod error;
mod telemetry;
mod visitors;

use bot::{handle_callback, handle_start, handle_unknown, BotState};
use config::Config;
use error::Result;
use std::sync::Arc;
use teloxide::dispatching::UpdateFilterExt;
use teloxide::prelude::*;
use teloxide::types::{Me, Update};
use teloxide::utils::command::BotCommands;
use tracing::{error, info};
use visitors::VisitorTracker;

/// Telegram bot commands.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Mirrors bot commands:")]
enum Command {
    #[command(description = "Open the practice menu")]
    Start,
}

/// Only a bare `/start`, optionally addressed as `/start@<bot>`, opens the menu.
/// Arguments (including deep-link payloads) and other casings are not accepted.
fn is_start_command(text: &str, bot_username: &str) -> bool {
    text.starts_with("/start")
        && !text.contains(char::is_whitespace)
        && matches!(Command::parse(text, bot_username), Ok(Command::Start))
}

/// Set up the command menu that appears in Telegram.
async fn set_bot_commands(bot: &Bot) -> Result<()> {
    use teloxide::types::BotCommand;

    let commands = vec![BotCommand {
        command: "start".to_string(),
        description: "Открыть меню практик".to_string(),
    }];

    bot.set_my_commands(commands).await?;
    info!("Bot commands menu set successfully");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (for development)
    let dotenv = dotenvy::dotenv();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    telemetry::init(&config.log_file)?;

    info!("Starting Mirrors bot...");
    if let Err(e) = dotenv {
        info!("No .env file found or error loading it: {}", e);
    }
    info!("Logging to {}", config.log_file.display());
    info!(
        "Visitor statistics reset every {} hours",
        config.visitor_reset_interval.as_secs() / 3600
    );

    // Create bot instance and make sure the token is accepted
    let bot = Bot::new(&config.bot_token);
    let me = bot.get_me().await.map_err(|e| {
        error!("Failed to authorize bot: {}", e);
        e
    })?;
    info!(
        "Authorized on account @{}",
        me.user.username.as_deref().unwrap_or("<unknown>")
    );

    // Set up command menu in Telegram
    set_bot_commands(&bot).await?;

    // Visitor counter shared by the reset task and the handlers
    let visitors = Arc::new(VisitorTracker::new());
    tokio::spawn(Arc::clone(&visitors).run_reset_loop(config.visitor_reset_interval));

    let state = BotState::new(visitors);

    let message_handler = Update::filter_message()
        .branch(
            dptree::filter(|msg: Message, me: Me| {
                let bot_username = me.user.username.as_deref().unwrap_or_default();
                msg.text()
                    .is_some_and(|text| is_start_command(text, bot_username))
            })
            .endpoint(handle_start),
        )
        .branch(dptree::endpoint(handle_unknown));

    let callback_handler = Update::filter_callback_query().endpoint(handle_callback);

    let handler = dptree::entry()
        .branch(message_handler)
        .branch(callback_handler);

    info!("Bot initialized, starting dispatcher...");

    // A single distribution key keeps updates strictly in delivery order
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .distribution_function(|_| Some(()))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Bot stopped");

    Ok(())
}
