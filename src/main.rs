mod config;
mod model;
mod router;
mod schema;
mod utils;

use crate::config::{BotConfig, LoggingConfig};
use crate::model::commands::BotCommand;
use crate::router::Router;
use anyhow::{Context, Result};
use dotenv::dotenv;

use schema::schema;

use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use secrecy::ExposeSecret;
use std::sync::Arc;
use teloxide::types::MenuButton;
use teloxide::{prelude::*, utils::command::BotCommands};

const LOG_PATTERN: &str = "{d} - {l} - {m}{n}";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let bot_config = Arc::new(BotConfig::from_env().context("Failed to load bot configuration")?);

    init_logging(&bot_config.logging)?;

    log::info!("Starting ride request bot...");
    log::info!(
        "Web app: {}, driver app: {}, api id: {}",
        bot_config.webapp.url,
        bot_config.webapp.driver_url(),
        bot_config.telegram.api_id
    );
    if let Some(dispatch) = &bot_config.dispatch {
        log::info!(
            "Dispatch origin: {}, {} at {} km/h",
            dispatch.origin.latitude,
            dispatch.origin.longitude,
            dispatch.average_speed_kmh
        );
    }

    let bot = Bot::new(bot_config.telegram.bot_token.expose_secret());

    bot.set_my_commands(BotCommand::bot_commands())
        .await
        .context("Failed to register bot commands")?;
    bot.set_chat_menu_button()
        .menu_button(MenuButton::Commands)
        .await?;

    let router = Arc::new(Router::new(bot_config.clone()));

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![router])
        .default_handler(|upd| async move {
            log::debug!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let mut builder =
        Config::builder().appender(Appender::builder().build("stdout", Box::new(stdout)));
    let mut root = Root::builder().appender("stdout");

    if let Some(path) = &logging.file {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder = builder.appender(Appender::builder().build("logfile", Box::new(logfile)));
        root = root.appender("logfile");
    }

    let config = builder.build(root.build(logging.level))?;
    log4rs::init_config(config)?;

    Ok(())
}
