mod commands;
mod delivery;
mod errors;
mod handlers;
mod schema;
mod validation;
mod ytdlp;

use teloxide::{error_handlers::LoggingErrorHandler, prelude::*};

use crate::schema::schema;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    pretty_env_logger::init();
    log::info!("Starting video downloader bot...");

    // Token comes from TELOXIDE_TOKEN (or .env), never from code.
    let bot = Bot::from_env();

    if let Err(e) = tokio::fs::create_dir_all(ytdlp::STAGING_DIR).await {
        log::error!("Failed to create staging directory: {}", e);
        return;
    }

    Dispatcher::builder(bot, schema())
        .default_handler(|upd| async move {
            log::warn!("Unhandled update: {:?}", upd);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error escaped a handler",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
