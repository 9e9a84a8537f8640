use teloxide::{prelude::*, types::ParseMode};

use crate::{
    delivery::{deliver, enforce_size_limit, format_size_mib},
    errors::{BotError, HandlerResult},
    validation::is_valid_url,
    ytdlp,
};

/// Full download workflow for a plain text message: validate, download,
/// gate on size, deliver, clean up. Every failure kind maps to its own
/// user-facing reply; replies that fail themselves propagate to the
/// dispatcher's error handler.
pub async fn url_received(bot: Bot, msg: Message) -> HandlerResult {
    let text = msg
        .text()
        .ok_or_else(|| BotError::unexpected("text handler invoked without text"))?;

    match process_request(&bot, &msg, text.trim()).await {
        Ok(()) => {}
        Err(BotError::InvalidUrl) => {
            send_html(&bot, &msg, "❌ <b>Oops!</b> Send a valid URL! 😕").await?;
        }
        Err(BotError::TooLarge { title, size }) => {
            send_html(
                &bot,
                &msg,
                &format!(
                    "❌ <b>Sorry!</b> '{}' is too large ({}). Max is 400MB! 😞",
                    title,
                    format_size_mib(size)
                ),
            )
            .await?;
        }
        Err(BotError::DownloadFailed(_)) => {
            send_html(
                &bot,
                &msg,
                "❌ <b>Uh-oh!</b> Download failed. URL might not work or is unsupported. 😔 Try again!",
            )
            .await?;
        }
        Err(err) => {
            log::error!("Error processing video download: {}", err);
            send_html(
                &bot,
                &msg,
                "❌ <b>Oops!</b> Something went wrong. Try again later! 😕",
            )
            .await?;
        }
    }

    Ok(())
}

async fn process_request(bot: &Bot, msg: &Message, url: &str) -> HandlerResult {
    if !is_valid_url(url) {
        return Err(BotError::InvalidUrl);
    }

    send_html(
        bot,
        msg,
        "⏳ <b>Downloading...</b> 🌠 (Spinning up turbo mode!)",
    )
    .await?;

    // The user id keys the staging filename so concurrent users don't
    // collide. Two requests from the same user for the same title can still
    // race; accepted limitation.
    let user_id = msg.from.as_ref().map_or(0, |u| u.id.0);
    let artifact = ytdlp::download(url, user_id).await?;

    enforce_size_limit(&artifact).await?;
    deliver(bot, msg.chat.id, &artifact).await?;

    send_html(
        bot,
        msg,
        "🗑️ <b>Cleanup complete!</b> File deleted from server. 🌟",
    )
    .await?;
    Ok(())
}

async fn send_html(bot: &Bot, msg: &Message, text: &str) -> HandlerResult {
    bot.send_message(msg.chat.id, text)
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}
