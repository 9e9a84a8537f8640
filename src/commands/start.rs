use teloxide::{prelude::*, types::ParseMode};

use crate::errors::HandlerResult;

pub async fn start(bot: Bot, msg: Message) -> HandlerResult {
    let welcome = "🎥 <b>Welcome to Video Downloader Bot! 🎥</b>\n\n\
        ✨ Send me a valid video URL, and I'll grab it for you!\n\
        🚀 Supported platforms: YouTube, Vimeo, and more!\n\
        ℹ️ Type /help for assistance.\n\
        <i>(Watch the magic unfold! ✨)</i>";

    bot.send_message(msg.chat.id, welcome)
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}
