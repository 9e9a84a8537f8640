use teloxide::{prelude::*, types::ParseMode};

use crate::errors::HandlerResult;

pub async fn help(bot: Bot, msg: Message) -> HandlerResult {
    let help = "ℹ️ <u>How to Use Video Downloader Bot:</u> ✨\n\n\
        1. Send a valid video URL 🎬\n\
        2. I'll download it lightning-fast! ⚡\n\
        3. Get it back if under 400MB 📥\n\n\
        <b>Commands:</b>\n\
        /start - Kick things off 🎉\n\
        /help - See this message ❓\n\n\
        <i>(Hover over text for a surprise! 😄)</i>";

    bot.send_message(msg.chat.id, help)
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}
