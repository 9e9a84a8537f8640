use teloxide::{dispatching::UpdateHandler, prelude::*, utils::command::BotCommands};

use crate::{
    commands::{help, start},
    errors::BotError,
    handlers::url_received,
};

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
enum Command {
    /// Show the welcome message.
    Start,
    /// Show usage help.
    Help,
}

/// Routing table built once at startup: commands first, then any
/// non-command text goes to the download workflow. Unknown command-shaped
/// text falls through to the dispatcher's default handler.
pub fn schema() -> UpdateHandler<BotError> {
    use dptree::case;

    Update::filter_message()
        .branch(
            teloxide::filter_command::<Command, _>()
                .branch(case![Command::Start].endpoint(start))
                .branch(case![Command::Help].endpoint(help)),
        )
        .branch(
            Message::filter_text()
                .filter(|text: String| !text.trim_start().starts_with('/'))
                .endpoint(url_received),
        )
}
