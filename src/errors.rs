use std::fmt;

/// Centralized error taxonomy for the bot. Every workflow failure is one of
/// these kinds so handlers branch on kind, not on source error identity.
#[derive(Debug)]
pub enum BotError {
    /// The submitted text does not parse as a URL
    InvalidUrl,
    /// yt-dlp could not retrieve the media (unsupported site, network,
    /// extraction failure); carries the tool's stderr
    DownloadFailed(String),
    /// Downloaded artifact exceeds the size ceiling
    TooLarge { title: String, size: u64 },
    /// Telegram API request failed
    Delivery(teloxide::RequestError),
    /// Filesystem error while staging or cleaning up
    FileSystem(std::io::Error),
    /// Anything else (malformed metadata, broken invariants)
    Unexpected(String),
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::InvalidUrl => write!(f, "not a valid URL"),
            BotError::DownloadFailed(stderr) => write!(f, "download failed: {}", stderr),
            BotError::TooLarge { title, size } => {
                write!(f, "file too large: '{}' is {} bytes", title, size)
            }
            BotError::Delivery(e) => write!(f, "Telegram API error: {}", e),
            BotError::FileSystem(e) => write!(f, "filesystem error: {}", e),
            BotError::Unexpected(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for BotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BotError::Delivery(e) => Some(e),
            BotError::FileSystem(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BotError {
    fn from(err: std::io::Error) -> Self {
        BotError::FileSystem(err)
    }
}

impl From<teloxide::RequestError> for BotError {
    fn from(err: teloxide::RequestError) -> Self {
        BotError::Delivery(err)
    }
}

impl From<serde_json::Error> for BotError {
    fn from(err: serde_json::Error) -> Self {
        BotError::Unexpected(format!("JSON parsing error: {}", err))
    }
}

impl BotError {
    pub fn download_failed(stderr: impl Into<String>) -> Self {
        Self::DownloadFailed(stderr.into())
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }
}

/// Result of bot operations
pub type BotResult<T> = Result<T, BotError>;

/// Result for handlers
pub type HandlerResult = BotResult<()>;
