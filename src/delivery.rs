use teloxide::{
    prelude::*,
    types::{ChatId, InputFile, ParseMode},
};
use tokio::fs;

use crate::{
    errors::{BotError, BotResult},
    ytdlp::{Artifact, OUTPUT_CONTAINER},
};

/// Hard ceiling on delivered files: 400 MiB.
pub const MAX_FILE_SIZE: u64 = 400 * 1024 * 1024;

pub fn format_size_mib(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// Accept or reject an artifact against the ceiling. An oversized file is
/// deleted before the rejection is reported, so it is never sent, even
/// partially.
pub async fn enforce_size_limit(artifact: &Artifact) -> BotResult<()> {
    if artifact.size > MAX_FILE_SIZE {
        fs::remove_file(&artifact.path).await?;
        return Err(BotError::TooLarge {
            title: artifact.title.clone(),
            size: artifact.size,
        });
    }
    Ok(())
}

/// Upload the artifact as a generic document (content type detection off, so
/// clients treat it as an opaque file) and delete the local copy once
/// Telegram acknowledges the upload.
pub async fn deliver(bot: &Bot, chat_id: ChatId, artifact: &Artifact) -> BotResult<()> {
    let document = InputFile::file(artifact.path.clone())
        .file_name(format!("{}.{}", artifact.title, OUTPUT_CONTAINER));

    bot.send_document(chat_id, document)
        .caption(format!(
            "🎉 <b>Here's your file!</b> {} 🚀",
            artifact.title
        ))
        .parse_mode(ParseMode::Html)
        .disable_content_type_detection(true)
        .await?;

    fs::remove_file(&artifact.path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn temp_artifact(name: &str, size: u64) -> Artifact {
        let path = std::env::temp_dir().join(format!("{}_{}", std::process::id(), name));
        std::fs::write(&path, b"stub").expect("write temp file");
        Artifact {
            path,
            title: "test video".to_string(),
            size,
        }
    }

    #[test]
    fn size_is_rendered_with_two_decimals() {
        assert_eq!(format_size_mib(450 * 1024 * 1024), "450.00 MB");
        assert_eq!(format_size_mib(MAX_FILE_SIZE), "400.00 MB");
        assert_eq!(format_size_mib(1_572_864), "1.50 MB");
    }

    #[tokio::test]
    async fn oversized_artifact_is_deleted_and_rejected() {
        let artifact = temp_artifact("oversized.mp4", MAX_FILE_SIZE + 1);

        let result = enforce_size_limit(&artifact).await;
        match result {
            Err(BotError::TooLarge { title, size }) => {
                assert_eq!(title, "test video");
                assert_eq!(size, MAX_FILE_SIZE + 1);
            }
            other => panic!("expected TooLarge, got {:?}", other),
        }
        assert!(!artifact.path.exists());
    }

    #[tokio::test]
    async fn artifact_at_exact_ceiling_is_accepted() {
        let artifact = temp_artifact("at_limit.mp4", MAX_FILE_SIZE);

        assert!(enforce_size_limit(&artifact).await.is_ok());
        assert!(artifact.path.exists());

        std::fs::remove_file(&artifact.path).expect("cleanup");
    }

    #[tokio::test]
    async fn undersized_artifact_is_accepted() {
        let artifact = temp_artifact("small.mp4", 1024);

        assert!(enforce_size_limit(&artifact).await.is_ok());
        assert!(artifact.path.exists());

        std::fs::remove_file(&artifact.path).expect("cleanup");
    }

    #[tokio::test]
    async fn rejecting_a_missing_file_is_a_filesystem_error() {
        let artifact = Artifact {
            path: PathBuf::from("downloads/does_not_exist.mp4"),
            title: "gone".to_string(),
            size: MAX_FILE_SIZE + 1,
        };

        assert!(matches!(
            enforce_size_limit(&artifact).await,
            Err(BotError::FileSystem(_))
        ));
    }
}
