use std::path::PathBuf;

use serde::Deserialize;
use tokio::{fs, process};

use crate::errors::{BotError, BotResult};

/// Scratch space for in-flight downloads. Nothing in here is meant to
/// outlive the request that created it.
pub const STAGING_DIR: &str = "downloads";

/// Everything gets remuxed into this container before delivery.
pub const OUTPUT_CONTAINER: &str = "mp4";

const HTTP_CHUNK_SIZE: u64 = 10 * 1024 * 1024;

/// Three tiers, first match wins: best under-ceiling mp4 video paired with
/// m4a audio, then best single mp4 stream, then best stream of any container.
pub const FORMAT_SELECTOR: &str =
    "bestvideo[filesize<400M][ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best";

/// A downloaded file sitting in the staging directory.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub path: PathBuf,
    pub title: String,
    pub size: u64,
}

#[derive(Debug, Deserialize)]
struct ProbeInfo {
    title: Option<String>,
}

fn output_template(user_id: u64) -> String {
    format!("{}/{}_%(title)s.%(ext)s", STAGING_DIR, user_id)
}

/// Metadata-only probe. Returns the human-readable title, or "video" when
/// the extractor does not report one.
pub async fn probe_title(url: &str) -> BotResult<String> {
    let output = process::Command::new("yt-dlp")
        .arg("--no-playlist")
        .arg("--no-warnings")
        .args(["--skip-download", "-J"])
        .arg(url)
        .output()
        .await
        .map_err(|e| BotError::unexpected(format!("failed to spawn yt-dlp: {}", e)))?;

    if !output.status.success() {
        return Err(BotError::download_failed(String::from_utf8_lossy(
            &output.stderr,
        )));
    }

    let info: ProbeInfo = serde_json::from_str(&String::from_utf8_lossy(&output.stdout))?;
    Ok(info.title.unwrap_or_else(|| "video".to_string()))
}

/// Single-attempt retrieval. Returns the final on-disk path as reported by
/// yt-dlp after any merge/remux has moved the file into place.
async fn fetch(url: &str, user_id: u64) -> BotResult<PathBuf> {
    fs::create_dir_all(STAGING_DIR).await?;

    let output = process::Command::new("yt-dlp")
        .arg("--no-playlist")
        .arg("--no-warnings")
        .arg("--no-check-certificates")
        .args(["-f", FORMAT_SELECTOR])
        .args(["--merge-output-format", OUTPUT_CONTAINER])
        .args(["--http-chunk-size", &HTTP_CHUNK_SIZE.to_string()])
        .args(["-o", &output_template(user_id)])
        .args(["--print", "after_move:filepath"])
        .arg("--no-simulate")
        .arg(url)
        .output()
        .await
        .map_err(|e| BotError::unexpected(format!("failed to spawn yt-dlp: {}", e)))?;

    log::info!("yt-dlp exit code: {:?}", output.status.code());

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        log::error!("yt-dlp failed: {}", stderr);
        return Err(BotError::DownloadFailed(stderr));
    }

    let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if path.is_empty() {
        return Err(BotError::unexpected("yt-dlp did not report an output path"));
    }

    Ok(PathBuf::from(path))
}

/// Probe, then retrieve. The resulting artifact is owned by the calling
/// handler until it is either rejected or delivered.
pub async fn download(url: &str, user_id: u64) -> BotResult<Artifact> {
    let title = probe_title(url).await?;

    log::info!("Starting download: {} (user: {})", url, user_id);
    let path = fetch(url, user_id).await?;
    let size = fs::metadata(&path).await?.len();
    log::info!("Download successful: {} ({} bytes)", path.display(), size);

    Ok(Artifact { path, title, size })
}
