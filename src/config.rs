use std::time::Duration;

use crate::error::{config::ConfigError, AppError};
use crate::service::classify::TargetFormats;

const DEFAULT_FFMPEG_PATH: &str = "ffmpeg";
const DEFAULT_CONVERT_TIMEOUT_SECS: u64 = 120;

pub struct Config {
    pub discord_bot_token: String,

    /// Target file extension per media category, as handed to the transcoder.
    pub targets: TargetFormats,

    pub ffmpeg_path: String,
    pub convert_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            targets: TargetFormats {
                image: std::env::var("TARGET_IMAGE_FORMAT")
                    .map_err(|_| ConfigError::MissingEnvVar("TARGET_IMAGE_FORMAT".to_string()))?,
                audio: std::env::var("TARGET_AUDIO_FORMAT")
                    .map_err(|_| ConfigError::MissingEnvVar("TARGET_AUDIO_FORMAT".to_string()))?,
                video: std::env::var("TARGET_VIDEO_FORMAT")
                    .map_err(|_| ConfigError::MissingEnvVar("TARGET_VIDEO_FORMAT".to_string()))?,
            },
            ffmpeg_path: std::env::var("FFMPEG_PATH")
                .unwrap_or_else(|_| DEFAULT_FFMPEG_PATH.to_string()),
            convert_timeout: Duration::from_secs(match std::env::var("CONVERT_TIMEOUT_SECS") {
                Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                    name: "CONVERT_TIMEOUT_SECS".to_string(),
                    value,
                })?,
                Err(_) => DEFAULT_CONVERT_TIMEOUT_SECS,
            }),
        })
    }
}
