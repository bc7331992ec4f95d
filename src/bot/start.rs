use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::service::convert::FfmpegConverter;
use crate::service::fetch::HttpFetcher;
use crate::service::response::ResponseBuilder;

/// Starts the Discord bot in a blocking manner.
///
/// Builds the conversion pipeline from configuration, creates the Discord
/// client, and runs it until shutdown.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(())` if the bot runs until a clean shutdown
/// - `Err(AppError)` if client creation or the connection fails
pub async fn start_bot(config: &Config) -> Result<(), AppError> {
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::DIRECT_MESSAGES;

    let converter = FfmpegConverter::new(
        config.ffmpeg_path.clone(),
        std::env::temp_dir(),
        config.convert_timeout,
    );
    let fetcher = HttpFetcher::new(reqwest::Client::new());
    let responder = ResponseBuilder::new(
        Arc::new(fetcher),
        Arc::new(converter),
        config.targets.clone(),
    );

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(responder))
        .await?;

    tracing::info!("Starting Discord bot...");

    // Blocks until shutdown
    client.start().await?;

    Ok(())
}
