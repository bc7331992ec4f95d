//! Ready event handler for bot initialization.
//!
//! Fires once per connection after the gateway handshake. Used to log the
//! connected account and to (re-)register the global application commands.

use serenity::all::{Context, Ready};

use crate::bot::commands;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context used for command registration
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if let Err(err) = commands::register(&ctx.http).await {
        tracing::error!("Failed to register application commands: {}", err);
    }
}
