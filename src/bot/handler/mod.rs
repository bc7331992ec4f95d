use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::service::response::ResponseBuilder;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub responder: ResponseBuilder,
}

impl Handler {
    pub fn new(responder: ResponseBuilder) -> Self {
        Self { responder }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called for every inbound interaction
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.responder, ctx, interaction).await;
    }
}
