//! Application command definitions and registration.

use serenity::all::{
    Command, CommandOptionType, CommandType, CreateCommand, CreateCommandOption,
    InstallationContext, InteractionContext,
};
use serenity::http::Http;

use crate::error::AppError;

/// Context-menu command with an ephemeral reply.
pub const CONVERT: &str = "convert";
/// Context-menu command with a publicly visible reply.
pub const PUBLIC_CONVERT: &str = "publicconvert";
/// Slash command taking an explicit attachment upload.
pub const UPLOAD_CONVERT: &str = "uploadconvert";

/// Builds the bot's three global application commands.
///
/// All commands are installable to both guilds and users and usable in
/// guilds, bot DMs, and private channels.
fn command_definitions() -> Vec<CreateCommand> {
    let installation_contexts = vec![InstallationContext::Guild, InstallationContext::User];
    let interaction_contexts = vec![
        InteractionContext::Guild,
        InteractionContext::BotDm,
        InteractionContext::PrivateChannel,
    ];

    vec![
        CreateCommand::new(CONVERT)
            .kind(CommandType::Message)
            .name_localized("de", "konverieren")
            .integration_types(installation_contexts.clone())
            .contexts(interaction_contexts.clone()),
        CreateCommand::new(PUBLIC_CONVERT)
            .kind(CommandType::Message)
            .name_localized("de", "oeffentlichkonvertieren")
            .integration_types(installation_contexts.clone())
            .contexts(interaction_contexts.clone()),
        CreateCommand::new(UPLOAD_CONVERT)
            .description("Upload a file and convert it")
            .name_localized("de", "hochladenkonvertieren")
            .description_localized("de", "Eine Datei hochladen und konvertieren")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Attachment,
                    "file",
                    "The file you want to convert",
                )
                .required(true),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::Boolean,
                "public",
                "Whether you want to share the response publicly",
            ))
            .integration_types(installation_contexts)
            .contexts(interaction_contexts),
    ]
}

/// Registers the global application commands with Discord.
///
/// Replaces the full global command set, so removed commands disappear on the
/// next connection.
///
/// # Arguments
/// - `http` - Discord HTTP client
///
/// # Returns
/// - `Ok(())` if registration succeeded
/// - `Err(AppError)` on a Discord API failure
pub async fn register(http: &Http) -> Result<(), AppError> {
    let registered = Command::set_global_commands(http, command_definitions()).await?;

    tracing::info!("Registered {} application commands", registered.len());

    Ok(())
}
