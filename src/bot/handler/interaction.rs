//! Interaction dispatch for the conversion commands.
//!
//! Every command interaction is acknowledged immediately with a deferred
//! reply (public or ephemeral, depending on the command and its options), the
//! conversion pipeline runs, and the deferred reply is edited with the result.
//! The conversion itself never fails the interaction; only Discord API errors
//! can, and those are logged here.

use serenity::all::{
    CommandInteraction, CommandType, Context, CreateAttachment, EditInteractionResponse,
    Interaction, ResolvedTarget, ResolvedValue,
};

use crate::bot::commands;
use crate::error::AppError;
use crate::service::response::{AttachmentRef, BotResponse, ResponseBuilder};

/// Handles one inbound interaction event.
///
/// Non-command interactions (components, autocomplete, modals) are ignored.
pub async fn handle_interaction(
    responder: &ResponseBuilder,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let result = match command.data.kind {
        CommandType::Message => handle_context_menu(responder, &ctx, &command).await,
        CommandType::ChatInput => handle_slash_command(responder, &ctx, &command).await,
        _ => Ok(()),
    };

    if let Err(err) = result {
        tracing::error!(
            "Failed to handle '{}' interaction: {}",
            command.data.name,
            err
        );
    }
}

/// Handles the `convert`/`publicconvert` message context-menu commands.
///
/// `publicconvert` replies publicly; `convert` replies only to the invoker.
async fn handle_context_menu(
    responder: &ResponseBuilder,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    if command.data.name == commands::PUBLIC_CONVERT {
        command.defer(&ctx.http).await?;
    } else {
        command.defer_ephemeral(&ctx.http).await?;
    }

    let attachments: Vec<AttachmentRef> = match command.data.target() {
        Some(ResolvedTarget::Message(message)) => {
            message.attachments.iter().map(AttachmentRef::from).collect()
        }
        _ => Vec::new(),
    };

    let response = responder.for_message_attachments(&attachments).await;

    deliver(ctx, command, response).await
}

/// Handles the `uploadconvert` slash command.
///
/// Visibility comes from the optional `public` boolean option; the reply is
/// ephemeral unless it is explicitly set to true.
async fn handle_slash_command(
    responder: &ResponseBuilder,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let mut attachment = None;
    let mut public = false;

    for option in command.data.options() {
        match option.value {
            ResolvedValue::Attachment(value) if option.name == "file" => {
                attachment = Some(AttachmentRef::from(value));
            }
            ResolvedValue::Boolean(value) if option.name == "public" => {
                public = value;
            }
            _ => {}
        }
    }

    if public {
        command.defer(&ctx.http).await?;
    } else {
        command.defer_ephemeral(&ctx.http).await?;
    }

    let response = responder.for_single_attachment(attachment.as_ref()).await;

    deliver(ctx, command, response).await
}

/// Edits the deferred reply with the final content and files.
async fn deliver(
    ctx: &Context,
    command: &CommandInteraction,
    response: BotResponse,
) -> Result<(), AppError> {
    let mut edit = EditInteractionResponse::new().content(response.content);
    for file in response.files {
        edit = edit.new_attachment(CreateAttachment::bytes(file.bytes, file.name));
    }

    command.edit_response(&ctx.http, edit).await?;

    Ok(())
}
