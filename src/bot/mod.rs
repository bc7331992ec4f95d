//! Discord bot integration for attachment conversion.
//!
//! This module wires the conversion pipeline to Discord. The bot listens for
//! application command interactions (two message context-menu commands and one
//! slash command), defers a reply with the requested visibility, runs the
//! attachment pipeline, and edits the deferred reply with the converted files.
//!
//! Command registration happens once per connection from the `ready` handler,
//! so no separate deployment step is needed.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild lifecycle events
//! - `GUILD_MESSAGES` - Access messages targeted by context-menu commands
//! - `DIRECT_MESSAGES` - Allow the commands to be used in bot DMs
//!
//! None of these are privileged intents.

pub mod commands;
pub mod handler;
pub mod start;
