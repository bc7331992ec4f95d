//! Service layer for the attachment-conversion pipeline.
//!
//! This module contains the pieces that turn an inbound attachment into a
//! converted file:
//!
//! - **Classification** (`classify`) - Mapping declared content types to media
//!   categories and resolving the configured target extension
//! - **Fetching** (`fetch`) - Downloading attachment bytes from the Discord CDN
//! - **Conversion** (`convert`) - Running the external transcoding tool over an
//!   in-memory buffer
//! - **Response assembly** (`response`) - Orchestrating the above for a batch
//!   of attachments and producing the reply content and files

pub mod classify;
pub mod convert;
pub mod fetch;
pub mod response;
