//! # mailsift-core
//!
//! Core library for the `MailSift` email classification client.
//!
//! This crate provides:
//! - The classification API client (`POST /api/process-email`)
//! - Wire types for requests and responses
//! - Request validation and the error taxonomy
//! - A broadcast feed of request failures for UI-level notifications

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod classify;
mod error;

pub use classify::{
    Classification, ClassifyClient, ClassifyRequest, PRODUCTIVE_LABEL, RequestFailed,
};
pub use error::{Error, Result};
