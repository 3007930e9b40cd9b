//! Email classification: wire types and the HTTP client.

mod client;
mod model;

pub use client::{ClassifyClient, RequestFailed};
pub use model::{Classification, ClassifyRequest, PRODUCTIVE_LABEL};
