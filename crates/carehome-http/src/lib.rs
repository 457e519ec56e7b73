//! carehome-http - HTTP-backed authentication client.

mod client;
mod endpoints;

pub use client::HttpAuthClient;
