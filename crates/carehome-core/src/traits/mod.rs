//! Core traits for the login client and token persistence.

mod auth_client;
mod token_store;

pub use auth_client::AuthClient;
pub use token_store::TokenStore;
