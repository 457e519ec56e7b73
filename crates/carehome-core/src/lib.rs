//! carehome-core - Core types and traits for the care-home token client.

pub mod credentials;
pub mod error;
pub mod flow;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::Error;
pub use flow::LoginFlow;
pub use tokens::AccessToken;
pub use traits::{AuthClient, TokenStore};
pub use types::ApiUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
