//! Rust SDK for the Authdog user-info API.
//!
//! ```no_run
//! use authdog::{Client, ClientOptions};
//!
//! let client = Client::new(ClientOptions {
//!     base_url: "https://api.authdog.com".to_string(),
//!     api_key: None,
//!     timeout_ms: None,
//! })?;
//!
//! let info = client.get_user_info("ACCESS_TOKEN")?;
//! if let Some(user) = info.user {
//!     println!("hello, {:?}", user.display_name);
//! }
//! # Ok::<(), authdog::AuthdogError>(())
//! ```

pub mod errors;
pub mod structs;

pub use errors::AuthdogError;
pub use structs::client::{Client, ClientOptions};
pub use structs::user::{
    Email, ErrorResponse, Meta, Names, Photo, Session, User, UserInfoResponse, Verification,
};
