//! Protocol vocabulary shared by the codecs.
//!
//! - **Headers** ([`header`]): the [`HeaderValue`] union and well-known header names
//! - **Status lines** ([`status`]): the precomputed status line table
//! - **Uri** ([`uri`]): request target and server address derivation
//! - **Errors** ([`error`]): one error type per concern plus the aggregate [`WireError`]

pub mod header;
pub use header::HeaderValue;

mod status;
pub use status::status_line;

pub mod uri;

mod error;
pub use error::ConnectError;
pub use error::ParseError;
pub use error::ReadError;
pub use error::SendError;
pub use error::WireError;
