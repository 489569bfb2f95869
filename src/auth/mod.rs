mod session;

pub use session::{
    clear_session, get_session_path, load_active_session, load_session, login, resolve_identity,
    save_session, Identity, Session, SESSION_VERSION,
};

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

/// Why the current user could not be identified.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No session file exists.
    #[error("Not logged in. Run `venture-ai login --email <EMAIL>` first")]
    NotLoggedIn,
    /// The stored session is past its expiry.
    #[error("Session for {email} expired at {expired_at}. Log in again")]
    Expired {
        /// Who the session belonged to.
        email: String,
        /// When it stopped being valid.
        expired_at: DateTime<Utc>,
    },
    /// The session file exists but cannot be read or parsed.
    #[error("Session file at {path} is unreadable: {reason}")]
    Corrupt {
        /// Location of the session file.
        path: PathBuf,
        /// Underlying I/O or parse error.
        reason: String,
    },
    /// The session file was written by an incompatible version.
    #[error("Unsupported session file version: {0}")]
    UnsupportedVersion(u32),
    /// Login was attempted with something that is not an email address.
    #[error("Invalid email address: '{0}'")]
    InvalidEmail(String),
}
