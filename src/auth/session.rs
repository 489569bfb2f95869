use super::AuthError;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const SESSION_VERSION: u32 = 1;
const TOKEN_BYTES: usize = 16;

/// The user a session resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub version: u32,
    pub email: String,
    pub name: String,
    /// Opaque bearer token, 32 hex characters
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn identity(&self) -> Identity {
        Identity {
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

/// Get the default session file path (~/.config/venture-ai/session.json)
pub fn get_session_path() -> PathBuf {
    crate::config::get_config_dir().join("session.json")
}

fn generate_token<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..TOKEN_BYTES)
        .map(|_| format!("{:02x}", rng.gen::<u8>()))
        .collect()
}

/// Issue a new session. The name defaults to the part of the email before `@`.
pub fn login(
    email: &str,
    name: Option<&str>,
    ttl: Duration,
    now: DateTime<Utc>,
) -> Result<Session, AuthError> {
    let email = email.trim();
    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| AuthError::InvalidEmail(email.to_string()))?;
    if local.is_empty() || domain.is_empty() {
        return Err(AuthError::InvalidEmail(email.to_string()));
    }

    let name = match name.map(str::trim) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => local.to_string(),
    };

    let expires_at = chrono::Duration::from_std(ttl)
        .ok()
        .and_then(|d| now.checked_add_signed(d))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    tracing::debug!(email, %expires_at, "issued session");

    Ok(Session {
        version: SESSION_VERSION,
        email: email.to_string(),
        name,
        token: generate_token(&mut rand::thread_rng()),
        issued_at: now,
        expires_at,
    })
}

/// Save the session atomically, creating the parent directory when needed.
pub fn save_session(path: &Path, session: &Session) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    serde_json::to_writer_pretty(&mut file, session).context("Failed to serialize session")?;
    file.commit().context("Failed to save session")?;

    Ok(())
}

/// Load the stored session, whether or not it has expired.
pub fn load_session(path: &Path) -> Result<Session, AuthError> {
    if !path.exists() {
        return Err(AuthError::NotLoggedIn);
    }

    let corrupt = |reason: String| AuthError::Corrupt {
        path: path.to_path_buf(),
        reason,
    };

    let content = fs::read_to_string(path).map_err(|e| corrupt(e.to_string()))?;
    let probe: VersionProbe = serde_json::from_str(&content).map_err(|e| corrupt(e.to_string()))?;
    if probe.version != SESSION_VERSION {
        return Err(AuthError::UnsupportedVersion(probe.version));
    }

    serde_json::from_str(&content).map_err(|e| corrupt(e.to_string()))
}

/// Load the stored session, failing with `Expired` once it is past `expiresAt`.
pub fn load_active_session(path: &Path, now: DateTime<Utc>) -> Result<Session, AuthError> {
    let session = load_session(path)?;
    if session.is_expired(now) {
        return Err(AuthError::Expired {
            email: session.email,
            expired_at: session.expires_at,
        });
    }
    Ok(session)
}

/// Resolve the logged-in user from the session file.
pub fn resolve_identity(path: &Path, now: DateTime<Utc>) -> Result<Identity, AuthError> {
    load_active_session(path, now).map(|session| session.identity())
}

/// Remove the session file. Returns false when there was nothing to remove.
pub fn clear_session(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path)
        .with_context(|| format!("Failed to remove session file at {}", path.display()))?;
    tracing::debug!(path = %path.display(), "removed session");
    Ok(true)
}
