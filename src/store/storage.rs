use super::types::{PredictionRecord, PredictionStore, STORE_VERSION};
use crate::auth::Identity;
use crate::prediction::PredictionResult;
use crate::profile::StartupProfile;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Get the store file path inside a data directory
pub fn get_store_path(data_dir: &Path) -> PathBuf {
    data_dir.join("predictions.json")
}

/// Load the prediction store from a JSON file
///
/// If the file doesn't exist, returns a new empty store.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_store(path: &Path) -> Result<PredictionStore> {
    if !path.exists() {
        return Ok(PredictionStore::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open prediction store at {}", path.display()))?;

    let store: PredictionStore =
        serde_json::from_reader(file).context("Failed to load prediction store")?;

    if store.version != STORE_VERSION {
        anyhow::bail!("Unsupported prediction store version: {}", store.version);
    }

    Ok(store)
}

/// Save the prediction store atomically, creating the data directory if needed.
pub fn save_store(path: &Path, store: &PredictionStore) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory at {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, store)
        .context("Failed to serialize prediction store")?;

    file.commit().context("Failed to save prediction store")?;

    Ok(())
}

fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..8).map(|_| format!("{:02x}", rng.gen::<u8>())).collect()
}

/// Persist a new record owned by `identity` and return it.
pub fn append(
    path: &Path,
    identity: &Identity,
    profile: &StartupProfile,
    result: &PredictionResult,
    now: DateTime<Utc>,
) -> Result<PredictionRecord> {
    let mut store = load_store(path)?;
    let record = PredictionRecord {
        id: generate_id(),
        user_email: identity.email.clone(),
        created_at: now,
        profile: profile.clone(),
        result: result.clone(),
    };
    store.records.push(record.clone());
    save_store(path, &store)?;

    tracing::debug!(
        id = %record.id,
        user_email = %record.user_email,
        total = store.records.len(),
        "saved prediction"
    );
    Ok(record)
}

/// Records owned by `identity`, newest first.
pub fn list(path: &Path, identity: &Identity) -> Result<Vec<PredictionRecord>> {
    let store = load_store(path)?;
    Ok(store
        .records_for(&identity.email)
        .into_iter()
        .cloned()
        .collect())
}
