use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::prediction::PredictionResult;
use crate::profile::StartupProfile;

pub const STORE_VERSION: u32 = 1;

/// One saved prediction. Never modified after it is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRecord {
    pub id: String,
    /// Email of the user who saved it
    pub user_email: String,
    pub created_at: DateTime<Utc>,
    pub profile: StartupProfile,
    pub result: PredictionResult,
}

impl PredictionRecord {
    pub fn startup_name(&self) -> &str {
        match self.profile.startup_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => "(unnamed)",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionStore {
    pub version: u32,
    #[serde(default)]
    pub records: Vec<PredictionRecord>,
}

impl Default for PredictionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionStore {
    pub fn new() -> Self {
        Self {
            version: STORE_VERSION,
            records: Vec::new(),
        }
    }

    /// Records owned by `email`, newest first.
    pub fn records_for(&self, email: &str) -> Vec<&PredictionRecord> {
        let mut owned: Vec<&PredictionRecord> =
            self.records.iter().filter(|r| r.user_email == email).collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        owned
    }
}
