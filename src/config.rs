use serde::{Deserialize, Serialize};

use crate::error::AccountError;

pub const DEFAULT_STORAGE_KEY: &str = "account";

/// How `connect` sources the balance for the in-memory and persisted copies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceReads {
    /// One balance query feeds both copies.
    #[default]
    Shared,
    /// One query per copy. The two values may differ if the balance moves
    /// between the reads.
    PerWrite,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Storage key the snapshot is mirrored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default)]
    pub balance_reads: BalanceReads,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            balance_reads: BalanceReads::default(),
        }
    }
}

impl AccountConfig {
    pub fn from_json(raw: &str) -> Result<Self, AccountError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_balance_reads(mut self, reads: BalanceReads) -> Self {
        self.balance_reads = reads;
        self
    }
}
