use serde::{Deserialize, Serialize};

use crate::error::AccountError;

/// Snapshot of the tracked wallet account.
///
/// The serialized form is what gets mirrored into storage:
/// `{"connected":true,"address":"0xABC","network":null,"balance":5,"authenticated":false}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub connected: bool,
    pub address: Option<String>,
    pub network: Option<String>,
    pub balance: f64,
    pub authenticated: bool,
}

impl Default for Account {
    fn default() -> Self {
        Self::disconnected()
    }
}

impl Account {
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            address: None,
            network: None,
            balance: 0.0,
            authenticated: false,
        }
    }

    pub fn connected(address: String, balance: f64) -> Self {
        Self {
            connected: true,
            address: Some(address),
            network: None,
            balance,
            authenticated: false,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Shortened address for labels, e.g. `0x1234…abcd`.
    pub fn display_address(&self) -> String {
        match &self.address {
            Some(address) if address.chars().count() > 10 => {
                let chars: Vec<char> = address.chars().collect();
                let head: String = chars[..6].iter().collect();
                let tail: String = chars[chars.len() - 4..].iter().collect();
                format!("{head}…{tail}")
            }
            Some(address) => address.clone(),
            None => String::new(),
        }
    }

    /// Checks a snapshot restored from storage.
    ///
    /// `authenticated` is not tied to `connected` here; the manager never
    /// enforces that pairing either.
    pub fn validate(&self) -> Result<(), AccountError> {
        if !self.balance.is_finite() || self.balance < 0.0 {
            return Err(AccountError::InvalidSnapshot(format!(
                "balance {} is not a valid amount",
                self.balance
            )));
        }
        if self.connected {
            match self.address.as_deref() {
                Some(address) if !address.is_empty() => Ok(()),
                _ => Err(AccountError::InvalidSnapshot(
                    "connected account has no address".to_string(),
                )),
            }
        } else if self.address.is_some() || self.balance != 0.0 {
            Err(AccountError::InvalidSnapshot(
                "disconnected account carries an address or balance".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    pub fn to_json(&self) -> Result<String, AccountError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses and validates a stored record.
    pub fn from_json(raw: &str) -> Result<Self, AccountError> {
        let account: Account = serde_json::from_str(raw)?;
        account.validate()?;
        Ok(account)
    }
}
