//! Wallet account state for Yew front-ends.
//!
//! [`AccountManager`] owns the account snapshot and mirrors it into storage;
//! [`AccountProvider`] puts one in context for components that call
//! [`use_account`].

pub mod account;
pub mod components;
pub mod config;
pub mod error;
pub mod ethereum;
pub mod hooks;
pub mod manager;
pub mod notifier;
mod provider;
pub mod storage;
pub mod wallet;

pub use account::Account;
pub use config::{AccountConfig, BalanceReads};
pub use error::{AccountError, WalletError};
pub use hooks::{use_account, UseAccountHandle};
pub use manager::AccountManager;
pub use notifier::{Notification, Notifier, Severity};
pub use provider::AccountProvider;
pub use wallet::{WalletLifecycle, WalletSession, WalletSlot};
