//! Owns the account snapshot and mirrors it into storage.

use std::cell::RefCell;
use std::rc::Rc;

use crate::account::Account;
use crate::config::{AccountConfig, BalanceReads};
use crate::error::AccountError;
use crate::notifier::{Notification, Notifier};
use crate::storage::AccountStore;
use crate::wallet::{WalletLifecycle, WalletSession};

type Listener = Box<dyn Fn(&Account)>;

/// Injectable account state holder.
///
/// Operations never hold a `RefCell` borrow across an await, so concurrent
/// calls interleave freely; the last completed write wins.
pub struct AccountManager {
    account: RefCell<Account>,
    store: Rc<dyn AccountStore>,
    notifier: Rc<dyn Notifier>,
    wallets: Rc<dyn WalletLifecycle>,
    config: AccountConfig,
    listeners: RefCell<Vec<Listener>>,
}

impl AccountManager {
    pub fn new(
        store: Rc<dyn AccountStore>,
        notifier: Rc<dyn Notifier>,
        wallets: Rc<dyn WalletLifecycle>,
    ) -> Self {
        Self {
            account: RefCell::new(Account::disconnected()),
            store,
            notifier,
            wallets,
            config: AccountConfig::default(),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn with_config(mut self, config: AccountConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AccountConfig {
        &self.config
    }

    pub fn account(&self) -> Account {
        self.account.borrow().clone()
    }

    pub fn connected_wallet(&self) -> Option<Rc<dyn WalletSession>> {
        self.wallets.connected_wallet()
    }

    /// Whether a live wallet session backs the snapshot. A snapshot restored
    /// from storage reports `connected` without one until `connect` runs.
    pub fn has_session(&self) -> bool {
        self.wallets.connected_wallet().is_some()
    }

    pub fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }

    /// Registers a callback run after every snapshot change.
    pub fn subscribe(&self, listener: impl Fn(&Account) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Adopts the stored snapshot, or the disconnected one when nothing
    /// usable is stored.
    pub fn initialize(&self) -> Account {
        let account = match self.restore() {
            Ok(Some(account)) => {
                log::debug!("restored account snapshot from {:?}", self.config.storage_key);
                account
            }
            Ok(None) => Account::disconnected(),
            Err(err) => {
                log::warn!(
                    "discarding stored account under {:?}: {}",
                    self.config.storage_key,
                    err
                );
                Account::disconnected()
            }
        };
        self.replace(account.clone());
        account
    }

    fn restore(&self) -> Result<Option<Account>, AccountError> {
        match self.store.get(&self.config.storage_key)? {
            Some(raw) => Account::from_json(&raw).map(Some),
            None => Ok(None),
        }
    }

    pub async fn connect(&self, wallet: Rc<dyn WalletSession>) {
        if let Err(err) = self.try_connect(wallet).await {
            log::warn!("connect failed: {err}");
            self.notifier
                .notify(Notification::error("Connection failed", format!("Error: {err}")));
        }
    }

    async fn try_connect(&self, wallet: Rc<dyn WalletSession>) -> Result<(), AccountError> {
        let accounts = wallet.request_accounts().await?;
        let address = accounts
            .into_iter()
            .next()
            .filter(|address| !address.is_empty())
            .ok_or(AccountError::NoAccount)?;

        self.wallets.connect_wallet(wallet.clone()).await?;

        let balance = wallet.get_balance().await?;
        self.replace(Account::connected(address.clone(), balance));

        let persisted_balance = match self.config.balance_reads {
            BalanceReads::Shared => balance,
            BalanceReads::PerWrite => wallet.get_balance().await?,
        };
        self.persist(&Account::connected(address.clone(), persisted_balance))?;

        log::info!("account {address} connected via {}", wallet.name());
        Ok(())
    }

    pub async fn disconnect(&self) {
        if !self.has_session() {
            self.notifier
                .notify(Notification::error("Disconnect failed", "No wallet connected"));
            return;
        }
        if let Err(err) = self.try_disconnect() {
            log::error!("disconnect failed: {err}");
        }
    }

    fn try_disconnect(&self) -> Result<(), AccountError> {
        self.wallets.disconnect_wallet()?;
        self.replace(Account::disconnected());
        self.persist(&Account::disconnected())?;
        log::info!("account disconnected");
        Ok(())
    }

    /// Marks the current account authenticated. Not persisted, and not
    /// gated on `connected`.
    pub fn authenticate(&self) {
        let mut account = self.account();
        account.authenticated = true;
        self.replace(account);
    }

    fn persist(&self, account: &Account) -> Result<(), AccountError> {
        self.store.set(&self.config.storage_key, &account.to_json()?)
    }

    fn replace(&self, account: Account) {
        *self.account.borrow_mut() = account;
        let snapshot = self.account();
        for listener in self.listeners.borrow().iter() {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;

    use super::*;
    use crate::notifier::LogNotifier;
    use crate::storage::MemoryStore;
    use crate::wallet::WalletSlot;

    fn manager(store: Rc<MemoryStore>) -> AccountManager {
        AccountManager::new(store, Rc::new(LogNotifier), Rc::new(WalletSlot::new()))
    }

    #[test]
    fn initialize_without_stored_value_is_disconnected() {
        let manager = manager(Rc::new(MemoryStore::new()));
        assert_eq!(manager.initialize(), Account::disconnected());
    }

    #[test]
    fn initialize_falls_back_on_garbage() {
        let store = Rc::new(MemoryStore::with_entry("account", "{not json"));
        let manager = manager(store);
        assert_eq!(manager.initialize(), Account::disconnected());
    }

    #[test]
    fn initialize_reads_configured_key() {
        let raw = r#"{"connected":true,"address":"0xDEF","network":null,"balance":3,"authenticated":true}"#;
        let store = Rc::new(MemoryStore::with_entry("dapp.account", raw));
        let manager =
            manager(store).with_config(AccountConfig::default().with_storage_key("dapp.account"));
        let account = manager.initialize();
        assert_eq!(account.address.as_deref(), Some("0xDEF"));
        assert!(account.authenticated);
    }

    #[test]
    fn listeners_see_every_change() {
        let manager = manager(Rc::new(MemoryStore::new()));
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            manager.subscribe(move |_| calls.set(calls.get() + 1));
        }
        manager.initialize();
        manager.authenticate();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn disconnect_without_wallet_keeps_state() {
        let manager = manager(Rc::new(MemoryStore::new()));
        manager.authenticate();
        block_on(manager.disconnect());
        assert!(manager.account().authenticated);
    }
}
