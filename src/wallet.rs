//! The wallet seam: sessions that answer account/balance queries, and the
//! lifecycle that tracks which session is currently connected.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::error::WalletError;

#[async_trait(?Send)]
pub trait WalletSession {
    /// Addresses exposed by the wallet, primary account first.
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;

    /// Balance of the primary account in the wallet's native unit.
    async fn get_balance(&self) -> Result<f64, WalletError>;

    fn name(&self) -> &str {
        "wallet"
    }
}

#[async_trait(?Send)]
pub trait WalletLifecycle {
    async fn connect_wallet(&self, wallet: Rc<dyn WalletSession>) -> Result<(), WalletError>;
    fn disconnect_wallet(&self) -> Result<(), WalletError>;
    fn connected_wallet(&self) -> Option<Rc<dyn WalletSession>>;
}

/// Holds the connected session.
#[derive(Default)]
pub struct WalletSlot {
    current: RefCell<Option<Rc<dyn WalletSession>>>,
}

impl WalletSlot {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl WalletLifecycle for WalletSlot {
    async fn connect_wallet(&self, wallet: Rc<dyn WalletSession>) -> Result<(), WalletError> {
        log::debug!("wallet {} connected", wallet.name());
        *self.current.borrow_mut() = Some(wallet);
        Ok(())
    }

    fn disconnect_wallet(&self) -> Result<(), WalletError> {
        match self.current.borrow_mut().take() {
            Some(wallet) => {
                log::debug!("wallet {} disconnected", wallet.name());
                Ok(())
            }
            None => Err(WalletError::Lifecycle("no wallet to disconnect".to_string())),
        }
    }

    fn connected_wallet(&self) -> Option<Rc<dyn WalletSession>> {
        self.current.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    struct Fixed;

    #[async_trait(?Send)]
    impl WalletSession for Fixed {
        async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
            Ok(vec!["0xABC".to_string()])
        }

        async fn get_balance(&self) -> Result<f64, WalletError> {
            Ok(1.0)
        }
    }

    #[test]
    fn slot_tracks_connected_wallet() {
        let slot = WalletSlot::new();
        assert!(slot.connected_wallet().is_none());

        block_on(slot.connect_wallet(Rc::new(Fixed))).unwrap();
        assert!(slot.connected_wallet().is_some());

        slot.disconnect_wallet().unwrap();
        assert!(slot.connected_wallet().is_none());
        assert!(slot.disconnect_wallet().is_err());
    }
}
