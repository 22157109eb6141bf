//! EIP-1193 wallet session backed by `window.ethereum`.

use std::cell::RefCell;

use async_trait::async_trait;
use web3::{
    transports::eip_1193::{Eip1193, Provider},
    types::{Address, U256},
    Web3,
};

use crate::error::WalletError;
use crate::wallet::WalletSession;

const WEI_PER_ETHER: f64 = 1e18;

pub struct EthereumWallet {
    web3: Web3<Eip1193>,
    primary: RefCell<Option<Address>>,
}

impl EthereumWallet {
    /// Wraps the injected provider, or `None` when the page has no wallet.
    pub fn from_window() -> Result<Option<Self>, WalletError> {
        Ok(Provider::default()?.map(|provider| Self {
            web3: Web3::new(Eip1193::new(provider)),
            primary: RefCell::new(None),
        }))
    }

    async fn primary_address(&self) -> Result<Address, WalletError> {
        let cached = *self.primary.borrow();
        match cached {
            Some(address) => Ok(address),
            None => {
                let accounts = self.web3.eth().request_accounts().await?;
                let address = accounts.first().copied().ok_or(WalletError::Unavailable)?;
                *self.primary.borrow_mut() = Some(address);
                Ok(address)
            }
        }
    }
}

#[async_trait(?Send)]
impl WalletSession for EthereumWallet {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        let accounts = self.web3.eth().request_accounts().await?;
        *self.primary.borrow_mut() = accounts.first().copied();
        Ok(accounts.iter().map(|address| format!("{address:?}")).collect())
    }

    async fn get_balance(&self) -> Result<f64, WalletError> {
        let address = self.primary_address().await?;
        let wei = self.web3.eth().balance(address, None).await?;
        Ok(wei_to_ether(wei))
    }

    fn name(&self) -> &str {
        "ethereum"
    }
}

fn wei_to_ether(wei: U256) -> f64 {
    wei.to_string().parse::<f64>().unwrap_or(f64::MAX) / WEI_PER_ETHER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_wei() {
        assert_eq!(wei_to_ether(U256::zero()), 0.0);
        assert_eq!(wei_to_ether(U256::exp10(18)), 1.0);
        assert_eq!(wei_to_ether(U256::from(25u64) * U256::exp10(17)), 2.5);
    }
}
