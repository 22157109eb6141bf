use std::rc::Rc;

use yew::prelude::*;

use crate::error::WalletError;
use crate::ethereum::EthereumWallet;
use crate::hooks::use_account;
use crate::notifier::Notification;

/// Connects the injected browser wallet, or disconnects the current one.
///
/// A snapshot restored after a reload has no live session, so it offers
/// Connect again.
#[function_component]
pub fn ConnectButton() -> Html {
    let account = use_account();

    let onclick = {
        let account = account.clone();
        Callback::from(move |_: MouseEvent| {
            if account.has_session() {
                account.disconnect();
                return;
            }
            match EthereumWallet::from_window() {
                Ok(Some(wallet)) => account.connect(Rc::new(wallet)),
                Ok(None) => account.notify(Notification::error(
                    "Connection failed",
                    format!("Error: {}", WalletError::Unavailable),
                )),
                Err(err) => account.notify(Notification::error(
                    "Connection failed",
                    format!("Error: {err}"),
                )),
            }
        })
    };

    html! {
        <button {onclick}>
            if account.has_session() {
                {"Disconnect"}
            } else {
                {"Connect wallet"}
            }
        </button>
    }
}
