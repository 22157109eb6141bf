use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::account::Account;
use crate::config::AccountConfig;
use crate::manager::AccountManager;
use crate::notifier::{Notification, Notifier};
use crate::storage::LocalStorage;
use crate::wallet::{WalletSession, WalletSlot};

/// Context value shared by `<AccountProvider/>`.
#[derive(Clone)]
pub struct UseAccountHandle {
    manager: Rc<AccountManager>,
    account: UseStateHandle<Account>,
}

impl PartialEq for UseAccountHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.manager, &other.manager) && *self.account == *other.account
    }
}

impl UseAccountHandle {
    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn connected(&self) -> bool {
        self.account.is_connected()
    }

    pub fn authenticated(&self) -> bool {
        self.account.is_authenticated()
    }

    pub fn address(&self) -> Option<&str> {
        self.account.address.as_deref()
    }

    pub fn display_address(&self) -> String {
        self.account.display_address()
    }

    pub fn balance(&self) -> f64 {
        self.account.balance
    }

    pub fn has_session(&self) -> bool {
        self.manager.has_session()
    }

    pub fn connected_wallet(&self) -> Option<Rc<dyn WalletSession>> {
        self.manager.connected_wallet()
    }

    pub fn manager(&self) -> Rc<AccountManager> {
        self.manager.clone()
    }

    pub fn connect(&self, wallet: Rc<dyn WalletSession>) {
        let manager = self.manager.clone();
        spawn_local(async move {
            manager.connect(wallet).await;
        });
    }

    pub fn disconnect(&self) {
        let manager = self.manager.clone();
        spawn_local(async move {
            manager.disconnect().await;
        });
    }

    pub fn authenticate(&self) {
        self.manager.authenticate();
    }

    pub fn notify(&self, notification: Notification) {
        self.manager.notify(notification);
    }
}

/// Builds the manager on first render and restores the stored snapshot
/// once mounted.
#[hook]
pub fn use_account_state(config: AccountConfig, notifier: Rc<dyn Notifier>) -> UseAccountHandle {
    let account = use_state(Account::disconnected);

    let manager = {
        let account = account.clone();
        use_state(move || {
            let manager = AccountManager::new(
                Rc::new(LocalStorage),
                notifier,
                Rc::new(WalletSlot::new()),
            )
            .with_config(config);
            manager.subscribe(move |snapshot| account.set(snapshot.clone()));
            Rc::new(manager)
        })
    };

    {
        let manager = (*manager).clone();
        use_effect_with_deps(
            move |_| {
                manager.initialize();
                || ()
            },
            (),
        );
    }

    UseAccountHandle {
        manager: (*manager).clone(),
        account,
    }
}

#[hook]
pub fn use_account() -> UseAccountHandle {
    use_context::<UseAccountHandle>().expect(
        "no account provider found. you must wrap your components in an <AccountProvider/>",
    )
}
