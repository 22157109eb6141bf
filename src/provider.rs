use std::rc::Rc;

use yew::prelude::*;

use crate::config::AccountConfig;
use crate::hooks::{use_account_state, UseAccountHandle};
use crate::notifier::{CallbackNotifier, LogNotifier, Notification, Notifier};

#[derive(Properties, PartialEq)]
pub struct AccountProviderProps {
    #[prop_or_default]
    pub children: Children,
    /// Read once, when the provider mounts.
    #[prop_or_default]
    pub config: AccountConfig,
    /// Receives failure messages; they are logged when unset.
    #[prop_or_default]
    pub on_notify: Option<Callback<Notification>>,
}

#[function_component]
pub fn AccountProvider(props: &AccountProviderProps) -> Html {
    let notifier: Rc<dyn Notifier> = match &props.on_notify {
        Some(callback) => Rc::new(CallbackNotifier(callback.clone())),
        None => Rc::new(LogNotifier),
    };
    let account = use_account_state(props.config.clone(), notifier);

    html! {
        <ContextProvider<UseAccountHandle> context={account}>
            {for props.children.iter()}
        </ContextProvider<UseAccountHandle>>
    }
}
