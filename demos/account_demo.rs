use std::rc::Rc;

use yew::prelude::*;
use yew_account_provider::components::{AccountLabel, ConnectButton};
use yew_account_provider::{use_account, AccountProvider, Notification};

#[function_component]
fn AuthenticateButton() -> Html {
    let account = use_account();
    let onclick = {
        let account = account.clone();
        Callback::from(move |_: MouseEvent| account.authenticate())
    };

    html! {
        <button {onclick} disabled={!account.connected() || account.authenticated()}>
            {"Sign in"}
        </button>
    }
}

#[derive(Default, PartialEq)]
struct Toasts(Vec<Notification>);

impl Reducible for Toasts {
    type Action = Notification;

    fn reduce(self: Rc<Self>, action: Notification) -> Rc<Self> {
        let mut toasts = self.0.clone();
        toasts.push(action);
        Rc::new(Toasts(toasts))
    }
}

#[function_component]
fn App() -> Html {
    // The provider keeps the first callback it sees, so dispatch through a reducer.
    let toasts = use_reducer(Toasts::default);
    let on_notify = {
        let toasts = toasts.clone();
        Callback::from(move |notification: Notification| toasts.dispatch(notification))
    };

    html! {
        <AccountProvider {on_notify}>
            <ConnectButton />
            <AuthenticateButton />
            <AccountLabel />
            <ul>
                {for toasts.0.iter().map(|toast| html! {
                    <li><strong>{toast.title.clone()}</strong>{" "}{toast.description.clone()}</li>
                })}
            </ul>
        </AccountProvider>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    yew::Renderer::<App>::new().render();
}
