use crate::hooks::use_account;
use yew::prelude::*;

#[function_component]
pub fn AccountLabel() -> Html {
    let account = use_account();

    html! {
        <div>
            if account.connected() {
                {account.display_address()}
                {format!(" ({:.4})", account.balance())}
                if account.authenticated() {
                    {" ✓"}
                }
            } else {
                {"Disconnected"}
            }
        </div>
    }
}
