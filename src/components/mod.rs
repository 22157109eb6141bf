mod account_label;
mod connect_button;

pub use account_label::AccountLabel;
pub use connect_button::ConnectButton;
