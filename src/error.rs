//! Error types for the wallet seam and the account manager.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures reported by a wallet session or the wallet lifecycle hooks.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum WalletError {
    #[error("No wallet provider available")]
    Unavailable,

    #[error("Request rejected by the wallet")]
    Rejected,

    #[error("{0}")]
    Rpc(String),

    #[error("{0}")]
    Lifecycle(String),
}

impl From<JsValue> for WalletError {
    fn from(value: JsValue) -> Self {
        WalletError::Rpc(js_message(&value))
    }
}

impl From<web3::Error> for WalletError {
    fn from(error: web3::Error) -> Self {
        match error {
            web3::Error::Unreachable => WalletError::Unavailable,
            web3::Error::Rpc(rpc) if rpc.code.code() == 4001 => WalletError::Rejected,
            web3::Error::Rpc(rpc) => WalletError::Rpc(rpc.message),
            web3::Error::Transport(web3::error::TransportError::Message(message))
            | web3::Error::InvalidResponse(message)
            | web3::Error::Decoder(message) => WalletError::Rpc(message),
            other => WalletError::Rpc(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("No account found")]
    NoAccount,

    #[error("No wallet connected")]
    NoWalletConnected,

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Storage is not available")]
    StorageUnavailable,

    #[error("Malformed account record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid account record: {0}")]
    InvalidSnapshot(String),
}

impl From<JsValue> for AccountError {
    fn from(value: JsValue) -> Self {
        AccountError::Storage(js_message(&value))
    }
}

/// Message of a thrown JS value: its `message` property when there is one,
/// otherwise the value's own string form.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Ok(message) = js_sys::Reflect::get(value, &JsValue::from_str("message")) {
        if let Some(message) = message.as_string() {
            return message;
        }
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use jsonrpc_core::{Error as RpcError, ErrorCode};
    use web3::error::TransportError;

    use super::*;

    fn rpc_error(code: i64, message: &str) -> web3::Error {
        web3::Error::Rpc(RpcError {
            code: ErrorCode::ServerError(code),
            message: message.to_string(),
            data: None,
        })
    }

    #[test]
    fn rpc_error_keeps_provider_message() {
        let error = WalletError::from(rpc_error(-32000, "insufficient funds"));
        assert_eq!(error, WalletError::Rpc("insufficient funds".to_string()));
        assert_eq!(
            AccountError::from(error).to_string(),
            "insufficient funds"
        );
    }

    #[test]
    fn user_rejection_maps_to_rejected() {
        assert_eq!(
            WalletError::from(rpc_error(4001, "User rejected the request.")),
            WalletError::Rejected
        );
    }

    #[test]
    fn transport_and_response_errors_keep_inner_text() {
        assert_eq!(
            WalletError::from(web3::Error::Transport(TransportError::Message(
                "provider disconnected".to_string()
            ))),
            WalletError::Rpc("provider disconnected".to_string())
        );
        assert_eq!(
            WalletError::from(web3::Error::InvalidResponse("empty body".to_string())),
            WalletError::Rpc("empty body".to_string())
        );
        assert_eq!(
            WalletError::from(web3::Error::Unreachable),
            WalletError::Unavailable
        );
    }
}
