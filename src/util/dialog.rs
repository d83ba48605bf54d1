//! Blocking browser dialogs for user-initiated failures and confirmations.
//!
//! Native builds have no window: alerts are logged and confirmations are
//! declined so destructive actions never run unattended.

/// Show a blocking alert.
pub fn alert(message: &str) {
    log::warn!("alert: {message}");
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Ask the user to confirm an action.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
