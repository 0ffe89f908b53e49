use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier naming a specific payment transaction. The gateway
/// mints it when the transaction is created and it is substituted into the
/// request path verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionReference(String);

impl TransactionReference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionReference {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

/// Body returned by the gateway's transaction endpoint. Only `url` is
/// modeled; anything else in the payload is ignored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub url: Option<String>,
}

impl PaymentResponse {
    /// The redirect target, if the payload carries a non-empty one.
    pub fn redirect_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Lifecycle of the pay button's click handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    /// No handler attached; clicks are ignored. Initial state before the
    /// page has loaded.
    Detached,
    /// Handler attached; the next click starts a request.
    Enabled,
    /// A request is outstanding; the handler is detached until it settles.
    InFlight,
    /// The surface was handed a redirect. Terminal.
    Navigated,
}

/// How a click settled. Every variant except `Navigated` leaves the button
/// re-enabled.
#[derive(Debug)]
pub enum ClickOutcome {
    /// The button was not enabled, so the click did nothing.
    Ignored,
    /// The surface was told to navigate to this URL. Terminal.
    Navigated(String),
    /// The body parsed but carried no usable redirect URL.
    NoRedirect,
    /// The request failed or its body was not JSON.
    Failed(crate::errors::PayError),
}
