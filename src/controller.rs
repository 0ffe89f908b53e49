use crate::surface::PaymentSurface;
use crate::transport::TransactionTransport;
use crate::types::{ButtonState, ClickOutcome, TransactionReference};
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::warn;

const DETACHED: u8 = 0;
const ENABLED: u8 = 1;
const IN_FLIGHT: u8 = 2;
const NAVIGATED: u8 = 3;

/// Wires the pay button to the gateway: at most one request in flight,
/// redirect on a usable response, log and re-arm on everything else.
pub struct PayButtonController {
    transport: Arc<dyn TransactionTransport>,
    surface: Arc<dyn PaymentSurface>,
    reference: TransactionReference,
    state: AtomicU8,
}

/// Restores the button to `Enabled` when the in-flight request settles,
/// on every path except the terminal redirect. Holding re-arming in a drop
/// guard keeps the button usable even if the transport panics.
struct InFlightGuard<'a> {
    state: &'a AtomicU8,
    armed: bool,
}

impl<'a> InFlightGuard<'a> {
    fn new(state: &'a AtomicU8) -> Self {
        Self { state, armed: true }
    }

    /// The redirect was handed off; the button never re-arms.
    fn navigated(mut self) {
        self.state.store(NAVIGATED, Ordering::SeqCst);
        self.armed = false;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.state.store(ENABLED, Ordering::SeqCst);
        }
    }
}

impl PayButtonController {
    pub fn new(
        transport: Arc<dyn TransactionTransport>,
        surface: Arc<dyn PaymentSurface>,
        reference: TransactionReference,
    ) -> Self {
        Self {
            transport,
            surface,
            reference,
            state: AtomicU8::new(DETACHED),
        }
    }

    /// Page-load hook: reveal the widget and arm the button. Effective at
    /// most once; a silent no-op when the surface reports the widget
    /// absent or the button is already armed.
    pub fn page_loaded(&self) {
        if self.state.load(Ordering::SeqCst) != DETACHED {
            return;
        }
        if !self.surface.show_widget() {
            return;
        }
        let _ = self
            .state
            .compare_exchange(DETACHED, ENABLED, Ordering::SeqCst, Ordering::SeqCst);
    }

    /// Click hook. Detaches the handler synchronously, before any await,
    /// so a second click during the request is ignored rather than
    /// starting a second submission.
    pub async fn click(&self) -> ClickOutcome {
        if self
            .state
            .compare_exchange(ENABLED, IN_FLIGHT, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return ClickOutcome::Ignored;
        }
        let guard = InFlightGuard::new(&self.state);

        match self.transport.submit(&self.reference).await {
            Ok(response) => match response.redirect_url() {
                Some(url) => {
                    let url = url.to_string();
                    self.surface.navigate(&url);
                    guard.navigated();
                    ClickOutcome::Navigated(url)
                }
                None => {
                    warn!("Invalid response format");
                    drop(guard);
                    ClickOutcome::NoRedirect
                }
            },
            Err(e) => {
                warn!("Payment request failed: {}", e);
                drop(guard);
                ClickOutcome::Failed(e)
            }
        }
    }

    pub fn state(&self) -> ButtonState {
        match self.state.load(Ordering::SeqCst) {
            ENABLED => ButtonState::Enabled,
            IN_FLIGHT => ButtonState::InFlight,
            NAVIGATED => ButtonState::Navigated,
            _ => ButtonState::Detached,
        }
    }
}
