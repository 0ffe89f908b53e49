use pay_button::controller::PayButtonController;
use pay_button::surface::PaymentSurface;
use pay_button::transport::HttpTransport;
use pay_button::types::TransactionReference;
use std::sync::{Arc, Mutex};

/// Surface fake for integration tests: the widget is always present and
/// navigations are recorded for assertions.
pub struct RecordingSurface {
    navigations: Mutex<Vec<String>>,
}

impl RecordingSurface {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            navigations: Mutex::new(Vec::new()),
        })
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }
}

impl PaymentSurface for RecordingSurface {
    fn show_widget(&self) -> bool {
        true
    }

    fn navigate(&self, url: &str) {
        self.navigations.lock().unwrap().push(url.to_string());
    }
}

/// Build a controller backed by the real HTTP transport, already armed.
pub fn armed_controller(
    gateway_url: &str,
    reference: &str,
    surface: Arc<RecordingSurface>,
) -> PayButtonController {
    let transport = Arc::new(HttpTransport::new(gateway_url));
    let controller =
        PayButtonController::new(transport, surface, TransactionReference::new(reference));
    controller.page_loaded();
    controller
}
