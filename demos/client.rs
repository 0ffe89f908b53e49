use pay_button::controller::PayButtonController;
use pay_button::surface::PaymentSurface;
use pay_button::transport::HttpTransport;
use pay_button::types::{ClickOutcome, TransactionReference};
use std::env;
use std::sync::Arc;

/// Console stand-in for the hosting page.
struct ConsoleSurface;

impl PaymentSurface for ConsoleSurface {
    fn show_widget(&self) -> bool {
        println!("Payment widget revealed");
        true
    }

    fn navigate(&self, url: &str) {
        println!("Navigating to {url}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let gateway_url =
        env::var("GATEWAY_URL").unwrap_or_else(|_| "http://0.0.0.0:8080".to_string());
    let reference = env::args()
        .nth(1)
        .expect("usage: client <transaction-reference>");

    let transport = Arc::new(HttpTransport::new(&gateway_url));
    let controller = PayButtonController::new(
        transport,
        Arc::new(ConsoleSurface),
        TransactionReference::new(reference),
    );

    controller.page_loaded();

    match controller.click().await {
        ClickOutcome::Navigated(url) => println!("Payment accepted, redirect: {url}"),
        ClickOutcome::NoRedirect => println!("Gateway returned no redirect URL"),
        ClickOutcome::Failed(e) => println!("Payment failed: {e}"),
        ClickOutcome::Ignored => println!("Button was not armed"),
    }

    Ok(())
}
