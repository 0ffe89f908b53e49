/// The hosting page: whatever owns the payment widget and the browser
/// location. Production hosts bridge this to their rendering environment;
/// tests use an in-process fake.
pub trait PaymentSurface: Send + Sync {
    /// Reveal the payment widget. Returns `false` when the widget element
    /// is not present on the page, in which case the controller treats page
    /// load as a no-op.
    fn show_widget(&self) -> bool;

    /// Full-page redirect. The controller hands off here and never runs
    /// again in this page context.
    fn navigate(&self, url: &str);
}
