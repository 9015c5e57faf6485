pub mod book;
pub mod completions;
pub mod config;
pub mod questions;
pub mod run;
pub mod score;

use flowdiag_core::storage::BookingConfig;
use flowdiag_core::BookingLink;

/// Booking link for the results view. A bad link drops the call to action
/// with a warning rather than failing the command.
pub(crate) fn booking_or_warn(config: &BookingConfig) -> Option<BookingLink> {
    BookingLink::from_config(config)
        .inspect_err(|e| {
            tracing::warn!(error = %e, "booking link unavailable, skipping call to action")
        })
        .ok()
}
