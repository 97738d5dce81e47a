//! User-facing report of a fatal start-up error.

use rfd::{MessageButtons, MessageDialog, MessageLevel};
use waste_core::InitError;

/// Print the error and show it in a native message box titled `title`.
pub fn init_error(title: &str, err: &InitError) {
    let message = err.to_string();
    tracing::error!(exit_code = err.exit_code(), "{}", message);
    eprintln!("{message}");

    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(&message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
