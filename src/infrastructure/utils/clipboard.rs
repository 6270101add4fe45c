use derive_more::Display;

/// The system clipboard capability is missing or refused the write.
#[derive(Debug, Display, Clone, PartialEq)]
#[display("Clipboard unavailable")]
pub struct ClipboardUnavailable;

impl std::error::Error for ClipboardUnavailable {}

/// Asynchronous system clipboard.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardUnavailable>;
}

/// Legacy path: place the text in a hidden field, select it and run the copy command.
pub trait ManualCopy {
    fn copy_via_hidden_field(&self, text: &str);
}

/// How the text ended up on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Clipboard,
    Fallback,
}

/// Writes `text` with the clipboard when there is one, otherwise with the fallback.
pub fn copy_with_fallback(
    clipboard: Option<&dyn Clipboard>,
    fallback: &dyn ManualCopy,
    text: &str,
) -> CopyMethod {
    match clipboard.map(|c| c.write_text(text)) {
        Some(Ok(())) => CopyMethod::Clipboard,
        Some(Err(e)) => {
            tracing::debug!("{}, using manual copy", e);
            fallback.copy_via_hidden_field(text);
            CopyMethod::Fallback
        }
        None => {
            fallback.copy_via_hidden_field(text);
            CopyMethod::Fallback
        }
    }
}
