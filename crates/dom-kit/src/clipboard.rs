//! Clipboard copy.
//!
//! Mirrors the usual copy-an-input-field flow: read the field's content,
//! put it on the OS clipboard, fire a success callback. Failures go to the
//! tracing sink rather than the caller.

use thiserror::Error;

use crate::dom::{Document, ElemRef};

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
    #[error("ELEMENT_NOT_FOUND: {0}")]
    FieldNotFound(String),
}

/// Put `text` on the OS clipboard.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_owned())?;
    Ok(())
}

/// Read an input element's `value` attribute — its selectable content.
/// An input with no `value` reads as empty.
pub fn selected_text(doc: &Document, field: ElemRef<'_>) -> Result<String, ClipboardError> {
    let id = doc
        .resolve(field)
        .ok_or_else(|| ClipboardError::FieldNotFound(field.to_string()))?;
    Ok(doc.element(id).attr("value").unwrap_or_default().to_owned())
}

/// Copy an input field's content to the clipboard.
///
/// Calls `on_success` once the text lands on the clipboard. A missing
/// field or an unavailable clipboard is logged via `tracing::error!` and
/// otherwise swallowed; nothing is returned to the caller.
pub fn copy_to_clipboard<F: FnOnce()>(doc: &Document, field: ElemRef<'_>, on_success: F) {
    let text = match selected_text(doc, field) {
        Ok(text) => text,
        Err(err) => {
            tracing::error!(%err, "unable to copy text");
            return;
        }
    };
    match copy_text(&text) {
        Ok(()) => on_success(),
        Err(err) => tracing::error!(%err, "unable to copy text"),
    }
}
