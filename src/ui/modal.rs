//! Receipt preview modal.

use crate::views::escape;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Identifier of the receipt preview modal.
pub const MODAL_FILE_ID: &str = "modaleFile";

/// Image shown inside the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptImage {
    /// Receipt URL
    pub src: String,
    /// Display width in pixels
    pub width: u32,
}

/// Content of the receipt preview modal; empty when the bill has no receipt URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReceiptModal {
    /// Receipt image, if any
    pub image: Option<ReceiptImage>,
}

impl ReceiptModal {
    /// Markup for the modal.
    #[must_use]
    pub fn render(&self) -> String {
        let body = self.image.as_ref().map_or_else(String::new, |img| {
            format!(
                r#"<div style="text-align: center;" class="bill-proof-container"><img width="{}" src="{}" alt="Bill" /></div>"#,
                img.width,
                escape(&img.src)
            )
        });
        format!(
            r#"<div class="modal fade show" id="{MODAL_FILE_ID}" data-testid="{MODAL_FILE_ID}" role="dialog"><div class="modal-dialog modal-dialog-centered modal-lg"><div class="modal-content"><div class="modal-header"><h5 class="modal-title">Justificatif</h5></div><div class="modal-body">{body}</div></div></div></div>"#
        )
    }
}

/// Host able to display the receipt preview modal.
pub trait ModalHost: Send + Sync {
    /// Current width of the modal body in pixels.
    fn width(&self) -> u32;

    /// Opens the modal with the given content.
    fn show(&self, modal: ReceiptModal);
}

/// Modal host that keeps the currently open modal so the page can render it.
#[derive(Debug)]
pub struct ModalSlot {
    width: u32,
    open: Mutex<Option<ReceiptModal>>,
}

impl ModalSlot {
    /// Slot for a modal of the given width.
    #[must_use]
    pub const fn new(width: u32) -> Self {
        Self {
            width,
            open: Mutex::new(None),
        }
    }

    /// Currently open modal, if any.
    #[must_use]
    pub fn current(&self) -> Option<ReceiptModal> {
        self.open
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Closes the modal.
    pub fn close(&self) {
        *self.open.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl ModalHost for ModalSlot {
    fn width(&self) -> u32 {
        self.width
    }

    fn show(&self, modal: ReceiptModal) {
        debug!(has_image = modal.image.is_some(), "Opening receipt modal");
        *self.open.lock().unwrap_or_else(PoisonError::into_inner) = Some(modal);
    }
}
