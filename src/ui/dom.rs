//! Element and event types handed to controllers explicitly.
//!
//! The host owns these values and passes them into the controller's handlers, so handlers
//! never go looking for elements on their own.

use crate::core::bill::{ExpenseType, ReceiptFile};
use std::collections::BTreeMap;

/// Attribute carrying the receipt URL on an eye icon.
pub const BILL_URL_ATTRIBUTE: &str = "data-bill-url";

/// Receipt file picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInput {
    files: Vec<ReceiptFile>,
    value: String,
    validation_message: Option<String>,
}

impl FileInput {
    /// Empty picker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the user choosing a file.
    pub fn select(&mut self, file: ReceiptFile) {
        self.value.clone_from(&file.name);
        self.files = vec![file];
    }

    /// Empties the picker, as setting its value to `""` does in a browser.
    pub fn clear(&mut self) {
        self.value.clear();
        self.files.clear();
    }

    /// Files currently selected.
    #[must_use]
    pub fn files(&self) -> &[ReceiptFile] {
        &self.files
    }

    /// Current input value (the selected file name, or empty).
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Message attached by the last failed validation, if any.
    #[must_use]
    pub fn validation_message(&self) -> Option<&str> {
        self.validation_message.as_deref()
    }

    /// Attaches or clears the validation message.
    pub fn set_validation_message(&mut self, message: Option<String>) {
        self.validation_message = message;
    }
}

/// Generic element exposing its attributes, e.g. the eye icon of a bill row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    attributes: BTreeMap<String, String>,
}

impl Element {
    /// Element without attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Eye icon pointing at a receipt URL.
    #[must_use]
    pub fn eye_icon(bill_url: Option<&str>) -> Self {
        let icon = Self::new().with_attribute("data-testid", "icon-eye");
        match bill_url {
            Some(url) => icon.with_attribute(BILL_URL_ATTRIBUTE, url),
            None => icon,
        }
    }

    /// Attribute lookup.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// `change` event fired by the receipt picker.
#[derive(Debug)]
pub struct ChangeEvent<'a> {
    /// Picker that fired the event
    pub target: &'a mut FileInput,
}

/// Values of the new-bill form fields, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBillForm {
    /// Selected category
    pub expense_type: ExpenseType,
    /// Expense name
    pub name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// Amount, unparsed
    pub amount: String,
    /// VAT amount, unparsed
    pub vat: String,
    /// VAT percentage, unparsed
    pub pct: String,
    /// Free-text commentary
    pub commentary: String,
}

impl Default for NewBillForm {
    fn default() -> Self {
        Self {
            expense_type: ExpenseType::Transport,
            name: String::new(),
            date: String::new(),
            amount: String::new(),
            vat: String::new(),
            pct: String::new(),
            commentary: String::new(),
        }
    }
}

/// `submit` event fired by the new-bill form.
#[derive(Debug)]
pub struct SubmitEvent<'a> {
    /// Submitted form
    pub form: &'a NewBillForm,
    default_prevented: bool,
}

impl<'a> SubmitEvent<'a> {
    /// Wraps a form submission.
    #[must_use]
    pub const fn new(form: &'a NewBillForm) -> Self {
        Self {
            form,
            default_prevented: false,
        }
    }

    /// Stops the host from performing its default form navigation.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a handler called [`Self::prevent_default`].
    #[must_use]
    pub const fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
