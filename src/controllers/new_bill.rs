//! New bill controller.
//!
//! Validates the receipt chosen in the file picker, remembers the last valid one and, on
//! submit, sends the completed draft to the store before returning to the bills list.
//! Navigation never waits for the store: the create call runs as a spawned task whose
//! failure is logged and can be observed through [`PendingSubmission`].

use crate::{
    core::{
        bill::{Bill, BillStatus, NewBill, ReceiptFile},
        format::parse_bill_date,
        receipt::validate_receipt_name,
        session::Session,
        store::{BillStore, StoreResult},
    },
    ui::{
        dom::{ChangeEvent, NewBillForm, SubmitEvent},
        navigator::{Navigator, Route},
        notify::Notifier,
    },
};
use std::sync::Arc;
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, error, info, warn};

/// VAT percentage used when the form leaves it empty or zero.
pub const DEFAULT_VAT_PCT: u32 = 20;

/// Alert raised when the form is submitted without a valid date.
pub const INVALID_DATE_MESSAGE: &str = "Veuillez saisir une date valide.";

/// Collaborators the new-bill controller is built from.
pub struct NewBillDependencies {
    /// View switcher
    pub navigator: Arc<dyn Navigator>,
    /// Bill store; `None` skips persistence but still navigates
    pub store: Option<Arc<dyn BillStore>>,
    /// Signed-in user
    pub session: Session,
    /// Blocking alerts
    pub notifier: Arc<dyn Notifier>,
}

/// Create call still in flight after the controller navigated away.
#[derive(Debug)]
pub struct PendingSubmission {
    handle: JoinHandle<StoreResult<Bill>>,
}

impl PendingSubmission {
    /// Waits for the store's answer. `None` if the task was cancelled or panicked.
    pub async fn outcome(self) -> Option<StoreResult<Bill>> {
        self.handle
            .await
            .inspect_err(|e| error!(error = %e, "Bill submission task did not complete"))
            .ok()
    }
}

/// Controller behind the new-bill form.
pub struct NewBillController {
    navigator: Arc<dyn Navigator>,
    store: Option<Arc<dyn BillStore>>,
    notifier: Arc<dyn Notifier>,
    email: String,
    receipt: Option<ReceiptFile>,
}

impl NewBillController {
    /// Binds the controller; the session email is captured once here.
    #[must_use]
    pub fn new(deps: NewBillDependencies) -> Self {
        Self {
            navigator: deps.navigator,
            store: deps.store,
            notifier: deps.notifier,
            email: deps.session.email,
            receipt: None,
        }
    }

    /// Last receipt that passed validation.
    #[must_use]
    pub const fn receipt(&self) -> Option<&ReceiptFile> {
        self.receipt.as_ref()
    }

    /// Validates the first selected file.
    ///
    /// A jpg/jpeg/png file is kept for submission. Anything else raises an alert and empties
    /// the picker; the previously kept receipt, if any, is left untouched. A cancelled
    /// picker (no file) is ignored.
    pub fn handle_change_file(&mut self, event: ChangeEvent<'_>) {
        let input = event.target;
        let Some(file) = input.files().first().cloned() else {
            debug!("File picker closed without a selection");
            return;
        };

        match validate_receipt_name(&file.name) {
            Ok(()) => {
                debug!(file_name = %file.name, size = file.content.len(), "Receipt accepted");
                input.set_validation_message(None);
                self.receipt = Some(file);
            }
            Err(e) => {
                warn!(file_name = %file.name, "Receipt rejected");
                let message = e.to_string();
                self.notifier.alert(&message);
                input.set_validation_message(Some(message));
                input.clear();
            }
        }
    }

    /// Builds the draft the form currently describes.
    #[must_use]
    pub fn draft(&self, form: &NewBillForm) -> NewBill {
        NewBill {
            email: self.email.clone(),
            expense_type: form.expense_type,
            name: form.name.trim().to_string(),
            amount: parse_amount(&form.amount),
            date: form.date.trim().to_string(),
            vat: parse_optional_number(&form.vat),
            pct: Some(parse_pct(&form.pct)),
            commentary: Some(form.commentary.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            file_name: self.receipt.as_ref().map(|r| r.name.clone()),
            status: BillStatus::Pending,
        }
    }

    /// Submits the form and returns to the bills list without waiting for the store.
    ///
    /// A form without a valid `YYYY-MM-DD` date is not submitted: the user is alerted and
    /// stays on the form. Otherwise returns the in-flight create call when a store is
    /// configured and a Tokio runtime is available to run it.
    pub fn handle_submit(&self, event: &mut SubmitEvent<'_>) -> Option<PendingSubmission> {
        event.prevent_default();
        if parse_bill_date(&event.form.date).is_none() {
            warn!(date = %event.form.date, "Bill form submitted without a valid date");
            self.notifier.alert(INVALID_DATE_MESSAGE);
            return None;
        }
        let draft = self.draft(event.form);

        let pending = self.store.as_ref().and_then(|store| {
            let Ok(runtime) = Handle::try_current() else {
                error!(name = %draft.name, "No async runtime available, bill was not submitted");
                return None;
            };
            let store = Arc::clone(store);
            let receipt = self.receipt.clone();
            Some(PendingSubmission {
                handle: runtime.spawn(submit(store, draft, receipt)),
            })
        });

        self.navigator.navigate(Route::Bills);
        pending
    }
}

async fn submit(
    store: Arc<dyn BillStore>,
    draft: NewBill,
    receipt: Option<ReceiptFile>,
) -> StoreResult<Bill> {
    let name = draft.name.clone();
    store
        .create(draft, receipt)
        .await
        .inspect(|bill| info!(bill_id = %bill.id, name = %name, "Bill submitted"))
        .inspect_err(|e| error!(name = %name, error = %e, "Bill submission failed"))
}

fn parse_optional_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .or_else(|| {
            warn!(value = raw, "Ignoring non-numeric form value");
            None
        })
}

fn parse_amount(raw: &str) -> Option<f64> {
    parse_optional_number(raw).filter(|amount| {
        let valid = *amount >= 0.0;
        if !valid {
            warn!(amount, "Ignoring negative amount");
        }
        valid
    })
}

fn parse_pct(raw: &str) -> u32 {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|pct| *pct != 0)
        .unwrap_or(DEFAULT_VAT_PCT)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::{
        core::{
            bill::ExpenseType,
            format::format_bills,
            receipt::ReceiptError,
            store::{MockBillStore, StoreError},
        },
        store::SqliteBillStore,
        test_utils::{
            InMemoryStore, RecordingNavigator, RecordingNotifier, employee_session,
            init_test_tracing, setup_test_db,
        },
        ui::dom::FileInput,
    };

    const REJECTED: &str = "Seuls les fichiers .jpg, .jpeg et .png sont autorisés.";

    struct Harness {
        controller: NewBillController,
        navigator: Arc<RecordingNavigator>,
        notifier: Arc<RecordingNotifier>,
    }

    fn harness(store: Option<Arc<dyn BillStore>>) -> Harness {
        let navigator = Arc::new(RecordingNavigator::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let controller = NewBillController::new(NewBillDependencies {
            navigator: Arc::clone(&navigator) as Arc<dyn Navigator>,
            store,
            session: employee_session(),
            notifier: Arc::clone(&notifier) as Arc<dyn Notifier>,
        });
        Harness {
            controller,
            navigator,
            notifier,
        }
    }

    fn filled_form() -> NewBillForm {
        NewBillForm {
            expense_type: ExpenseType::Lodging,
            name: "Hôtel Paris".to_string(),
            date: "2023-04-12".to_string(),
            amount: "348".to_string(),
            vat: "70".to_string(),
            pct: String::new(),
            commentary: "séminaire".to_string(),
        }
    }

    fn pick(h: &mut Harness, input: &mut FileInput, name: &str) {
        input.select(ReceiptFile::new(name, b"test".to_vec()));
        h.controller.handle_change_file(ChangeEvent { target: input });
    }

    #[test]
    fn test_valid_receipt_is_kept_without_alert() {
        let mut h = harness(None);
        let mut input = FileInput::new();

        pick(&mut h, &mut input, "test.jpg");

        assert!(h.notifier.messages().is_empty());
        assert_eq!(input.files()[0].name, "test.jpg");
        assert_eq!(h.controller.receipt().unwrap().name, "test.jpg");
        assert_eq!(input.validation_message(), None);
    }

    #[test]
    fn test_uppercase_pdf_is_rejected_and_input_cleared() {
        let mut h = harness(None);
        let mut input = FileInput::new();

        pick(&mut h, &mut input, "test.PDF");

        assert_eq!(h.notifier.messages(), vec![REJECTED.to_string()]);
        assert_eq!(input.value(), "");
        assert!(input.files().is_empty());
        assert_eq!(input.validation_message(), Some(REJECTED));
        assert!(h.controller.receipt().is_none());
    }

    #[test]
    fn test_rejection_keeps_previous_receipt_and_acceptance_clears_message() {
        let mut h = harness(None);
        let mut input = FileInput::new();

        pick(&mut h, &mut input, "first.png");
        pick(&mut h, &mut input, "notes.txt");
        assert_eq!(h.controller.receipt().unwrap().name, "first.png");
        assert!(input.validation_message().is_some());

        pick(&mut h, &mut input, "second.jpeg");
        assert_eq!(h.controller.receipt().unwrap().name, "second.jpeg");
        assert_eq!(input.validation_message(), None);
    }

    #[test]
    fn test_selecting_same_file_twice_is_idempotent() {
        let mut h = harness(None);
        let mut input = FileInput::new();

        pick(&mut h, &mut input, "test.jpg");
        let once = h.controller.receipt().cloned();
        pick(&mut h, &mut input, "test.jpg");

        assert_eq!(h.controller.receipt().cloned(), once);
    }

    #[test]
    fn test_cancelled_picker_is_a_no_op() {
        let mut h = harness(None);
        let mut input = FileInput::new();

        h.controller.handle_change_file(ChangeEvent { target: &mut input });

        assert!(h.notifier.messages().is_empty());
        assert!(h.controller.receipt().is_none());
    }

    #[test]
    fn test_draft_parsing() {
        let h = harness(None);
        let draft = h.controller.draft(&filled_form());

        assert_eq!(draft.email, employee_session().email);
        assert_eq!(draft.amount, Some(348.0));
        assert_eq!(draft.vat, Some(70.0));
        assert_eq!(draft.pct, Some(DEFAULT_VAT_PCT));
        assert_eq!(draft.commentary.as_deref(), Some("séminaire"));
        assert_eq!(draft.status, BillStatus::Pending);
        assert_eq!(draft.file_name, None);

        let odd = NewBillForm {
            amount: "-12".to_string(),
            vat: "abc".to_string(),
            pct: "10".to_string(),
            commentary: "   ".to_string(),
            ..filled_form()
        };
        let draft = h.controller.draft(&odd);
        assert_eq!(draft.amount, None);
        assert_eq!(draft.vat, None);
        assert_eq!(draft.pct, Some(10));
        assert_eq!(draft.commentary, None);
    }

    #[test]
    fn test_submit_without_store_still_navigates() {
        let h = harness(None);
        let form = filled_form();
        let mut event = SubmitEvent::new(&form);

        let pending = h.controller.handle_submit(&mut event);

        assert!(pending.is_none());
        assert!(event.is_default_prevented());
        assert_eq!(h.navigator.routes(), vec![Route::Bills]);
    }

    #[tokio::test]
    async fn test_submit_sends_receipt_name_to_store() {
        init_test_tracing();
        let mut store = MockBillStore::new();
        store
            .expect_create()
            .withf(|draft: &NewBill, receipt: &Option<ReceiptFile>| {
                draft.file_name.as_deref() == Some("test.jpg")
                    && receipt.as_ref().is_some_and(|r| r.name == "test.jpg")
                    && draft.status == BillStatus::Pending
            })
            .times(1)
            .returning(|draft, _| {
                Ok(Bill {
                    id: "1".to_string(),
                    email: draft.email,
                    expense_type: draft.expense_type,
                    name: draft.name,
                    amount: draft.amount,
                    date: draft.date,
                    vat: draft.vat,
                    pct: draft.pct,
                    commentary: draft.commentary,
                    file_url: Some("/receipts/1/test.jpg".to_string()),
                    file_name: draft.file_name,
                    status: BillStatus::Pending,
                })
            });

        let mut h = harness(Some(Arc::new(store)));
        let mut input = FileInput::new();
        pick(&mut h, &mut input, "test.jpg");

        let form = filled_form();
        let pending = h.controller.handle_submit(&mut SubmitEvent::new(&form));

        assert_eq!(h.navigator.routes(), vec![Route::Bills]);
        let bill = pending.unwrap().outcome().await.unwrap().unwrap();
        assert_eq!(bill.file_name.as_deref(), Some("test.jpg"));
    }

    #[tokio::test]
    async fn test_submit_failure_does_not_block_navigation() {
        let mut store = MockBillStore::new();
        store
            .expect_create()
            .returning(|_, _| Err(StoreError::Http { status: 500 }));

        let h = harness(Some(Arc::new(store)));
        let form = filled_form();
        let pending = h.controller.handle_submit(&mut SubmitEvent::new(&form));

        assert_eq!(h.navigator.routes(), vec![Route::Bills]);
        let outcome = pending.unwrap().outcome().await.unwrap();
        assert_eq!(outcome.unwrap_err().to_string(), "Erreur 500");
    }

    #[tokio::test]
    async fn test_submitted_bill_shows_up_in_store() {
        let store = Arc::new(InMemoryStore::default());
        let mut h = harness(Some(Arc::clone(&store) as Arc<dyn BillStore>));
        let mut input = FileInput::new();
        pick(&mut h, &mut input, "receipt.png");

        let form = filled_form();
        let pending = h.controller.handle_submit(&mut SubmitEvent::new(&form));
        pending.unwrap().outcome().await.unwrap().unwrap();

        let stored = store.list().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].file_name.as_deref(), Some("receipt.png"));
        assert_eq!(stored[0].email, employee_session().email);
    }

    #[test]
    fn test_submit_without_date_alerts_and_stays_on_form() {
        let mut store = MockBillStore::new();
        store.expect_create().times(0);
        let h = harness(Some(Arc::new(store)));

        for date in ["", "  ", "12/04/2023", "2023-02-30"] {
            let form = NewBillForm {
                name: "Taxi".to_string(),
                amount: "30".to_string(),
                date: date.to_string(),
                ..NewBillForm::default()
            };
            let mut event = SubmitEvent::new(&form);

            assert!(h.controller.handle_submit(&mut event).is_none());
            assert!(event.is_default_prevented());
        }

        assert!(h.navigator.routes().is_empty());
        assert_eq!(h.notifier.messages(), vec![INVALID_DATE_MESSAGE.to_string(); 4]);
    }

    #[tokio::test]
    async fn test_submitted_bill_is_listed_from_sqlite() {
        init_test_tracing();
        let db = setup_test_db().await.unwrap();
        let store: Arc<dyn BillStore> = Arc::new(SqliteBillStore::new(db));
        let h = harness(Some(Arc::clone(&store)));

        let undated = NewBillForm {
            name: "Taxi".to_string(),
            amount: "30".to_string(),
            ..NewBillForm::default()
        };
        assert!(h.controller.handle_submit(&mut SubmitEvent::new(&undated)).is_none());

        let dated = NewBillForm {
            date: "2024-1-5".to_string(),
            ..undated
        };
        let pending = h.controller.handle_submit(&mut SubmitEvent::new(&dated));
        pending.unwrap().outcome().await.unwrap().unwrap();

        let listed = format_bills(store.list().await.unwrap());
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].bill.name, "Taxi");
        assert_eq!(listed[0].display_date.as_str(), "5 Jan. 24");
        assert_eq!(h.navigator.routes(), vec![Route::Bills]);
    }

    #[test]
    fn test_rejection_message_matches_receipt_error() {
        let err = ReceiptError::UnsupportedExtension {
            file_name: "x.gif".to_string(),
        };
        assert_eq!(err.to_string(), REJECTED);
    }
}
