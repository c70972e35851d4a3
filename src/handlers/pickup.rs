use rand::Rng;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::clock::Clock;
use crate::config::Timings;
use crate::error::{AppError, FormReport};
use crate::handlers::lock;
use crate::handlers::navigator::Navigator;
use crate::handlers::notifier::Notifier;
use crate::models::fee::{FeeQuote, FeeSelection};
use crate::models::field::{FieldVerdict, PickupField};
use crate::models::notification::Notification;
use crate::models::pickup::PickupForm;
use crate::models::timeslot::SlotAvailability;
use crate::models::tracking::TrackingCode;
use crate::validation::constants::{DATE_FORMAT, NO_ITEMS_SELECTED};
use crate::validation::formatter::{format_phone, format_zip};
use crate::validation::validator::{ValidationContext, parse_date, validate_pickup_field};

/// What the simulated backend hands back once a request settles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub tracking_code: TrackingCode,
    pub redirect_to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    /// A settled page accepts a new submission
    Settled { receipt: Receipt },
}

#[derive(Debug, Default)]
struct PickupState {
    form: PickupForm,
    /// At most one error indicator per field
    errors: BTreeMap<PickupField, String>,
    slots: Option<SlotAvailability>,
    fee: FeeQuote,
    submission: SubmissionState,
    /// Bumped on every accepted submission
    generation: u64,
    redirected_to: Option<String>,
}

impl PickupState {
    fn record(&mut self, field: PickupField, verdict: &FieldVerdict) {
        match &verdict.message {
            Some(message) if !verdict.valid => {
                self.errors.insert(field, message.clone());
            }
            _ => {
                self.errors.remove(&field);
            }
        }
    }

    fn reset_form(&mut self) {
        self.form = PickupForm::default();
        self.errors.clear();
        self.slots = None;
        self.fee = FeeQuote::default();
    }

    /// Stores the date, offers its slots and drops a chosen time it lacks
    fn replace_slots(&mut self, raw: &str, availability: &SlotAvailability) {
        self.form.set(PickupField::PickupDate, raw);
        self.errors.remove(&PickupField::PickupDate);

        let chosen = self.form.value(PickupField::PickupTime).to_string();
        if !chosen.is_empty() && !availability.offers(&chosen) {
            self.form.clear(PickupField::PickupTime);
        }
        self.slots = Some(availability.clone());
    }
}

struct PickupInner {
    timings: Timings,
    clock: Arc<dyn Clock>,
    notifier: Notifier,
    navigator: Arc<dyn Navigator>,
    state: Mutex<PickupState>,
    issued: Mutex<HashSet<TrackingCode>>,
}

/// Controller behind the pickup-request page
#[derive(Clone)]
pub struct PickupPage {
    inner: Arc<PickupInner>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupView {
    pub form: PickupForm,
    pub errors: BTreeMap<PickupField, String>,
    pub min_date: String,
    pub slots: Option<SlotAvailability>,
    pub fee: FeeQuote,
    pub submission: SubmissionState,
    pub notification: Option<Notification>,
    pub redirected_to: Option<String>,
}

/// A submission in flight. Settles at most once.
#[derive(Debug)]
pub struct PendingSubmission {
    receiver: Option<oneshot::Receiver<Receipt>>,
    receipt: Option<Receipt>,
    handle: JoinHandle<()>,
    generation: u64,
    page: PickupPage,
}

impl PendingSubmission {
    /// Waits for the receipt; later calls return the same receipt
    pub async fn settled(&mut self) -> Result<Receipt, AppError> {
        if let Some(receipt) = &self.receipt {
            return Ok(receipt.clone());
        }

        let receiver = self.receiver.take().ok_or(AppError::SubmissionCancelled)?;
        let receipt = receiver.await.map_err(|_| AppError::SubmissionCancelled)?;
        self.receipt = Some(receipt.clone());
        Ok(receipt)
    }

    /// Stops the submission, or the redirect if it already settled.
    /// A newer submission in flight is left alone.
    pub fn cancel(self) {
        self.handle.abort();
        let mut state = lock(&self.page.inner.state);
        if state.submission == SubmissionState::Submitting && state.generation == self.generation {
            state.submission = SubmissionState::Idle;
        }
    }
}

impl std::fmt::Debug for PickupPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickupPage").finish_non_exhaustive()
    }
}

impl PickupPage {
    pub fn new(timings: Timings, clock: Arc<dyn Clock>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            inner: Arc::new(PickupInner {
                timings,
                clock,
                notifier: Notifier::new(timings.notification_ttl),
                navigator,
                state: Mutex::new(PickupState::default()),
                issued: Mutex::new(HashSet::new()),
            }),
        }
    }

    /// Keystroke in `field`: clears its error and reformats phone and ZIP
    pub fn input(&self, field: PickupField, raw: &str) -> Result<String, AppError> {
        if field == PickupField::PickupDate {
            self.select_date(raw)?;
            return Ok(raw.to_string());
        }

        let value = match field {
            PickupField::Phone => format_phone(raw),
            PickupField::ZipCode => format_zip(raw),
            _ => raw.to_string(),
        };

        let mut state = lock(&self.inner.state);
        state.errors.remove(&field);
        state.form.set(field, value.clone());
        Ok(value)
    }

    /// Focus left `field`; `value` replaces the stored one when given
    pub fn blur(&self, field: PickupField, value: Option<&str>) -> FieldVerdict {
        let today = self.inner.clock.today();
        let mut state = lock(&self.inner.state);

        match (field, value) {
            (PickupField::PickupDate, Some(value)) => match parse_date(value.trim()) {
                Some(date) => state.replace_slots(value.trim(), &SlotAvailability::for_date(date)),
                None => state.form.set(field, value),
            },
            (_, Some(value)) => state.form.set(field, value),
            (_, None) => {}
        }

        let ctx = ValidationContext::new(today).with_slots(state.slots.as_ref());
        let verdict = validate_pickup_field(field, state.form.value(field), &ctx);
        state.record(field, &verdict);
        verdict
    }

    /// Replaces the offered slots; drops the chosen time if no longer offered
    pub fn select_date(&self, raw: &str) -> Result<SlotAvailability, AppError> {
        let date = parse_date(raw.trim()).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?;
        let availability = SlotAvailability::for_date(date);

        lock(&self.inner.state).replace_slots(raw.trim(), &availability);
        Ok(availability)
    }

    pub fn select_services(&self, selection: FeeSelection) -> FeeQuote {
        let quote = FeeQuote::for_selection(selection);
        {
            let mut state = lock(&self.inner.state);
            state.form.services = selection;
            state.fee = quote.clone();
        }

        if let Some(summary) = quote.summary() {
            self.inner.notifier.info(summary);
        }
        quote
    }

    pub fn select_items<I, S>(&self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items: BTreeSet<String> = items
            .into_iter()
            .map(|item| item.as_ref().trim().to_string())
            .filter(|item| !item.is_empty())
            .collect();
        lock(&self.inner.state).form.items = items;
    }

    /// Checks every required field and the item selection
    pub fn validate_form(&self) -> FormReport {
        let today = self.inner.clock.today();
        let report = {
            let mut state = lock(&self.inner.state);
            let mut report = FormReport {
                items_selected: !state.form.items.is_empty(),
                ..FormReport::default()
            };

            for field in PickupField::ALL.into_iter().filter(PickupField::required) {
                let ctx = ValidationContext::new(today).with_slots(state.slots.as_ref());
                let verdict = validate_pickup_field(field, state.form.value(field), &ctx);
                state.record(field, &verdict);
                report.fields.insert(field, verdict);
            }
            report
        };

        if !report.items_selected {
            self.inner.notifier.error(NO_ITEMS_SELECTED);
        }
        report
    }

    /// idle/settled -> submitting; the spawned task later settles the request
    pub fn submit(&self) -> Result<PendingSubmission, AppError> {
        if self.submission_state() == SubmissionState::Submitting {
            return Err(AppError::SubmissionInProgress);
        }

        let report = self.validate_form();
        if !report.is_valid() {
            let invalid: Vec<_> = report.invalid_fields().map(|f| f.name()).collect();
            info!(?invalid, items_selected = report.items_selected, "pickup request rejected");
            return Err(AppError::FormRejected(report));
        }

        let generation = {
            let mut state = lock(&self.inner.state);
            if state.submission == SubmissionState::Submitting {
                return Err(AppError::SubmissionInProgress);
            }
            state.submission = SubmissionState::Submitting;
            state.generation += 1;
            state.generation
        };
        info!(generation, "pickup request accepted");

        let (tx, rx) = oneshot::channel();
        let page = self.clone();
        let handle = tokio::spawn(async move { page.run_submission(tx).await });

        Ok(PendingSubmission {
            receiver: Some(rx),
            receipt: None,
            handle,
            generation,
            page: self.clone(),
        })
    }

    async fn run_submission(self, tx: oneshot::Sender<Receipt>) {
        let timings = self.inner.timings;
        tokio::time::sleep(timings.submit_delay).await;

        let tracking_code = self.issue_tracking_code();
        let receipt = Receipt {
            redirect_to: tracking_code.tracking_location(),
            tracking_code,
        };

        self.inner.notifier.success(format!(
            "Pickup request submitted successfully! Your tracking number is: {}",
            receipt.tracking_code
        ));
        {
            let mut state = lock(&self.inner.state);
            state.reset_form();
            state.submission = SubmissionState::Settled {
                receipt: receipt.clone(),
            };
        }
        info!(tracking_code = %receipt.tracking_code, "pickup request settled");

        // nobody may be waiting on the receipt
        let _ = tx.send(receipt.clone());

        tokio::time::sleep(timings.pickup_redirect_delay).await;
        self.inner.navigator.navigate(&receipt.redirect_to);
        lock(&self.inner.state).redirected_to = Some(receipt.redirect_to);
    }

    /// Fresh code per submission; the random suffix is walked on collision
    fn issue_tracking_code(&self) -> TrackingCode {
        let now = self.inner.clock.now_millis();
        let mut rng = rand::thread_rng();
        let mut issued = lock(&self.inner.issued);

        let code = TrackingCode::generate(now, &mut rng);
        if issued.insert(code.clone()) {
            return code;
        }

        let start: u16 = rng.gen_range(0..1000);
        for step in 0..1000 {
            let code = TrackingCode::from_parts(now, (start + step) % 1000);
            if issued.insert(code.clone()) {
                return code;
            }
        }

        warn!(now, "tracking codes exhausted for this millisecond");
        TrackingCode::from_parts(now, start)
    }

    pub fn submission_state(&self) -> SubmissionState {
        lock(&self.inner.state).submission.clone()
    }

    pub fn form(&self) -> PickupForm {
        lock(&self.inner.state).form.clone()
    }

    pub fn error(&self, field: PickupField) -> Option<String> {
        lock(&self.inner.state).errors.get(&field).cloned()
    }

    pub fn notification(&self) -> Option<Notification> {
        self.inner.notifier.current()
    }

    /// Close button on the notification
    pub fn dismiss_notification(&self) {
        self.inner.notifier.dismiss();
    }

    pub fn view(&self) -> PickupView {
        let min_date = self.inner.clock.today().format(DATE_FORMAT).to_string();
        let state = lock(&self.inner.state);
        PickupView {
            form: state.form.clone(),
            errors: state.errors.clone(),
            min_date,
            slots: state.slots.clone(),
            fee: state.fee.clone(),
            submission: state.submission.clone(),
            notification: self.inner.notifier.current(),
            redirected_to: state.redirected_to.clone(),
        }
    }
}
