//! Address form state machine.
//!
//! The form owns an editable [`AddressRecord`] and two observable states,
//! [`FormState::Editing`] and [`FormState::Submitting`]. `submit` runs the
//! whole contract: resolve the session, validate, write exactly once
//! (insert or update), and surface the result as a notification. Every
//! failure returns the form to `Editing` with the entered values intact.

use crate::auth::AuthProvider;
use crate::domain::format_rut;
use crate::error::{SubmitError, SubmitResult};
use crate::models::{AddressRecord, Region, PRIMARY_COUNTRY};
use crate::notify::{Notifier, Severity};
use crate::repositories::AddressRepository;

/// Observable form state. While `Submitting`, re-entrant submits are
/// rejected so at most one write is ever in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitting,
}

/// Whether a submission inserts a new row or patches an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FormMode {
    Create,
    Edit { id: String },
}

/// Result of a successful submission, handed to the caller and to the
/// `on_saved` callback.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A new row was inserted
    Created(AddressRecord),
    /// The existing row was updated in place
    Updated(AddressRecord),
}

impl SubmitOutcome {
    /// The persisted record, whichever way it got there.
    pub fn record(&self) -> &AddressRecord {
        match self {
            SubmitOutcome::Created(record) | SubmitOutcome::Updated(record) => record,
        }
    }
}

/// Completion callback fired once per successful submission.
pub type OnSaved = Box<dyn FnMut(&AddressRecord) + Send>;

/// The address form component.
///
/// Construct blank with [`AddressForm::new`] or pre-filled with
/// [`AddressForm::edit`]; mutate fields while `Editing`; call
/// [`AddressForm::submit`] with the host's collaborators.
pub struct AddressForm {
    state: FormState,
    mode: FormMode,
    record: AddressRecord,
    on_saved: Option<OnSaved>,
}

impl AddressForm {
    /// Blank form in create mode, defaulting to a Chilean address.
    pub fn new() -> Self {
        Self {
            state: FormState::Editing,
            mode: FormMode::Create,
            record: AddressRecord::new(PRIMARY_COUNTRY),
            on_saved: None,
        }
    }

    /// Form pre-filled from an existing record.
    ///
    /// A record with an id puts the form in edit mode, scoping the write
    /// to that row. A record without one (a draft) behaves like create.
    pub fn edit(record: AddressRecord) -> Self {
        let mode = match record.id.clone() {
            Some(id) => FormMode::Edit { id },
            None => FormMode::Create,
        };

        Self {
            state: FormState::Editing,
            mode,
            record,
            on_saved: None,
        }
    }

    /// Register the completion callback, fired exactly once per
    /// successful submission with the persisted record.
    pub fn on_saved(mut self, callback: impl FnMut(&AddressRecord) + Send + 'static) -> Self {
        self.on_saved = Some(Box::new(callback));
        self
    }

    /// Current observable state.
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Whether a submission would update an existing row.
    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// The record as currently entered.
    pub fn record(&self) -> &AddressRecord {
        &self.record
    }

    /// Mutable access to the plain text fields.
    pub fn record_mut(&mut self) -> &mut AddressRecord {
        &mut self.record
    }

    /// Set the RUT field from raw keystrokes, canonicalizing as typed.
    /// Clearing the input clears the field.
    pub fn set_national_id(&mut self, raw: &str) {
        let formatted = format_rut(raw);
        self.record.national_id = if formatted.is_empty() {
            None
        } else {
            Some(formatted)
        };
    }

    /// Set the region field. Both variants write the same underlying
    /// column; the variant only records which input mode produced it.
    pub fn set_region(&mut self, region: Region) {
        self.record.region = region.as_str().to_string();
    }

    /// Set the country, keeping the region column as typed; `validate`
    /// re-checks it against the catalog if the country is now Chile.
    pub fn set_country(&mut self, country: &str) {
        self.record.country = country.to_string();
    }

    /// Submit the form.
    ///
    /// Runs the contract in order: session precondition, field
    /// validation, then exactly one persistence call. On success the form
    /// adopts the persisted record (so a created address edits in place
    /// afterwards), notifies, and fires the completion callback. On any
    /// failure it notifies and stays in `Editing` with all entered values
    /// unchanged.
    pub async fn submit(
        &mut self,
        auth: &dyn AuthProvider,
        repo: &dyn AddressRepository,
        notifier: &dyn Notifier,
    ) -> SubmitResult<SubmitOutcome> {
        if self.state == FormState::Submitting {
            return Err(SubmitError::SubmissionInFlight);
        }

        self.state = FormState::Submitting;
        let result = self.submit_inner(auth, repo).await;
        self.state = FormState::Editing;

        match result {
            Ok(outcome) => {
                let persisted = outcome.record().clone();
                tracing::info!(
                    id = persisted.id.as_deref().unwrap_or(""),
                    "address saved"
                );

                self.record = persisted;
                if let Some(id) = self.record.id.clone() {
                    self.mode = FormMode::Edit { id };
                }

                notifier.notify("Address saved", &self.record.label, Severity::Success);
                if let Some(callback) = self.on_saved.as_mut() {
                    callback(&self.record);
                }

                Ok(outcome)
            }
            Err(e) => {
                tracing::warn!("address submit failed: {}", e);
                notifier.notify(error_title(&e), &e.to_string(), Severity::Error);
                Err(e)
            }
        }
    }

    async fn submit_inner(
        &mut self,
        auth: &dyn AuthProvider,
        repo: &dyn AddressRepository,
    ) -> SubmitResult<SubmitOutcome> {
        let user = auth
            .current_user()
            .await?
            .ok_or(SubmitError::Unauthenticated)?;

        if self.record.user_id.is_empty() {
            self.record.user_id = user.id;
        }

        self.record.validate()?;

        match &self.mode {
            FormMode::Create => {
                let persisted = repo.insert(&self.record).await?;
                Ok(SubmitOutcome::Created(persisted))
            }
            FormMode::Edit { id } => {
                let persisted = repo.update(id, &self.record).await?;
                Ok(SubmitOutcome::Updated(persisted))
            }
        }
    }
}

impl Default for AddressForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Notification title for a failed submission.
fn error_title(error: &SubmitError) -> &'static str {
    match error {
        SubmitError::Unauthenticated => "Not signed in",
        SubmitError::InvalidAddress(_) => "Invalid address",
        SubmitError::SubmissionInFlight | SubmitError::Store(_) => "Could not save address",
    }
}
