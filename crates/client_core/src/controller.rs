//! Orchestration of load, submit, and delete flows.
//!
//! Each user action runs its own small state machine: one transport call, at
//! most one store mutation, and one notification. Phase transitions are
//! broadcast so a front end can disable controls or show progress.

use std::{sync::Arc, time::Duration};

use shared::{
    domain::{LeadField, LeadId},
    protocol::{Lead, LeadFields},
};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

use crate::{
    error::ValidationError,
    notification::Notification,
    store::SharedLeadStore,
    transport::LeadTransport,
    validation::{validate, LeadForm, ViolationSet},
};

pub const SUBMIT_SUCCESS: &str = "Lead submitted successfully!";
pub const SUBMIT_FAILURE: &str = "Failed to submit lead. Please try again.";
pub const DELETE_SUCCESS: &str = "Lead deleted successfully!";
pub const DELETE_FAILURE: &str = "Failed to delete lead.";
pub const FETCH_FAILURE: &str = "Failed to fetch leads.";

const EVENT_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePhase {
    #[default]
    Idle,
    Deleting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadEvent {
    SubmitPhaseChanged(SubmitPhase),
    DeletePhaseChanged { id: LeadId, phase: DeletePhase },
    LeadsChanged { count: usize },
    Notification(Notification),
}

/// Form values plus the transient state the submit control depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: LeadForm,
    violations: ViolationSet,
    phase: SubmitPhase,
}

impl FormState {
    pub fn values(&self) -> &LeadForm {
        &self.values
    }

    pub fn violations(&self) -> &ViolationSet {
        &self.violations
    }

    /// Inline message to render next to `field`, if it failed validation.
    pub fn violation(&self, field: LeadField) -> Option<&str> {
        self.violations.get(field)
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.violations.is_empty()
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Created(Lead),
    Rejected(ValidationError),
    /// A submission from this form is already pending.
    Busy,
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// `removed` is false when the lead was already gone from the store.
    Deleted { removed: bool },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { count: usize },
    Failed { message: String },
}

pub struct LeadController {
    transport: Arc<dyn LeadTransport>,
    store: SharedLeadStore,
    form: Mutex<FormState>,
    events: broadcast::Sender<LeadEvent>,
    notification_ttl: Duration,
}

impl LeadController {
    pub fn new(
        transport: Arc<dyn LeadTransport>,
        store: SharedLeadStore,
        notification_ttl: Duration,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            transport,
            store,
            form: Mutex::new(FormState::default()),
            events,
            notification_ttl,
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<LeadEvent> {
        self.events.subscribe()
    }

    pub fn store(&self) -> SharedLeadStore {
        Arc::clone(&self.store)
    }

    pub async fn leads(&self) -> Vec<Lead> {
        self.store.read().await.leads().to_vec()
    }

    pub async fn form(&self) -> FormState {
        self.form.lock().await.clone()
    }

    /// Updates one form value. Once inline errors are showing, the form is
    /// re-validated on every edit so they clear as the user fixes them.
    pub async fn set_field(&self, field: LeadField, value: impl Into<String>) {
        let mut form = self.form.lock().await;
        form.values.set(field, value);
        if !form.violations.is_empty() {
            form.violations = validate(&form.values);
        }
    }

    pub async fn replace_form(&self, values: LeadForm) {
        let mut form = self.form.lock().await;
        form.values = values;
        if !form.violations.is_empty() {
            form.violations = validate(&form.values);
        }
    }

    /// Fetches the full listing and replaces the store with it.
    pub async fn load(&self) -> LoadOutcome {
        match self.transport.list().await {
            Ok(leads) => {
                let count = leads.len();
                self.store.write().await.replace_all(leads);
                info!(count, "lead listing loaded");
                self.emit(LeadEvent::LeadsChanged { count });
                LoadOutcome::Loaded { count }
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch leads");
                self.notify(Notification::error(FETCH_FAILURE, self.notification_ttl));
                LoadOutcome::Failed {
                    message: FETCH_FAILURE.to_string(),
                }
            }
        }
    }

    pub async fn submit_form(&self, values: LeadForm) -> SubmitOutcome {
        self.run_submit(Some(values)).await
    }

    pub async fn submit(&self) -> SubmitOutcome {
        self.run_submit(None).await
    }

    /// Busy check, value write, validation and the move to `Submitting`
    /// happen under one form lock.
    fn begin_submit(
        &self,
        form: &mut FormState,
        values: Option<LeadForm>,
    ) -> Result<LeadFields, SubmitOutcome> {
        if form.is_submitting() {
            debug!("submit ignored while a submission is pending");
            return Err(SubmitOutcome::Busy);
        }
        if let Some(values) = values {
            form.values = values;
        }

        self.set_submit_phase(form, SubmitPhase::Validating);
        let violations = validate(&form.values);
        if !violations.is_empty() {
            debug!(%violations, "submit blocked by validation");
            form.violations = violations.clone();
            self.set_submit_phase(form, SubmitPhase::Idle);
            return Err(SubmitOutcome::Rejected(ValidationError(violations)));
        }

        form.violations = ViolationSet::default();
        self.set_submit_phase(form, SubmitPhase::Submitting);
        Ok(form.values.to_fields())
    }

    async fn run_submit(&self, values: Option<LeadForm>) -> SubmitOutcome {
        let fields = {
            let mut form = self.form.lock().await;
            match self.begin_submit(&mut form, values) {
                Ok(fields) => fields,
                Err(outcome) => return outcome,
            }
        };

        match self.transport.create(&fields).await {
            Ok(lead) => {
                let count = {
                    let mut store = self.store.write().await;
                    store.append(lead.clone());
                    store.len()
                };
                info!(lead_id = lead.id.0, "lead created");
                self.emit(LeadEvent::LeadsChanged { count });

                {
                    let mut form = self.form.lock().await;
                    form.values = LeadForm::default();
                    form.violations = ViolationSet::default();
                    self.set_submit_phase(&mut form, SubmitPhase::Succeeded);
                    self.set_submit_phase(&mut form, SubmitPhase::Idle);
                }

                self.notify(Notification::success(SUBMIT_SUCCESS, self.notification_ttl));
                SubmitOutcome::Created(lead)
            }
            Err(err) => {
                let message = err
                    .first_field_error()
                    .unwrap_or(SUBMIT_FAILURE)
                    .to_string();
                warn!(error = %err, %message, "lead submission failed");

                {
                    let mut form = self.form.lock().await;
                    self.set_submit_phase(&mut form, SubmitPhase::Failed);
                    self.set_submit_phase(&mut form, SubmitPhase::Idle);
                }

                self.notify(Notification::error(message.clone(), self.notification_ttl));
                SubmitOutcome::Failed { message }
            }
        }
    }

    /// Deletes `id` remotely, then locally. Not guarded: concurrent deletes
    /// each touch only their own id.
    pub async fn delete(&self, id: LeadId) -> DeleteOutcome {
        self.set_delete_phase(id, DeletePhase::Deleting);

        match self.transport.delete_by_id(id).await {
            Ok(()) => {
                let (removed, count) = {
                    let mut store = self.store.write().await;
                    let removed = store.remove_by_id(id);
                    (removed, store.len())
                };
                if removed {
                    info!(lead_id = id.0, "lead deleted");
                    self.emit(LeadEvent::LeadsChanged { count });
                } else {
                    debug!(lead_id = id.0, "deleted lead was not in the local store");
                }

                self.set_delete_phase(id, DeletePhase::Succeeded);
                self.notify(Notification::success(DELETE_SUCCESS, self.notification_ttl));
                self.set_delete_phase(id, DeletePhase::Idle);
                DeleteOutcome::Deleted { removed }
            }
            Err(err) => {
                warn!(lead_id = id.0, error = %err, "lead deletion failed");
                self.set_delete_phase(id, DeletePhase::Failed);
                self.notify(Notification::error(DELETE_FAILURE, self.notification_ttl));
                self.set_delete_phase(id, DeletePhase::Idle);
                DeleteOutcome::Failed {
                    message: DELETE_FAILURE.to_string(),
                }
            }
        }
    }

    fn set_submit_phase(&self, form: &mut FormState, phase: SubmitPhase) {
        form.phase = phase;
        debug!(?phase, "submit phase");
        self.emit(LeadEvent::SubmitPhaseChanged(phase));
    }

    fn set_delete_phase(&self, id: LeadId, phase: DeletePhase) {
        debug!(lead_id = id.0, ?phase, "delete phase");
        self.emit(LeadEvent::DeletePhaseChanged { id, phase });
    }

    fn notify(&self, notification: Notification) {
        self.emit(LeadEvent::Notification(notification));
    }

    fn emit(&self, event: LeadEvent) {
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
