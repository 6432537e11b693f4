//! Client-side lead management: transport to the lead service, form
//! validation, the local lead collection, and the controller tying them to
//! user actions.

pub mod config;
pub mod controller;
pub mod error;
pub mod notification;
pub mod store;
pub mod transport;
pub mod validation;

pub use config::{load_settings, ClientSettings};
pub use controller::{
    DeleteOutcome, DeletePhase, FormState, LeadController, LeadEvent, LoadOutcome, SubmitOutcome,
    SubmitPhase,
};
pub use error::{TransportError, ValidationError};
pub use notification::{Notification, NotificationLevel, NotificationTray};
pub use store::{LeadStore, SharedLeadStore};
pub use transport::{HttpLeadTransport, LeadTransport};
pub use validation::{validate, LeadForm, ViolationSet};
