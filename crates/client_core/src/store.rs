use std::sync::Arc;

use shared::{domain::LeadId, protocol::Lead};
use tokio::sync::RwLock;

pub type SharedLeadStore = Arc<RwLock<LeadStore>>;

/// Ordered leads known to the client. Only changed through the three
/// mutations below, each of which leaves a complete list behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadStore {
    leads: Vec<Lead>,
}

impl LeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedLeadStore {
        Arc::new(RwLock::new(Self::new()))
    }

    pub fn replace_all(&mut self, leads: Vec<Lead>) {
        self.leads = leads;
    }

    pub fn append(&mut self, lead: Lead) {
        self.leads.push(lead);
    }

    /// Removes the first lead with `id`. Returns false when none matched.
    pub fn remove_by_id(&mut self, id: LeadId) -> bool {
        match self.leads.iter().position(|lead| lead.id == id) {
            Some(index) => {
                self.leads.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn get(&self, id: LeadId) -> Option<&Lead> {
        self.leads.iter().find(|lead| lead.id == id)
    }

    pub fn ids(&self) -> Vec<LeadId> {
        self.leads.iter().map(|lead| lead.id).collect()
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
