use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::LeadId,
    error::ApiErrorBody,
    protocol::{Lead, LeadFields, LeadListResponse},
};
use tracing::{debug, warn};

use crate::{error::TransportError, validation::is_valid_lead};

/// Boundary to the remote lead collection. Implementations do not retry.
#[async_trait]
pub trait LeadTransport: Send + Sync {
    async fn list(&self) -> Result<Vec<Lead>, TransportError>;
    async fn create(&self, fields: &LeadFields) -> Result<Lead, TransportError>;
    async fn delete_by_id(&self, id: LeadId) -> Result<(), TransportError>;
}

pub struct HttpLeadTransport {
    http: Client,
    base_url: String,
}

impl HttpLeadTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    fn lead_url(&self, id: LeadId) -> String {
        format!("{}/{}", self.base_url, id.0)
    }
}

async fn send(
    url: &str,
    request: reqwest::RequestBuilder,
) -> Result<Response, TransportError> {
    let response = request.send().await.map_err(|source| {
        warn!(%url, error = %source, "lead request failed to reach service");
        TransportError::Request {
            url: url.to_string(),
            source,
        }
    })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // Non-JSON error bodies still surface as a status error, just without field messages.
    let body = response.text().await.unwrap_or_default();
    let errors = serde_json::from_str::<ApiErrorBody>(&body).unwrap_or_default();
    warn!(%url, %status, field_errors = errors.errors.len(), "lead service rejected request");
    Err(TransportError::Status {
        url: url.to_string(),
        status,
        field_errors: errors.messages(),
        first_field_error: errors.first_message().map(str::to_string),
    })
}

async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, TransportError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|source| TransportError::Request {
            url: url.to_string(),
            source,
        })?;
    serde_json::from_slice(&bytes).map_err(|err| TransportError::MalformedResponse {
        url: url.to_string(),
        reason: err.to_string(),
    })
}

#[async_trait]
impl LeadTransport for HttpLeadTransport {
    async fn list(&self) -> Result<Vec<Lead>, TransportError> {
        let url = self.collection_url();
        debug!(%url, "fetching lead listing");
        let response = send(&url, self.http.get(&url)).await?;
        let listing: LeadListResponse = decode(&url, response).await?;

        let total = listing.lead_dto_list.len();
        let leads: Vec<Lead> = listing
            .lead_dto_list
            .into_iter()
            .filter(|lead| {
                let keep = is_valid_lead(lead);
                if !keep {
                    warn!(lead_id = lead.id.0, "dropping listed lead that fails validation");
                }
                keep
            })
            .collect();
        debug!(%url, total, kept = leads.len(), "lead listing received");
        Ok(leads)
    }

    async fn create(&self, fields: &LeadFields) -> Result<Lead, TransportError> {
        let url = self.collection_url();
        debug!(%url, "creating lead");
        let response = send(&url, self.http.post(&url).json(fields)).await?;
        let lead: Lead = decode(&url, response).await?;
        if !is_valid_lead(&lead) {
            return Err(TransportError::MalformedResponse {
                url,
                reason: format!("created lead {} fails validation", lead.id.0),
            });
        }
        Ok(lead)
    }

    async fn delete_by_id(&self, id: LeadId) -> Result<(), TransportError> {
        let url = self.lead_url(id);
        debug!(%url, lead_id = id.0, "deleting lead");
        send(&url, self.http.delete(&url)).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
