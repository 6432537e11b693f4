use serde::{Deserialize, Serialize};

use crate::domain::LeadId;

/// A lead as returned by the service, carrying its server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Lead {
    pub fn fields(&self) -> LeadFields {
        LeadFields {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            company_name: self.company_name.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Body of a create request. The service assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadFields {
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LeadFields {
    pub fn new(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn into_lead(self, id: LeadId) -> Lead {
        Lead {
            id,
            full_name: self.full_name,
            email: self.email,
            phone_number: self.phone_number,
            company_name: self.company_name,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadListResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub lead_dto_list: Vec<Lead>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Lead>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Lead>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorBody;

    #[test]
    fn lead_decodes_camel_case_with_missing_optionals() {
        let lead: Lead = serde_json::from_str(
            r#"{"id":1,"fullName":"Jane Doe","email":"jane@x.com","phoneNumber":null}"#,
        )
        .expect("decode lead");
        assert_eq!(lead.id, LeadId(1));
        assert_eq!(lead.full_name, "Jane Doe");
        assert_eq!(lead.phone_number, None);
        assert_eq!(lead.notes, None);
    }

    #[test]
    fn create_body_omits_blank_optionals() {
        let body = serde_json::to_value(LeadFields::new("Jane Doe", "jane@x.com")).expect("encode");
        assert_eq!(
            body,
            serde_json::json!({ "fullName": "Jane Doe", "email": "jane@x.com" })
        );
    }

    #[test]
    fn listing_treats_null_list_as_empty() {
        let listing: LeadListResponse =
            serde_json::from_str(r#"{"leadDtoList":null}"#).expect("decode listing");
        assert!(listing.lead_dto_list.is_empty());

        let listing: LeadListResponse = serde_json::from_str("{}").expect("decode listing");
        assert!(listing.lead_dto_list.is_empty());
    }

    #[test]
    fn error_body_first_message_requires_first_entry_text() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"errors":[{"errorMessage":"Email already exists"}]}"#)
                .expect("decode errors");
        assert_eq!(body.first_message(), Some("Email already exists"));

        let body: ApiErrorBody =
            serde_json::from_str(r#"{"errors":[{},{"errorMessage":"second"}]}"#)
                .expect("decode errors");
        assert_eq!(body.first_message(), None);
        assert_eq!(body.messages(), vec!["second".to_string()]);
    }
}
