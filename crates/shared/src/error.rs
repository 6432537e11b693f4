use serde::{Deserialize, Serialize};

/// One entry of the `errors` array the lead service returns on a rejected request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrorMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub errors: Vec<FieldErrorMessage>,
}

impl ApiErrorBody {
    /// Messages in server order, skipping entries with no `errorMessage`.
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .filter_map(|entry| entry.error_message.clone())
            .collect()
    }

    /// The first entry's message, if that entry carries a non-empty one.
    pub fn first_message(&self) -> Option<&str> {
        self.errors
            .first()
            .and_then(|entry| entry.error_message.as_deref())
            .filter(|message| !message.is_empty())
    }
}
