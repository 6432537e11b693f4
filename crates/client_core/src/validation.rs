//! Field rules applied to the lead form before anything is sent.
//!
//! Validation is a pure function of the form values so it can run on every
//! submit attempt and on every edit once inline errors are showing.

use std::{collections::BTreeMap, fmt};

use lazy_static::lazy_static;
use regex::Regex;
use shared::{
    domain::LeadField,
    protocol::{Lead, LeadFields},
};

pub const FULL_NAME_REQUIRED: &str = "Full Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";

lazy_static! {
    /// WHATWG "valid e-mail address" production.
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .expect("email pattern compiles");
}

/// Raw form input. Every field starts as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub company_name: String,
    pub notes: String,
}

impl LeadForm {
    pub fn new(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::FullName => &self.full_name,
            LeadField::Email => &self.email,
            LeadField::PhoneNumber => &self.phone_number,
            LeadField::CompanyName => &self.company_name,
            LeadField::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let slot = match field {
            LeadField::FullName => &mut self.full_name,
            LeadField::Email => &mut self.email,
            LeadField::PhoneNumber => &mut self.phone_number,
            LeadField::CompanyName => &mut self.company_name,
            LeadField::Notes => &mut self.notes,
        };
        *slot = value.into();
    }

    pub fn with(mut self, field: LeadField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Request body for this form. Blank optional fields are left out.
    pub fn to_fields(&self) -> LeadFields {
        fn optional(value: &str) -> Option<String> {
            if value.trim().is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        }

        LeadFields {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone_number: optional(&self.phone_number),
            company_name: optional(&self.company_name),
            notes: optional(&self.notes),
        }
    }
}

impl From<&Lead> for LeadForm {
    fn from(lead: &Lead) -> Self {
        Self {
            full_name: lead.full_name.clone(),
            email: lead.email.clone(),
            phone_number: lead.phone_number.clone().unwrap_or_default(),
            company_name: lead.company_name.clone().unwrap_or_default(),
            notes: lead.notes.clone().unwrap_or_default(),
        }
    }
}

/// Field-scoped failures from one validation run, keyed in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationSet(BTreeMap<LeadField, String>);

impl ViolationSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: LeadField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: LeadField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = LeadField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LeadField, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: LeadField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

impl fmt::Display for ViolationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_REGEX.is_match(candidate)
}

/// Whether a lead received from the service satisfies the same rules as the form.
pub fn is_valid_lead(lead: &Lead) -> bool {
    validate(&LeadForm::from(lead)).is_empty()
}

pub fn validate(form: &LeadForm) -> ViolationSet {
    let mut violations = ViolationSet::default();

    if form.full_name.is_empty() {
        violations.insert(LeadField::FullName, FULL_NAME_REQUIRED);
    }

    if form.email.is_empty() {
        violations.insert(LeadField::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&form.email) {
        violations.insert(LeadField::Email, EMAIL_INVALID);
    }

    violations
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
