use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(LeadId);

/// Form fields a lead is built from, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LeadField {
    FullName,
    Email,
    PhoneNumber,
    CompanyName,
    Notes,
}

impl LeadField {
    /// Wire name of the field in request and response bodies.
    pub fn wire_name(self) -> &'static str {
        match self {
            LeadField::FullName => "fullName",
            LeadField::Email => "email",
            LeadField::PhoneNumber => "phoneNumber",
            LeadField::CompanyName => "companyName",
            LeadField::Notes => "notes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LeadField::FullName => "Full Name",
            LeadField::Email => "Email",
            LeadField::PhoneNumber => "Phone Number",
            LeadField::CompanyName => "Company Name",
            LeadField::Notes => "Notes",
        }
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
