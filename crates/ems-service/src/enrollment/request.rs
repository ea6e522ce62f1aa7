//! Enrollment input and its validation.

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use validator::Validate;

use ems_core::types::{StaffId, StoreId};

/// Enrollment payload as received from the client.
///
/// Every field is optional at the type level so that missing fields are
/// reported together instead of failing deserialization on the first one.
#[derive(Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EnrollStaffRequest {
    #[validate(required, length(min = 1, max = 50))]
    pub first_name: Option<String>,
    #[validate(required, length(min = 1, max = 50))]
    pub last_name: Option<String>,
    #[validate(required, email, length(max = 255))]
    pub email: Option<String>,
    #[validate(length(max = 25))]
    pub phone: Option<String>,
    #[validate(required, range(min = 1))]
    pub active: Option<i16>,
    #[validate(required, range(min = 1))]
    pub store_id: Option<i32>,
    #[validate(required, range(min = 1))]
    pub manager_id: Option<i32>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

impl fmt::Debug for EnrollStaffRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnrollStaffRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("active", &self.active)
            .field("store_id", &self.store_id)
            .field("manager_id", &self.manager_id)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// An enrollment that passed validation. Names and email are trimmed.
pub struct ValidatedEnrollment {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub active: i16,
    pub store_id: StoreId,
    pub manager_id: StaffId,
    pub password: String,
}

impl EnrollStaffRequest {
    /// Validate every field, returning the offending field names
    /// (camelCase, sorted) on failure.
    pub fn into_validated(self) -> Result<ValidatedEnrollment, Vec<String>> {
        let mut invalid: BTreeSet<String> = BTreeSet::new();

        if let Err(errors) = self.validate() {
            invalid.extend(errors.field_errors().keys().map(|field| to_camel_case(field)));
        }
        for (name, value) in [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                invalid.insert(name.to_string());
            }
        }

        let (
            Some(first_name),
            Some(last_name),
            Some(email),
            Some(active),
            Some(store_id),
            Some(manager_id),
            Some(password),
        ) = (
            self.first_name,
            self.last_name,
            self.email,
            self.active,
            self.store_id,
            self.manager_id,
            self.password,
        )
        else {
            return Err(invalid.into_iter().collect());
        };

        if !invalid.is_empty() {
            return Err(invalid.into_iter().collect());
        }

        Ok(ValidatedEnrollment {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.trim().to_string(),
            phone: self.phone.filter(|p| !p.trim().is_empty()),
            active,
            store_id: StoreId(store_id),
            manager_id: StaffId(manager_id),
            password,
        })
    }
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
