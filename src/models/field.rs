use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Which rule set a field is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    ZipCode,
    Date,
    /// One of the time slots offered for the chosen date
    Slot,
}

/// Outcome of validating a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldVerdict {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldVerdict {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Fields of the pickup-request form, named as the form posts them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PickupField {
    #[serde(rename = "fullName")]
    FullName,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "address")]
    Address,
    #[serde(rename = "city")]
    City,
    #[serde(rename = "zipcode")]
    ZipCode,
    #[serde(rename = "pickupDate")]
    PickupDate,
    #[serde(rename = "pickupTime")]
    PickupTime,
    #[serde(rename = "notes")]
    Notes,
}

impl PickupField {
    pub const ALL: [PickupField; 9] = [
        PickupField::FullName,
        PickupField::Email,
        PickupField::Phone,
        PickupField::Address,
        PickupField::City,
        PickupField::ZipCode,
        PickupField::PickupDate,
        PickupField::PickupTime,
        PickupField::Notes,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PickupField::FullName => "fullName",
            PickupField::Email => "email",
            PickupField::Phone => "phone",
            PickupField::Address => "address",
            PickupField::City => "city",
            PickupField::ZipCode => "zipcode",
            PickupField::PickupDate => "pickupDate",
            PickupField::PickupTime => "pickupTime",
            PickupField::Notes => "notes",
        }
    }

    /// Label shown in "is required" messages
    pub fn label(&self) -> &'static str {
        match self {
            PickupField::FullName => "Full Name",
            PickupField::Email => "Email Address",
            PickupField::Phone => "Phone Number",
            PickupField::Address => "Street Address",
            PickupField::City => "City",
            PickupField::ZipCode => "ZIP Code",
            PickupField::PickupDate => "Pickup Date",
            PickupField::PickupTime => "Pickup Time",
            PickupField::Notes => "Additional Notes",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            PickupField::Email => FieldKind::Email,
            PickupField::Phone => FieldKind::Phone,
            PickupField::ZipCode => FieldKind::ZipCode,
            PickupField::PickupDate => FieldKind::Date,
            PickupField::PickupTime => FieldKind::Slot,
            _ => FieldKind::Text,
        }
    }

    pub fn required(&self) -> bool {
        !matches!(self, PickupField::Notes)
    }
}

impl fmt::Display for PickupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PickupField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PickupField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| AppError::UnknownField(s.to_string()))
    }
}

/// Fields of the two login forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    UserEmail,
    UserPassword,
    AdminUsername,
    AdminPassword,
}

impl FromStr for LoginField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user-email" => Ok(LoginField::UserEmail),
            "user-password" => Ok(LoginField::UserPassword),
            "admin-username" => Ok(LoginField::AdminUsername),
            "admin-password" => Ok(LoginField::AdminPassword),
            other => Err(AppError::UnknownField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip_through_from_str() {
        for field in PickupField::ALL {
            assert_eq!(field.name().parse::<PickupField>().unwrap(), field);
        }
        assert!(matches!(
            "items[]".parse::<PickupField>(),
            Err(AppError::UnknownField(name)) if name == "items[]"
        ));
    }

    #[test]
    fn only_notes_is_optional() {
        let optional: Vec<_> = PickupField::ALL
            .into_iter()
            .filter(|field| !field.required())
            .collect();
        assert_eq!(optional, vec![PickupField::Notes]);
    }
}
