use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::field::{FieldKind, FieldVerdict, LoginField, PickupField};
use crate::models::timeslot::SlotAvailability;
use crate::validation::constants::*;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).unwrap());
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(PHONE_PATTERN).unwrap());
static ZIP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(ZIP_PATTERN).unwrap());

/// What a verdict may depend on besides the value itself
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub today: NaiveDate,
    /// Slots currently offered, `None` until a date has been picked
    pub slots: Option<&'a SlotAvailability>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(today: NaiveDate) -> Self {
        Self { today, slots: None }
    }

    pub fn with_slots(mut self, slots: Option<&'a SlotAvailability>) -> Self {
        self.slots = slots;
        self
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

pub fn is_valid_zip(value: &str) -> bool {
    ZIP_REGEX.is_match(value)
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Checks a non-empty, trimmed value against the rules of `kind`
pub fn check_kind(kind: FieldKind, value: &str, ctx: &ValidationContext<'_>) -> Result<(), &'static str> {
    match kind {
        FieldKind::Text => Ok(()),
        FieldKind::Email if !is_valid_email(value) => Err(INVALID_EMAIL),
        FieldKind::Phone if !is_valid_phone(value) => Err(INVALID_PHONE),
        FieldKind::ZipCode if !is_valid_zip(value) => Err(INVALID_ZIP),
        FieldKind::Date => match parse_date(value) {
            None => Err(INVALID_DATE),
            // time of day plays no part, only the calendar day
            Some(date) if date < ctx.today => Err(PAST_DATE),
            Some(_) => Ok(()),
        },
        FieldKind::Slot => match ctx.slots {
            Some(slots) if slots.offers(value) => Ok(()),
            _ => Err(UNAVAILABLE_SLOT),
        },
        _ => Ok(()),
    }
}

pub fn validate_pickup_field(field: PickupField, raw: &str, ctx: &ValidationContext<'_>) -> FieldVerdict {
    let value = raw.trim();

    if value.is_empty() {
        return if field.required() {
            FieldVerdict::invalid(format!("{} is required", field.label()))
        } else {
            FieldVerdict::valid()
        };
    }

    match check_kind(field.kind(), value, ctx) {
        Ok(()) => FieldVerdict::valid(),
        Err(message) => FieldVerdict::invalid(message),
    }
}

/// Login fields are only checked once something has been typed
pub fn validate_login_field(field: LoginField, value: &str) -> FieldVerdict {
    if value.is_empty() {
        return FieldVerdict::valid();
    }

    let failure = match field {
        LoginField::UserEmail => (!is_valid_email(value)).then_some(INVALID_EMAIL),
        LoginField::UserPassword | LoginField::AdminPassword => {
            (value.chars().count() < MIN_PASSWORD_LEN).then_some(SHORT_PASSWORD)
        }
        LoginField::AdminUsername => {
            (value.chars().count() < MIN_USERNAME_LEN).then_some(SHORT_USERNAME)
        }
    };

    match failure {
        Some(message) => FieldVerdict::invalid(message),
        None => FieldVerdict::valid(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn verdict(field: PickupField, value: &str) -> FieldVerdict {
        validate_pickup_field(field, value, &ValidationContext::new(today()))
    }

    #[test]
    fn required_fields_reject_blank_values() {
        let v = verdict(PickupField::FullName, "   ");
        assert!(!v.is_valid());
        assert_eq!(v.message.as_deref(), Some("Full Name is required"));

        let v = verdict(PickupField::ZipCode, "");
        assert_eq!(v.message.as_deref(), Some("ZIP Code is required"));
    }

    #[test]
    fn optional_notes_accept_blank() {
        assert!(verdict(PickupField::Notes, "").is_valid());
        assert!(verdict(PickupField::Notes, "gate code 1234").is_valid());
    }

    #[test]
    fn email_needs_a_dotted_domain() {
        assert!(!verdict(PickupField::Email, "foo@bar").is_valid());
        assert!(!verdict(PickupField::Email, "foo bar@baz.com").is_valid());
        assert!(!verdict(PickupField::Email, "@bar.com").is_valid());
        assert!(verdict(PickupField::Email, "foo@bar.com").is_valid());
        assert!(verdict(PickupField::Email, "  foo@bar.com  ").is_valid());
    }

    #[test]
    fn phone_must_be_fully_formatted() {
        assert!(verdict(PickupField::Phone, "(555) 123-4567").is_valid());
        let v = verdict(PickupField::Phone, "5551234567");
        assert_eq!(v.message.as_deref(), Some(INVALID_PHONE));
        assert!(!verdict(PickupField::Phone, "(555) 123-456").is_valid());
    }

    #[test]
    fn zip_accepts_five_or_nine_digits() {
        assert!(verdict(PickupField::ZipCode, "12345").is_valid());
        assert!(verdict(PickupField::ZipCode, "12345-6789").is_valid());
        assert!(!verdict(PickupField::ZipCode, "1234").is_valid());
        assert!(!verdict(PickupField::ZipCode, "123456789").is_valid());
        assert!(!verdict(PickupField::ZipCode, "12345-678").is_valid());
    }

    #[test]
    fn date_cutoff_is_start_of_today() {
        assert!(verdict(PickupField::PickupDate, "2026-10-16").is_valid());
        assert!(verdict(PickupField::PickupDate, "2027-01-01").is_valid());

        let v = verdict(PickupField::PickupDate, "2026-10-15");
        assert_eq!(v.message.as_deref(), Some(PAST_DATE));

        let v = verdict(PickupField::PickupDate, "16/10/2026");
        assert_eq!(v.message.as_deref(), Some(INVALID_DATE));
    }

    #[test]
    fn slot_must_be_offered_for_the_chosen_date() {
        let saturday = SlotAvailability::for_date(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        let ctx = ValidationContext::new(today()).with_slots(Some(&saturday));

        assert!(validate_pickup_field(PickupField::PickupTime, "10:00-12:00", &ctx).is_valid());
        assert!(!validate_pickup_field(PickupField::PickupTime, "09:00-11:00", &ctx).is_valid());

        let no_date = ValidationContext::new(today());
        let v = validate_pickup_field(PickupField::PickupTime, "10:00-12:00", &no_date);
        assert_eq!(v.message.as_deref(), Some(UNAVAILABLE_SLOT));
    }

    #[test]
    fn login_fields_skip_empty_values() {
        for field in [
            LoginField::UserEmail,
            LoginField::UserPassword,
            LoginField::AdminUsername,
            LoginField::AdminPassword,
        ] {
            assert!(validate_login_field(field, "").is_valid());
        }
    }

    #[test]
    fn login_field_minimums() {
        assert!(!validate_login_field(LoginField::UserEmail, "user@ewastenet").is_valid());
        assert!(validate_login_field(LoginField::UserEmail, "user@ewastenet.com").is_valid());

        let v = validate_login_field(LoginField::UserPassword, "12345");
        assert_eq!(v.message.as_deref(), Some(SHORT_PASSWORD));
        assert!(validate_login_field(LoginField::AdminPassword, "123456").is_valid());

        let v = validate_login_field(LoginField::AdminUsername, "ad");
        assert_eq!(v.message.as_deref(), Some(SHORT_USERNAME));
        assert!(validate_login_field(LoginField::AdminUsername, "adm").is_valid());
    }
}
