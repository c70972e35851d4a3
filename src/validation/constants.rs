// field patterns
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub const PHONE_PATTERN: &str = r"^\(\d{3}\) \d{3}-\d{4}$";
pub const ZIP_PATTERN: &str = r"^\d{5}(-\d{4})?$";

// <input type="date"> value format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// login field minimums
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_USERNAME_LEN: usize = 3;

// messages shown next to invalid fields
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const INVALID_PHONE: &str = "Please enter a valid phone number";
pub const INVALID_ZIP: &str = "Please enter a valid ZIP code";
pub const INVALID_DATE: &str = "Please enter a valid date";
pub const PAST_DATE: &str = "Pickup date cannot be in the past";
pub const UNAVAILABLE_SLOT: &str = "Please select an available time slot";
pub const SHORT_PASSWORD: &str = "Password must be at least 6 characters";
pub const SHORT_USERNAME: &str = "Username must be at least 3 characters";

// page-wide notices
pub const NO_ITEMS_SELECTED: &str = "Please select at least one e-waste item";
