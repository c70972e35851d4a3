//! Keystroke formatters for the phone and ZIP inputs.
//!
//! Both are re-applied to the whole field text on every input event, so they
//! only depend on the digits currently present.

fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Renders `(ddd) ddd-dddd` progressively, dropping digits past the tenth.
pub fn format_phone(raw: &str) -> String {
    let digits = digits(raw);
    let len = digits.len();

    if len >= 6 {
        let end = len.min(10);
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..end])
    } else if len >= 3 {
        format!("({}) {}", &digits[..3], &digits[3..])
    } else {
        digits
    }
}

/// Inserts the ZIP+4 hyphen once a sixth digit shows up.
pub fn format_zip(raw: &str) -> String {
    let digits = digits(raw);
    let len = digits.len();

    if len > 5 {
        format!("{}-{}", &digits[..5], &digits[5..len.min(9)])
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_formats_progressively() {
        assert_eq!(format_phone("55"), "55");
        assert_eq!(format_phone("555"), "(555) ");
        assert_eq!(format_phone("55512"), "(555) 12");
        assert_eq!(format_phone("555123"), "(555) 123-");
        assert_eq!(format_phone("5551234"), "(555) 123-4");
        assert_eq!(format_phone("5551234567"), "(555) 123-4567");
    }

    #[test]
    fn phone_truncates_past_ten_digits() {
        assert_eq!(format_phone("555123456789"), "(555) 123-4567");
    }

    #[test]
    fn phone_is_idempotent_on_formatted_numbers() {
        let formatted = "(555) 123-4567";
        assert_eq!(format_phone(formatted), formatted);
        assert_eq!(format_phone(&format_phone(formatted)), formatted);
    }

    #[test]
    fn phone_strips_punctuation_and_letters() {
        assert_eq!(format_phone("+1 555.123.4567"), "(155) 512-3456");
        assert_eq!(format_phone("abc"), "");
    }

    #[test]
    fn zip_hyphenates_after_five_digits() {
        assert_eq!(format_zip("12345"), "12345");
        assert_eq!(format_zip("123456"), "12345-6");
        assert_eq!(format_zip("123456789"), "12345-6789");
        assert_eq!(format_zip("1234567890"), "12345-6789");
        assert_eq!(format_zip("12345-6789"), "12345-6789");
    }
}
