// src/domain/validation.rs
// Field validation rules for the ticket purchase form

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

use crate::domain::model::{FormField, TicketFormInput, TicketOrderRequest};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static EXPIRATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").expect("expiration pattern"));

static POSTAL_CODE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{5}(-[0-9]{4})?|[A-Za-z][0-9][A-Za-z] [0-9][A-Za-z][0-9])$")
        .expect("postal code pattern")
});

/// A predicate on a raw field value and the message shown when it fails
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FieldRule").field("message", &self.message).finish()
    }
}

/// A single field that failed its rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: FormField,
    pub message: &'static str,
}

/// All failing fields of one validation pass, in form order
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Set or clear the error of one field, keeping form order
    pub fn set(&mut self, field: FormField, message: Option<&'static str>) {
        self.errors.retain(|e| e.field != field);
        if let Some(message) = message {
            let at = self
                .errors
                .iter()
                .position(|e| e.field > field)
                .unwrap_or(self.errors.len());
            self.errors.insert(at, ValidationError { field, message });
        }
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

fn has_digits(value: &str, count: usize) -> bool {
    value.len() == count && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

fn is_phone(value: &str) -> bool {
    has_digits(value, 10)
}

fn is_card_number(value: &str) -> bool {
    has_digits(value, 16)
}

fn is_security_code(value: &str) -> bool {
    has_digits(value, 3)
}

fn is_expiration(value: &str) -> bool {
    EXPIRATION_PATTERN.is_match(value)
}

fn is_postal_code(value: &str) -> bool {
    POSTAL_CODE_PATTERN.is_match(value)
}

/// Quantity as sent in the order. The quantity rules end with this exact
/// parse, so a value passing them always converts.
fn parse_quantity(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

fn is_whole_number(value: &str) -> bool {
    let digits = value.trim();
    let digits = digits.strip_prefix(&['-', '+'][..]).unwrap_or(digits);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_at_least_one(value: &str) -> bool {
    let value = value.trim();
    !value.starts_with('-') && value.bytes().any(|b| matches!(b, b'1'..=b'9'))
}

fn is_within_limit(value: &str) -> bool {
    parse_quantity(value).is_some()
}

static EMAIL_RULES: [FieldRule; 2] = [
    FieldRule { check: is_present, message: "Email is required" },
    FieldRule { check: is_email, message: "Invalid email format" },
];

static NAME_RULES: [FieldRule; 1] = [FieldRule { check: is_present, message: "Name is required" }];

static PHONE_RULES: [FieldRule; 2] = [
    FieldRule { check: is_present, message: "Phone is required" },
    FieldRule { check: is_phone, message: "Phone number must be 10 digits" },
];

static CREDIT_CARD_RULES: [FieldRule; 2] = [
    FieldRule { check: is_present, message: "Credit card number is required" },
    FieldRule { check: is_card_number, message: "Credit card number must be 16 digits" },
];

static EXPIRATION_RULES: [FieldRule; 2] = [
    FieldRule { check: is_present, message: "Expiration date is required" },
    FieldRule { check: is_expiration, message: "Invalid expiration date format. Use MM/YY" },
];

static QUANTITY_RULES: [FieldRule; 4] = [
    FieldRule { check: is_present, message: "Quantity is required" },
    FieldRule { check: is_whole_number, message: "Quantity must be a whole number" },
    FieldRule { check: is_at_least_one, message: "Quantity must be at least 1" },
    FieldRule { check: is_within_limit, message: "Quantity is too large" },
];

static SECURITY_CODE_RULES: [FieldRule; 2] = [
    FieldRule { check: is_present, message: "Security code is required" },
    FieldRule { check: is_security_code, message: "Security code must be 3 digits" },
];

static ADDRESS_RULES: [FieldRule; 1] =
    [FieldRule { check: is_present, message: "Address is required" }];

static CITY_RULES: [FieldRule; 1] = [FieldRule { check: is_present, message: "City is required" }];

static PROVINCE_RULES: [FieldRule; 1] =
    [FieldRule { check: is_present, message: "Province is required" }];

static POSTAL_CODE_RULES: [FieldRule; 2] = [
    FieldRule { check: is_present, message: "Postal code is required" },
    FieldRule { check: is_postal_code, message: "Invalid postal code format" },
];

static COUNTRY_RULES: [FieldRule; 1] =
    [FieldRule { check: is_present, message: "Country is required" }];

/// Ordered rules for a field. The concert id is fixed and has none.
pub fn rules_for(field: FormField) -> &'static [FieldRule] {
    match field {
        FormField::ConcertId => &[],
        FormField::Email => &EMAIL_RULES,
        FormField::Name => &NAME_RULES,
        FormField::Phone => &PHONE_RULES,
        FormField::CreditCard => &CREDIT_CARD_RULES,
        FormField::Expiration => &EXPIRATION_RULES,
        FormField::Quantity => &QUANTITY_RULES,
        FormField::SecurityCode => &SECURITY_CODE_RULES,
        FormField::Address => &ADDRESS_RULES,
        FormField::City => &CITY_RULES,
        FormField::Province => &PROVINCE_RULES,
        FormField::PostalCode => &POSTAL_CODE_RULES,
        FormField::Country => &COUNTRY_RULES,
    }
}

/// Message of the first rule the value fails, if any
pub fn validate_field(field: FormField, value: &str) -> Option<&'static str> {
    rules_for(field)
        .iter()
        .find(|rule| !(rule.check)(value))
        .map(|rule| rule.message)
}

/// Check every field and build the order only when all of them pass
pub fn validate(input: &TicketFormInput) -> Result<TicketOrderRequest, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    for field in FormField::ALL {
        if let Some(value) = input.value(field) {
            errors.set(field, validate_field(field, value));
        }
    }

    let quantity = match parse_quantity(&input.quantity) {
        Some(quantity) if errors.is_empty() => quantity,
        _ => return Err(errors),
    };

    Ok(TicketOrderRequest {
        concert_id: input.concert_id,
        email: input.email.clone(),
        name: input.name.clone(),
        phone: input.phone.clone(),
        credit_card: input.credit_card.clone(),
        expiration: input.expiration.clone(),
        quantity,
        security_code: input.security_code.clone(),
        address: input.address.clone(),
        city: input.city.clone(),
        province: input.province.clone(),
        postal_code: input.postal_code.clone(),
        country: input.country.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DEFAULT_CONCERT_ID;

    fn valid_input() -> TicketFormInput {
        let mut input = TicketFormInput::new(DEFAULT_CONCERT_ID);
        input.email = "fan@example.com".to_string();
        input.name = "Lisa Manoban".to_string();
        input.phone = "4165550123".to_string();
        input.credit_card = "4111111111111111".to_string();
        input.expiration = "12/25".to_string();
        input.quantity = "2".to_string();
        input.security_code = "123".to_string();
        input.address = "1 Main St".to_string();
        input.city = "Toronto".to_string();
        input.province = "ON".to_string();
        input.postal_code = "M5V 2T6".to_string();
        input.country = "Canada".to_string();
        input
    }

    #[test]
    fn valid_form_builds_order() {
        let order = validate(&valid_input()).unwrap();

        assert_eq!(order.concert_id, DEFAULT_CONCERT_ID);
        assert_eq!(order.quantity, 2);
        assert_eq!(order.email, "fan@example.com");
    }

    #[test]
    fn revalidating_unchanged_form_is_stable() {
        let input = valid_input();
        let before = input.clone();

        let first = validate(&input).unwrap();
        let second = validate(&input).unwrap();

        assert_eq!(first, second);
        assert_eq!(input, before);
    }

    #[test]
    fn each_empty_field_reports_its_required_message() {
        let expected = [
            (FormField::Email, "Email is required"),
            (FormField::Name, "Name is required"),
            (FormField::Phone, "Phone is required"),
            (FormField::CreditCard, "Credit card number is required"),
            (FormField::Expiration, "Expiration date is required"),
            (FormField::Quantity, "Quantity is required"),
            (FormField::SecurityCode, "Security code is required"),
            (FormField::Address, "Address is required"),
            (FormField::City, "City is required"),
            (FormField::Province, "Province is required"),
            (FormField::PostalCode, "Postal code is required"),
            (FormField::Country, "Country is required"),
        ];

        for (field, message) in expected {
            let mut input = valid_input();
            input.set(field, String::new()).unwrap();

            let errors = validate(&input).unwrap_err();
            assert_eq!(errors.len(), 1, "{}", field);
            assert_eq!(errors.get(field), Some(message));
        }
    }

    #[test]
    fn empty_form_reports_every_field_at_once() {
        let errors = validate(&TicketFormInput::new(DEFAULT_CONCERT_ID)).unwrap_err();

        assert_eq!(errors.len(), 12);
        assert_eq!(errors.get(FormField::ConcertId), None);
        let order: Vec<_> = errors.iter().map(|e| e.field).collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
    }

    #[test]
    fn whitespace_counts_as_present() {
        assert_eq!(validate_field(FormField::Name, " "), None);
        assert_eq!(validate_field(FormField::Country, "\t"), None);
    }

    #[test]
    fn email_shape() {
        assert_eq!(validate_field(FormField::Email, "a@b.c"), None);
        assert_eq!(validate_field(FormField::Email, "abc"), Some("Invalid email format"));
        assert_eq!(validate_field(FormField::Email, "a @b.c"), Some("Invalid email format"));
        assert_eq!(validate_field(FormField::Email, "a@b"), Some("Invalid email format"));
        assert_eq!(validate_field(FormField::Email, ""), Some("Email is required"));
    }

    #[test]
    fn phone_needs_ten_digits() {
        assert_eq!(validate_field(FormField::Phone, "1234567890"), None);
        let message = Some("Phone number must be 10 digits");
        assert_eq!(validate_field(FormField::Phone, "123"), message);
        assert_eq!(validate_field(FormField::Phone, "12345678901"), message);
        assert_eq!(validate_field(FormField::Phone, "123456789a"), message);
        // Non-ASCII digits are rejected
        assert_eq!(validate_field(FormField::Phone, "١٢٣٤٥٦٧٨٩٠"), message);
    }

    #[test]
    fn credit_card_needs_sixteen_digits() {
        assert_eq!(validate_field(FormField::CreditCard, "1234567812345678"), None);
        let message = Some("Credit card number must be 16 digits");
        assert_eq!(validate_field(FormField::CreditCard, "123456781234567"), message);
        assert_eq!(validate_field(FormField::CreditCard, "12345678123456789"), message);
    }

    #[test]
    fn security_code_needs_three_digits() {
        assert_eq!(validate_field(FormField::SecurityCode, "123"), None);
        let message = Some("Security code must be 3 digits");
        assert_eq!(validate_field(FormField::SecurityCode, "12"), message);
        assert_eq!(validate_field(FormField::SecurityCode, "1234"), message);
    }

    #[test]
    fn expiration_month_and_year() {
        assert_eq!(validate_field(FormField::Expiration, "12/25"), None);
        assert_eq!(validate_field(FormField::Expiration, "01/30"), None);
        let message = Some("Invalid expiration date format. Use MM/YY");
        assert_eq!(validate_field(FormField::Expiration, "13/25"), message);
        assert_eq!(validate_field(FormField::Expiration, "1/25"), message);
        assert_eq!(validate_field(FormField::Expiration, "00/25"), message);
        assert_eq!(validate_field(FormField::Expiration, "12/2025"), message);
    }

    #[test]
    fn postal_code_us_or_canada() {
        for code in ["12345", "12345-6789", "A1A 1A1", "m5v 2t6"] {
            assert_eq!(validate_field(FormField::PostalCode, code), None, "{}", code);
        }
        let message = Some("Invalid postal code format");
        for code in ["ABCDE", "1234", "12345-678", "A1A1A1"] {
            assert_eq!(validate_field(FormField::PostalCode, code), message, "{}", code);
        }
    }

    #[test]
    fn quantity_minimum_and_shape() {
        assert_eq!(validate_field(FormField::Quantity, "1"), None);
        assert_eq!(validate_field(FormField::Quantity, " 3 "), None);
        assert_eq!(validate_field(FormField::Quantity, "0"), Some("Quantity must be at least 1"));
        assert_eq!(validate_field(FormField::Quantity, "-2"), Some("Quantity must be at least 1"));
        assert_eq!(validate_field(FormField::Quantity, "two"), Some("Quantity must be a whole number"));
        assert_eq!(validate_field(FormField::Quantity, "1.5"), Some("Quantity must be a whole number"));
        assert_eq!(validate_field(FormField::Quantity, "-"), Some("Quantity must be a whole number"));
        assert_eq!(validate_field(FormField::Quantity, "000"), Some("Quantity must be at least 1"));
        assert_eq!(validate_field(FormField::Quantity, "+7"), None);
    }

    #[test]
    fn quantity_beyond_order_range_is_reported_on_the_field() {
        let max = u32::MAX.to_string();
        assert_eq!(validate_field(FormField::Quantity, &max), None);
        assert_eq!(validate_field(FormField::Quantity, "4294967296"), Some("Quantity is too large"));
        assert_eq!(
            validate_field(FormField::Quantity, "99999999999999999999999"),
            Some("Quantity is too large")
        );
        assert_eq!(validate_field(FormField::Quantity, "-4294967296"), Some("Quantity must be at least 1"));

        let mut input = valid_input();
        input.quantity = "4294967296".to_string();
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Quantity), Some("Quantity is too large"));

        input.quantity = max;
        assert_eq!(validate(&input).unwrap().quantity, u32::MAX);
    }

    #[test]
    fn field_check_and_form_check_agree_on_quantity() {
        for raw in ["", " ", "0", "1", "-1", "+3", "1.0", "4294967295", "4294967296", "1e3", "٣"] {
            let mut input = valid_input();
            input.quantity = raw.to_string();

            let field_error = validate_field(FormField::Quantity, raw);
            let form_error = validate(&input).err().and_then(|e| e.get(FormField::Quantity));
            assert_eq!(field_error, form_error, "{:?}", raw);
        }
    }

    #[test]
    fn concert_id_has_no_rules() {
        assert!(rules_for(FormField::ConcertId).is_empty());
        assert_eq!(validate_field(FormField::ConcertId, ""), None);
    }

    #[test]
    fn setting_errors_keeps_form_order() {
        let mut errors = ValidationErrors::new();
        errors.set(FormField::Country, Some("Country is required"));
        errors.set(FormField::Email, Some("Email is required"));
        errors.set(FormField::Phone, Some("Phone is required"));
        errors.set(FormField::Email, None);

        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![FormField::Phone, FormField::Country]);
    }
}
