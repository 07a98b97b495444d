// src/domain/model/mod.rs
// Core domain models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::{FormError, FormResult};

/// Concert the form sells tickets for unless configured otherwise
pub const DEFAULT_CONCERT_ID: i64 = 669115646;

/// Every field of the ticket purchase form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    ConcertId,
    Email,
    Name,
    Phone,
    CreditCard,
    Expiration,
    Quantity,
    SecurityCode,
    Address,
    City,
    Province,
    PostalCode,
    Country,
}

impl FormField {
    pub const ALL: [FormField; 13] = [
        FormField::ConcertId,
        FormField::Email,
        FormField::Name,
        FormField::Phone,
        FormField::CreditCard,
        FormField::Expiration,
        FormField::Quantity,
        FormField::SecurityCode,
        FormField::Address,
        FormField::City,
        FormField::Province,
        FormField::PostalCode,
        FormField::Country,
    ];

    /// Key used on the wire and in raw form input
    pub fn key(&self) -> &'static str {
        match self {
            FormField::ConcertId => "concertId",
            FormField::Email => "email",
            FormField::Name => "name",
            FormField::Phone => "phone",
            FormField::CreditCard => "creditCard",
            FormField::Expiration => "expiration",
            FormField::Quantity => "quantity",
            FormField::SecurityCode => "securityCode",
            FormField::Address => "address",
            FormField::City => "city",
            FormField::Province => "province",
            FormField::PostalCode => "postalCode",
            FormField::Country => "country",
        }
    }

    /// Human readable label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            FormField::ConcertId => "Concert ID",
            FormField::Email => "Email",
            FormField::Name => "Name",
            FormField::Phone => "Phone",
            FormField::CreditCard => "Credit Card",
            FormField::Expiration => "Expiration (MM/YY)",
            FormField::Quantity => "Quantity",
            FormField::SecurityCode => "Security Code (CVV)",
            FormField::Address => "Address",
            FormField::City => "City",
            FormField::Province => "Province",
            FormField::PostalCode => "Postal Code",
            FormField::Country => "Country",
        }
    }

    /// Whether the user may change the value
    pub fn is_editable(&self) -> bool {
        !matches!(self, FormField::ConcertId)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .iter()
            .copied()
            .find(|field| field.key() == s)
            .ok_or_else(|| format!("Unknown form field: {}", s))
    }
}

/// Order submitted to the ticket hub. Only built from a fully validated form.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketOrderRequest {
    pub concert_id: i64,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub credit_card: String,
    pub expiration: String,
    pub quantity: u32,
    pub security_code: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub country: String,
}

// Card number and CVV never reach the logs in clear
impl fmt::Debug for TicketOrderRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TicketOrderRequest")
            .field("concert_id", &self.concert_id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("credit_card", &mask_card_number(&self.credit_card))
            .field("expiration", &self.expiration)
            .field("quantity", &self.quantity)
            .field("security_code", &"***")
            .field("address", &self.address)
            .field("city", &self.city)
            .field("province", &self.province)
            .field("postal_code", &self.postal_code)
            .field("country", &self.country)
            .finish()
    }
}

/// Raw values of the purchase form as the user entered them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketFormInput {
    pub concert_id: i64,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub credit_card: String,
    pub expiration: String,
    pub quantity: String,
    pub security_code: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub country: String,
}

impl TicketFormInput {
    /// Initial form state: concert id pre-filled, every other field empty
    pub fn new(concert_id: i64) -> Self {
        Self {
            concert_id,
            email: String::new(),
            name: String::new(),
            phone: String::new(),
            credit_card: String::new(),
            expiration: String::new(),
            quantity: String::new(),
            security_code: String::new(),
            address: String::new(),
            city: String::new(),
            province: String::new(),
            postal_code: String::new(),
            country: String::new(),
        }
    }

    /// Raw value of an editable field. `None` for the concert id.
    pub fn value(&self, field: FormField) -> Option<&str> {
        let value = match field {
            FormField::ConcertId => return None,
            FormField::Email => &self.email,
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::CreditCard => &self.credit_card,
            FormField::Expiration => &self.expiration,
            FormField::Quantity => &self.quantity,
            FormField::SecurityCode => &self.security_code,
            FormField::Address => &self.address,
            FormField::City => &self.city,
            FormField::Province => &self.province,
            FormField::PostalCode => &self.postal_code,
            FormField::Country => &self.country,
        };
        Some(value.as_str())
    }

    /// Replace the raw value of an editable field
    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> FormResult<()> {
        let slot = match field {
            FormField::ConcertId => return Err(FormError::ReadOnlyField(field)),
            FormField::Email => &mut self.email,
            FormField::Name => &mut self.name,
            FormField::Phone => &mut self.phone,
            FormField::CreditCard => &mut self.credit_card,
            FormField::Expiration => &mut self.expiration,
            FormField::Quantity => &mut self.quantity,
            FormField::SecurityCode => &mut self.security_code,
            FormField::Address => &mut self.address,
            FormField::City => &mut self.city,
            FormField::Province => &mut self.province,
            FormField::PostalCode => &mut self.postal_code,
            FormField::Country => &mut self.country,
        };
        *slot = value.into();
        Ok(())
    }
}

impl Default for TicketFormInput {
    fn default() -> Self {
        Self::new(DEFAULT_CONCERT_ID)
    }
}

/// Replace all but the last four characters with `*`
pub fn mask_card_number(number: &str) -> String {
    let count = number.chars().count();
    number
        .chars()
        .enumerate()
        .map(|(i, c)| if i + 4 < count { '*' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> TicketOrderRequest {
        TicketOrderRequest {
            concert_id: DEFAULT_CONCERT_ID,
            email: "fan@example.com".to_string(),
            name: "Jisoo Kim".to_string(),
            phone: "4165550123".to_string(),
            credit_card: "4111111111111111".to_string(),
            expiration: "12/25".to_string(),
            quantity: 2,
            security_code: "123".to_string(),
            address: "1 Main St".to_string(),
            city: "Toronto".to_string(),
            province: "ON".to_string(),
            postal_code: "M5V 2T6".to_string(),
            country: "Canada".to_string(),
        }
    }

    #[test]
    fn serializes_with_wire_keys_and_numeric_ids() {
        let value = serde_json::to_value(order()).unwrap();

        assert_eq!(value["concertId"], serde_json::json!(669115646));
        assert_eq!(value["quantity"], serde_json::json!(2));
        assert_eq!(value["creditCard"], "4111111111111111");
        assert_eq!(value["securityCode"], "123");
        assert_eq!(value["postalCode"], "M5V 2T6");
        assert_eq!(value.as_object().unwrap().len(), 13);
    }

    #[test]
    fn debug_output_masks_payment_details() {
        let rendered = format!("{:?}", order());

        assert!(rendered.contains("************1111"));
        assert!(!rendered.contains("4111111111111111"));
        assert!(!rendered.contains("\"123\""));
    }

    #[test]
    fn field_keys_round_trip() {
        for field in FormField::ALL {
            assert_eq!(field.key().parse::<FormField>(), Ok(field));
        }
        assert!("cvv".parse::<FormField>().is_err());
    }

    #[test]
    fn only_concert_id_is_read_only() {
        let read_only: Vec<_> = FormField::ALL.iter().filter(|f| !f.is_editable()).collect();
        assert_eq!(read_only, vec![&FormField::ConcertId]);
    }

    #[test]
    fn new_form_is_empty_except_concert_id() {
        let input = TicketFormInput::new(42);

        assert_eq!(input.concert_id, 42);
        for field in FormField::ALL.iter().filter(|f| f.is_editable()) {
            assert_eq!(input.value(*field), Some(""));
        }
    }

    #[test]
    fn set_and_read_back() {
        let mut input = TicketFormInput::default();
        input.set(FormField::PostalCode, "A1A 1A1").unwrap();

        assert_eq!(input.value(FormField::PostalCode), Some("A1A 1A1"));
        assert_eq!(input.postal_code, "A1A 1A1");
    }

    #[test]
    fn concert_id_cannot_be_edited() {
        let mut input = TicketFormInput::default();
        let err = input.set(FormField::ConcertId, "1").unwrap_err();

        assert_eq!(err, FormError::ReadOnlyField(FormField::ConcertId));
        assert_eq!(input.concert_id, DEFAULT_CONCERT_ID);
        assert_eq!(input.value(FormField::ConcertId), None);
    }
}
