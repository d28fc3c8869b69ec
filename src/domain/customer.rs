use crate::error::{CommerceError, Result};
use serde::{Deserialize, Serialize};

/// A customer placing orders, identified by email.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Customer {
    pub fn validate(&self) -> Result<()> {
        require("customer.first_name", &self.first_name)?;
        require("customer.last_name", &self.last_name)?;
        require("customer.email", &self.email)?;
        if !self.email.contains('@') {
            return Err(CommerceError::Validation(format!(
                "customer.email is not a valid address: {}",
                self.email
            )));
        }
        Ok(())
    }
}

/// A postal address, used for both shipping and billing.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

impl Address {
    pub fn validate(&self, label: &str) -> Result<()> {
        require(&format!("{label}.street"), &self.street)?;
        require(&format!("{label}.city"), &self.city)?;
        require(&format!("{label}.state"), &self.state)?;
        require(&format!("{label}.country"), &self.country)?;
        require(&format!("{label}.zip_code"), &self.zip_code)?;
        Ok(())
    }
}

/// Rejects empty and whitespace-only values for required fields.
fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(CommerceError::Validation(format!(
            "{field} must not be blank"
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Customer {
        Customer {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    fn address() -> Address {
        Address {
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            country: "US".to_string(),
            zip_code: "62701".to_string(),
        }
    }

    #[test]
    fn test_valid_customer() {
        assert!(customer().validate().is_ok());
    }

    #[test]
    fn test_blank_field_rejected() {
        let mut c = customer();
        c.first_name = "   ".to_string();
        assert!(matches!(c.validate(), Err(CommerceError::Validation(_))));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut c = customer();
        c.email = "not-an-email".to_string();
        assert!(matches!(c.validate(), Err(CommerceError::Validation(_))));
    }

    #[test]
    fn test_valid_address() {
        assert!(address().validate("shipping_address").is_ok());
    }

    #[test]
    fn test_address_blank_zip_rejected() {
        let mut a = address();
        a.zip_code = String::new();
        let err = a.validate("billing_address").unwrap_err();
        assert!(err.to_string().contains("billing_address.zip_code"));
    }
}
