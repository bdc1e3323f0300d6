use crate::error::{Error, Result};
use crate::wire;
use serde_json::{json, Value};
use validator::ValidateEmail;

/// Contact person shown to candidates on the advertisement
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    name: String,
    phone: Option<String>,
    email: Option<String>,
}

impl Contact {
    pub fn new(name: String, phone: Option<String>, email: Option<String>) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::InvalidArgument(
                "Contact name cannot be empty".to_string(),
            ));
        }
        if let Some(ref email) = email {
            if !email.validate_email() {
                return Err(Error::InvalidArgument(
                    "Contact email format is invalid".to_string(),
                ));
            }
        }
        Ok(Contact { name, phone, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn to_value(&self) -> Value {
        json!({
            "name": self.name,
            "phone": self.phone,
            "email": self.email,
        })
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        Contact::new(
            wire::req_str(value, "name")?.to_string(),
            wire::opt_str(value, "phone"),
            wire::opt_str(value, "email"),
        )
    }
}
