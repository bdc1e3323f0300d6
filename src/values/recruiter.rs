use crate::error::{Error, Result};
use crate::wire;
use serde_json::{json, Value};
use validator::ValidateEmail;

/// Recruiter responsible for the advertisement and the recruitment of the
/// position.
#[derive(Debug, Clone, PartialEq)]
pub struct Recruiter {
    full_name: String,
    email: String,
    team_name: Option<String>,
}

impl Recruiter {
    pub fn new(full_name: String, email: String, team_name: Option<String>) -> Result<Self> {
        if full_name.is_empty() {
            return Err(Error::InvalidArgument(
                "Recruiter full name cannot be empty".to_string(),
            ));
        }
        if !email.validate_email() {
            return Err(Error::InvalidArgument(
                "Recruiter email format is invalid".to_string(),
            ));
        }
        Ok(Recruiter {
            full_name,
            email,
            team_name,
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn team_name(&self) -> Option<&str> {
        self.team_name.as_deref()
    }

    pub fn to_value(&self) -> Value {
        json!({
            "fullName": self.full_name,
            "email": self.email,
            "teamName": self.team_name,
        })
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        Recruiter::new(
            wire::req_str(value, "fullName")?.to_string(),
            wire::req_str(value, "email")?.to_string(),
            wire::opt_str(value, "teamName"),
        )
    }
}
