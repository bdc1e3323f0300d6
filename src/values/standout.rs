use crate::error::{Error, Result};
use crate::wire;
use serde_json::{json, Value};

/// Stand-out tier content: an optional logo and up to three bullet highlights
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandOut {
    logo_id: Option<i64>,
    bullets: Vec<String>,
}

impl StandOut {
    pub fn new(logo_id: Option<i64>, bullets: Vec<String>) -> Result<Self> {
        if bullets.len() > 3 {
            return Err(Error::Validation(
                "Stand out ads can only have up to 3 bullet points".to_string(),
            ));
        }
        Ok(StandOut { logo_id, bullets })
    }

    pub fn logo_id(&self) -> Option<i64> {
        self.logo_id
    }

    pub fn bullets(&self) -> &[String] {
        &self.bullets
    }

    pub fn to_value(&self) -> Value {
        json!({
            "logoId": self.logo_id,
            "bullets": self.bullets,
        })
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        let bullets = match value.get("bullets") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        Error::InvalidArgument(
                            "Stand out bullet point must be a string".to_string(),
                        )
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            _ => Vec::new(),
        };
        StandOut::new(wire::opt_i64(value, "logoId"), bullets)
    }
}
