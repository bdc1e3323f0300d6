use crate::enums::Position;
use crate::error::{Error, Result};
use crate::wire;
use serde_json::{json, Value};
use url::Url;

/// Video embedded in the advertisement, e.g. a YouTube embed link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    url: String,
    position: Option<Position>,
}

impl Video {
    pub fn new(url: String, position: Option<Position>) -> Result<Self> {
        if Url::parse(&url).is_err() {
            return Err(Error::InvalidArgument(
                "Video URL format is invalid".to_string(),
            ));
        }
        if url.chars().count() > 255 {
            return Err(Error::InvalidArgument(
                "Video URL must be no more than 255 characters long".to_string(),
            ));
        }
        Ok(Video { url, position })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn to_value(&self) -> Value {
        json!({
            "url": self.url,
            "position": self.position.map(|p| p.as_str()),
        })
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        let position = match wire::opt_str(value, "position") {
            Some(code) => Some(code.parse()?),
            None => None,
        };
        Video::new(wire::req_str(value, "url")?.to_string(), position)
    }
}
