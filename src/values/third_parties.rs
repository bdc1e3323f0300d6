use crate::error::{Error, Result};
use crate::wire;
use serde_json::{json, Map, Value};

/// Identifies the advertiser (and optionally an agent) a posting is made for.
///
/// `agent_id` should only be supplied when the caller is posting on behalf of
/// the agent, i.e. the caller is not the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThirdParties {
    advertiser_id: String,
    agent_id: Option<String>,
}

impl ThirdParties {
    pub fn new(advertiser_id: String, agent_id: Option<String>) -> Result<Self> {
        if advertiser_id.is_empty() {
            return Err(Error::InvalidArgument(
                "Advertiser id cannot be empty".to_string(),
            ));
        }
        Ok(ThirdParties {
            advertiser_id,
            agent_id,
        })
    }

    pub fn advertiser_id(&self) -> &str {
        &self.advertiser_id
    }

    pub fn agent_id(&self) -> Option<&str> {
        self.agent_id.as_deref()
    }

    /// `agentId` is omitted entirely when absent, not serialized as null.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "advertiserId".to_string(),
            json!(self.advertiser_id),
        );
        if let Some(ref agent_id) = self.agent_id {
            map.insert("agentId".to_string(), json!(agent_id));
        }
        Value::Object(map)
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        ThirdParties::new(
            wire::req_str(value, "advertiserId")?.to_string(),
            wire::opt_str(value, "agentId"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_advertiser_id_rejected() {
        let err = ThirdParties::new(String::new(), None).unwrap_err();
        assert_eq!(err.to_string(), "Advertiser id cannot be empty");
    }

    #[test]
    fn test_agent_id_omitted_when_absent() {
        let third_parties = ThirdParties::new("advertiser-1".to_string(), None).unwrap();
        let value = third_parties.to_value();
        assert!(value.get("agentId").is_none());
        assert_eq!(ThirdParties::from_value(&value).unwrap(), third_parties);
    }

    #[test]
    fn test_round_trip_with_agent() {
        let third_parties =
            ThirdParties::new("advertiser-1".to_string(), Some("agent-7".to_string())).unwrap();
        let value = third_parties.to_value();
        assert_eq!(value["agentId"], "agent-7");
        assert_eq!(ThirdParties::from_value(&value).unwrap(), third_parties);
    }
}
