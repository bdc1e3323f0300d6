use crate::enums::{LocationArea, LocationCode};
use crate::error::Result;
use crate::wire;
use serde_json::{json, Value};

/// Location of the advertised job. The area, when given, must fall within the
/// location; that containment is validated by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    id: LocationCode,
    area_id: Option<LocationArea>,
}

impl Location {
    pub fn new(id: LocationCode, area_id: Option<LocationArea>) -> Self {
        Location { id, area_id }
    }

    pub fn id(&self) -> LocationCode {
        self.id
    }

    pub fn area_id(&self) -> Option<LocationArea> {
        self.area_id
    }

    pub fn to_value(&self) -> Value {
        json!({
            "id": self.id.as_str(),
            "areaId": self.area_id.map(|a| a.as_str()),
        })
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        let id = wire::req_str(value, "id")?.parse()?;
        let area_id = match wire::opt_str(value, "areaId") {
            Some(code) => Some(code.parse()?),
            None => None,
        };
        Ok(Location::new(id, area_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let location = Location::new(
            LocationCode::Sydney,
            Some(LocationArea::NorthShoreNorthernBeaches),
        );
        let value = location.to_value();
        assert_eq!(value["id"], "Sydney");
        assert_eq!(value["areaId"], "NorthShoreNorthernBeaches");
        assert_eq!(Location::from_value(&value).unwrap(), location);
    }

    #[test]
    fn test_absent_area_serialized_as_null() {
        let location = Location::new(LocationCode::Hobart, None);
        let value = location.to_value();
        assert!(value["areaId"].is_null());
        assert_eq!(Location::from_value(&value).unwrap(), location);
    }

    #[test]
    fn test_unknown_code_rejected_on_decode() {
        let value = json!({"id": "Gotham", "areaId": null});
        assert!(Location::from_value(&value).is_err());
    }
}
