use crate::error::{Error, Result};
use crate::wire;
use serde_json::{json, Value};

/// A single custom field on an advertisement template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateItem {
    name: String,
    value: String,
}

impl TemplateItem {
    pub fn new(name: String, value: String) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::InvalidArgument(
                "Template item name cannot be empty".to_string(),
            ));
        }
        if value.is_empty() {
            return Err(Error::InvalidArgument(
                "Template item value cannot be empty".to_string(),
            ));
        }
        Ok(TemplateItem { name, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn to_value(&self) -> Value {
        json!({
            "name": self.name,
            "value": self.value,
        })
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        TemplateItem::new(
            wire::req_str(value, "name")?.to_string(),
            wire::req_str(value, "value")?.to_string(),
        )
    }
}

/// Custom advertisement template with its ordered field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    id: i64,
    items: Vec<TemplateItem>,
}

impl Template {
    pub fn new(id: i64, items: Vec<TemplateItem>) -> Self {
        Template { id, items }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn items(&self) -> &[TemplateItem] {
        &self.items
    }

    pub fn to_value(&self) -> Value {
        json!({
            "id": self.id,
            "items": self.items.iter().map(TemplateItem::to_value).collect::<Vec<_>>(),
        })
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        let items = match value.get("items") {
            Some(Value::Array(items)) => items
                .iter()
                .map(TemplateItem::from_value)
                .collect::<Result<Vec<_>>>()?,
            _ => Vec::new(),
        };
        Ok(Template::new(wire::req_i64(value, "id")?, items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_empty_name_rejected() {
        let err = TemplateItem::new(String::new(), "v".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "Template item name cannot be empty");
    }

    #[test]
    fn test_item_empty_value_rejected() {
        let err = TemplateItem::new("n".to_string(), String::new()).unwrap_err();
        assert_eq!(err.to_string(), "Template item value cannot be empty");
    }

    #[test]
    fn test_round_trip_preserves_item_order() {
        let template = Template::new(
            99,
            vec![
                TemplateItem::new("Colour".to_string(), "Blue".to_string()).unwrap(),
                TemplateItem::new("Banner".to_string(), "Top".to_string()).unwrap(),
            ],
        );
        let value = template.to_value();
        let decoded = Template::from_value(&value).unwrap();
        assert_eq!(decoded, template);
        assert_eq!(decoded.items()[0].name(), "Colour");
        assert_eq!(decoded.items()[1].name(), "Banner");
    }

    #[test]
    fn test_missing_items_decode_as_empty() {
        let decoded = Template::from_value(&json!({"id": 1})).unwrap();
        assert!(decoded.items().is_empty());
    }
}
