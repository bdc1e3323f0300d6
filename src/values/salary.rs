use crate::enums::SalaryType;
use crate::error::{Error, Result};
use crate::wire;
use serde_json::{json, Number, Value};

/// Salary range applicable to the advertised job.
///
/// Amounts are kept as the wire numbers they arrived as, so a document
/// carrying whole-dollar integers re-encodes with integers rather than
/// floats.
#[derive(Debug, Clone, PartialEq)]
pub struct Salary {
    salary_type: SalaryType,
    minimum: Number,
    maximum: Number,
    details: Option<String>,
}

impl Salary {
    pub fn new(
        salary_type: SalaryType,
        minimum: f64,
        maximum: f64,
        details: Option<String>,
    ) -> Result<Self> {
        let minimum = Number::from_f64(minimum).ok_or_else(|| {
            Error::InvalidArgument("Salary minimum amount must be a numeric value".to_string())
        })?;
        let maximum = Number::from_f64(maximum).ok_or_else(|| {
            Error::InvalidArgument("Salary maximum amount must be a numeric value".to_string())
        })?;
        Salary::from_parts(salary_type, minimum, maximum, details)
    }

    fn from_parts(
        salary_type: SalaryType,
        minimum: Number,
        maximum: Number,
        details: Option<String>,
    ) -> Result<Self> {
        if let Some(ref details) = details {
            if details.chars().count() > 50 {
                return Err(Error::InvalidArgument(
                    "Salary description must be no more than 50 characters long".to_string(),
                ));
            }
        }
        Ok(Salary {
            salary_type,
            minimum,
            maximum,
            details,
        })
    }

    pub fn salary_type(&self) -> SalaryType {
        self.salary_type
    }

    pub fn minimum(&self) -> f64 {
        // as_f64 is total for serde_json numbers
        self.minimum.as_f64().unwrap_or(0.0)
    }

    pub fn maximum(&self) -> f64 {
        self.maximum.as_f64().unwrap_or(0.0)
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn to_value(&self) -> Value {
        json!({
            "type": self.salary_type.as_str(),
            "minimum": self.minimum,
            "maximum": self.maximum,
            "details": self.details,
        })
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        Salary::from_parts(
            wire::req_str(value, "type")?.parse()?,
            wire::req_num(value, "minimum")?,
            wire::req_num(value, "maximum")?,
            wire::opt_str(value, "details"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_length_limit() {
        let err = Salary::new(
            SalaryType::AnnualPackage,
            50000.0,
            60000.0,
            Some("d".repeat(51)),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Salary description must be no more than 50 characters long"
        );

        assert!(Salary::new(
            SalaryType::AnnualPackage,
            50000.0,
            60000.0,
            Some("d".repeat(50)),
        )
        .is_ok());
    }

    #[test]
    fn test_non_finite_amounts_rejected() {
        let err =
            Salary::new(SalaryType::AnnualPackage, f64::NAN, 60000.0, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Salary minimum amount must be a numeric value"
        );
        let err = Salary::new(SalaryType::AnnualPackage, 50000.0, f64::INFINITY, None)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Salary maximum amount must be a numeric value"
        );
    }

    #[test]
    fn test_round_trip() {
        let salary = Salary::new(
            SalaryType::HourlyRate,
            35.5,
            48.0,
            Some("Plus penalty rates".to_string()),
        )
        .unwrap();
        assert_eq!(Salary::from_value(&salary.to_value()).unwrap(), salary);
    }

    #[test]
    fn test_integer_amounts_round_trip_as_integers() {
        let value = json!({
            "type": "AnnualPackage",
            "minimum": 120000,
            "maximum": 140000,
            "details": null,
        });
        let salary = Salary::from_value(&value).unwrap();
        assert_eq!(salary.minimum(), 120000.0);
        assert_eq!(salary.maximum(), 140000.0);
        // whole-dollar amounts re-encode as the integers they arrived as
        assert_eq!(salary.to_value(), value);
    }

    #[test]
    fn test_float_amounts_round_trip_as_floats() {
        let value = json!({
            "type": "HourlyRate",
            "minimum": 35.5,
            "maximum": 48.0,
            "details": null,
        });
        let salary = Salary::from_value(&value).unwrap();
        assert_eq!(salary.to_value(), value);
    }
}
