//! Field-level and whole-submission validation.
//!
//! All predicates are pure. The name checks deliberately reject the literal
//! texts `"true"`/`"false"` and strings that parse in full as a 32-bit
//! integer: type-confused clients tend to send booleans or numbers where a
//! name belongs, and the transport layer binds those as text. This is a
//! literal rule, not general type validation.

use serde_json::Number;
use thiserror::Error;

use crate::domain::product::{NewProduct, ProductSubmission, ProductType};

/// Why a submission was rejected. The only error kind the catalog core
/// produces; reported synchronously, never retried, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing value for '{0}'")]
    MissingField(&'static str),
    #[error("invalid product name")]
    Name,
    #[error("invalid product type")]
    Type,
    #[error("invalid inventory")]
    Inventory,
    #[error("invalid cost")]
    Cost,
}

impl ValidationError {
    /// True when the failure is an absent/null field rather than a bad value.
    pub fn is_missing(&self) -> bool {
        matches!(self, ValidationError::MissingField(_))
    }
}

/// A name must be present, not blank, not a boolean literal, and not an
/// integer in disguise. Note the 32-bit parse: a digit string too wide for
/// an `i32` is accepted as a name.
pub fn is_valid_name(name: Option<&str>) -> bool {
    let Some(name) = name else { return false };
    !name.trim().is_empty() && name != "true" && name != "false" && name.parse::<i32>().is_err()
}

/// A type must be present and a member of the fixed enumeration.
pub fn is_valid_type(value: Option<&str>) -> bool {
    value.is_some_and(|v| ProductType::parse(v).is_some())
}

/// An inventory must be present and non-negative.
pub fn is_valid_inventory(inventory: Option<&Number>) -> bool {
    inventory.and_then(|n| n.as_f64()).is_some_and(|n| n >= 0.0)
}

/// A cost must be present and non-negative. Free items are allowed.
pub fn is_valid_cost(cost: Option<f64>) -> bool {
    cost.is_some_and(|c| c >= 0.0)
}

/// True iff every field validator passes.
pub fn is_valid_submission(submission: &ProductSubmission) -> bool {
    is_valid_name(submission.name.as_deref())
        && is_valid_type(submission.product_type.as_deref())
        && is_valid_inventory(submission.inventory.as_ref())
        && is_valid_cost(submission.cost)
}

impl ProductSubmission {
    /// Checks the submission and, on success, hands back the validated
    /// record ready for insertion.
    ///
    /// Absent fields are reported before per-field checks run, so callers
    /// can distinguish "null value not allowed" from a bad value.
    pub fn validate(self) -> Result<NewProduct, ValidationError> {
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        let type_value = self
            .product_type
            .ok_or(ValidationError::MissingField("type"))?;
        let inventory = self
            .inventory
            .ok_or(ValidationError::MissingField("inventory"))?;
        let cost = self.cost.ok_or(ValidationError::MissingField("cost"))?;

        if !is_valid_name(Some(&name)) {
            return Err(ValidationError::Name);
        }
        let product_type = ProductType::parse(&type_value).ok_or(ValidationError::Type)?;
        if !is_valid_inventory(Some(&inventory)) {
            return Err(ValidationError::Inventory);
        }
        if !is_valid_cost(Some(cost)) {
            return Err(ValidationError::Cost);
        }

        Ok(NewProduct {
            name,
            product_type,
            inventory,
            cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Number;

    fn submission(name: &str, type_value: &str, inventory: i64, cost: f64) -> ProductSubmission {
        ProductSubmission {
            name: Some(name.to_string()),
            product_type: Some(type_value.to_string()),
            inventory: Some(Number::from(inventory)),
            cost: Some(cost),
        }
    }

    #[test]
    fn name_rejects_blank_and_literal_impostors() {
        assert!(!is_valid_name(None));
        assert!(!is_valid_name(Some("")));
        assert!(!is_valid_name(Some("   ")));
        assert!(!is_valid_name(Some("true")));
        assert!(!is_valid_name(Some("false")));
        assert!(!is_valid_name(Some("42")));
        assert!(!is_valid_name(Some("-7")));

        assert!(is_valid_name(Some("Dune")));
        // Not an integer: fractional and over-wide digit strings pass.
        assert!(is_valid_name(Some("12.5")));
        assert!(is_valid_name(Some("99999999999")));
        // Trailing whitespace defeats the integer parse.
        assert!(is_valid_name(Some("42 ")));
    }

    #[test]
    fn type_must_be_in_the_enumeration() {
        assert!(is_valid_type(Some("book")));
        assert!(is_valid_type(Some("food")));
        assert!(is_valid_type(Some("gadget")));
        assert!(is_valid_type(Some("other")));

        assert!(!is_valid_type(None));
        assert!(!is_valid_type(Some("vehicle")));
        assert!(!is_valid_type(Some("Book")));
        assert!(!is_valid_type(Some("")));
    }

    #[test]
    fn inventory_must_be_present_and_non_negative() {
        assert!(is_valid_inventory(Some(&Number::from(0))));
        assert!(is_valid_inventory(Some(&Number::from(5))));
        assert!(is_valid_inventory(Some(&Number::from_f64(2.5).unwrap())));

        assert!(!is_valid_inventory(None));
        assert!(!is_valid_inventory(Some(&Number::from(-1))));
        assert!(!is_valid_inventory(Some(&Number::from_f64(-0.5).unwrap())));
    }

    #[test]
    fn cost_is_non_negative_and_zero_is_allowed() {
        assert!(is_valid_cost(Some(0.0)));
        assert!(is_valid_cost(Some(12.5)));

        assert!(!is_valid_cost(None));
        assert!(!is_valid_cost(Some(-0.01)));
    }

    #[test]
    fn validate_reports_missing_fields_before_bad_values() {
        let mut sub = submission("true", "book", 1, 1.0);
        sub.cost = None;
        // Cost is absent AND the name is bad; absence wins.
        assert_eq!(
            sub.validate(),
            Err(ValidationError::MissingField("cost"))
        );
    }

    #[test]
    fn validate_maps_each_field_to_its_reason() {
        assert_eq!(
            submission("true", "book", 1, 1.0).validate(),
            Err(ValidationError::Name)
        );
        assert_eq!(
            submission("Dune", "vehicle", 1, 1.0).validate(),
            Err(ValidationError::Type)
        );
        assert_eq!(
            submission("Dune", "book", -2, 1.0).validate(),
            Err(ValidationError::Inventory)
        );
        assert_eq!(
            submission("Dune", "book", 1, -1.0).validate(),
            Err(ValidationError::Cost)
        );
    }

    #[test]
    fn validate_passes_through_the_accepted_fields() {
        let new = submission("Dune", "book", 5, 12.5).validate().unwrap();
        assert_eq!(new.name, "Dune");
        assert_eq!(new.product_type, ProductType::Book);
        assert_eq!(new.inventory, Number::from(5));
        assert_eq!(new.cost, 12.5);
    }

    #[test]
    fn is_valid_submission_agrees_with_validate() {
        assert!(is_valid_submission(&submission("Dune", "book", 5, 12.5)));
        assert!(!is_valid_submission(&submission("42", "book", 5, 12.5)));
        assert!(!is_valid_submission(&ProductSubmission::default()));
    }
}
