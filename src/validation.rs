// src/validation.rs
//! Request validation as data: each rule names a field, a constraint and the
//! message reported when it fails. Only the first failing rule is reported.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::AppError;

/// Reported when a rule's field is absent from the request.
pub const REQUIRED_MESSAGE: &str = "Required";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Numeric field must be `>=` the bound.
    Min(f64),
    Email,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub constraint: Constraint,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn new(field: &'static str, constraint: Constraint, message: &'static str) -> Self {
        Self { field, constraint, message }
    }

    pub fn check(&self, value: Option<FieldValue<'_>>) -> Result<(), &'static str> {
        let value = value.ok_or(REQUIRED_MESSAGE)?;
        let ok = match (self.constraint, value) {
            (Constraint::Min(bound), FieldValue::Number(n)) => n >= bound,
            (Constraint::Email, FieldValue::Text(s)) => is_valid_email(s),
            _ => false,
        };
        if ok { Ok(()) } else { Err(self.message) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Text(&'a str),
}

/// Implemented by request bodies that carry a rule table.
pub trait Validate {
    fn rules() -> &'static [FieldRule];

    /// Value of a rule's field, `None` when absent.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    fn validate(&self) -> Result<(), AppError> {
        Self::rules()
            .iter()
            .try_for_each(|rule| rule.check(self.field(rule.field)))
            .map_err(AppError::validation)
    }
}

pub const WAITLIST_RULES: &[FieldRule] = &[FieldRule::new(
    "email",
    Constraint::Email,
    "Please enter a valid email address",
)];

pub const CALCULATION_RULES: &[FieldRule] = &[
    FieldRule::new("productQuantity", Constraint::Min(1.0), "Product quantity is required"),
    FieldRule::new("costs.productCost", Constraint::Min(0.0), "Product cost must be positive"),
    FieldRule::new("costs.shippingCost", Constraint::Min(0.0), "Shipping cost must be positive"),
    FieldRule::new("costs.packagingCost", Constraint::Min(0.0), "Packaging cost must be positive"),
    FieldRule::new("costs.marketingCost", Constraint::Min(0.0), "Marketing cost must be positive"),
    FieldRule::new("costs.platformFees", Constraint::Min(0.0), "Platform fees must be positive"),
    FieldRule::new("costs.additionalCosts", Constraint::Min(0.0), "Additional costs must be positive"),
    FieldRule::new("pricing.sellingPrice", Constraint::Min(0.0), "Selling price must be positive"),
];

/// Applied only when the request carries tax settings.
pub const TAX_RULES: &[FieldRule] = &[
    FieldRule::new("taxAndFees.gstRate", Constraint::Min(0.0), "GST rate must be positive"),
    FieldRule::new(
        "taxAndFees.paymentGatewayRate",
        Constraint::Min(0.0),
        "Payment gateway rate must be positive",
    ),
];

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        email: Option<String>,
        count: f64,
    }

    impl Validate for Sample {
        fn rules() -> &'static [FieldRule] {
            const RULES: &[FieldRule] = &[
                FieldRule::new("email", Constraint::Email, "bad email"),
                FieldRule::new("count", Constraint::Min(1.0), "count too small"),
            ];
            RULES
        }

        fn field(&self, name: &str) -> Option<FieldValue<'_>> {
            match name {
                "email" => self.email.as_deref().map(FieldValue::Text),
                "count" => Some(FieldValue::Number(self.count)),
                _ => None,
            }
        }
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::ValidationError(msg) => msg,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_accepts_valid_emails() {
        for email in [
            "seller@example.com",
            "first.last+shop@mail.example.co.in",
            "o'brien@store.io",
            "UPPER_case-1@Domain.ORG",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_rejects_malformed_emails() {
        for email in [
            "not-an-email",
            "",
            "@example.com",
            "user@",
            "user@example",
            "user@example.c",
            ".user@example.com",
            "us..er@example.com",
            "user.@example.com",
            "user@-example.com",
            "user name@example.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn test_first_violation_wins() {
        let sample = Sample { email: Some("nope".into()), count: 0.0 };
        assert_eq!(message(sample.validate().unwrap_err()), "bad email");

        let sample = Sample { email: Some("a@b.com".into()), count: 0.0 };
        assert_eq!(message(sample.validate().unwrap_err()), "count too small");
    }

    #[test]
    fn test_missing_field_is_required() {
        let sample = Sample { email: None, count: 5.0 };
        assert_eq!(message(sample.validate().unwrap_err()), REQUIRED_MESSAGE);
    }

    #[test]
    fn test_valid_sample_passes() {
        let sample = Sample { email: Some("a@b.com".into()), count: 1.0 };
        assert!(sample.validate().is_ok());
    }

    #[test]
    fn test_min_bound_is_inclusive() {
        let rule = FieldRule::new("x", Constraint::Min(0.0), "neg");
        assert!(rule.check(Some(FieldValue::Number(0.0))).is_ok());
        assert_eq!(rule.check(Some(FieldValue::Number(-0.01))), Err("neg"));
        assert_eq!(rule.check(Some(FieldValue::Text("0"))), Err("neg"));
    }
}
