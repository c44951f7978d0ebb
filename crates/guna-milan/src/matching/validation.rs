use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::{Couple, Person};
use super::tables::{Nakshatra, ZodiacSign};

/// Unvalidated Moon placement as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInput {
    pub moon_sign: String,
    pub nakshatra: String,
}

impl PersonInput {
    pub fn new(moon_sign: impl Into<String>, nakshatra: impl Into<String>) -> Self {
        Self {
            moon_sign: moon_sign.into(),
            nakshatra: nakshatra.into(),
        }
    }
}

/// Request body for a compatibility calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityRequest {
    pub bride: PersonInput,
    pub groom: PersonInput,
}

/// One rejected input value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidField {
    /// Dotted path of the field, e.g. `groom.nakshatra`.
    pub field: String,
    pub value: String,
}

impl fmt::Display for InvalidField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = '{}'", self.field, self.value)
    }
}

/// Error raised before any scoring happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("invalid input: {}", join_fields(.fields))]
    InvalidInput { fields: Vec<InvalidField> },
}

impl MatchError {
    pub fn fields(&self) -> &[InvalidField] {
        match self {
            MatchError::InvalidInput { fields } => fields,
        }
    }
}

fn join_fields(fields: &[InvalidField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl CompatibilityRequest {
    pub fn new(bride: PersonInput, groom: PersonInput) -> Self {
        Self { bride, groom }
    }

    /// Resolve all four names against the reference vocabulary. Every offending
    /// field is reported, not just the first.
    pub fn validate(&self) -> Result<Couple, MatchError> {
        let mut invalid = Vec::new();
        let bride = resolve_person("bride", &self.bride, &mut invalid);
        let groom = resolve_person("groom", &self.groom, &mut invalid);

        match (bride, groom) {
            (Some(bride), Some(groom)) if invalid.is_empty() => Ok(Couple::new(bride, groom)),
            _ => Err(MatchError::InvalidInput { fields: invalid }),
        }
    }
}

fn resolve_person(
    role: &str,
    input: &PersonInput,
    invalid: &mut Vec<InvalidField>,
) -> Option<Person> {
    let moon_sign = input.moon_sign.parse::<ZodiacSign>().ok();
    if moon_sign.is_none() {
        invalid.push(InvalidField {
            field: format!("{role}.moon_sign"),
            value: input.moon_sign.clone(),
        });
    }

    let nakshatra = input.nakshatra.parse::<Nakshatra>().ok();
    if nakshatra.is_none() {
        invalid.push(InvalidField {
            field: format!("{role}.nakshatra"),
            value: input.nakshatra.clone(),
        });
    }

    Some(Person::new(moon_sign?, nakshatra?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_resolve_to_typed_couple() {
        let request = CompatibilityRequest::new(
            PersonInput::new("Cancer", "Rohini"),
            PersonInput::new("Scorpio", "Anuradha"),
        );

        let couple = request.validate().expect("valid request");
        assert_eq!(couple.bride.moon_sign, ZodiacSign::Cancer);
        assert_eq!(couple.groom.nakshatra, Nakshatra::Anuradha);
    }

    #[test]
    fn reports_every_offending_field() {
        let request = CompatibilityRequest::new(
            PersonInput::new("Ophiuchus", "Rohini"),
            PersonInput::new("Scorpio", "Abhijit"),
        );

        let err = request.validate().expect_err("two invalid fields");
        let names: Vec<_> = err.fields().iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, vec!["bride.moon_sign", "groom.nakshatra"]);
        let message = err.to_string();
        assert!(message.contains("Ophiuchus"));
        assert!(message.contains("groom.nakshatra"));
    }
}
