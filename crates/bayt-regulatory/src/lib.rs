//! Regulatory identifier validation for Gulf real-estate brokers and
//! listings.
//!
//! Every call returns a [`ValidationResult`]; malformed input is reported
//! through `valid == false`, never through a panic or an `Err`.

pub mod config;
pub mod detection;
pub mod formats;

pub use config::{ConfigError, DetectionPolicy, ValidatorConfig};

use bayt_types::{Jurisdiction, ValidationError, ValidationResult};
use detection::Detection;

/// Validator entry point
#[derive(Debug, Clone, Default)]
pub struct RegulatoryValidator {
    config: ValidatorConfig,
}

impl RegulatoryValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Classify, validate and canonicalize a raw identifier.
    ///
    /// A blank hint counts as no hint.
    pub fn validate(&self, raw: &str, hint: Option<&str>) -> ValidationResult {
        let normalized = formats::normalize(raw);

        let result = match hint.map(str::trim).filter(|h| !h.is_empty()) {
            Some(hint) => self.validate_hinted(normalized, hint),
            None => self.validate_detected(normalized),
        };

        tracing::debug!(
            valid = result.valid,
            jurisdiction = %result.jurisdiction_code,
            normalized = %result.normalized_number,
            "validated regulatory identifier"
        );
        result
    }

    fn validate_hinted(&self, normalized: String, hint: &str) -> ValidationResult {
        let Some(jurisdiction) = Jurisdiction::parse_hint(hint) else {
            return ValidationResult::rejected(
                None,
                normalized,
                ValidationError::UnknownJurisdiction {
                    hint: hint.to_string(),
                },
            );
        };

        match formats::match_format(jurisdiction, &normalized) {
            Some(found) => ValidationResult::accepted(jurisdiction, found.canonical()),
            None => invalid_format(Some(jurisdiction), normalized),
        }
    }

    fn validate_detected(&self, normalized: String) -> ValidationResult {
        match detection::detect(&normalized, self.config.detection) {
            Detection::Matched(found) => {
                ValidationResult::accepted(found.jurisdiction, found.canonical())
            }
            Detection::Ambiguous(candidates) => {
                tracing::warn!(
                    identifier = %normalized,
                    candidates = candidates.len(),
                    "bare identifier needs a jurisdiction hint"
                );
                ValidationResult::rejected(
                    None,
                    normalized,
                    ValidationError::AmbiguousAutoDetection { candidates },
                )
            }
            Detection::Unmatched(owner) => invalid_format(owner, normalized),
        }
    }
}

fn invalid_format(jurisdiction: Option<Jurisdiction>, normalized: String) -> ValidationResult {
    let expected = match jurisdiction {
        Some(j) => j.expected_format().to_string(),
        None => formats::all_formats(),
    };
    ValidationResult::rejected(
        jurisdiction,
        normalized,
        ValidationError::InvalidFormat {
            jurisdiction,
            expected,
        },
    )
}

/// Validate with the default configuration
pub fn validate(raw: &str, hint: Option<&str>) -> ValidationResult {
    RegulatoryValidator::new().validate(raw, hint)
}
