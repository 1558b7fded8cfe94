//! Jurisdiction auto-detection for identifiers submitted without a hint
//!
//! Prefixed forms are tried first, in [`PREFIX_PRIORITY`] order. Only then
//! are bare digits considered: a digit count accepted by exactly one
//! jurisdiction (6 Abu Dhabi, 8 Saudi Arabia, 4 Oman) is attributed to it.
//! Five digits are accepted by Dubai, Bahrain and Kuwait alike; how that
//! tie is handled depends on the [`DetectionPolicy`].

use crate::config::DetectionPolicy;
use crate::formats::{match_format, prefix_owner, IdMatch, BARE_DIGIT_PRIORITY, PREFIX_PRIORITY};
use bayt_types::Jurisdiction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// Exactly one jurisdiction claims the identifier
    Matched(IdMatch),
    /// Bare digits claimed by several jurisdictions
    Ambiguous(Vec<Jurisdiction>),
    /// No format matched; carries the owner of a recognizable prefix
    Unmatched(Option<Jurisdiction>),
}

pub fn detect(normalized: &str, policy: DetectionPolicy) -> Detection {
    if let Some(found) = PREFIX_PRIORITY
        .into_iter()
        .filter_map(|j| match_format(j, normalized))
        .find(IdMatch::has_prefix)
    {
        return Detection::Matched(found);
    }

    let mut candidates: Vec<IdMatch> = BARE_DIGIT_PRIORITY
        .into_iter()
        .filter_map(|j| match_format(j, normalized))
        .filter(|m| !m.has_prefix())
        .collect();

    match candidates.len() {
        0 => Detection::Unmatched(prefix_owner(normalized)),
        1 => Detection::Matched(candidates.remove(0)),
        _ => match policy {
            DetectionPolicy::PriorityOrder => {
                let chosen = candidates.remove(0);
                tracing::warn!(
                    identifier = normalized,
                    jurisdiction = %chosen.jurisdiction,
                    "bare identifier resolved by priority order; attribution is low-confidence"
                );
                Detection::Matched(chosen)
            }
            DetectionPolicy::RequireHint => {
                Detection::Ambiguous(candidates.into_iter().map(|m| m.jurisdiction).collect())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(normalized: &str) -> Jurisdiction {
        match detect(normalized, DetectionPolicy::RequireHint) {
            Detection::Matched(m) => m.jurisdiction,
            other => panic!("expected a match for {}, got {:?}", normalized, other),
        }
    }

    #[test]
    fn test_prefixed_forms() {
        assert_eq!(matched("QR-1234"), Jurisdiction::Qatar);
        assert_eq!(matched("Q1234"), Jurisdiction::Qatar);
        assert_eq!(matched("BHR-12345"), Jurisdiction::Bahrain);
        assert_eq!(matched("BH-12345"), Jurisdiction::Bahrain);
        assert_eq!(matched("K-RE-12345"), Jurisdiction::Kuwait);
        assert_eq!(matched("OM-1234"), Jurisdiction::Oman);
        assert_eq!(matched("RERA-12345"), Jurisdiction::Dubai);
        assert_eq!(matched("BRK-12345"), Jurisdiction::Dubai);
        assert_eq!(matched("ADM-123456"), Jurisdiction::AbuDhabi);
    }

    #[test]
    fn test_unique_bare_digit_counts() {
        assert_eq!(matched("123456"), Jurisdiction::AbuDhabi);
        assert_eq!(matched("99999999"), Jurisdiction::SaudiArabia);
        assert_eq!(matched("1234"), Jurisdiction::Oman);
    }

    #[test]
    fn test_five_digits_are_ambiguous_by_default() {
        assert_eq!(
            detect("12345", DetectionPolicy::RequireHint),
            Detection::Ambiguous(vec![
                Jurisdiction::Dubai,
                Jurisdiction::Bahrain,
                Jurisdiction::Kuwait
            ])
        );
    }

    #[test]
    fn test_priority_order_picks_dubai() {
        match detect("12345", DetectionPolicy::PriorityOrder) {
            Detection::Matched(m) => {
                assert_eq!(m.jurisdiction, Jurisdiction::Dubai);
                assert_eq!(m.canonical(), "RERA-12345");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unmatched_reports_prefix_owner() {
        assert_eq!(
            detect("QR-12345", DetectionPolicy::RequireHint),
            Detection::Unmatched(Some(Jurisdiction::Qatar))
        );
        assert_eq!(
            detect("BADFORMAT", DetectionPolicy::RequireHint),
            Detection::Unmatched(None)
        );
        assert_eq!(
            detect("1234567", DetectionPolicy::RequireHint),
            Detection::Unmatched(None)
        );
    }
}
