//! Identifier formats accepted per jurisdiction and their canonical forms

use bayt_types::Jurisdiction;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref SEPARATOR_RUN: Regex = Regex::new(r"[-_\s]+").unwrap();

    static ref DUBAI_ID: Regex =
        Regex::new(r"^(?:(?P<prefix>RERA|BRK)-?)?(?P<digits>[0-9]{5})$").unwrap();
    static ref ABU_DHABI_ID: Regex =
        Regex::new(r"^(?:(?P<prefix>ADM)-?)?(?P<digits>[0-9]{6})$").unwrap();
    static ref SAUDI_ID: Regex = Regex::new(r"^(?P<digits>[0-9]{8})$").unwrap();
    static ref QATAR_ID: Regex =
        Regex::new(r"^(?P<prefix>Q-?RERA|QR|Q)-?(?P<digits>[0-9]{4})$").unwrap();
    static ref BAHRAIN_ID: Regex =
        Regex::new(r"^(?:(?P<prefix>BHR|BH)-?)?(?P<digits>[0-9]{5})$").unwrap();
    static ref KUWAIT_ID: Regex =
        Regex::new(r"^(?:(?P<prefix>K-?RE)-?)?(?P<digits>[0-9]{5})$").unwrap();
    static ref OMAN_ID: Regex =
        Regex::new(r"^(?:(?P<prefix>OMR|OM)-?)?(?P<digits>[0-9]{4})$").unwrap();
}

/// Order in which prefixed forms are tried when no hint is given.
///
/// Qatar goes first so "QR-" is never read as anything else; Dubai and
/// Abu Dhabi come last since their prefixes are unique anyway.
pub const PREFIX_PRIORITY: [Jurisdiction; 6] = [
    Jurisdiction::Qatar,
    Jurisdiction::Bahrain,
    Jurisdiction::Kuwait,
    Jurisdiction::Oman,
    Jurisdiction::Dubai,
    Jurisdiction::AbuDhabi,
];

/// Order used to resolve bare digits under the legacy priority policy.
///
/// Qatar is absent: its formats always carry a prefix.
pub const BARE_DIGIT_PRIORITY: [Jurisdiction; 6] = [
    Jurisdiction::AbuDhabi,
    Jurisdiction::SaudiArabia,
    Jurisdiction::Dubai,
    Jurisdiction::Bahrain,
    Jurisdiction::Kuwait,
    Jurisdiction::Oman,
];

/// A successful match against one jurisdiction's formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdMatch {
    pub jurisdiction: Jurisdiction,
    /// Authority prefix as typed (after normalization), if any
    pub prefix: Option<String>,
    pub digits: String,
}

impl IdMatch {
    pub fn has_prefix(&self) -> bool {
        self.prefix.is_some()
    }

    /// Rewrite to the single canonical spelling for the jurisdiction
    pub fn canonical(&self) -> String {
        match self.jurisdiction {
            // Dubai keeps a supplied BRK- prefix; everything else becomes RERA-
            Jurisdiction::Dubai => match self.prefix.as_deref() {
                Some("BRK") => format!("BRK-{}", self.digits),
                _ => format!("RERA-{}", self.digits),
            },
            Jurisdiction::AbuDhabi => format!("ADM-{}", self.digits),
            Jurisdiction::SaudiArabia => self.digits.clone(),
            Jurisdiction::Qatar => format!("QR-{}", self.digits),
            Jurisdiction::Bahrain => format!("BHR-{}", self.digits),
            Jurisdiction::Kuwait => format!("K-RE-{}", self.digits),
            Jurisdiction::Oman => format!("OMR-{}", self.digits),
        }
    }
}

/// Trim, uppercase and collapse separator runs (`-`, `_`, whitespace)
/// into a single `-`
pub fn normalize(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    SEPARATOR_RUN
        .replace_all(&upper, "-")
        .trim_matches('-')
        .to_string()
}

fn format_for(jurisdiction: Jurisdiction) -> &'static Regex {
    match jurisdiction {
        Jurisdiction::Dubai => &*DUBAI_ID,
        Jurisdiction::AbuDhabi => &*ABU_DHABI_ID,
        Jurisdiction::SaudiArabia => &*SAUDI_ID,
        Jurisdiction::Qatar => &*QATAR_ID,
        Jurisdiction::Bahrain => &*BAHRAIN_ID,
        Jurisdiction::Kuwait => &*KUWAIT_ID,
        Jurisdiction::Oman => &*OMAN_ID,
    }
}

/// Match a normalized identifier against a single jurisdiction
pub fn match_format(jurisdiction: Jurisdiction, normalized: &str) -> Option<IdMatch> {
    format_for(jurisdiction)
        .captures(normalized)
        .and_then(|caps| to_match(jurisdiction, &caps))
}

fn to_match(jurisdiction: Jurisdiction, caps: &Captures<'_>) -> Option<IdMatch> {
    let digits = caps.name("digits")?.as_str().to_string();
    let prefix = caps.name("prefix").map(|p| p.as_str().replace('-', ""));
    Some(IdMatch {
        jurisdiction,
        prefix,
        digits,
    })
}

/// Prefix spellings (dashes removed) that identify each jurisdiction
fn prefixes(jurisdiction: Jurisdiction) -> &'static [&'static str] {
    match jurisdiction {
        Jurisdiction::Dubai => &["RERA", "BRK"],
        Jurisdiction::AbuDhabi => &["ADM"],
        Jurisdiction::SaudiArabia => &[],
        Jurisdiction::Qatar => &["QRERA", "QR", "Q"],
        Jurisdiction::Bahrain => &["BHR", "BH"],
        Jurisdiction::Kuwait => &["KRE"],
        Jurisdiction::Oman => &["OMR", "OM"],
    }
}

/// Jurisdiction owning the leading authority prefix, regardless of
/// whether the digits that follow are well-formed.
///
/// Lets "QR-12345" be reported as a malformed Qatar number rather than
/// as an unrecognized one.
pub fn prefix_owner(normalized: &str) -> Option<Jurisdiction> {
    let leading: String = normalized
        .chars()
        .take_while(|c| !c.is_ascii_digit())
        .filter(|c| *c != '-')
        .collect();
    if leading.is_empty() {
        return None;
    }
    PREFIX_PRIORITY
        .into_iter()
        .find(|j| prefixes(*j).contains(&leading.as_str()))
}

/// Every accepted format, for errors where no jurisdiction is known
pub fn all_formats() -> String {
    Jurisdiction::ALL
        .iter()
        .map(|j| format!("{} ({})", j.name(), j.expected_format()))
        .collect::<Vec<_>>()
        .join("; ")
}
