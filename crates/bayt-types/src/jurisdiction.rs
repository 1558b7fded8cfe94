//! Gulf jurisdictions supported by the regulatory validator and the
//! finance engine.
//!
//! The set is closed: seven jurisdictions, each with a canonical
//! `CC-RR` code, a licensing authority and a home currency. Adding one
//! forces every `match` in the workspace to handle it.

use serde::{Deserialize, Serialize};

/// Code reported when no jurisdiction could be determined.
pub const UNKNOWN_JURISDICTION_CODE: &str = "UNKNOWN";

/// Gulf jurisdictions with a real-estate broker licensing scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Jurisdiction {
    #[serde(rename = "AE-DU")]
    Dubai,
    #[serde(rename = "AE-AZ")]
    AbuDhabi,
    #[serde(rename = "SA-RY")]
    SaudiArabia,
    #[serde(rename = "QA-DA")]
    Qatar,
    #[serde(rename = "BH-MA")]
    Bahrain,
    #[serde(rename = "KW-KU")]
    Kuwait,
    #[serde(rename = "OM-MU")]
    Oman,
}

impl Jurisdiction {
    pub const ALL: [Jurisdiction; 7] = [
        Jurisdiction::Dubai,
        Jurisdiction::AbuDhabi,
        Jurisdiction::SaudiArabia,
        Jurisdiction::Qatar,
        Jurisdiction::Bahrain,
        Jurisdiction::Kuwait,
        Jurisdiction::Oman,
    ];

    /// Canonical jurisdiction code (e.g. "AE-DU")
    pub fn code(&self) -> &'static str {
        match self {
            Jurisdiction::Dubai => "AE-DU",
            Jurisdiction::AbuDhabi => "AE-AZ",
            Jurisdiction::SaudiArabia => "SA-RY",
            Jurisdiction::Qatar => "QA-DA",
            Jurisdiction::Bahrain => "BH-MA",
            Jurisdiction::Kuwait => "KW-KU",
            Jurisdiction::Oman => "OM-MU",
        }
    }

    /// Human-readable region name
    pub fn name(&self) -> &'static str {
        match self {
            Jurisdiction::Dubai => "Dubai",
            Jurisdiction::AbuDhabi => "Abu Dhabi",
            Jurisdiction::SaudiArabia => "Saudi Arabia",
            Jurisdiction::Qatar => "Qatar",
            Jurisdiction::Bahrain => "Bahrain",
            Jurisdiction::Kuwait => "Kuwait",
            Jurisdiction::Oman => "Oman",
        }
    }

    /// Body that issues broker and property registration numbers
    pub fn authority(&self) -> &'static str {
        match self {
            Jurisdiction::Dubai => "Dubai Land Department",
            Jurisdiction::AbuDhabi => "Abu Dhabi Municipality",
            Jurisdiction::SaudiArabia => "Ministry of Municipal and Rural Affairs (Ejar)",
            Jurisdiction::Qatar => "Qatar Real Estate Regulatory Authority",
            Jurisdiction::Bahrain => "Bahrain Real Estate Regulatory Authority",
            Jurisdiction::Kuwait => "Kuwait Real Estate Regulatory Authority",
            Jurisdiction::Oman => "Oman Real Estate Regulatory Authority",
        }
    }

    /// Accepted identifier spellings, shown to users on a format error
    pub fn expected_format(&self) -> &'static str {
        match self {
            Jurisdiction::Dubai => "RERA-NNNNN, BRK-NNNNN, or 5 digits",
            Jurisdiction::AbuDhabi => "ADM-NNNNNN or 6 digits",
            Jurisdiction::SaudiArabia => "8 digits",
            Jurisdiction::Qatar => "Q-RERA-NNNN, QR-NNNN, or QNNNN",
            Jurisdiction::Bahrain => "BHR-NNNNN, BH-NNNNN, or 5 digits",
            Jurisdiction::Kuwait => "K-RE-NNNNN, KRE-NNNNN, or 5 digits",
            Jurisdiction::Oman => "OMR-NNNN, OM-NNNN, or 4 digits",
        }
    }

    pub fn country(&self) -> Country {
        match self {
            Jurisdiction::Dubai | Jurisdiction::AbuDhabi => Country::Uae,
            Jurisdiction::SaudiArabia => Country::SaudiArabia,
            Jurisdiction::Qatar => Country::Qatar,
            Jurisdiction::Bahrain => Country::Bahrain,
            Jurisdiction::Kuwait => Country::Kuwait,
            Jurisdiction::Oman => Country::Oman,
        }
    }

    pub fn currency(&self) -> Currency {
        self.country().currency()
    }

    /// Parse a canonical code (case-insensitive, `_` or space accepted
    /// in place of `-`)
    pub fn parse_code(s: &str) -> Option<Self> {
        let key = squash(s);
        Self::ALL.into_iter().find(|j| squash(j.code()) == key)
    }

    /// Map a free-form hint (code, country, city or common abbreviation)
    /// to exactly one jurisdiction.
    ///
    /// "AE" and "UAE" name two emirates and therefore map to nothing.
    pub fn parse_hint(s: &str) -> Option<Self> {
        match squash(s).as_str() {
            "AEDU" | "DUBAI" | "DXB" => Some(Jurisdiction::Dubai),
            "AEAZ" | "ABUDHABI" | "AUH" => Some(Jurisdiction::AbuDhabi),
            "SARY" | "SA" | "KSA" | "SAUDI" | "SAUDIARABIA" | "RIYADH" | "EJAR" => {
                Some(Jurisdiction::SaudiArabia)
            }
            "QADA" | "QA" | "QATAR" | "DOHA" => Some(Jurisdiction::Qatar),
            "BHMA" | "BH" | "BAHRAIN" | "MANAMA" => Some(Jurisdiction::Bahrain),
            "KWKU" | "KW" | "KUWAIT" | "KUWAITCITY" => Some(Jurisdiction::Kuwait),
            "OMMU" | "OM" | "OMAN" | "MUSCAT" => Some(Jurisdiction::Oman),
            _ => None,
        }
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Uppercase and drop every separator so "ae_du", "AE-DU" and "Abu Dhabi"
/// compare as "AEDU" / "ABUDHABI".
fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// GCC member states covered by the jurisdiction set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    Uae,
    SaudiArabia,
    Qatar,
    Bahrain,
    Kuwait,
    Oman,
}

impl Country {
    pub const ALL: [Country; 6] = [
        Country::Uae,
        Country::SaudiArabia,
        Country::Qatar,
        Country::Bahrain,
        Country::Kuwait,
        Country::Oman,
    ];

    /// ISO 3166-1 alpha-2 prefix used in jurisdiction codes
    pub fn iso_prefix(&self) -> &'static str {
        match self {
            Country::Uae => "AE",
            Country::SaudiArabia => "SA",
            Country::Qatar => "QA",
            Country::Bahrain => "BH",
            Country::Kuwait => "KW",
            Country::Oman => "OM",
        }
    }

    pub fn currency(&self) -> Currency {
        match self {
            Country::Uae => Currency::Aed,
            Country::SaudiArabia => Currency::Sar,
            Country::Qatar => Currency::Qar,
            Country::Bahrain => Currency::Bhd,
            Country::Kuwait => Currency::Kwd,
            Country::Oman => Currency::Omr,
        }
    }

    /// Country from the leading two letters of a jurisdiction code,
    /// e.g. "AE-SH" (Sharjah, not a supported jurisdiction) -> UAE.
    pub fn from_code_prefix(code: &str) -> Option<Self> {
        let prefix = code.trim().get(..2)?;
        Country::ALL
            .into_iter()
            .find(|c| c.iso_prefix().eq_ignore_ascii_case(prefix))
    }
}

/// ISO 4217 currencies of the supported jurisdictions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Aed,
    Sar,
    Qar,
    Bhd,
    Kwd,
    Omr,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Aed => "AED",
            Currency::Sar => "SAR",
            Currency::Qar => "QAR",
            Currency::Bhd => "BHD",
            Currency::Kwd => "KWD",
            Currency::Omr => "OMR",
        }
    }

    /// Currency for an arbitrary jurisdiction code.
    ///
    /// Known codes use their jurisdiction's currency; unknown codes fall
    /// back to the country prefix, then to AED.
    pub fn for_code(code: &str) -> Self {
        Jurisdiction::parse_code(code)
            .map(|j| j.currency())
            .or_else(|| Country::from_code_prefix(code).map(|c| c.currency()))
            .unwrap_or(Currency::Aed)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
