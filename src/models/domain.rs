use serde::{Deserialize, Serialize};

/// Availability of a suggested name under one top-level domain
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TldAvailability {
    pub tld: String,
    pub available: bool,
    pub price: f64,
}

/// Candidate business name with fabricated scoring metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameSuggestion {
    pub id: String,
    pub name: String,
    pub domains: Vec<TldAvailability>,
    #[serde(rename = "brandScore")]
    pub brand_score: u8,
    #[serde(rename = "memorabilityScore")]
    pub memorability_score: u8,
    #[serde(rename = "brandabilityScore")]
    pub brandability_score: u8,
}

impl NameSuggestion {
    /// True when at least one TLD is free
    pub fn any_available(&self) -> bool {
        self.domains.iter().any(|d| d.available)
    }
}

/// Mock registry answer for a single domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainCheck {
    pub domain: String,
    pub available: bool,
    pub price: f64,
    pub registrar: String,
}

/// Word lists the generator draws from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    pub tlds: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            prefixes: to_owned(&DEFAULT_PREFIXES),
            suffixes: to_owned(&DEFAULT_SUFFIXES),
            tlds: to_owned(&DEFAULT_TLDS),
        }
    }
}

pub const DEFAULT_PREFIXES: [&str; 10] = [
    "Smart", "Pro", "Quick", "Elite", "Prime", "Global", "Ultra", "Mega", "Super", "Fast",
];

pub const DEFAULT_SUFFIXES: [&str; 10] = [
    "Hub", "Works", "Solutions", "Pro", "Express", "Connect", "Boost", "Plus", "Zone", "Tech",
];

pub const DEFAULT_TLDS: [&str; 3] = [".com", ".net", ".org"];

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
