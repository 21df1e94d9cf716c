use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{NameSuggestion, TldAvailability, Vocabulary};

/// Inclusive score ranges handed out to every suggestion
pub const BRAND_SCORE_RANGE: (u8, u8) = (60, 100);
pub const MEMORABILITY_SCORE_RANGE: (u8, u8) = (50, 100);
pub const BRANDABILITY_SCORE_RANGE: (u8, u8) = (50, 100);

/// Domain prices in cents, inclusive
const PRICE_CENTS_RANGE: (u32, u32) = (1000, 5999);

/// Highest numeral appended by the numbered rule
const MAX_NUMERAL: u32 = 999;

/// Errors raised while building suggestions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("generator vocabulary has no {0} configured")]
    EmptyVocabulary(&'static str),
}

/// How the name at a given batch index is assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    /// keyword + suffix
    Suffixed,
    /// prefix + keyword
    Prefixed,
    /// keyword + 1..=999
    Numbered,
}

impl NameRule {
    pub fn for_index(index: usize) -> Self {
        match index % 3 {
            0 => NameRule::Suffixed,
            1 => NameRule::Prefixed,
            _ => NameRule::Numbered,
        }
    }
}

/// Builds batches of placeholder name suggestions
///
/// Nothing here is a real naming algorithm: names are template fills and
/// every score or availability flag is a coin toss.
#[derive(Debug, Clone)]
pub struct NameGenerator {
    vocabulary: Vocabulary,
}

impl NameGenerator {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn with_default_vocabulary() -> Self {
        Self::new(Vocabulary::default())
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Generate `count` suggestions around `keyword`
    ///
    /// The caller validates the keyword; this only fails when the
    /// vocabulary cannot satisfy a rule.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        keyword: &str,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<NameSuggestion>, GeneratorError> {
        self.check_vocabulary()?;

        (0..count)
            .map(|i| {
                let name = self.build_name(keyword, NameRule::for_index(i), rng)?;
                Ok(self.decorate(name, rng))
            })
            .collect()
    }

    fn check_vocabulary(&self) -> Result<(), GeneratorError> {
        if self.vocabulary.prefixes.is_empty() {
            return Err(GeneratorError::EmptyVocabulary("prefixes"));
        }
        if self.vocabulary.suffixes.is_empty() {
            return Err(GeneratorError::EmptyVocabulary("suffixes"));
        }
        if self.vocabulary.tlds.is_empty() {
            return Err(GeneratorError::EmptyVocabulary("tlds"));
        }
        Ok(())
    }

    fn build_name<R: Rng + ?Sized>(
        &self,
        keyword: &str,
        rule: NameRule,
        rng: &mut R,
    ) -> Result<String, GeneratorError> {
        let name = match rule {
            NameRule::Suffixed => {
                let suffix = self
                    .vocabulary
                    .suffixes
                    .choose(rng)
                    .ok_or(GeneratorError::EmptyVocabulary("suffixes"))?;
                format!("{}{}", keyword, suffix)
            }
            NameRule::Prefixed => {
                let prefix = self
                    .vocabulary
                    .prefixes
                    .choose(rng)
                    .ok_or(GeneratorError::EmptyVocabulary("prefixes"))?;
                format!("{}{}", prefix, keyword)
            }
            NameRule::Numbered => format!("{}{}", keyword, rng.gen_range(1..=MAX_NUMERAL)),
        };
        Ok(name)
    }

    fn decorate<R: Rng + ?Sized>(&self, name: String, rng: &mut R) -> NameSuggestion {
        let domains = self
            .vocabulary
            .tlds
            .iter()
            .map(|tld| TldAvailability {
                tld: tld.clone(),
                available: rng.gen_bool(0.5),
                price: random_price(rng, PRICE_CENTS_RANGE),
            })
            .collect();

        NameSuggestion {
            id: Uuid::new_v4().to_string(),
            name,
            domains,
            brand_score: random_score(rng, BRAND_SCORE_RANGE),
            memorability_score: random_score(rng, MEMORABILITY_SCORE_RANGE),
            brandability_score: random_score(rng, BRANDABILITY_SCORE_RANGE),
        }
    }
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::with_default_vocabulary()
    }
}

#[inline]
fn random_score<R: Rng + ?Sized>(rng: &mut R, (min, max): (u8, u8)) -> u8 {
    rng.gen_range(min..=max)
}

/// Random price in whole cents, returned as a two-decimal amount
#[inline]
pub(crate) fn random_price<R: Rng + ?Sized>(rng: &mut R, (min, max): (u32, u32)) -> f64 {
    f64::from(rng.gen_range(min..=max)) / 100.0
}
