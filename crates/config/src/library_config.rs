//! Library and validation configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use bookcase_forms::RuleAggregation;
use bookcase_library::DuplicatePolicy;
use serde::{Deserialize, Serialize};

/// A book looked up and added when a session starts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedBook {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub pages: Option<u32>,
}

impl SeedBook {
    pub fn new(title: &str, author: &str, read: bool, pages: Option<u32>) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            read,
            pages,
        }
    }
}

/// Collection and form validation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LibraryConfig {
    /// What to do when a book's ISBN is already in the library
    pub duplicate_policy: DuplicatePolicy,

    /// How several custom rules on one form field combine
    pub rule_aggregation: RuleAggregation,

    /// Look up and add the seed books when a session starts
    pub seed_on_startup: bool,

    /// Books added at startup
    pub seeds: Vec<SeedBook>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            rule_aggregation: RuleAggregation::default(),
            seed_on_startup: true,
            seeds: vec![
                SeedBook::new("the way of kings", "sanderson", true, None),
                SeedBook::new("mistborn", "brandon sanderson", false, None),
                SeedBook::new("elantris", "brandon", true, Some(500)),
            ],
        }
    }
}

impl ConfigSection for LibraryConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut results = Vec::new();

        for (i, seed) in self.seeds.iter().enumerate() {
            results.push(Validator::not_empty(
                &seed.title,
                &format!("library.seeds[{}].title", i),
            ));
            results.push(Validator::not_empty(
                &seed.author,
                &format!("library.seeds[{}].author", i),
            ));
        }

        Validator::collect_errors(results)
    }

    fn merge(&mut self, other: Self) {
        self.duplicate_policy = other.duplicate_policy;
        self.rule_aggregation = other.rule_aggregation;
        self.seed_on_startup = other.seed_on_startup;
        self.seeds = other.seeds;
    }

    fn section_name(&self) -> &'static str {
        "library"
    }
}
