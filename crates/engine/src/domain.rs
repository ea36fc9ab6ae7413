use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Legal subject-matter category used to select guidance and templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalDomain {
    AnscContestation,
    ConsumerProtection,
    ContractAnalysis,
    LegalReasoning,
}

impl LegalDomain {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AnscContestation => "ansc_contestation",
            Self::ConsumerProtection => "consumer_protection",
            Self::ContractAnalysis => "contract_analysis",
            Self::LegalReasoning => "legal_reasoning",
        }
    }

    /// Human-readable header used in log banners.
    pub const fn label(self) -> &'static str {
        match self {
            Self::AnscContestation => "ANSC Analysis",
            Self::ConsumerProtection => "Consumer Protection",
            Self::ContractAnalysis => "Contract Analysis",
            Self::LegalReasoning => "Legal Reasoning",
        }
    }

    /// Resolve a caller-supplied `category` override.
    ///
    /// The generic categories (`analysis`, `planning`, `verification`) are
    /// accepted as aliases of the default domain; anything else outside the
    /// enumerated set is rejected by the caller.
    pub fn from_category(category: &str) -> Option<Self> {
        match category.trim() {
            "ansc_contestation" => Some(Self::AnscContestation),
            "consumer_protection" => Some(Self::ConsumerProtection),
            "contract_analysis" => Some(Self::ContractAnalysis),
            "legal_reasoning" | "analysis" | "planning" | "verification" => {
                Some(Self::LegalReasoning)
            }
            _ => None,
        }
    }
}

/// One ordered classification rule: a domain plus the patterns that select it.
#[derive(Debug)]
pub struct DomainRule {
    domain: LegalDomain,
    patterns: Vec<Regex>,
}

impl DomainRule {
    /// Compile a rule from raw pattern strings.
    ///
    /// Patterns are matched case-insensitively anywhere in the input.
    /// Unparsable patterns are skipped with a warning rather than failing the
    /// whole table; classification still works on the remaining patterns.
    pub fn new(domain: LegalDomain, patterns: &[&str]) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|raw| {
                match RegexBuilder::new(raw).case_insensitive(true).build() {
                    Ok(re) => Some(re),
                    Err(err) => {
                        log::warn!("Skipping unparsable pattern '{raw}' for {}: {err}", domain.as_str());
                        None
                    }
                }
            })
            .collect();
        Self { domain, patterns }
    }

    fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }
}

/// The built-in rule table, in authoritative order.
///
/// Order matters: text matching patterns from two domains resolves to the
/// domain declared first.
pub fn default_rule_table() -> Vec<DomainRule> {
    vec![
        DomainRule::new(
            LegalDomain::AnscContestation,
            &[
                "contestation",
                "ANSC",
                "procurement",
                "tender",
                "Law 131/2015",
                "technical specification",
                "award criteria",
            ],
        ),
        DomainRule::new(
            LegalDomain::ConsumerProtection,
            &[
                "consumer",
                "warranty",
                "product",
                "refund",
                "Consumer Protection Law",
                "misleading",
                "advertising",
                "product safety",
            ],
        ),
        DomainRule::new(
            LegalDomain::ContractAnalysis,
            &[
                "contract",
                "clause",
                "agreement",
                "Civil Code",
                "obligation",
                "contractual",
                "parties",
            ],
        ),
    ]
}

/// Maps free text to a [`LegalDomain`] via first-match evaluation of an
/// ordered rule table.
///
/// The classifier is a pure function of its rule table and the input text;
/// the table is fixed at construction and never mutated, so a single instance
/// is safely shared across concurrent calls.
#[derive(Debug)]
pub struct DomainClassifier {
    rules: Vec<DomainRule>,
}

impl DomainClassifier {
    pub fn new(rules: Vec<DomainRule>) -> Self {
        Self { rules }
    }

    pub fn with_default_rules() -> Self {
        Self::new(default_rule_table())
    }

    /// Classify `text`, returning the first domain with a matching pattern.
    ///
    /// Empty or unmatched text classifies to [`LegalDomain::LegalReasoning`];
    /// this never fails.
    pub fn classify(&self, text: &str) -> LegalDomain {
        self.rules
            .iter()
            .find(|rule| rule.matches(text))
            .map(|rule| rule.domain)
            .unwrap_or(LegalDomain::LegalReasoning)
    }
}

impl Default for DomainClassifier {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
