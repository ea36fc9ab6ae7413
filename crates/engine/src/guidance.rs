use std::collections::HashMap;

use crate::domain::LegalDomain;

/// Static per-domain advisory record surfaced on request.
#[derive(Debug, Clone)]
pub struct GuidanceEntry {
    pub guidance: String,
    pub template: String,
    pub followup_options: Vec<String>,
}

impl GuidanceEntry {
    fn new(guidance: &str, template: &str, followup_options: &[&str]) -> Self {
        Self {
            guidance: guidance.to_string(),
            template: template.to_string(),
            followup_options: followup_options.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Immutable domain → [`GuidanceEntry`] lookup.
///
/// Total over the domain set: a domain without a specific entry falls back to
/// the default entry, so lookups never fail.
#[derive(Debug)]
pub struct GuidanceCatalog {
    entries: HashMap<LegalDomain, GuidanceEntry>,
    default_entry: GuidanceEntry,
}

impl GuidanceCatalog {
    pub fn new(entries: HashMap<LegalDomain, GuidanceEntry>, default_entry: GuidanceEntry) -> Self {
        Self {
            entries,
            default_entry,
        }
    }

    pub fn with_default_entries() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            LegalDomain::AnscContestation,
            GuidanceEntry::new(
                "Check the contestation against Law 131/2015 on public procurement: \
                 standing of the contester, the 10-day filing window from when the \
                 grounds became known, and whether the challenged act (award decision, \
                 technical specification, evaluation) is reviewable by ANSC.",
                "1. Contested act and issuing authority\n\
                 2. Contester's standing and interest\n\
                 3. Filing deadline compliance\n\
                 4. Alleged violations of Law 131/2015\n\
                 5. Requested remedy (annulment, re-evaluation, correction)",
                &[
                    "Provide the contested award decision or tender documentation",
                    "Confirm the date the contester learned of the violation",
                    "List the Law 131/2015 provisions allegedly breached",
                ],
            ),
        );
        entries.insert(
            LegalDomain::ConsumerProtection,
            GuidanceEntry::new(
                "Frame the claim under the Consumer Protection Law: verify the buyer \
                 qualifies as a consumer, identify the non-conformity or misleading \
                 practice, and match it to the available remedies (repair, \
                 replacement, price reduction, refund).",
                "1. Consumer status and purchase details\n\
                 2. Defect, non-conformity, or misleading practice\n\
                 3. Warranty terms and claim timeline\n\
                 4. Remedy sought and seller's response so far\n\
                 5. Applicable Consumer Protection Law provisions",
                &[
                    "Describe the product defect or the misleading practice",
                    "Share the warranty terms and the purchase date",
                    "State the remedy already requested from the seller",
                ],
            ),
        );
        entries.insert(
            LegalDomain::ContractAnalysis,
            GuidanceEntry::new(
                "Analyze the clause within the whole agreement under the Civil Code: \
                 identify the parties' obligations, check validity requirements \
                 (consent, object, cause, form), and flag nullity or unenforceability \
                 grounds before assessing breach and remedies.",
                "1. Parties and contract qualification\n\
                 2. Clause under review, quoted verbatim\n\
                 3. Validity assessment under the Civil Code\n\
                 4. Obligations affected and alleged breach\n\
                 5. Consequences: nullity, damages, termination",
                &[
                    "Quote the clause in dispute verbatim",
                    "Identify the parties and the contract type",
                    "Explain which obligation was allegedly breached",
                ],
            ),
        );

        let default_entry = GuidanceEntry::new(
            "Work through the issue stepwise: establish the facts, identify the \
             applicable legal framework, apply it to the facts, and state the \
             conclusion with its supporting provisions.",
            "1. Facts established\n\
             2. Legal framework\n\
             3. Application to the facts\n\
             4. Conclusion and supporting provisions",
            &[
                "Summarize the key facts of the matter",
                "Name the legal framework you believe applies",
                "State the outcome you are seeking",
            ],
        );

        Self::new(entries, default_entry)
    }

    pub fn entry(&self, domain: LegalDomain) -> &GuidanceEntry {
        self.entries.get(&domain).unwrap_or(&self.default_entry)
    }
}

impl Default for GuidanceCatalog {
    fn default() -> Self {
        Self::with_default_entries()
    }
}
