//! Document type classification by keyword profile.
//!
//! Each profile lists phrases typical of one kind of legal document. A
//! profile scores one point per phrase found anywhere in the text
//! (case-insensitive substring match, so "act" also fires inside "contract").
//! The highest score wins; ties go to the profile declared first.

use std::fmt;

use serde::Serialize;

/// The kinds of legal document the classifier can recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Contract,
    CourtFiling,
    JudicialOpinion,
    Legislation,
    LegalMemo,
    /// No profile keyword occurs in the text.
    Unknown,
}

impl DocumentType {
    /// Stable snake_case name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Contract => "contract",
            DocumentType::CourtFiling => "court_filing",
            DocumentType::JudicialOpinion => "judicial_opinion",
            DocumentType::Legislation => "legislation",
            DocumentType::LegalMemo => "legal_memo",
            DocumentType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword list for one document type.
#[derive(Debug, Clone, Copy)]
pub struct DocumentTypeProfile {
    pub document_type: DocumentType,
    /// Lowercase phrases; matched as substrings of the lowercased text.
    pub keywords: &'static [&'static str],
}

/// Profiles in tie-break order.
pub static PROFILES: &[DocumentTypeProfile] = &[
    DocumentTypeProfile {
        document_type: DocumentType::Contract,
        keywords: &[
            "agreement",
            "between the parties",
            "terms and conditions",
            "hereby agrees",
            "obligations",
            "in witness whereof",
        ],
    },
    DocumentTypeProfile {
        document_type: DocumentType::CourtFiling,
        keywords: &[
            "court",
            "plaintiff",
            "defendant",
            "case no",
            "motion",
            "petition",
            "complaint",
            "brief",
        ],
    },
    DocumentTypeProfile {
        document_type: DocumentType::JudicialOpinion,
        keywords: &[
            "opinion",
            "court holds",
            "we affirm",
            "we reverse",
            "judgment",
            "appellant",
            "appellee",
        ],
    },
    DocumentTypeProfile {
        document_type: DocumentType::Legislation,
        keywords: &[
            "act",
            "statute",
            "section",
            "subsection",
            "public law",
            "be it enacted",
        ],
    },
    DocumentTypeProfile {
        document_type: DocumentType::LegalMemo,
        keywords: &[
            "memorandum",
            "to:",
            "from:",
            "re:",
            "issue",
            "brief answer",
            "analysis",
        ],
    },
];

/// Scores text against a table of [`DocumentTypeProfile`]s.
#[derive(Debug, Clone)]
pub struct DocumentTypeClassifier {
    profiles: &'static [DocumentTypeProfile],
}

impl Default for DocumentTypeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTypeClassifier {
    /// Creates a classifier over the built-in [`PROFILES`].
    pub fn new() -> Self {
        Self::with_profiles(PROFILES)
    }

    pub fn with_profiles(profiles: &'static [DocumentTypeProfile]) -> Self {
        Self { profiles }
    }

    /// Per-profile scores in declaration order.
    pub fn scores(&self, text: &str) -> Vec<(DocumentType, usize)> {
        let lower = text.to_lowercase();
        self.profiles
            .iter()
            .map(|profile| {
                let score = profile
                    .keywords
                    .iter()
                    .filter(|keyword| lower.contains(**keyword))
                    .count();
                (profile.document_type, score)
            })
            .collect()
    }

    /// The best scoring type, or [`DocumentType::Unknown`] if nothing scored.
    pub fn classify(&self, text: &str) -> DocumentType {
        let mut best = (DocumentType::Unknown, 0);

        // Strictly greater keeps the earliest profile on ties
        for (document_type, score) in self.scores(text) {
            if score > best.1 {
                best = (document_type, score);
            }
        }

        best.0
    }
}
