use serde::{Deserialize, Serialize};
use std::fmt;

const PAGING: &str = "&page=$page&perPage=$perPage";

/// The remote lookups this adapter can issue, one URL template each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LookupOperation {
    DictInfos,
    Entries,
    /// Reserved: a template is resolved for it but no public operation uses it yet
    RefTerms,
    Matches,
}

impl LookupOperation {
    /// Filter sub-keys that must exist after normalization
    pub fn filter_keys(&self) -> &'static [&'static str] {
        match self {
            LookupOperation::DictInfos => &["id", "name"],
            LookupOperation::Entries => &["id", "dictID"],
            LookupOperation::RefTerms => &["str"],
            LookupOperation::Matches => &["dictID"],
        }
    }

    /// Sort sub-keys when the operation sorts by a mapping, `None` for a single sort string
    pub fn sort_keys(&self) -> Option<&'static [&'static str]> {
        match self {
            LookupOperation::Matches => Some(&["dictID"]),
            _ => None,
        }
    }

    /// Path and query pattern appended to the base URL when no template override is given
    pub fn default_pattern(&self) -> String {
        let path = match self {
            LookupOperation::DictInfos => "/dic?id=$filterID&name=$filterName&sort=$sort",
            LookupOperation::Entries => "/ent?id=$filterID&dictID=$filterDictID&z=$z&sort=$sort",
            LookupOperation::RefTerms => "/ref?str=$filterStr",
            LookupOperation::Matches => "/mat?q=$str&dictID=$filterDictID&sort=$sortD&z=$z",
        };
        format!("{}{}", path, PAGING)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LookupOperation::DictInfos => "dictInfos",
            LookupOperation::Entries => "entries",
            LookupOperation::RefTerms => "refTerms",
            LookupOperation::Matches => "matches",
        }
    }
}

impl fmt::Display for LookupOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
