use serde::{Deserialize, Serialize};

use crate::modules::dictionary::domain::{
    entities::DictionaryConfig,
    value_objects::{CanonicalOptions, LookupOperation},
};

/// Substitutes `$name` placeholders in `template` with canonical option values.
///
/// Scanning is a single left-to-right pass. At each `$` the longest known
/// placeholder name wins (`$sortD` before `$sort`), and substituted text is
/// never scanned again. A `$` not followed by a known name is copied as is.
pub fn fill_template(template: &str, options: &CanonicalOptions) -> String {
    let mut values = options.placeholders();
    values.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut filled = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        filled.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        match values
            .iter()
            .find(|(name, _)| after.starts_with(name.as_str()))
        {
            Some((name, value)) => {
                filled.push_str(value);
                rest = &after[name.len()..];
            }
            None => {
                filled.push('$');
                rest = after;
            }
        }
    }

    filled.push_str(rest);
    filled
}

/// The URL template of every lookup operation, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlTemplates {
    pub dict_infos: String,
    pub entries: String,
    pub ref_terms: String,
    pub matches: String,
}

impl UrlTemplates {
    /// Uses each configured override, or `base` plus the operation's default pattern
    pub fn from_config(config: &DictionaryConfig) -> Self {
        let resolve = |template: &Option<String>, operation: LookupOperation| {
            template
                .clone()
                .unwrap_or_else(|| format!("{}{}", config.base, operation.default_pattern()))
        };

        Self {
            dict_infos: resolve(&config.url_get_dict_infos, LookupOperation::DictInfos),
            entries: resolve(&config.url_get_entries, LookupOperation::Entries),
            ref_terms: resolve(&config.url_get_ref_terms, LookupOperation::RefTerms),
            matches: resolve(&config.url_get_matches, LookupOperation::Matches),
        }
    }

    pub fn get(&self, operation: LookupOperation) -> &str {
        match operation {
            LookupOperation::DictInfos => &self.dict_infos,
            LookupOperation::Entries => &self.entries,
            LookupOperation::RefTerms => &self.ref_terms,
            LookupOperation::Matches => &self.matches,
        }
    }
}

impl Default for UrlTemplates {
    fn default() -> Self {
        Self::from_config(&DictionaryConfig::default())
    }
}
