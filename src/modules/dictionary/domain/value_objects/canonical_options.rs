use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sort in canonical form, its shape fixed by the operation being called
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CanonicalSort {
    Single(String),
    Keyed(BTreeMap<String, Vec<String>>),
}

impl Default for CanonicalSort {
    fn default() -> Self {
        CanonicalSort::Single(String::new())
    }
}

/// Lookup options brought into URL-ready form.
///
/// Every string held here is already percent-encoded. Lists are kept apart
/// and only joined with `,` when a template is filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalOptions {
    pub filter: BTreeMap<String, Vec<String>>,
    pub sort: CanonicalSort,
    pub z: Vec<String>,
    pub page: String,
    pub per_page: String,
    /// Encoded search string, only set for string-match lookups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl CanonicalOptions {
    /// Attaches the search string of a string-match lookup, encoding it
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = Some(urlencoding::encode(query).into_owned());
        self
    }

    /// Placeholder names (without `$`) paired with the text they stand for.
    ///
    /// Filter key `id` maps to `filterID`, any other key to `filter` plus the
    /// key with its first letter upper-cased (`dictID` -> `filterDictID`).
    /// A single sort string maps to `sort`; a keyed sort maps each key to
    /// `sort` plus its upper-cased initial (`dictID` -> `sortD`).
    ///
    /// When two keys yield the same name, a key starting lower-case wins over
    /// one starting upper-case, then the first in key order. Each name appears once.
    pub fn placeholders(&self) -> Vec<(String, String)> {
        let mut values = Vec::new();

        push_unique(&mut values, &self.filter, |key| {
            format!("filter{}", filter_suffix(key))
        });

        match &self.sort {
            CanonicalSort::Single(sort) => values.push(("sort".to_string(), sort.clone())),
            CanonicalSort::Keyed(map) => {
                push_unique(&mut values, map, |key| format!("sort{}", sort_suffix(key)));
            }
        }

        values.push(("z".to_string(), self.z.join(",")));
        values.push(("page".to_string(), self.page.clone()));
        values.push(("perPage".to_string(), self.per_page.clone()));
        values.push(("str".to_string(), self.query.clone().unwrap_or_default()));
        values
    }
}

fn push_unique(
    values: &mut Vec<(String, String)>,
    lists: &BTreeMap<String, Vec<String>>,
    name_of: impl Fn(&str) -> String,
) {
    let mut entries: Vec<_> = lists.iter().collect();
    entries.sort_by_key(|(key, _)| key.starts_with(|c: char| c.is_uppercase()));

    for (key, list) in entries {
        let name = name_of(key.as_str());
        if values.iter().all(|(existing, _)| *existing != name) {
            values.push((name, list.join(",")));
        }
    }
}

fn filter_suffix(key: &str) -> String {
    if key == "id" {
        return "ID".to_string();
    }
    capitalize(key)
}

fn sort_suffix(key: &str) -> String {
    key.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
