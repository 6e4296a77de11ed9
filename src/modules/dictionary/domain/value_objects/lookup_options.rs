use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sort request: a single active sort key, or per-key ordered value lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortOption {
    Key(String),
    Keyed(BTreeMap<String, Vec<String>>),
}

/// The `z` option, requesting extra data on returned items.
///
/// `Flag(true)` means the same as leaving `z` out: ask for the default extra
/// field. Any other bare value is treated as a one-element field list, so
/// `Flag(false)` requests a field literally named `false`, and a number is
/// requested by its decimal text. An empty `Fields` list requests no extra
/// fields at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtraFields {
    Flag(bool),
    Number(serde_json::Number),
    Field(String),
    Fields(Vec<String>),
}

/// Raw, loosely filled lookup request. Every field may be left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LookupOptions {
    pub filter: BTreeMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<ExtraFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl LookupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter<I, S>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter
            .insert(key.to_string(), values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_sort(mut self, key: &str) -> Self {
        self.sort = Some(SortOption::Key(key.to_string()));
        self
    }

    /// Adds one keyed sort list, switching `sort` to the mapping form if needed
    pub fn with_sort_values<I, S>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        match &mut self.sort {
            Some(SortOption::Keyed(map)) => {
                map.insert(key.to_string(), values);
            }
            _ => {
                let mut map = BTreeMap::new();
                map.insert(key.to_string(), values);
                self.sort = Some(SortOption::Keyed(map));
            }
        }
        self
    }

    pub fn with_z(mut self, z: ExtraFields) -> Self {
        self.z = Some(z);
        self
    }

    pub fn with_z_fields<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_z(ExtraFields::Fields(
            fields.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// First value of a filter key, if any
    pub fn first_filter(&self, key: &str) -> Option<&str> {
        self.filter
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
