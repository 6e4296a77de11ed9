//! Brings loosely filled lookup options into the canonical, URL-ready form.
//!
//! Normalization never fails: anything missing is defaulted. Strings taken
//! from raw options are percent-encoded one by one; lists stay lists until a
//! template is filled. Options that are already canonical are only completed
//! with missing keys, never encoded a second time.

use std::collections::BTreeMap;

use crate::modules::dictionary::domain::value_objects::{
    CanonicalOptions, CanonicalSort, ExtraFields, LookupOptions, SortOption,
};

/// Value `z` takes when it is left out or set to `true`
pub const DEFAULT_EXTRA_FIELD: &str = "true";

/// Anything that can be brought into canonical form
pub trait IntoCanonical {
    fn into_canonical(self, filter_keys: &[&str], sort_keys: Option<&[&str]>) -> CanonicalOptions;
}

/// Normalizes `options` so that every key in `filter_keys` exists.
///
/// With `sort_keys` given, `sort` becomes a mapping holding every listed key;
/// without it, `sort` is a single encoded string (empty by default).
pub fn normalize(
    options: impl IntoCanonical,
    filter_keys: &[&str],
    sort_keys: Option<&[&str]>,
) -> CanonicalOptions {
    options.into_canonical(filter_keys, sort_keys)
}

fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn encode_all(values: &[String]) -> Vec<String> {
    values.iter().map(|value| encode(value)).collect()
}

fn ensure_keys(map: &mut BTreeMap<String, Vec<String>>, keys: &[&str]) {
    for key in keys {
        map.entry(key.to_string()).or_default();
    }
}

impl IntoCanonical for &LookupOptions {
    fn into_canonical(self, filter_keys: &[&str], sort_keys: Option<&[&str]>) -> CanonicalOptions {
        let mut filter: BTreeMap<String, Vec<String>> = self
            .filter
            .iter()
            .map(|(key, values)| (key.clone(), encode_all(values)))
            .collect();
        ensure_keys(&mut filter, filter_keys);

        // A sort of the wrong shape for the operation carries nothing usable
        let sort = match sort_keys {
            Some(keys) => {
                // Only the operation's own sort keys are carried
                let mut map: BTreeMap<String, Vec<String>> = match &self.sort {
                    Some(SortOption::Keyed(map)) => map
                        .iter()
                        .filter(|(key, _)| keys.contains(&key.as_str()))
                        .map(|(key, values)| (key.clone(), encode_all(values)))
                        .collect(),
                    _ => BTreeMap::new(),
                };
                ensure_keys(&mut map, keys);
                CanonicalSort::Keyed(map)
            }
            None => match &self.sort {
                Some(SortOption::Key(key)) => CanonicalSort::Single(encode(key)),
                _ => CanonicalSort::default(),
            },
        };

        let z = match &self.z {
            None | Some(ExtraFields::Flag(true)) => vec![DEFAULT_EXTRA_FIELD.to_string()],
            Some(ExtraFields::Flag(false)) => vec!["false".to_string()],
            Some(ExtraFields::Number(number)) => vec![encode(&number.to_string())],
            Some(ExtraFields::Field(field)) => vec![encode(field)],
            Some(ExtraFields::Fields(fields)) => encode_all(fields),
        };

        CanonicalOptions {
            filter,
            sort,
            z,
            page: self.page.map(|p| p.to_string()).unwrap_or_default(),
            per_page: self.per_page.map(|p| p.to_string()).unwrap_or_default(),
            query: None,
        }
    }
}

impl IntoCanonical for LookupOptions {
    fn into_canonical(self, filter_keys: &[&str], sort_keys: Option<&[&str]>) -> CanonicalOptions {
        (&self).into_canonical(filter_keys, sort_keys)
    }
}

impl IntoCanonical for CanonicalOptions {
    fn into_canonical(
        mut self,
        filter_keys: &[&str],
        sort_keys: Option<&[&str]>,
    ) -> CanonicalOptions {
        ensure_keys(&mut self.filter, filter_keys);

        self.sort = match (sort_keys, self.sort) {
            (Some(keys), CanonicalSort::Keyed(mut map)) => {
                map.retain(|key, _| keys.contains(&key.as_str()));
                ensure_keys(&mut map, keys);
                CanonicalSort::Keyed(map)
            }
            (Some(keys), CanonicalSort::Single(_)) => {
                let mut map = BTreeMap::new();
                ensure_keys(&mut map, keys);
                CanonicalSort::Keyed(map)
            }
            (None, CanonicalSort::Single(sort)) => CanonicalSort::Single(sort),
            (None, CanonicalSort::Keyed(_)) => CanonicalSort::default(),
        };

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::dictionary::domain::services::url_template::fill_template;
    use crate::modules::dictionary::domain::value_objects::LookupOperation;

    #[test]
    fn test_encodes_values_and_adds_z() {
        let options = LookupOptions::new()
            .with_filter("id", ["A$", "B$"])
            .with_sort("id")
            .with_page(2)
            .with_per_page(5);

        let canonical = normalize(&options, &["id"], None);

        assert_eq!(canonical.filter["id"], vec!["A%24", "B%24"]);
        assert_eq!(canonical.sort, CanonicalSort::Single("id".to_string()));
        assert_eq!(canonical.page, "2");
        assert_eq!(canonical.per_page, "5");
        assert_eq!(canonical.z, vec!["true"]);
        assert_eq!(canonical.query, None);
    }

    #[test]
    fn test_empty_options_get_defaults() {
        let canonical = normalize(&LookupOptions::default(), &[], None);
        assert_eq!(
            canonical,
            CanonicalOptions {
                filter: BTreeMap::new(),
                sort: CanonicalSort::Single(String::new()),
                z: vec!["true".to_string()],
                page: String::new(),
                per_page: String::new(),
                query: None,
            }
        );
    }

    #[test]
    fn test_declared_keys_default_to_empty_lists() {
        let options = LookupOptions::new().with_filter("dictID", ["somedictID"]);
        let canonical = normalize(&options, &["dictID", "id"], Some(&["dictID"][..]));

        assert_eq!(canonical.filter["dictID"], vec!["somedictID"]);
        assert!(canonical.filter["id"].is_empty());
        assert_eq!(
            canonical.sort,
            CanonicalSort::Keyed(BTreeMap::from([("dictID".to_string(), vec![])]))
        );
    }

    #[test]
    fn test_undeclared_filter_keys_are_kept_and_encoded() {
        let options = LookupOptions::new().with_filter("extra", ["a b"]);
        let canonical = normalize(&options, &["id"], None);
        assert_eq!(canonical.filter["extra"], vec!["a%20b"]);
        assert!(canonical.filter["id"].is_empty());
    }

    #[test]
    fn test_z_resolution() {
        let z_of = |z: Option<ExtraFields>| {
            let options = LookupOptions {
                z,
                ..LookupOptions::default()
            };
            normalize(&options, &[], None).z
        };

        assert_eq!(z_of(None), vec!["true"]);
        assert_eq!(z_of(Some(ExtraFields::Flag(true))), vec!["true"]);
        assert_eq!(z_of(Some(ExtraFields::Flag(false))), vec!["false"]);
        assert_eq!(z_of(Some(ExtraFields::Field("x y".into()))), vec!["x%20y"]);
        assert_eq!(z_of(Some(ExtraFields::Number(5u64.into()))), vec!["5"]);
        assert!(z_of(Some(ExtraFields::Fields(vec![]))).is_empty());
        assert_eq!(
            z_of(Some(ExtraFields::Fields(vec!["x".into(), "A$".into()]))),
            vec!["x", "A%24"]
        );
    }

    #[test]
    fn test_mismatched_sort_shape_is_dropped() {
        let keyed_sort = LookupOptions::new().with_sort_values("dictID", ["A"]);
        assert_eq!(
            normalize(&keyed_sort, &[], None).sort,
            CanonicalSort::Single(String::new())
        );

        let single_sort = LookupOptions::new().with_sort("id");
        assert_eq!(
            normalize(&single_sort, &[], Some(&["dictID"][..])).sort,
            CanonicalSort::Keyed(BTreeMap::from([("dictID".to_string(), vec![])]))
        );
    }

    #[test]
    fn test_keyed_sort_values_are_encoded() {
        let options = LookupOptions::new().with_sort_values("dictID", ["A B", "C"]);
        let canonical = normalize(&options, &["dictID"], Some(&["dictID"][..]));
        assert_eq!(
            canonical.sort,
            CanonicalSort::Keyed(BTreeMap::from([(
                "dictID".to_string(),
                vec!["A%20B".to_string(), "C".to_string()]
            )]))
        );
    }

    #[test]
    fn test_undeclared_sort_keys_are_dropped() {
        let options = LookupOptions::new()
            .with_sort_values("dName", ["wrong"])
            .with_sort_values("dictID", ["A"]);
        let canonical = normalize(&options, &["dictID"], Some(&["dictID"][..]));

        assert_eq!(
            canonical.sort,
            CanonicalSort::Keyed(BTreeMap::from([("dictID".to_string(), vec!["A".to_string()])]))
        );
        assert_eq!(fill_template("sort=$sortD", &canonical), "sort=A");
    }

    #[test]
    fn test_undeclared_filter_key_does_not_replace_declared_one() {
        let options = LookupOptions::new()
            .with_filter("id", ["real"])
            .with_filter("ID", ["other"]);
        let canonical = normalize(&options, &["id", "name"], None);

        assert_eq!(
            fill_template(LookupOperation::DictInfos.default_pattern().as_str(), &canonical),
            "/dic?id=real&name=&sort=&page=&perPage="
        );
    }

    #[test]
    fn test_page_zero_is_rendered() {
        let options = LookupOptions::new().with_page(0);
        assert_eq!(normalize(&options, &[], None).page, "0");
    }

    #[test]
    fn test_normalizing_canonical_options_is_idempotent() {
        let options = LookupOptions::new()
            .with_filter("id", ["A:01", "B$"])
            .with_sort_values("dictID", ["x y"])
            .with_z_fields(["a b"])
            .with_page(3);

        let once = normalize(&options, &["id", "dictID"], Some(&["dictID"][..]));
        let twice = normalize(once.clone(), &["id", "dictID"], Some(&["dictID"][..]));
        assert_eq!(once, twice);

        let single = normalize(&LookupOptions::new().with_sort("a b"), &["name"], None);
        assert_eq!(normalize(single.clone(), &["name"], None), single);
    }
}
