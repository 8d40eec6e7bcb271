//! Custom scalar registry
//!
//! Maps schema scalar names to the target type a generated client uses for
//! them. Resolved once per generation run and passed by reference.
//!
//! Serialized as a list of entries so scalar names travel as values:
//!
//! ```toml
//! [[scalars]]
//! name = "DateTime"
//! type = "datetime"
//! import = "datetime"
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Target type for one custom scalar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarData {
    /// Target type name used in annotations and as the stub's local name
    #[serde(rename = "type")]
    pub type_name: String,

    /// Module the target type is imported from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<String>,
}

impl ScalarData {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self { type_name: type_name.into(), import: None }
    }

    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.import = Some(import.into());
        self
    }
}

/// One serialized registry entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalarEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<String>,
}

/// Immutable scalar name -> target type mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ScalarEntry>", into = "Vec<ScalarEntry>")]
pub struct CustomScalarMap {
    scalars: BTreeMap<String, ScalarData>,
}

impl CustomScalarMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&ScalarData> {
        self.scalars.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scalars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScalarData)> {
        self.scalars.iter().map(|(name, data)| (name.as_str(), data))
    }
}

impl<K: Into<String>> FromIterator<(K, ScalarData)> for CustomScalarMap {
    fn from_iter<I: IntoIterator<Item = (K, ScalarData)>>(iter: I) -> Self {
        Self {
            scalars: iter.into_iter().map(|(name, data)| (name.into(), data)).collect(),
        }
    }
}

impl From<Vec<ScalarEntry>> for CustomScalarMap {
    fn from(entries: Vec<ScalarEntry>) -> Self {
        entries
            .into_iter()
            .map(|entry| (entry.name, ScalarData { type_name: entry.type_name, import: entry.import }))
            .collect()
    }
}

impl From<CustomScalarMap> for Vec<ScalarEntry> {
    fn from(map: CustomScalarMap) -> Self {
        map.scalars
            .into_iter()
            .map(|(name, data)| ScalarEntry { name, type_name: data.type_name, import: data.import })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let scalars: CustomScalarMap =
            [("DateTime", ScalarData::new("datetime").with_import("datetime"))]
                .into_iter()
                .collect();
        assert!(scalars.contains("DateTime"));
        assert_eq!(scalars.get("DateTime").unwrap().type_name, "datetime");
        assert!(scalars.get("Upload").is_none());
    }

    #[derive(Deserialize)]
    struct Wrapper {
        scalars: CustomScalarMap,
    }

    #[test]
    fn test_deserialize_from_toml() {
        let wrapper: Wrapper = toml::from_str(
            r#"
            [[scalars]]
            name = "DateTime"
            type = "datetime"
            import = "datetime"

            [[scalars]]
            name = "Decimal"
            type = "Decimal"
            "#,
        )
        .unwrap();
        let scalars = wrapper.scalars;
        assert_eq!(scalars.len(), 2);
        assert_eq!(scalars.get("DateTime").unwrap().import.as_deref(), Some("datetime"));
        assert_eq!(scalars.get("Decimal").unwrap().import, None);
    }
}
