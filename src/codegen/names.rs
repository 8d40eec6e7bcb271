//! Naming
//!
//! Local stub names for schema types, and the ordered set of stubs a
//! generation run must materialize.
//!
//! Object and interface types reached through a union are scoped by the
//! enclosing prefix: `Node` reached from operation `OpA` becomes `OpANode`,
//! from `OpB` it becomes `OpBNode`. Each reference keeps the schema type name
//! so later passes can relate scoped stubs back to the canonical type.

use std::collections::HashMap;

use serde::Serialize;

use super::config::NamingConfig;

// =============================================================================
// Named Type Reference
// =============================================================================

/// A stub that must exist, linked back to its schema type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NamedTypeReference {
    /// Name of the generated stub
    pub local_name: String,

    /// Canonical schema type name
    pub schema_type_name: String,
}

impl NamedTypeReference {
    pub fn new(local_name: impl Into<String>, schema_type_name: impl Into<String>) -> Self {
        Self {
            local_name: local_name.into(),
            schema_type_name: schema_type_name.into(),
        }
    }
}

/// Local name for an object or interface stub
pub fn local_name(prefix: &str, schema_type_name: &str, add_type_name_suffix: bool) -> String {
    if add_type_name_suffix {
        format!("{}{}", prefix, schema_type_name)
    } else {
        prefix.to_string()
    }
}

/// Class prefix for a field of an operation, e.g. `GetUser` + `best_friend`
/// -> `GetUserBestFriend`
pub fn field_class_name(operation: &str, field: &str, naming: &NamingConfig) -> String {
    format!("{}{}", operation, to_pascal_case(field, naming))
}

/// Convert string to PascalCase, respecting acronyms
pub fn to_pascal_case(s: &str, naming: &NamingConfig) -> String {
    let mut result = String::with_capacity(s.len());
    let mut current_word = String::new();
    let mut prev_lower = false;

    for c in s.chars() {
        if c == '_' || c == '-' || c == ' ' {
            if !current_word.is_empty() {
                result.push_str(&case_word(&current_word, naming));
                current_word.clear();
            }
            prev_lower = false;
        } else {
            // camelCase boundary
            if c.is_ascii_uppercase() && prev_lower && !current_word.is_empty() {
                result.push_str(&case_word(&current_word, naming));
                current_word.clear();
            }
            current_word.push(c);
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }

    if !current_word.is_empty() {
        result.push_str(&case_word(&current_word, naming));
    }

    result
}

/// Apply casing to a word, preserving acronyms
fn case_word(word: &str, naming: &NamingConfig) -> String {
    let upper = word.to_uppercase();

    if naming.acronyms.contains(&upper) {
        return upper;
    }

    if naming.preserve_screaming_case
        && word.len() > 1
        && word.chars().all(|c| c.is_ascii_uppercase())
    {
        return word.to_string();
    }

    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut result = first.to_uppercase().to_string();
            result.extend(chars);
            result
        }
    }
}

// =============================================================================
// Stub Set
// =============================================================================

/// A local name claimed by two different schema types
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StubCollision {
    pub local_name: String,
    pub kept: String,
    pub dropped: String,
}

/// Insertion-ordered stubs, one per local name (first occurrence wins)
#[derive(Debug, Clone, Default, Serialize)]
pub struct StubSet {
    stubs: Vec<NamedTypeReference>,
    #[serde(skip)]
    index: HashMap<String, usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    collisions: Vec<StubCollision>,
}

impl StubSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reference; returns `true` if it introduced a new stub
    pub fn insert(&mut self, reference: NamedTypeReference) -> bool {
        if let Some(&idx) = self.index.get(&reference.local_name) {
            let existing = &self.stubs[idx];
            if existing.schema_type_name != reference.schema_type_name {
                tracing::warn!(
                    local_name = %reference.local_name,
                    kept = %existing.schema_type_name,
                    dropped = %reference.schema_type_name,
                    "stub name claimed by two schema types"
                );
                self.collisions.push(StubCollision {
                    local_name: reference.local_name,
                    kept: existing.schema_type_name.clone(),
                    dropped: reference.schema_type_name,
                });
            }
            return false;
        }
        self.index.insert(reference.local_name.clone(), self.stubs.len());
        self.stubs.push(reference);
        true
    }

    pub fn get(&self, local_name: &str) -> Option<&NamedTypeReference> {
        self.index.get(local_name).map(|&idx| &self.stubs[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedTypeReference> {
        self.stubs.iter()
    }

    pub fn len(&self) -> usize {
        self.stubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stubs.is_empty()
    }

    pub fn collisions(&self) -> &[StubCollision] {
        &self.collisions
    }

    /// Local stubs generated for one schema type
    pub fn for_schema_type<'a>(
        &'a self,
        schema_type_name: &'a str,
    ) -> impl Iterator<Item = &'a NamedTypeReference> + 'a {
        self.stubs
            .iter()
            .filter(move |r| r.schema_type_name == schema_type_name)
    }
}

impl Extend<NamedTypeReference> for StubSet {
    fn extend<I: IntoIterator<Item = NamedTypeReference>>(&mut self, iter: I) {
        for reference in iter {
            self.insert(reference);
        }
    }
}
