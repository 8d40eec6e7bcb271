//! Codegen Configuration
//!
//! - NamingConfig: how field names become class-name prefixes
//! - RenderProfile: the wrapper and primitive names a renderer uses for
//!   annotation trees
//!
//! Lowering itself is config-free apart from the custom scalar map.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

// =============================================================================
// Naming
// =============================================================================

/// Naming configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Acronyms to preserve (e.g., ID, URL, UUID, API)
    pub acronyms: HashSet<String>,

    /// Whether to preserve all-caps words
    pub preserve_screaming_case: bool,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            acronyms: ["ID", "URL", "UUID", "API", "HTTP", "JSON", "XML", "SQL", "URI", "UI", "IO"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            preserve_screaming_case: true,
        }
    }
}

// =============================================================================
// Render Profile
// =============================================================================

/// Surface names for the four annotation kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderProfile {
    /// `Optional(x)` -> `<optional><open>x<close>`
    pub optional: String,

    /// `ListOf(x)` -> `<list><open>x<close>`
    pub list: String,

    /// `UnionOf(x1..xn)` -> `<union><open>x1<separator>..xn<close>`
    pub union: String,

    pub open: String,
    pub close: String,
    pub separator: String,

    /// Name of the opaque/dynamic type
    pub any: String,

    /// Quote placed around forward references; empty disables quoting
    pub forward_quote: String,

    /// Primitive type names
    pub primitives: PrimitiveNames,
}

/// Target names for primitive types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimitiveNames {
    pub str: String,
    pub int: String,
    pub float: String,
    pub bool: String,
}

impl Default for PrimitiveNames {
    fn default() -> Self {
        Self {
            str: "str".to_string(),
            int: "int".to_string(),
            float: "float".to_string(),
            bool: "bool".to_string(),
        }
    }
}

impl Default for RenderProfile {
    fn default() -> Self {
        Self::python()
    }
}

impl RenderProfile {
    /// Python `typing` profile
    pub fn python() -> Self {
        Self {
            optional: "Optional".to_string(),
            list: "List".to_string(),
            union: "Union".to_string(),
            open: "[".to_string(),
            close: "]".to_string(),
            separator: ", ".to_string(),
            any: "Any".to_string(),
            forward_quote: "\"".to_string(),
            primitives: PrimitiveNames::default(),
        }
    }

    /// Rust-flavoured profile; unions render as a generic marker type
    pub fn rust() -> Self {
        Self {
            optional: "Option".to_string(),
            list: "Vec".to_string(),
            union: "OneOf".to_string(),
            open: "<".to_string(),
            close: ">".to_string(),
            separator: ", ".to_string(),
            any: "serde_json::Value".to_string(),
            forward_quote: String::new(),
            primitives: PrimitiveNames {
                str: "String".to_string(),
                int: "i64".to_string(),
                float: "f64".to_string(),
                bool: "bool".to_string(),
            },
        }
    }
}
