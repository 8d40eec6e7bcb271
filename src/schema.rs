//! Schema type algebra
//!
//! The closed set of type-node kinds a schema can place at a field position,
//! plus a small JSON schema document used to resolve type references such as
//! `[SearchResult!]!` into [`TypeNode`] trees.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, Result};

// =============================================================================
// Built-in Scalars
// =============================================================================

/// Scalars every schema provides without declaring them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinScalar {
    Id,
    String,
    Int,
    Float,
    Boolean,
}

impl BuiltinScalar {
    /// Look up a built-in scalar by its schema name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ID" => Some(BuiltinScalar::Id),
            "String" => Some(BuiltinScalar::String),
            "Int" => Some(BuiltinScalar::Int),
            "Float" => Some(BuiltinScalar::Float),
            "Boolean" => Some(BuiltinScalar::Boolean),
            _ => None,
        }
    }
}

// =============================================================================
// Type Nodes
// =============================================================================

/// A schema type expression.
///
/// Named kinds carry only their name; unions additionally carry their member
/// types in declaration order. `InputObject` is not an output type and exists
/// so that such a node can reach the lowering engine and be rejected there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    Scalar(String),
    Object(String),
    Interface(String),
    Enum(String),
    Union { name: String, variants: Vec<TypeNode> },
    List(Box<TypeNode>),
    NonNull(Box<TypeNode>),
    InputObject(String),
}

impl TypeNode {
    pub fn scalar(name: impl Into<String>) -> Self {
        TypeNode::Scalar(name.into())
    }

    pub fn object(name: impl Into<String>) -> Self {
        TypeNode::Object(name.into())
    }

    pub fn interface(name: impl Into<String>) -> Self {
        TypeNode::Interface(name.into())
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        TypeNode::Enum(name.into())
    }

    pub fn union(name: impl Into<String>, variants: Vec<TypeNode>) -> Self {
        TypeNode::Union { name: name.into(), variants }
    }

    pub fn list(inner: TypeNode) -> Self {
        TypeNode::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeNode) -> Self {
        TypeNode::NonNull(Box::new(inner))
    }

    /// The kind keyword used in schema documents
    pub fn kind(&self) -> &'static str {
        match self {
            TypeNode::Scalar(_) => "SCALAR",
            TypeNode::Object(_) => "OBJECT",
            TypeNode::Interface(_) => "INTERFACE",
            TypeNode::Enum(_) => "ENUM",
            TypeNode::Union { .. } => "UNION",
            TypeNode::List(_) => "LIST",
            TypeNode::NonNull(_) => "NON_NULL",
            TypeNode::InputObject(_) => "INPUT_OBJECT",
        }
    }

    /// Name of a named node; wrappers have none
    pub fn name(&self) -> Option<&str> {
        match self {
            TypeNode::Scalar(name)
            | TypeNode::Object(name)
            | TypeNode::Interface(name)
            | TypeNode::Enum(name)
            | TypeNode::InputObject(name)
            | TypeNode::Union { name, .. } => Some(name),
            TypeNode::List(_) | TypeNode::NonNull(_) => None,
        }
    }

    /// Wrapped type of a `List` or `NonNull`
    pub fn inner(&self) -> Option<&TypeNode> {
        match self {
            TypeNode::List(inner) | TypeNode::NonNull(inner) => Some(inner),
            _ => None,
        }
    }

    /// Union members in declaration order
    pub fn variants(&self) -> &[TypeNode] {
        match self {
            TypeNode::Union { variants, .. } => variants,
            _ => &[],
        }
    }

    /// Built-in scalar this node names, if any
    pub fn builtin_scalar(&self) -> Option<BuiltinScalar> {
        match self {
            TypeNode::Scalar(name) => BuiltinScalar::from_name(name),
            _ => None,
        }
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeNode::List(inner) => write!(f, "[{}]", inner),
            TypeNode::NonNull(inner) => write!(f, "{}!", inner),
            named => f.write_str(named.name().unwrap_or_default()),
        }
    }
}

// =============================================================================
// Schema Document
// =============================================================================

/// Kind of a named type declared in a schema document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Enum,
    Union,
    InputObject,
}

/// A named type declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDef {
    pub kind: TypeKind,

    /// Member type names (unions only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub possible_types: Vec<String>,
}

/// Named types of a schema, keyed by name.
///
/// Built-in scalars are implicit and need not be declared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub types: BTreeMap<String, TypeDef>,
}

impl Schema {
    /// Load a schema document from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a schema document from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        let schema: Schema = serde_json::from_str(content)?;
        tracing::debug!(types = schema.types.len(), "loaded schema");
        Ok(schema)
    }

    /// Declare a named type
    pub fn insert(&mut self, name: impl Into<String>, kind: TypeKind, possible_types: Vec<String>) {
        self.types.insert(name.into(), TypeDef { kind, possible_types });
    }

    /// Resolve a named type into a node
    pub fn named(&self, name: &str) -> Result<TypeNode> {
        if BuiltinScalar::from_name(name).is_some() {
            return Ok(TypeNode::scalar(name));
        }
        let def = self
            .types
            .get(name)
            .ok_or_else(|| CodegenError::UnknownType(name.to_string()))?;

        Ok(match def.kind {
            TypeKind::Scalar => TypeNode::scalar(name),
            TypeKind::Object => TypeNode::object(name),
            TypeKind::Interface => TypeNode::interface(name),
            TypeKind::Enum => TypeNode::enumeration(name),
            TypeKind::InputObject => TypeNode::InputObject(name.to_string()),
            TypeKind::Union => {
                let variants = def
                    .possible_types
                    .iter()
                    .map(|member| self.union_member(name, member))
                    .collect::<Result<Vec<_>>>()?;
                TypeNode::union(name, variants)
            }
        })
    }

    /// Union members must be object or interface types; never recurses
    fn union_member(&self, union: &str, member: &str) -> Result<TypeNode> {
        let kind = if BuiltinScalar::from_name(member).is_some() {
            TypeKind::Scalar
        } else {
            self.types
                .get(member)
                .ok_or_else(|| CodegenError::UnknownType(member.to_string()))?
                .kind
        };

        match kind {
            TypeKind::Object => Ok(TypeNode::object(member)),
            TypeKind::Interface => Ok(TypeNode::interface(member)),
            kind => Err(CodegenError::InvalidUnionMember {
                union: union.to_string(),
                member: member.to_string(),
                kind,
            }),
        }
    }

    /// Resolve a type reference such as `[Node!]!` into a node
    pub fn resolve(&self, type_ref: &str) -> Result<TypeNode> {
        let text = type_ref.trim();
        let invalid = || CodegenError::InvalidTypeRef(type_ref.to_string());

        if let Some(inner) = text.strip_suffix('!') {
            let inner = self.resolve(inner)?;
            if matches!(inner, TypeNode::NonNull(_)) {
                return Err(invalid());
            }
            return Ok(TypeNode::non_null(inner));
        }

        if let Some(rest) = text.strip_prefix('[') {
            let inner = rest.strip_suffix(']').ok_or_else(invalid)?;
            if inner.trim().is_empty() {
                return Err(invalid());
            }
            return Ok(TypeNode::list(self.resolve(inner)?));
        }

        if text.is_empty() || !text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid());
        }
        self.named(text)
    }
}
