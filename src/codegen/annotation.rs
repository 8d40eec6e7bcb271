//! Annotation Builder
//!
//! The output type-expression tree handed to a renderer. Values are plain
//! structural data: two annotations are equal iff their trees are equal.
//!
//! One normalization rule applies: wrapping an `Optional` in `Optional`
//! again is a no-op.

use serde::Serialize;

use crate::schema::BuiltinScalar;

// =============================================================================
// Names
// =============================================================================

/// Primitive target types that built-in scalars map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Str,
    Int,
    Float,
    Bool,
}

impl From<BuiltinScalar> for Primitive {
    fn from(scalar: BuiltinScalar) -> Self {
        match scalar {
            BuiltinScalar::Id | BuiltinScalar::String => Primitive::Str,
            BuiltinScalar::Int => Primitive::Int,
            BuiltinScalar::Float => Primitive::Float,
            BuiltinScalar::Boolean => Primitive::Bool,
        }
    }
}

/// What a `Named` annotation refers to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum TypeName {
    Primitive(Primitive),
    /// Opaque/dynamic type
    Any,
    /// Enum or custom scalar target, referenced directly
    Plain(String),
    /// Object stub, referenced lazily since it may be emitted later
    Forward(String),
}

impl TypeName {
    pub fn plain(name: impl Into<String>) -> Self {
        TypeName::Plain(name.into())
    }

    pub fn forward(name: impl Into<String>) -> Self {
        TypeName::Forward(name.into())
    }
}

// =============================================================================
// Annotation
// =============================================================================

/// Output type expression.
///
/// Build trees through the constructors: [`Annotation::optional`] collapses
/// nested optionality and [`Annotation::union_of`] is the checked union
/// constructor. A `UnionOf` built directly must not be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum Annotation {
    Named(TypeName),
    Optional(Box<Annotation>),
    ListOf(Box<Annotation>),
    UnionOf(Vec<Annotation>),
}

impl Annotation {
    pub fn named(name: TypeName) -> Self {
        Annotation::Named(name)
    }

    /// Wrap in `Optional`, collapsing an already-optional annotation
    pub fn optional(inner: Annotation) -> Self {
        match inner {
            Annotation::Optional(_) => inner,
            other => Annotation::Optional(Box::new(other)),
        }
    }

    pub fn list_of(inner: Annotation) -> Self {
        Annotation::ListOf(Box::new(inner))
    }

    /// Build a union; `None` when there are no variants
    pub fn union_of(variants: Vec<Annotation>) -> Option<Self> {
        if variants.is_empty() {
            None
        } else {
            Some(Annotation::UnionOf(variants))
        }
    }

    /// Wrap in `Optional` iff `nullable`
    pub fn nullable_if(self, nullable: bool) -> Self {
        if nullable {
            Annotation::optional(self)
        } else {
            self
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Annotation::Optional(_))
    }
}
