//! Lowering Engine
//!
//! Maps a schema [`TypeNode`] to an [`Annotation`] tree plus the ordered list
//! of [`NamedTypeReference`]s the stub generator must materialize.
//!
//! Nullability flows top-down: every position starts nullable and a
//! `NonNull` strips exactly one level of optionality along its path. A list
//! element is a fresh position, so list-level and element-level optionality
//! are independent.
//!
//! Lowering is pure and deterministic; references are not deduplicated here.

use crate::error::{CodegenError, Result};
use crate::schema::TypeNode;

use super::annotation::{Annotation, Primitive, TypeName};
use super::names::{local_name, NamedTypeReference};
use super::scalars::CustomScalarMap;

/// Read-only state threaded through every recursive call
#[derive(Debug, Clone, Copy)]
pub struct LoweringContext<'a> {
    /// Prefix for object/interface stub names
    pub name_prefix: &'a str,

    /// Append the schema type name to the prefix (set for union members)
    pub add_type_name_suffix: bool,

    pub custom_scalars: &'a CustomScalarMap,
}

impl<'a> LoweringContext<'a> {
    pub fn new(name_prefix: &'a str, custom_scalars: &'a CustomScalarMap) -> Self {
        Self {
            name_prefix,
            add_type_name_suffix: false,
            custom_scalars,
        }
    }

    /// Same context with the type-name suffix enabled
    pub fn with_type_name_suffix(self) -> Self {
        Self { add_type_name_suffix: true, ..self }
    }
}

/// Result of lowering one type expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lowered {
    pub annotation: Annotation,
    pub references: Vec<NamedTypeReference>,
}

impl Lowered {
    fn bare(annotation: Annotation) -> Self {
        Self { annotation, references: Vec::new() }
    }

    fn with_reference(annotation: Annotation, reference: NamedTypeReference) -> Self {
        Self { annotation, references: vec![reference] }
    }
}

/// Lower a type expression
pub fn lower(node: &TypeNode, nullable: bool, ctx: &LoweringContext<'_>) -> Result<Lowered> {
    match node {
        TypeNode::Scalar(name) => Ok(lower_scalar(node, name, nullable, ctx)),

        TypeNode::Object(name) | TypeNode::Interface(name) => {
            let local = local_name(ctx.name_prefix, name, ctx.add_type_name_suffix);
            let annotation = Annotation::named(TypeName::forward(local.clone())).nullable_if(nullable);
            Ok(Lowered::with_reference(annotation, NamedTypeReference::new(local, name.as_str())))
        }

        // Enum stubs are schema-global, never prefixed
        TypeNode::Enum(name) => {
            let annotation = Annotation::named(TypeName::plain(name.as_str())).nullable_if(nullable);
            Ok(Lowered::with_reference(annotation, NamedTypeReference::new(name.as_str(), name.as_str())))
        }

        TypeNode::Union { variants, .. } => {
            let member_ctx = ctx.with_type_name_suffix();
            let mut annotations = Vec::with_capacity(variants.len());
            let mut references = Vec::new();

            // Optionality belongs to the union site, never to a member
            for variant in variants {
                let lowered = lower(variant, false, &member_ctx)?;
                annotations.push(lowered.annotation);
                references.extend(lowered.references);
            }

            let union = Annotation::union_of(annotations).ok_or_else(|| invalid(node, "union has no members"))?;
            Ok(Lowered {
                annotation: union.nullable_if(nullable),
                references,
            })
        }

        // Element nullability comes only from a NonNull around the element
        TypeNode::List(inner) => {
            let lowered = lower(inner, true, ctx)?;
            Ok(Lowered {
                annotation: Annotation::list_of(lowered.annotation).nullable_if(nullable),
                references: lowered.references,
            })
        }

        TypeNode::NonNull(inner) => lower(inner, false, ctx),

        TypeNode::InputObject(_) => Err(invalid(node, "not an output type")),
    }
}

fn lower_scalar(node: &TypeNode, name: &str, nullable: bool, ctx: &LoweringContext<'_>) -> Lowered {
    if let Some(builtin) = node.builtin_scalar() {
        let annotation = Annotation::named(TypeName::Primitive(Primitive::from(builtin)));
        return Lowered::bare(annotation.nullable_if(nullable));
    }

    if let Some(data) = ctx.custom_scalars.get(name) {
        let annotation = Annotation::named(TypeName::plain(data.type_name.as_str())).nullable_if(nullable);
        return Lowered::with_reference(annotation, NamedTypeReference::new(data.type_name.as_str(), name));
    }

    tracing::warn!(scalar = %name, "unregistered custom scalar, falling back to Any");
    Lowered::bare(Annotation::named(TypeName::Any).nullable_if(nullable))
}

fn invalid(node: &TypeNode, reason: &str) -> CodegenError {
    CodegenError::InvalidTypeNode {
        node: format!("{} {}", node.kind(), node),
        reason: reason.to_string(),
    }
}
