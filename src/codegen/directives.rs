//! Directive Nullability Override
//!
//! A field carrying `@include` or `@skip` can be absent from a response no
//! matter what the schema declares, so its top-level annotation is forced
//! optional. Only the outermost level is touched.

use crate::error::Result;
use crate::schema::TypeNode;

use super::annotation::Annotation;
use super::lower::{lower, Lowered, LoweringContext};
use super::scalars::CustomScalarMap;

pub const INCLUDE_DIRECTIVE_NAME: &str = "include";
pub const SKIP_DIRECTIVE_NAME: &str = "skip";

const CONDITIONAL_DIRECTIVES: [&str; 2] = [INCLUDE_DIRECTIVE_NAME, SKIP_DIRECTIVE_NAME];

/// Whether any directive conditionally includes the field
pub fn has_conditional_directive<S: AsRef<str>>(directives: &[S]) -> bool {
    directives
        .iter()
        .any(|d| CONDITIONAL_DIRECTIVES.contains(&d.as_ref().trim_start_matches('@')))
}

/// Force `Optional` on a field's top-level annotation when conditionally included
pub fn apply_directive_override<S: AsRef<str>>(annotation: Annotation, directives: &[S]) -> Annotation {
    if !annotation.is_optional() && has_conditional_directive(directives) {
        Annotation::optional(annotation)
    } else {
        annotation
    }
}

/// Lower the type of a field as used at an operation site.
///
/// The field's own type is named by `class_name` alone; union members below
/// it get `class_name` + their schema type name.
pub fn lower_field<S: AsRef<str>>(
    node: &TypeNode,
    directives: &[S],
    class_name: &str,
    custom_scalars: &CustomScalarMap,
) -> Result<Lowered> {
    let ctx = LoweringContext::new(class_name, custom_scalars);
    let lowered = lower(node, true, &ctx)?;
    Ok(Lowered {
        annotation: apply_directive_override(lowered.annotation, directives),
        references: lowered.references,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::annotation::{Primitive, TypeName};

    fn string() -> Annotation {
        Annotation::named(TypeName::Primitive(Primitive::Str))
    }

    #[test]
    fn test_override_forces_optional() {
        let annotation = apply_directive_override(string(), &["include"]);
        assert_eq!(annotation, Annotation::optional(string()));

        let annotation = apply_directive_override(string(), &["@skip"]);
        assert!(annotation.is_optional());
    }

    #[test]
    fn test_override_ignores_other_directives() {
        let annotation = apply_directive_override(string(), &["deprecated", "live"]);
        assert_eq!(annotation, string());

        let none: [&str; 0] = [];
        assert_eq!(apply_directive_override(string(), &none), string());
    }

    #[test]
    fn test_override_does_not_double_wrap() {
        let optional = Annotation::optional(string());
        assert_eq!(apply_directive_override(optional.clone(), &["include", "skip"]), optional);
    }

    #[test]
    fn test_override_only_touches_top_level() {
        let list = Annotation::list_of(string());
        let annotation = apply_directive_override(list.clone(), &["skip"]);
        assert_eq!(annotation, Annotation::optional(list));
    }

    #[test]
    fn test_lower_field() {
        let scalars = CustomScalarMap::new();
        let node = TypeNode::non_null(TypeNode::scalar("String"));

        let plain = lower_field(&node, &["deprecated"], "Q", &scalars).unwrap();
        assert_eq!(plain.annotation, string());

        let conditional = lower_field(&node, &["include"], "Q", &scalars).unwrap();
        assert_eq!(conditional.annotation, Annotation::optional(string()));
    }
}
