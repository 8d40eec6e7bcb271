//! Annotation Rendering
//!
//! Turns an annotation tree into source text using a [`RenderProfile`]:
//!
//! ```text
//! Named(x)          -> x
//! Optional(x)       -> <optional>[x]
//! ListOf(x)         -> <list>[x]
//! UnionOf(x1..xn)   -> <union>[x1, .., xn]
//! ```

use super::annotation::{Annotation, Primitive, TypeName};
use super::config::RenderProfile;

/// Render an annotation to source text
pub fn render(annotation: &Annotation, profile: &RenderProfile) -> String {
    let mut out = String::new();
    render_into(&mut out, annotation, profile);
    out
}

fn render_into(out: &mut String, annotation: &Annotation, profile: &RenderProfile) {
    match annotation {
        Annotation::Named(name) => out.push_str(&render_name(name, profile)),
        Annotation::Optional(inner) => wrap(out, &profile.optional, std::slice::from_ref(&**inner), profile),
        Annotation::ListOf(inner) => wrap(out, &profile.list, std::slice::from_ref(&**inner), profile),
        Annotation::UnionOf(variants) => {
            debug_assert!(!variants.is_empty(), "rendering an empty union");
            wrap(out, &profile.union, variants, profile)
        }
    }
}

fn wrap(out: &mut String, wrapper: &str, args: &[Annotation], profile: &RenderProfile) {
    out.push_str(wrapper);
    out.push_str(&profile.open);
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(&profile.separator);
        }
        render_into(out, arg, profile);
    }
    out.push_str(&profile.close);
}

/// Render a single type name
pub fn render_name(name: &TypeName, profile: &RenderProfile) -> String {
    match name {
        TypeName::Primitive(primitive) => {
            let names = &profile.primitives;
            match primitive {
                Primitive::Str => names.str.clone(),
                Primitive::Int => names.int.clone(),
                Primitive::Float => names.float.clone(),
                Primitive::Bool => names.bool.clone(),
            }
        }
        TypeName::Any => profile.any.clone(),
        TypeName::Plain(name) => name.clone(),
        TypeName::Forward(name) => format!("{q}{name}{q}", q = profile.forward_quote),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Annotation {
        Annotation::optional(Annotation::list_of(Annotation::UnionOf(vec![
            Annotation::named(TypeName::forward("QA")),
            Annotation::named(TypeName::Primitive(Primitive::Int)),
        ])))
    }

    #[test]
    fn test_render_python() {
        assert_eq!(
            render(&sample(), &RenderProfile::python()),
            r#"Optional[List[Union["QA", int]]]"#
        );
    }

    #[test]
    fn test_render_rust() {
        assert_eq!(render(&sample(), &RenderProfile::rust()), "Option<Vec<OneOf<QA, i64>>>");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "rendering an empty union")]
    fn test_render_empty_union_panics() {
        render(&Annotation::UnionOf(vec![]), &RenderProfile::python());
    }

    #[test]
    fn test_render_any_and_plain() {
        let profile = RenderProfile::python();
        assert_eq!(render_name(&TypeName::Any, &profile), "Any");
        assert_eq!(render_name(&TypeName::plain("Role"), &profile), "Role");
    }
}
