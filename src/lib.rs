//! Typestub
//!
//! Lowers schema type expressions into target-language type annotations and
//! plans the client stubs (object classes, enums, custom scalar types) those
//! annotations refer to.
//!
//! ## Features
//!
//! - **Type Lowering**: Scalars, objects, interfaces, enums, unions, lists and
//!   non-null wrappers with independent list/element nullability
//! - **Directive Overrides**: `@include`/`@skip` fields become optional
//! - **Scoped Stub Names**: Union members are prefixed per operation site
//! - **Custom Scalars**: Configurable scalar -> target type mapping
//! - **Rendering**: Configurable wrapper names for the annotation tree
//!
//! ## Pipeline
//!
//! ```text
//! schema.json ──► Schema::resolve ──► TypeNode
//!                                        │
//!                      lower_field ◄─────┘  (lower + directive override)
//!                          │
//!              ┌───────────┴───────────┐
//!          Annotation            NamedTypeReference*
//!              │                       │
//!            render                 StubSet
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod schema;

pub use codegen::{
    apply_directive_override, lower, lower_field, Annotation, CustomScalarMap, GenerationPlan,
    Lowered, LoweringContext, NamedTypeReference, Planner, ScalarData, ScalarImport, StubSet,
    TypeName,
};
pub use config::GeneratorConfig;
pub use error::{CodegenError, Result};
pub use schema::{BuiltinScalar, Schema, TypeNode};
