//! Code Generation
//!
//! Plans client stubs for a set of operations against a schema.
//!
//! Architecture:
//! - lower: schema type expression -> (Annotation, named-type references)
//! - directives: top-level nullability override for conditionally included fields
//! - names: stub naming and the deduplicated stub set
//! - render: annotation tree -> source text
//!
//! The planner drives lowering once per field and collects every reference
//! into a single [`StubSet`], along with the imports referenced custom scalars
//! need. Emitting files is left to the caller.

pub mod annotation;
pub mod config;
pub mod directives;
pub mod lower;
pub mod names;
pub mod render;
pub mod scalars;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, Result};
use crate::schema::Schema;

pub use annotation::{Annotation, Primitive, TypeName};
pub use config::{NamingConfig, RenderProfile};
pub use directives::{apply_directive_override, lower_field};
pub use lower::{lower, Lowered, LoweringContext};
pub use names::{NamedTypeReference, StubSet};
pub use scalars::{CustomScalarMap, ScalarData};

// =============================================================================
// Operations Document
// =============================================================================

/// Operations to generate client stubs for
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperationDocument {
    #[serde(default)]
    pub operations: Vec<OperationDef>,
}

/// A named operation and the top-level fields it selects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationDef {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

/// A top-level field as used at an operation site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,

    /// Type reference in schema notation, e.g. `[User!]!`
    #[serde(rename = "type")]
    pub type_ref: String,

    /// Directive names applied at this site
    #[serde(default)]
    pub directives: Vec<String>,
}

impl OperationDocument {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

// =============================================================================
// Generation Plan
// =============================================================================

/// Lowered type of one field
#[derive(Debug, Clone, Serialize)]
pub struct FieldPlan {
    pub name: String,
    pub class_name: String,
    pub annotation: Annotation,
    pub references: Vec<NamedTypeReference>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OperationPlan {
    pub name: String,
    pub fields: Vec<FieldPlan>,
}

/// Import a generated client needs for a custom scalar's target type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScalarImport {
    pub module: String,
    pub type_name: String,
    pub schema_type_name: String,
}

/// Everything a stub generator needs for one run
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationPlan {
    pub operations: Vec<OperationPlan>,
    pub stubs: StubSet,

    /// One entry per referenced custom scalar with an import, in first-use order
    pub imports: Vec<ScalarImport>,
}

/// Inputs that stay fixed for one generation run
pub struct Planner<'a> {
    schema: &'a Schema,
    custom_scalars: &'a CustomScalarMap,
    naming: &'a NamingConfig,
}

impl<'a> Planner<'a> {
    pub fn new(schema: &'a Schema, custom_scalars: &'a CustomScalarMap, naming: &'a NamingConfig) -> Self {
        Self { schema, custom_scalars, naming }
    }

    /// Plan every operation in a document
    pub fn plan(&self, document: &OperationDocument) -> Result<GenerationPlan> {
        let mut seen = HashSet::new();
        let mut plan = GenerationPlan::default();

        for operation in &document.operations {
            if !seen.insert(operation.name.as_str()) {
                return Err(CodegenError::DuplicateOperation(operation.name.clone()));
            }
            let operation_plan = self.plan_operation(operation)?;
            for field in &operation_plan.fields {
                plan.stubs.extend(field.references.iter().cloned());
            }
            plan.operations.push(operation_plan);
        }
        plan.imports = self.scalar_imports(&plan.stubs);

        tracing::info!(
            operations = plan.operations.len(),
            stubs = plan.stubs.len(),
            imports = plan.imports.len(),
            collisions = plan.stubs.collisions().len(),
            "planned stubs"
        );
        Ok(plan)
    }

    /// Lower every field of one operation
    pub fn plan_operation(&self, operation: &OperationDef) -> Result<OperationPlan> {
        let fields = operation
            .fields
            .iter()
            .map(|field| self.plan_field(&operation.name, field))
            .collect::<Result<Vec<_>>>()?;

        Ok(OperationPlan { name: operation.name.clone(), fields })
    }

    /// Imports for the custom scalars among the planned stubs
    fn scalar_imports(&self, stubs: &StubSet) -> Vec<ScalarImport> {
        let mut imports: Vec<ScalarImport> = Vec::new();
        for stub in stubs.iter() {
            let Some(data) = self.custom_scalars.get(&stub.schema_type_name) else {
                continue;
            };
            let Some(module) = &data.import else {
                continue;
            };
            if data.type_name != stub.local_name {
                continue;
            }
            if imports.iter().any(|i| i.module == *module && i.type_name == data.type_name) {
                continue;
            }
            imports.push(ScalarImport {
                module: module.clone(),
                type_name: data.type_name.clone(),
                schema_type_name: stub.schema_type_name.clone(),
            });
        }
        imports
    }

    fn plan_field(&self, operation: &str, field: &FieldDef) -> Result<FieldPlan> {
        let node = self.schema.resolve(&field.type_ref)?;
        let class_name = names::field_class_name(operation, &field.name, self.naming);
        let lowered = lower_field(&node, &field.directives, &class_name, self.custom_scalars)?;

        tracing::debug!(
            operation,
            field = %field.name,
            node = %node,
            references = lowered.references.len(),
            "lowered field"
        );

        Ok(FieldPlan {
            name: field.name.clone(),
            class_name,
            annotation: lowered.annotation,
            references: lowered.references,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TypeKind;

    fn test_schema() -> Schema {
        let mut schema = Schema::default();
        schema.insert("User", TypeKind::Object, vec![]);
        schema.insert("Role", TypeKind::Enum, vec![]);
        schema.insert("Node", TypeKind::Object, vec![]);
        schema.insert("Result", TypeKind::Union, vec!["Node".to_string()]);
        schema
    }

    fn op(name: &str, fields: &[(&str, &str)]) -> OperationDef {
        OperationDef {
            name: name.to_string(),
            fields: fields
                .iter()
                .map(|(field, type_ref)| FieldDef {
                    name: field.to_string(),
                    type_ref: type_ref.to_string(),
                    directives: vec![],
                })
                .collect(),
        }
    }

    #[test]
    fn test_plan_collects_stubs_once() {
        let schema = test_schema();
        let scalars = CustomScalarMap::new();
        let naming = NamingConfig::default();
        let document = OperationDocument {
            operations: vec![
                op("GetUser", &[("user", "User!"), ("role", "Role")]),
                op("ListRoles", &[("roles", "[Role!]!")]),
            ],
        };

        let plan = Planner::new(&schema, &scalars, &naming).plan(&document).unwrap();
        let stubs: Vec<_> = plan.stubs.iter().map(|r| r.local_name.as_str()).collect();
        assert_eq!(stubs, vec!["GetUserUser", "Role"]);
        assert_eq!(plan.operations[0].fields[0].class_name, "GetUserUser");
    }

    #[test]
    fn test_scalar_imports_follow_referenced_scalars() {
        let mut schema = test_schema();
        schema.insert("DateTime", TypeKind::Scalar, vec![]);
        schema.insert("Date", TypeKind::Scalar, vec![]);
        schema.insert("Decimal", TypeKind::Scalar, vec![]);
        let scalars: CustomScalarMap = [
            ("DateTime", ScalarData::new("datetime").with_import("datetime")),
            ("Date", ScalarData::new("date").with_import("datetime")),
            ("Decimal", ScalarData::new("Decimal")),
            ("Money", ScalarData::new("Money").with_import("money")),
        ]
        .into_iter()
        .collect();
        let naming = NamingConfig::default();
        let document = OperationDocument {
            operations: vec![
                op("A", &[("at", "DateTime!"), ("price", "Decimal")]),
                op("B", &[("on", "[Date]"), ("again", "DateTime")]),
            ],
        };

        let plan = Planner::new(&schema, &scalars, &naming).plan(&document).unwrap();
        let imports: Vec<_> = plan
            .imports
            .iter()
            .map(|i| (i.module.as_str(), i.type_name.as_str(), i.schema_type_name.as_str()))
            .collect();
        assert_eq!(
            imports,
            vec![("datetime", "datetime", "DateTime"), ("datetime", "date", "Date")]
        );
    }

    #[test]
    fn test_duplicate_operation_is_rejected() {
        let schema = test_schema();
        let scalars = CustomScalarMap::new();
        let naming = NamingConfig::default();
        let document = OperationDocument {
            operations: vec![op("GetUser", &[]), op("GetUser", &[])],
        };

        let err = Planner::new(&schema, &scalars, &naming).plan(&document).unwrap_err();
        assert!(matches!(err, CodegenError::DuplicateOperation(name) if name == "GetUser"));
    }

    #[test]
    fn test_unknown_type_propagates() {
        let schema = test_schema();
        let scalars = CustomScalarMap::new();
        let naming = NamingConfig::default();
        let document = OperationDocument { operations: vec![op("Q", &[("x", "Missing")])] };

        let err = Planner::new(&schema, &scalars, &naming).plan(&document).unwrap_err();
        assert!(matches!(err, CodegenError::UnknownType(_)));
    }
}
