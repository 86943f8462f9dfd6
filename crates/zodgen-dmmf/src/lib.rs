//! Typed view of the Prisma DMMF ("data model meta format").
//!
//! Prisma hands generators a JSON description of the parsed schema. This
//! crate models the subset zodgen consumes: models with their ordered
//! fields, enums with their ordered values, and the generator block
//! (output location and raw string config).
//!
//! Unknown attributes are ignored, so documents from newer Prisma versions
//! still deserialize.
//!
//! # Example
//!
//! ```
//! let datamodel = zodgen_dmmf::parse_datamodel(r#"{
//!     "datamodel": {
//!         "enums": [{ "name": "Role", "values": [{ "name": "ADMIN" }] }],
//!         "models": []
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(datamodel.enums[0].name, "Role");
//! ```

use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid DMMF JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("`{0}` must be an object")]
    NotAnObject(&'static str),
}

/// Options passed to a generator's `generate` call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    pub generator: GeneratorConfig,
    pub dmmf: Document,
    #[serde(default)]
    pub schema_path: Option<String>,
}

/// The `generator` block of a Prisma schema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub output: Option<EnvValue>,
    /// Raw key/value pairs from the generator block, e.g. `multipleFiles = "true"`.
    #[serde(default)]
    pub config: BTreeMap<String, ConfigValue>,
}

impl GeneratorConfig {
    /// Resolved output path, if the schema set one.
    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.value.as_deref())
    }
}

/// A value that may have been read from an environment variable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvValue {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub from_env_var: Option<String>,
}

/// Prisma allows generator config values to be strings or string lists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Single(String),
    List(Vec<String>),
}

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Single(s) => Some(s),
            ConfigValue::List(_) => None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Single(s.to_string())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    pub datamodel: Datamodel,
}

/// Models and enums in schema declaration order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Datamodel {
    #[serde(default)]
    pub models: Vec<Model>,
    #[serde(default)]
    pub enums: Vec<DatamodelEnum>,
}

impl Datamodel {
    pub fn enum_names(&self) -> BTreeSet<&str> {
        self.enums.iter().map(|e| e.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatamodelEnum {
    pub name: String,
    #[serde(default)]
    pub values: Vec<EnumValue>,
    #[serde(default)]
    pub db_name: Option<String>,
    #[serde(default)]
    pub documentation: Option<String>,
}

impl DatamodelEnum {
    pub fn new(name: impl Into<String>, values: &[&str]) -> Self {
        Self {
            name: name.into(),
            values: values
                .iter()
                .map(|v| EnumValue {
                    name: v.to_string(),
                    db_name: None,
                })
                .collect(),
            db_name: None,
            documentation: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,
    #[serde(default)]
    pub db_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub name: String,
    #[serde(default)]
    pub db_name: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub documentation: Option<String>,
}

impl Model {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            db_name: None,
            fields,
            documentation: None,
        }
    }
}

/// How a field's type is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Scalar,
    /// A relation to another model (or a composite type).
    Object,
    Enum,
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    /// Declared type name: a scalar (`String`, `Int`, ...), enum or model name.
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub is_list: bool,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub has_default_value: bool,
    /// Either a literal (`"draft"`, `0`, `true`) or a generator call such as
    /// `{"name": "autoincrement", "args": []}`.
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(default)]
    pub relation_name: Option<String>,
    #[serde(default)]
    pub documentation: Option<String>,
}

impl Field {
    /// A required, non-list field without a default.
    pub fn new(name: impl Into<String>, kind: FieldKind, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            type_name: type_name.into(),
            is_list: false,
            is_required: true,
            has_default_value: false,
            default: None,
            relation_name: None,
            documentation: None,
        }
    }

    pub fn scalar(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Scalar, type_name)
    }

    pub fn enumeration(name: impl Into<String>, enum_name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Enum, enum_name)
    }

    pub fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }

    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.has_default_value = true;
        self.default = Some(default);
        self
    }

    pub fn with_relation(mut self, relation_name: impl Into<String>) -> Self {
        self.relation_name = Some(relation_name.into());
        self
    }

    /// Relation fields carry a non-empty relation name.
    pub fn is_relation(&self) -> bool {
        self.relation_name.as_deref().is_some_and(|r| !r.is_empty())
    }
}

/// Parse generator options as sent by Prisma in a `generate` request.
pub fn parse_generator_options(input: Value) -> Result<GeneratorOptions, ParseError> {
    Ok(serde_json::from_value(input)?)
}

/// Parse a datamodel from any of the shapes zodgen accepts on disk.
///
/// - full generator options: `{"generator": ..., "dmmf": {"datamodel": ...}}`
/// - a DMMF document: `{"datamodel": ...}`
/// - a bare datamodel: `{"models": [...], "enums": [...]}`
pub fn parse_datamodel(input: &str) -> Result<Datamodel, ParseError> {
    let value: Value = serde_json::from_str(input)?;
    datamodel_from_value(value)
}

pub fn datamodel_from_value(mut value: Value) -> Result<Datamodel, ParseError> {
    let obj = value
        .as_object_mut()
        .ok_or(ParseError::NotAnObject("document"))?;

    let inner = if let Some(dmmf) = obj.remove("dmmf") {
        let Value::Object(mut dmmf) = dmmf else {
            return Err(ParseError::NotAnObject("dmmf"));
        };
        dmmf.remove("datamodel").unwrap_or(Value::Null)
    } else if let Some(datamodel) = obj.remove("datamodel") {
        datamodel
    } else {
        value
    };

    if !inner.is_object() {
        return Err(ParseError::NotAnObject("datamodel"));
    }
    Ok(serde_json::from_value(inner)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_model() -> Value {
        json!({
            "name": "User",
            "dbName": null,
            "fields": [
                {
                    "name": "id",
                    "kind": "scalar",
                    "isList": false,
                    "isRequired": true,
                    "isUnique": false,
                    "isId": true,
                    "hasDefaultValue": true,
                    "type": "Int",
                    "default": { "name": "autoincrement", "args": [] }
                },
                {
                    "name": "posts",
                    "kind": "object",
                    "isList": true,
                    "isRequired": true,
                    "hasDefaultValue": false,
                    "type": "Post",
                    "relationName": "PostToUser"
                },
                {
                    "name": "bio",
                    "kind": "scalar",
                    "isRequired": false,
                    "type": "String"
                }
            ]
        })
    }

    #[test]
    fn parses_fields_with_defaults() {
        let model: Model = serde_json::from_value(user_model()).unwrap();
        assert_eq!(model.fields.len(), 3);

        let id = &model.fields[0];
        assert_eq!(id.kind, FieldKind::Scalar);
        assert_eq!(id.type_name, "Int");
        assert!(id.has_default_value);
        assert_eq!(id.default.as_ref().unwrap()["name"], "autoincrement");
        assert!(!id.is_relation());

        let posts = &model.fields[1];
        assert_eq!(posts.kind, FieldKind::Object);
        assert!(posts.is_list);
        assert!(posts.is_relation());

        let bio = &model.fields[2];
        assert!(!bio.is_required);
        assert!(bio.default.is_none());
    }

    #[test]
    fn empty_relation_name_is_not_a_relation() {
        let field = Field::scalar("name", "String").with_relation("");
        assert!(!field.is_relation());
    }

    #[test]
    fn unknown_kind_is_unsupported() {
        let field: Field =
            serde_json::from_value(json!({ "name": "geo", "kind": "point", "type": "Geometry" }))
                .unwrap();
        assert_eq!(field.kind, FieldKind::Unsupported);
        // isRequired absent means optional
        assert!(!field.is_required);
    }

    #[test]
    fn accepts_all_document_shapes() {
        let bare = json!({ "models": [user_model()], "enums": [] });
        let document = json!({ "datamodel": bare.clone() });
        let options = json!({
            "generator": { "name": "zod", "config": {} },
            "dmmf": document.clone()
        });

        for input in [bare, document, options] {
            let datamodel = parse_datamodel(&input.to_string()).unwrap();
            assert_eq!(datamodel.models[0].name, "User");
        }
    }

    #[test]
    fn rejects_non_object_documents() {
        assert!(matches!(
            parse_datamodel("[1, 2]"),
            Err(ParseError::NotAnObject("document"))
        ));
        assert!(matches!(
            parse_datamodel(r#"{"datamodel": 3}"#),
            Err(ParseError::NotAnObject("datamodel"))
        ));
        assert!(matches!(parse_datamodel("{"), Err(ParseError::Json(_))));
    }

    #[test]
    fn generator_options_config_values() {
        let options = parse_generator_options(json!({
            "generator": {
                "name": "zod",
                "provider": { "value": "zodgen serve", "fromEnvVar": null },
                "output": { "value": "/tmp/out", "fromEnvVar": null },
                "config": { "multipleFiles": "true", "previewFeatures": ["a", "b"] },
                "binaryTargets": []
            },
            "dmmf": { "datamodel": { "models": [], "enums": [], "types": [] } },
            "schemaPath": "prisma/schema.prisma"
        }))
        .unwrap();

        assert_eq!(options.generator.output_path(), Some("/tmp/out"));
        assert_eq!(
            options.generator.config["multipleFiles"].as_str(),
            Some("true")
        );
        assert_eq!(options.generator.config["previewFeatures"].as_str(), None);
        assert_eq!(options.schema_path.as_deref(), Some("prisma/schema.prisma"));
    }

    #[test]
    fn enum_names_collects_declared_enums() {
        let datamodel = Datamodel {
            models: vec![],
            enums: vec![
                DatamodelEnum::new("Role", &["ADMIN", "USER"]),
                DatamodelEnum::new("Status", &["DRAFT"]),
            ],
        };
        let names = datamodel.enum_names();
        assert!(names.contains("Role"));
        assert!(names.contains("Status"));
        assert_eq!(names.len(), 2);
    }
}
