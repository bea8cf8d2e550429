//! Structured-output schema sent with schema-constrained generation requests.

use std::collections::BTreeMap;

use serde::Serialize;

/// Property name each discovered function is reported under.
pub const FUNCTION_CODE_FIELD: &str = "function_code";

/// Value type of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    String,
    Object,
    Array,
}

/// Response schema in the shape the generation service accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ResponseSchema>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, ResponseSchema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl ResponseSchema {
    fn of(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            items: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    pub fn string(description: impl Into<String>) -> Self {
        Self { description: Some(description.into()), ..Self::of(SchemaType::String) }
    }

    pub fn array(items: ResponseSchema) -> Self {
        Self { items: Some(Box::new(items)), ..Self::of(SchemaType::Array) }
    }

    /// Object whose properties are all required.
    pub fn object(properties: impl IntoIterator<Item = (String, ResponseSchema)>) -> Self {
        let properties: BTreeMap<_, _> = properties.into_iter().collect();
        let required = properties.keys().cloned().collect();
        Self { properties, required, ..Self::of(SchemaType::Object) }
    }

    /// Schema for function discovery: an array of `{ "function_code": string }`.
    pub fn function_array() -> Self {
        Self::array(Self::object([(
            FUNCTION_CODE_FIELD.to_string(),
            Self::string("The full source code of a function that lacks a docstring."),
        )]))
    }
}
