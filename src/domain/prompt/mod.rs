pub mod builder;
pub mod schema;

pub use builder::{
    PromptKind, build_docstring_prompt, build_function_discovery_prompt, build_readme_prompt,
};
pub use schema::{FUNCTION_CODE_FIELD, ResponseSchema, SchemaType};
