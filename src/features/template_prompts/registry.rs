use serde::Serialize;
use utoipa::ToSchema;

/// A recommended prompt type from the backend-managed registry.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PromptTypeDefinition {
    /// The prompt type identifier (e.g. "sql")
    #[serde(rename = "type")]
    pub prompt_type: &'static str,
    /// Which generated prompt the custom content is appended to
    pub description: &'static str,
}

/// Recommended prompt types. Other snake_case identifiers are accepted too, so a new
/// prompt type only needs an entry here to be advertised.
const PROMPT_TYPE_REGISTRY: &[PromptTypeDefinition] = &[
    PromptTypeDefinition {
        prompt_type: "sql",
        description: "SQL generation",
    },
    PromptTypeDefinition {
        prompt_type: "chart",
        description: "Chart configuration generation",
    },
    PromptTypeDefinition {
        prompt_type: "analysis",
        description: "Data analysis",
    },
    PromptTypeDefinition {
        prompt_type: "predict",
        description: "Data prediction",
    },
    PromptTypeDefinition {
        prompt_type: "guess",
        description: "Suggested follow-up questions",
    },
    PromptTypeDefinition {
        prompt_type: "datasource",
        description: "Data source selection",
    },
    PromptTypeDefinition {
        prompt_type: "permissions",
        description: "Row permission filtering",
    },
    PromptTypeDefinition {
        prompt_type: "dynamic_sql",
        description: "Dynamic SQL generation",
    },
];

/// Check whether the given type is in the registry.
pub fn is_registered_prompt_type(prompt_type: &str) -> bool {
    PROMPT_TYPE_REGISTRY
        .iter()
        .any(|def| def.prompt_type == prompt_type)
}

/// Return all registered prompt types.
pub fn get_all_prompt_types() -> Vec<PromptTypeDefinition> {
    PROMPT_TYPE_REGISTRY.to_vec()
}
