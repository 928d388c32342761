/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// TEMPLATE PROMPT LIMITS
// =============================================================================

/// Column width of `template_prompts.prompt_type`
pub const PROMPT_TYPE_MAX_LENGTH: u64 = 50;

/// Column width of `template_prompts.name`
pub const PROMPT_NAME_MAX_LENGTH: u64 = 255;

/// Separator placed between merged prompt contents (and in front of the merged block)
pub const PROMPT_SEPARATOR: &str = "\n\n";
