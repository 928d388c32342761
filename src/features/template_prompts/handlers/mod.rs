pub mod template_prompt_handler;

pub use template_prompt_handler::*;
