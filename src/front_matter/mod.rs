pub mod types;
pub mod utils;

// Re-export the most common items for convenience
pub use types::FrontMatter;
pub use utils::{render_document, split_front_matter};
