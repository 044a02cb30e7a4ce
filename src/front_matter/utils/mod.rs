mod content;

pub use content::{render_document, split_front_matter};
