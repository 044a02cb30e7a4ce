mod loader;
mod model;

pub use loader::load_documents;
pub use model::Document;
