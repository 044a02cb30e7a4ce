pub mod document;

pub use document::{load_documents, Document};
