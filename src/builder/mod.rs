pub mod processor;
pub mod site;
pub mod writer;

pub use processor::{transform_body, AutoToc};
pub use site::build_site;
