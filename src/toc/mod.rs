//! Table of contents construction from an ordered list of headings

mod builder;
mod heading;
mod node;

pub use builder::build_toc_items;
pub use heading::{Heading, HeadingLevel};
pub use node::{TocNode, TreeError};
