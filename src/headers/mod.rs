//! Identifier assignment for heading elements

mod assign;
pub mod slugger;

pub use assign::assign_identifiers;
pub use slugger::{DefaultSlugger, Slugger};
