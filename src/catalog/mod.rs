//! The endpoint catalogue: the typed descriptor model and the literal
//! declaration of every DemoApp API operation.
//!
//! The catalogue is an explicit immutable list produced by
//! [`build_catalog`]; nothing here is mutated after construction. Grouping
//! and ordering of the output tree is derived from descriptor attributes
//! by the assembler, never from declaration order.

mod endpoints;
mod types;

pub use endpoints::build_catalog;
pub use types::*;
