//! # postgen
//!
//! **postgen** turns a declarative catalogue of DemoApp backend endpoints into
//! a role-partitioned [Postman](https://www.postman.com/) v2.1 collection and
//! a companion environment document.
//!
//! ## Overview
//!
//! The catalogue is the single source of truth: each endpoint descriptor
//! carries its method, path, role visibility, auth requirement, example
//! payloads, and optional test-script lines. Everything downstream is a pure
//! transformation of that data, so two runs over the same catalogue produce
//! byte-identical collections (only the environment's export timestamp
//! differs).
//!
//! ## Architecture
//!
//! - **[`catalog`]** - Endpoint descriptors, role and module vocabulary, and
//!   the reference catalogue itself
//! - **[`render`]** - Descriptor to Postman request item, including headers,
//!   description text, and test-script events
//! - **[`assemble`]** - Role-by-module folder tree around rendered requests
//! - **[`environment`]** - The `{{placeholder}}` variable set with local
//!   defaults
//! - **[`output`]** - Pretty-printed JSON files on disk
//! - **[`cli`]** - The `generate` command
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::path::Path;
//!
//! let written = postgen::output::write_outputs(Path::new("postman"))?;
//! println!("collection at {}", written.collection.display());
//! ```

pub mod assemble;
pub mod catalog;
pub mod cli;
pub mod environment;
pub mod output;
pub mod render;

pub use assemble::build_collection;
pub use catalog::build_catalog;
pub use environment::build_environment;
pub use output::write_outputs;
