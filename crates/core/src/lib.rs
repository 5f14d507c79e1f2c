//! Joinery Core Library
//!
//! This crate provides the core functionality for Joinery, a scaffolding tool
//! for a CSS layout-primitive design system. It writes the token and primitive
//! stylesheets (and optional UI components) into a project and tracks which
//! primitives are installed in a `joinery.json` document.
//!
//! # Key Features
//!
//! - **Primitive Catalog**: A single injectable allow-list of known primitives
//! - **Project Configuration**: Read and write the `joinery.json` document
//! - **Scaffolding**: Write the stylesheet bundle and component sources
//! - **Installation**: Merge requested primitives into the installed set
//! - **Error Handling**: One error type covering every failure mode
//!
//! # Examples
//!
//! Adding primitives to an initialised project:
//!
//! ```no_run
//! use joinery_core::config::get_config_path;
//! use joinery_core::install::{add_primitives, PickerOption, PrimitivePicker, Selection};
//! use joinery_core::primitives::PrimitiveCatalog;
//!
//! struct NoPrompt;
//!
//! impl PrimitivePicker for NoPrompt {
//!     fn pick(&mut self, _: &str, _: &[PickerOption]) -> joinery_core::error::Result<Vec<String>> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! let outcome = add_primitives(
//!     &get_config_path(&None),
//!     Selection::Named(vec!["grid".to_string()]),
//!     &PrimitiveCatalog::default(),
//!     &mut NoPrompt,
//! )?;
//! println!("{outcome:?}");
//! # Ok::<(), joinery_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod file_handling;
pub mod install;
pub mod primitives;
pub mod scaffold;
pub mod templates;
