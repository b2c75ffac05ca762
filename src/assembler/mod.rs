//! Electron application tree assembly.
//!
//! Combines a web build output with a desktop harness into one deployable
//! tree:
//!
//! ```text
//! ├── package.json            synthesized manifest
//! ├── .compilerc              compiler configuration, when present
//! ├── ember/                  the web build output
//! └── ember-electron/
//!     ├── .electron-forge
//!     ├── main.js             lifecycle script (test variant in test mode)
//!     └── resources/          resources/ merged with resources-<platform>/
//! ```
//!
//! # Module Organization
//!
//! - [`tree`] - In-memory trees, disk loading, merged output
//! - [`fragment`] - Selectors and labeled fragments
//! - [`manifest`] - Manifest synthesis and descriptor advisories
//! - [`resources`] - Base and platform resource selection
//! - [`composer`] - The ordered plan, composition, and the [`Assembler`]
//! - [`settings`] - Run configuration
//! - [`checksum`] - Tree digests
//! - [`utils`] - Output writing

pub mod checksum;
pub mod composer;
pub mod error;
pub mod fragment;
pub mod manifest;
pub mod resources;
pub mod settings;
pub mod tree;
pub mod utils;

pub use composer::{compose, Assembler, Assembly, ComposeInputs, Rule};
pub use error::{Error, Result};
pub use fragment::{Fragment, Selector};
pub use manifest::{synthesize, AdvisorySink, LogAdvisorySink, Manifest, ManifestDefaults};
pub use settings::{ExecutionMode, Layout, PlatformId, Settings, SettingsBuilder};
pub use tree::{OutputTree, SourceTree, TreePath};
