//! Core library for uigen
//!
//! This crate implements the **Functional Core** of the uigen application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! uigen turns the prompt documents of a design package into UI components by
//! sending each prompt to a generative UI service. The project uses a two-crate
//! architecture to enforce separation of concerns:
//!
//! - **`uigen_core`** (this crate): Transformations with no network access
//! - **`uigen`**: HTTP, retries, sequencing and the CLI (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No network I/O**: Service responses come in as plain data
//! - **Deterministic**: Output names never depend on timing or retries
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! The one exception is [`package`], which owns the on-disk layout of a design
//! package and is tested against temporary directories.
//!
//! # Module Organization
//!
//! - [`prompt`]: Prompt document parsing and request building
//! - [`naming`]: Prompt filename to component name resolution
//! - [`service`]: Generation service wire types, error classification and main-file selection
//! - [`result`]: Per-component generation outcomes
//! - [`manifest`]: Run manifest aggregation
//! - [`package`]: Design package filesystem layout
//! - [`plan`]: Dry-run previews of what a run would generate
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use uigen_core::naming::resolve_component_name;
//! use uigen_core::prompt::{extract_prompt, DEFAULT_SEPARATOR};
//!
//! let payload = extract_prompt("Title\n---\nBuild a hero section.", DEFAULT_SEPARATOR);
//! assert_eq!(payload, Some("Build a hero section."));
//! assert_eq!(resolve_component_name("hero.md"), "Hero");
//! ```

pub mod manifest;
pub mod naming;
pub mod package;
pub mod plan;
pub mod prompt;
pub mod result;
pub mod service;
