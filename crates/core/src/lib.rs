//! Core library for jiramd
//!
//! This crate implements the **Functional Core** of the jiramd application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`jiramd_core`** (this crate): Pure transformation functions with zero I/O
//! - **`jiramd`**: Configuration loading, HTTP calls, and presentation (the Imperative Shell)
//!
//! Every function here is deterministic and total over its inputs. Conversion
//! rules never fail, whatever the markup looks like, and are safe to run
//! concurrently over independent descriptions.
//!
//! # Module Organization
//!
//! - [`markup`]: Jira wiki markup to Markdown rules and the ordered conversion pipeline
//! - [`limit`]: Description length capping
//! - [`atlassian`]: Jira API response models and the issue output record
//! - [`config`]: Normalization of configuration inputs
//!
//! # Example Usage
//!
//! ```rust
//! use jiramd_core::limit::DescriptionLimit;
//! use jiramd_core::markup::MarkupConverter;
//!
//! let converter = MarkupConverter::default();
//! let markdown = converter.convert("h2. Overview\n# First\n# Second");
//! assert_eq!(markdown, "## Overview\n1. First\n1. Second");
//!
//! let capped = DescriptionLimit::new(5).apply(markdown);
//! assert_eq!(capped, "## Ov...");
//! ```

pub mod atlassian;
pub mod config;
pub mod limit;
pub mod markup;
