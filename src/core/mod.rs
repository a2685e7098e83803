//! core
//!
//! Core domain types and pure logic for oamctl.
//!
//! # Modules
//!
//! - [`types`] - OAM resource model: definitions, components, app configs
//! - [`template`] - Trait template decoding (object skeleton + parameters)
//! - [`fieldpath`] - Dotted field-path editing over JSON documents
//! - [`config`] - Client-side environment configuration
//!
//! # Design Principles
//!
//! - Wire types mirror the server's JSON documents exactly
//! - Everything here is synchronous and store-agnostic
//! - Decoding is strict about shape, tolerant of unknown fields

pub mod config;
pub mod fieldpath;
pub mod template;
pub mod types;
