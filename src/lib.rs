//! oamctl - A CLI for managing OAM applications
//!
//! oamctl is a single-binary tool for working with Open Application Model
//! resources on a Kubernetes-style API server: listing deployed
//! applications and attaching traits (behavioral modifiers such as
//! autoscaling) to their components.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, synthesizes
//!   dynamic trait flags, delegates to handlers)
//! - [`core`] - Domain types, template decoding, field-path editing,
//!   environment configuration
//! - [`store`] - Single interface to the backing resource store, with a
//!   REST implementation and a mock twin
//! - [`catalog`] - Per-invocation view of registered trait definitions
//! - [`apps`] - Application summary queries
//! - [`ui`] - Output formatting and table rendering
//!
//! # Correctness Invariants
//!
//! oamctl maintains the following invariants:
//!
//! 1. Commands mutate nothing until their inputs fully resolve
//! 2. A trait object's `metadata.name` is always the lower-cased trait
//!    name the user asked for
//! 3. Updates are conditional on the object's resource version when the
//!    server supplies one
//! 4. One bad trait definition never blocks users of the others

pub mod apps;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod store;
pub mod ui;
