//! # zipshell Core Library
//!
//! This crate provides the core functionality for the `zipshell` interactive shell.
//!
//! It presents a navigable directory tree backed by a single ZIP archive file.
//! Every mutation (currently `mv`) is persisted back into the archive by
//! rewriting a complete new image, so the backing file is never left in a
//! partially written state.
//!
//! ## Key Modules
//!
//! - [`store`]: Owns the decoded archive contents in memory and persists rewrites.
//! - [`paths`]: Path normalization and directory/file existence checks.
//! - [`engine`]: The navigation and mutation operations over the cursor state.
//! - [`command`]: The interactive command vocabulary (`ls`, `cd`, `pwd`, `mv`, `exit`).
//! - [`repl`]: The line-oriented interactive front-end.

pub mod cli;
pub mod command;
pub mod engine;
pub mod error;
pub mod paths;
pub mod repl;
pub mod store;

pub use error::ShellError;
