//! Yatra registration desk.
//!
//! Wires the domain (`yr-core`), use cases (`yr-app`) and adapters
//! (`yr-infra`) into a runtime, and exposes the command layer and CLI.

pub mod answers;
pub mod bootstrap;
pub mod cli;
pub mod commands;
