//! Promptcraft: prompt construction and architecture synthesis for
//! AI-assisted development.
//!
//! The core is two operations over a [`project::Project`]:
//! - [`prompt::build_prompt`] composes a task-specific instruction for one of
//!   the six [`prompt::TaskType`]s.
//! - [`architecture::synthesize_architecture`] asks a completion API for a
//!   JSON architecture plan and validates it into an
//!   [`architecture::ArchitecturePlan`].
//!
//! Everything else (project storage, config, the HTTP completion client, the
//! audit log and the CLI) is plumbing around those two.

pub mod architecture;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod completion;
pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fs;
pub mod generation;
pub mod improve;
pub mod project;
pub mod prompt;

#[cfg(test)]
mod test_support;
