//! Main library for rulesync, used by its CLI.
//!
//! - [`claude_md`] reads rules out of CLAUDE.md documents and writes them back.
//! - [`rules`] defines the [`rules::Rule`] record and loads rule-set files.

pub mod claude_md;
pub mod rules;
