// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scaffolding from templates discovered along the directory ancestor
//! chain.
//!
//! `noi` keeps project templates in `.noi` folders. Running `noi a,b`
//! walks from the current directory upward until `.noi/a/b/config.toml`
//! is found, prompts for the declared parameters, and executes the
//! descriptor's steps against the directory that owns the `.noi` folder.

pub mod cli;
pub mod config;
pub mod console;
pub mod discovery;
pub mod error;
pub mod params;
pub mod prompt;
pub mod runner;
pub mod shell;
pub mod template;
pub mod workspace;
