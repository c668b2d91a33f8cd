//! Typed user prompts and selection state for drawing editor commands.

/// Handles argument parsing and command execution.
pub mod cli;

/// Editor commands and their registry.
pub mod commands;

/// Drawing file loading.
pub mod config;

pub mod constants;

/// Entity storage and the in-memory drawing.
pub mod document;

/// Entity handles, classes and records.
pub mod entity;

/// Defines custom error types.
pub mod error;

pub mod geometry;

/// User input and interaction handling.
pub mod prompt;
