//! Core types and definitions for the SKIRMISH battle simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, character definitions, components, commands, state snapshots,
//! events, errors and constants. It has no dependency on any runtime or
//! rendering framework.

pub mod characters;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
