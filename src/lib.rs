//! Pokedex TUI - browse the PokeAPI catalog with tui-dispatch
//!
//! A list screen keeps the full index and a filtered, sortable view of it;
//! a detail screen fetches one entry by name. The library exposes every
//! module so the store can be driven from tests without a terminal.

pub mod action;
pub mod api;
pub mod catalog;
pub mod components;
pub mod config;
pub mod detail;
pub mod effect;
pub mod nav;
pub mod reducer;
pub mod state;
pub mod ui;
