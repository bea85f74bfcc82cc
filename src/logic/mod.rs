//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - input: Parsing of the add-product entry line
//! - navigation: Selection index calculations
//! - reorder: Grouping checked products at the end of the list
//! - search: Product name filtering
//! - sorting: Product comparison across sort criteria
//! - totals: List totals and money formatting
//! - ui: UI state transitions and cycling

pub mod input;
pub mod navigation;
pub mod reorder;
pub mod search;
pub mod sorting;
pub mod totals;
pub mod ui;
