//! UI Rendering
//!
//! ratatui widgets for the one shopping-list screen:
//! - render: Frame orchestration and layout
//! - product_list: The product rows, plus loading and empty states
//! - totals_bar: Monetary totals, hidden while zero
//! - status_bar: Sort state, search input, key legend
//! - dialogs: Add-product input and delete confirmation popups
//! - toast: Brief pop-up messages

pub mod dialogs;
pub mod product_list;
pub mod render;
pub mod status_bar;
pub mod toast;
pub mod totals_bar;

pub use render::render;
