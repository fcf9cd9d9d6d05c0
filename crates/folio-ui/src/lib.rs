//! Folio UI Components
//!
//! Small Dioxus building blocks shared by the desktop pages: buttons, the
//! search box, facet dropdowns, category pills and load status indicators.
//!
//! Components only emit CSS class names. The stylesheet lives in the
//! desktop binary.

pub mod components;

pub use components::*;
