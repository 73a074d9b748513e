//! Terminal UI for the carousel.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, Action, Transition)
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `animate`: pure transition interpolation
//! - `run`: effects (terminal lifecycle, event loop)

pub mod animate;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
