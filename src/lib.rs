//! stepview - wizard stepper for the terminal
//!
//! The [`stepper`] module holds the navigation state machine and everything derived
//! from it (facets, icon styles, button selection, button-row visibility). The
//! [`ui`] module draws it with ratatui.

pub mod app;
pub mod config;
pub mod keyboard;
pub mod logging;
pub mod stepper;
pub mod ui;
