//! # keycalc-tui
//!
//! Interactive terminal calculator using ratatui with Elm architecture.
//! Keyboard and mouse input are translated into engine events; the view
//! shows the display, the keypad, and the history panel.

pub mod display;
pub mod footer;
pub mod header;
pub mod history;
pub mod keymap;
pub mod keypad;
pub mod messages;
pub mod model;
pub mod styles;

pub use keymap::{map_key, KeyAction};
pub use messages::TuiMessage;
pub use model::{CalcApp, ScreenLayout};
