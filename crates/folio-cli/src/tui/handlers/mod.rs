//! Event handlers for App
//!
//! Each file adds an `impl App` block for one kind of input.

mod document;
mod keyboard;
mod mouse;
