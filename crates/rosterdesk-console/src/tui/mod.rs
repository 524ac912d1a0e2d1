/*
[INPUT]:  Screen state machines and terminal events
[OUTPUT]: Ratatui-based console frontend
[POS]:    TUI module layout
[UPDATE]: When adding screens or changing the runtime surface
*/

pub mod app;
mod events;
mod runtime;
mod terminal;
pub mod ui;

pub use runtime::run;
