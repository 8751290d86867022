pub mod calendar;
pub mod cmds;
pub mod config;
pub mod context;
pub mod events;
pub mod grid;
pub mod notes;
pub mod ui;
