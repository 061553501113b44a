//! Text frontends for the task list: an interactive menu and one-shot
//! subcommands, both driving the same [`todo_list::TaskManager`].

pub mod commands;
pub mod config;
pub mod logging;
pub mod menu;
