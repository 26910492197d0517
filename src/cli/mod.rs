pub mod commands;
pub mod console_surface;
pub mod core;
pub mod formatters;
pub mod help;
pub mod io;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;
pub mod test_mode;

pub use shell::run_cli;
