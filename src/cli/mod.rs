// CLI entry point and subcommands
mod commands;

pub use commands::run;
