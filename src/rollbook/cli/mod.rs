mod commands;
mod print;
mod prompt;
mod setup;

pub use commands::run;
