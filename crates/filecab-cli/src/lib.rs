mod args;
mod handlers;
mod io;
mod parser;
mod shell;
mod table;

pub use args::Cli;
pub use shell::run;
