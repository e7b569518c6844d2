use clap::Parser;

#[macro_use]
mod macros;

mod commands;
mod config;
mod consts;
mod controllers;
mod entities;
mod errors;
mod util;

/// Ctrl+C during the prompt is a cancellation, not a failure
fn is_cancelled(e: &anyhow::Error) -> bool {
    e.root_cause().to_string() == inquire::InquireError::OperationInterrupted.to_string()
}

fn main() {
    let args = commands::dig::Args::parse();
    match commands::dig::command(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            if is_cancelled(&e) {
                return;
            }

            eprintln!("{:?}", e);
            std::process::exit(1);
        }
    }
}
