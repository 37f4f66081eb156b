//! typofix CLI binary.

use clap::Parser;
use std::process;
use typofix::cli::{args::TypofixArgs, commands::execute_command};

fn main() {
    // Parse command line arguments using clap
    let args = TypofixArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
