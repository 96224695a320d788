// ── Safety policy ────────────────────────────────────────────────────────────
// No unsafe anywhere: sensconv is pure value conversion, no FFI, no OS
// integration.  It never reads or writes the actual pointer settings of
// either platform.
#![deny(unsafe_code)]

mod cli;
mod convert;
mod error;
mod multiplier;
mod platform;
mod report;
mod sensitivity;

use clap::Parser;

fn main() {
    let args = cli::Cli::parse();
    if let Err(e) = cli::run(&args) {
        // Validation and mismatch errors terminate the run with a
        // human-readable message and a non-zero status; nothing has been
        // printed to stdout at this point.
        eprintln!("sensconv: {e}");
        std::process::exit(1);
    }
}
