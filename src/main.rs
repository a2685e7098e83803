//! oam binary entry point.
//!
//! All work happens in [`oamctl::cli::run`]; this file only maps the
//! error taxonomy onto process exit codes.

use std::process;

fn main() {
    if let Err(err) = oamctl::cli::run() {
        oamctl::ui::output::error(&err);
        process::exit(err.exit_code());
    }
}
