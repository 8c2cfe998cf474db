#![allow(clippy::multiple_crate_versions)]

//! Tilepad - arrange windows into grid layouts from the command line.

fn main() {
    if let Err(err) = tilepad_lib::cli::run() {
        eprintln!("tilepad: {err}");
        std::process::exit(1);
    }
}
