//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `petstop_core` linkage and
//!   store bootstrap, independent of any view shell.

use std::process::ExitCode;

fn main() -> ExitCode {
    println!("petstop_core ping={}", petstop_core::ping());
    println!("petstop_core version={}", petstop_core::core_version());

    // Bootstrap a throwaway in-memory store so a broken schema or
    // migration surfaces here instead of inside a running shell.
    match petstop_core::db::open_db_in_memory() {
        Ok(_) => {
            println!("petstop_core store=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("petstop_core store=error detail={err}");
            ExitCode::FAILURE
        }
    }
}
