//! stitchkit - CLI for the stitchkit geometry core
//!
//! Usage:
//!   stitchkit path "<command>"          Parse a path command string
//!   stitchkit convert <src> <dst>       Convert between embroidery formats
//!   stitchkit snap <ref> <point>...     Pick the point closest to <ref>

use std::env;

mod cli;

use cli::{cmd_convert, cmd_path, cmd_snap, print_usage};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    match args[1].as_str() {
        "path" => cmd_path(&args[2..]),
        "convert" => cmd_convert(&args[2..]),
        "snap" => cmd_snap(&args[2..]),
        "help" | "--help" | "-h" => print_usage(&args[0]),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}
