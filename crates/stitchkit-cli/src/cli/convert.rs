//! The `convert` command: invoke the external conversion engine.
//!
//! Stitch-format detection and encoding live entirely in the `embroider`
//! binary; we only hand it a source and a destination path and surface its
//! exit status. Exit status 0 means the conversion succeeded.

use std::process::Command;

pub fn cmd_convert(args: &[String]) {
    if args.len() != 2 {
        eprintln!("Usage: stitchkit convert <src> <dst>");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  stitchkit convert design.csv design.dst");
        eprintln!("  stitchkit convert design.pes design.svg");
        std::process::exit(1);
    }

    let (src, dst) = (&args[0], &args[1]);
    eprintln!("Converting: {} -> {}", src, dst);

    let status = match Command::new("embroider").arg(src).arg(dst).status() {
        Ok(status) => status,
        Err(e) => {
            eprintln!("Failed to run conversion engine 'embroider': {}", e);
            eprintln!("Is libembroidery's 'embroider' binary on your PATH?");
            std::process::exit(1);
        }
    };

    match status.code() {
        Some(0) => eprintln!("Wrote: {}", dst),
        Some(code) => {
            eprintln!("Conversion engine exited with status {}", code);
            std::process::exit(code);
        }
        None => {
            eprintln!("Conversion engine was terminated by a signal");
            std::process::exit(1);
        }
    }
}
