//! CLI command implementations.
//!
//! - `path` - parse a path command string and print the operations
//! - `convert` - invoke the external conversion engine
//! - `snap` - closest-point selection over vector arguments

pub mod convert;
pub mod path;
pub mod snap;

pub use convert::cmd_convert;
pub use path::cmd_path;
pub use snap::cmd_snap;

pub fn print_usage(prog: &str) {
    eprintln!("stitchkit - geometry kernel for embroidery design tooling");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} path \"<command>\" [options]", prog);
    eprintln!("  {} convert <src> <dst>", prog);
    eprintln!("  {} snap <reference> <point>...", prog);
    eprintln!();
    eprintln!("Path options:");
    eprintln!("  -f, --format <fmt>    Output format: text, json (default: text)");
    eprintln!("  --pen <spec>          Pen as color,weight,style (JSON output only)");
    eprintln!();
    eprintln!("Path commands are whitespace-delimited opcodes with operands:");
    eprintln!("  M x y    move to      L x y    line to");
    eprintln!("  A <6>    arc to       a <6>    arc move to");
    eprintln!("  E <4>    ellipse      Z        close path");
    eprintln!("Unknown tokens are skipped, so newer opcodes pass through.");
    eprintln!();
    eprintln!("Vectors are comma-separated, e.g. 1.5,2.5");
    eprintln!();
    eprintln!("convert hands both paths to the external 'embroider' engine;");
    eprintln!("format detection and encoding happen there.");
}
