//! The `snap` command: closest-point selection over vector arguments.

use stitchkit::{closest_index, Vector};

pub fn cmd_snap(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Usage: stitchkit snap <reference> <point>...");
        eprintln!();
        eprintln!("Example: stitchkit snap 2,0 0,0 10,0 3,0");
        std::process::exit(1);
    }

    let reference = parse_vector(&args[0]);
    let points: Vec<Vector> = args[1..].iter().map(|arg| parse_vector(arg)).collect();

    match closest_index(&points, reference) {
        Ok(index) => {
            let closest = points[index];
            eprintln!("Closest: point {} of {}", index + 1, points.len());
            println!("{},{}", closest.x, closest.y);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn parse_vector(text: &str) -> Vector {
    text.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}
