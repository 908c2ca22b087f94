//! The `path` command: parse a path command string and print the result.

use serde::Serialize;
use stitchkit::{path_from_command, LineStyle, Path, PathOp, Pen};

/// Output format for the path command.
#[derive(Clone, Copy, PartialEq)]
enum OutputFormat {
    Text,
    Json,
}

/// A vector in JSON output.
#[derive(Serialize)]
struct JsonVector {
    x: f64,
    y: f64,
}

/// One path operation in JSON output.
#[derive(Serialize)]
struct JsonOp {
    op: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<JsonVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    args: Option<Vec<f64>>,
}

/// Pen descriptor in JSON output.
#[derive(Serialize)]
struct JsonPen {
    rgb: String,
    line_style: &'static str,
    line_weight: f64,
    cap_style: &'static str,
    join_style: &'static str,
}

/// Full JSON output for a parsed path.
#[derive(Serialize)]
struct JsonPath {
    ops: Vec<JsonOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pen: Option<JsonPen>,
}

pub fn cmd_path(args: &[String]) {
    let mut command: Option<&str> = None;
    let mut format = OutputFormat::Text;
    let mut pen: Option<Pen> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-f" | "--format" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --format requires a value ('text' or 'json')");
                    std::process::exit(1);
                }
                format = match args[i].to_lowercase().as_str() {
                    "text" => OutputFormat::Text,
                    "json" => OutputFormat::Json,
                    other => {
                        eprintln!("Unknown format: {}. Use 'text' or 'json'.", other);
                        std::process::exit(1);
                    }
                };
            }
            "--pen" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --pen requires a value (color,weight,style)");
                    std::process::exit(1);
                }
                pen = Some(pen_from_spec(&args[i]).unwrap_or_else(|e| {
                    eprintln!("Bad pen spec {:?}: {}", args[i], e);
                    std::process::exit(1);
                }));
            }
            text => {
                if command.is_some() {
                    eprintln!("Unexpected argument: {:?}", text);
                    eprintln!("Quote the path command: stitchkit path \"M 1.0 2.0\"");
                    std::process::exit(1);
                }
                command = Some(text);
            }
        }
        i += 1;
    }

    let command = command.unwrap_or_else(|| {
        eprintln!("Error: path command string required");
        eprintln!("Example: stitchkit path \"M 1.0 2.0 L 3.0 4.0 Z\"");
        std::process::exit(1);
    });

    let path = match path_from_command(command) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    eprintln!("Parsed {} operations", path.len());
    if let Some((min_x, min_y, max_x, max_y)) = path.bounding_box() {
        eprintln!("Bounds: ({}, {}) - ({}, {})", min_x, min_y, max_x, max_y);
    }

    match format {
        OutputFormat::Text => {
            for op in &path {
                println!("{}", format_op(op));
            }
        }
        OutputFormat::Json => {
            let output = json_path(&path, pen);
            println!(
                "{}",
                serde_json::to_string(&output).expect("Failed to serialize JSON")
            );
        }
    }
}

/// Parse a `color,weight,style` pen spec. Trailing fields are optional and
/// fall back to the default pen.
fn pen_from_spec(spec: &str) -> Result<Pen, String> {
    let mut pen = Pen::default();
    let fields: Vec<&str> = spec.split(',').collect();
    if fields.len() > 3 {
        return Err("expected color,weight,style".to_string());
    }

    if let Some(color) = fields.first() {
        if !color.is_empty() {
            pen.rgb = color.to_string();
        }
    }
    if let Some(weight) = fields.get(1) {
        pen.line_weight = weight
            .parse()
            .map_err(|_| format!("weight {:?} is not a number", weight))?;
    }
    if let Some(style) = fields.get(2) {
        pen.line_style = LineStyle::from_name(style)
            .ok_or_else(|| format!("unknown line style {:?}", style))?;
    }

    Ok(pen)
}

/// One-line text rendering of a path operation.
fn format_op(op: &PathOp) -> String {
    match op {
        PathOp::MoveTo(v) => format!("move_to {},{}", v.x, v.y),
        PathOp::LineTo(v) => format!("line_to {},{}", v.x, v.y),
        PathOp::ArcTo(args) => format!("arc_to {}", join_floats(args)),
        PathOp::ArcMoveTo(args) => format!("arc_move_to {}", join_floats(args)),
        PathOp::Ellipse(args) => format!("ellipse {}", join_floats(args)),
        PathOp::ClosePath => "close_path".to_string(),
    }
}

fn join_floats(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn json_path(path: &Path, pen: Option<Pen>) -> JsonPath {
    let ops = path
        .iter()
        .map(|op| match op {
            PathOp::MoveTo(v) => JsonOp {
                op: "move_to",
                to: Some(JsonVector { x: v.x, y: v.y }),
                args: None,
            },
            PathOp::LineTo(v) => JsonOp {
                op: "line_to",
                to: Some(JsonVector { x: v.x, y: v.y }),
                args: None,
            },
            PathOp::ArcTo(args) => JsonOp {
                op: "arc_to",
                to: None,
                args: Some(args.to_vec()),
            },
            PathOp::ArcMoveTo(args) => JsonOp {
                op: "arc_move_to",
                to: None,
                args: Some(args.to_vec()),
            },
            PathOp::Ellipse(args) => JsonOp {
                op: "ellipse",
                to: None,
                args: Some(args.to_vec()),
            },
            PathOp::ClosePath => JsonOp {
                op: "close_path",
                to: None,
                args: None,
            },
        })
        .collect();

    let pen = pen.map(|pen| JsonPen {
        rgb: pen.rgb.clone(),
        line_style: pen.line_style.name(),
        line_weight: pen.line_weight,
        cap_style: pen.cap_style.name(),
        join_style: pen.join_style.name(),
    });

    JsonPath { ops, pen }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stitchkit::Vector;

    #[test]
    fn text_format_matches_op_tags() {
        assert_eq!(
            format_op(&PathOp::MoveTo(Vector::new(1.0, 2.0))),
            "move_to 1,2"
        );
        assert_eq!(
            format_op(&PathOp::ArcTo([0.0, 0.0, 1.0, 1.0, 0.0, 360.0])),
            "arc_to 0 0 1 1 0 360"
        );
        assert_eq!(format_op(&PathOp::ClosePath), "close_path");
    }

    #[test]
    fn pen_spec_full() {
        let pen = pen_from_spec("#FF0000,0.5,dashed").unwrap();
        assert_eq!(pen.rgb, "#FF0000");
        assert_eq!(pen.line_weight, 0.5);
        assert_eq!(pen.line_style, LineStyle::Dashed);
    }

    #[test]
    fn pen_spec_defaults_missing_fields() {
        let pen = pen_from_spec("#00FF00").unwrap();
        assert_eq!(pen.rgb, "#00FF00");
        assert_eq!(pen.line_weight, 0.35);
        assert_eq!(pen.line_style, LineStyle::Solid);
    }

    #[test]
    fn pen_spec_rejects_bad_weight() {
        assert!(pen_from_spec("#fff,thick").is_err());
    }

    #[test]
    fn json_output_serializes_ops() {
        let path = path_from_command("M 1 2 Z").unwrap();
        let json = serde_json::to_string(&json_path(&path, None)).unwrap();
        assert!(json.contains("\"op\":\"move_to\""), "got {}", json);
        assert!(json.contains("\"op\":\"close_path\""), "got {}", json);
        assert!(!json.contains("\"pen\""), "pen should be omitted, got {}", json);
    }
}
