use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use diagram_core::shape::{create_path, Direction, PathFormat, RecordingSink, Rect};
use diagram_core::{CodecConfig, CodecRegistry, Graph, ShapeKind};

#[derive(Parser)]
#[command(name = "diagram-core", version, about = "Draw shape outlines and encode graphs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the outline path of a shape
    Path {
        #[arg(short, long)]
        shape: ShapeKind,
        #[arg(long, default_value_t = 0.0)]
        x: f64,
        #[arg(long, default_value_t = 0.0)]
        y: f64,
        #[arg(short = 'W', long)]
        width: f64,
        #[arg(short = 'H', long)]
        height: f64,
        #[arg(short, long, default_value = "svg")]
        format: PathFormat,
        #[arg(short, long, default_value = "east")]
        direction: Direction,
    },
    /// Print the drawing commands of a shape as JSON
    Commands {
        #[arg(short, long)]
        shape: ShapeKind,
        #[arg(short = 'W', long)]
        width: f64,
        #[arg(short = 'H', long)]
        height: f64,
    },
    /// Print the encoded form of a default graph
    EncodeGraph {
        /// Also write fields that still hold their default value
        #[arg(long)]
        encode_defaults: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Path {
            shape,
            x,
            y,
            width,
            height,
            format,
            direction,
        } => {
            let bounds = Rect::new(x, y, width, height);
            let d = create_path(shape.shape(), bounds, direction, format)
                .with_context(|| format!("drawing {}", shape))?;
            println!("{}", d);
        }
        Command::Commands {
            shape,
            width,
            height,
        } => {
            let mut sink = RecordingSink::new();
            shape.shape().redraw_path(&mut sink, 0.0, 0.0, width, height)?;
            println!("{}", serde_json::to_string_pretty(sink.commands())?);
        }
        Command::EncodeGraph { encode_defaults } => {
            let registry = CodecRegistry::with_defaults(CodecConfig { encode_defaults })?;
            let record = registry.encode(&Graph::new())?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}
