//! CLI logic for the Dendrite layout tool.
//!
//! The binary reads a concept outline, replays it through a
//! [`LayoutSession`] one concept at a time, and writes the placed map as
//! JSON. It stands in for the UI state store that would normally own the
//! graph.

pub mod outline;

mod args;
mod config;
mod error;

pub use args::Args;
pub use error::CliError;

use std::fs;

use log::info;

use dendrite::LayoutSession;
use dendrite::geometry::Bounds;

use outline::place_outline;

/// Run the Dendrite CLI application.
///
/// # Errors
///
/// Returns [`CliError`] for file I/O errors, configuration errors, and
/// malformed outlines. Placement itself never fails.
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        width = args.width,
        height = args.height;
        "Placing outline"
    );

    let layout_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;
    let outline: outline::Outline = serde_json::from_str(&source)?;

    let mut session = LayoutSession::new(layout_config)?;
    if let Some(seed) = args.seed {
        session = session.with_seed(seed);
    }

    let canvas = Bounds::from_canvas_size(args.width, args.height);
    let map = place_outline(&outline, &mut session, canvas);

    let rendered = serde_json::to_string_pretty(&map)?;
    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(output_file = path.as_str(); "Placement written");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
