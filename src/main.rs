use anyhow::{Context, Result};
use clap::Parser;
use scrollwork::{convert_svg_to_png, generate_svg, layout, Config, Outline, StyleName};
use std::fs;
use std::path::PathBuf;

/// Fallback boundary used when no outline file is supplied: a banner shape
/// with a circular cut-out, exercising the even-odd fill rule.
const DEFAULT_OUTLINE_PATH: &str = "M 20 140 Q 40 110 120 105 Q 240 98 360 110 Q 430 117 480 102 Q 530 87 580 110 Q 630 133 690 130 Q 780 126 860 145 Q 900 155 915 185 Q 930 215 915 245 Q 880 315 800 330 Q 720 345 640 338 Q 600 334 520 352 Q 440 370 360 355 Q 280 340 210 350 Q 140 360 90 330 Q 40 300 25 260 Q 10 220 20 140 Z M 835 210 a 18 18 0 1 0 36 0 a 18 18 0 1 0 -36 0 Z";

#[derive(Parser, Debug)]
#[command(name = "scrollwork")]
#[command(about = "Generate scrollwork ornamentation inside an outline as SVG or PNG", long_about = None)]
struct Args {
    /// SVG file whose first <path> is used as the outline boundary
    /// (a built-in banner outline is used when omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file path (defaults to scrollwork_<style>_seed<seed>.svg)
    /// Use .png extension to rasterize, .svg for vector output
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// JSON config file; takes the place of the style/intricacy/seed/
    /// thickness/invert flags
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Ornament style preset
    #[arg(long, value_enum, default_value = "acanthus")]
    style: StyleName,

    /// Density knob for motif and leaf counts (10-120)
    #[arg(long, default_value_t = 60)]
    intricacy: u32,

    /// Seed for the reproducible pseudo-random stream
    #[arg(long, default_value_t = 12345)]
    seed: i32,

    /// Stroke thickness multiplier (0.5-2.0)
    #[arg(long, default_value_t = 1.0)]
    thickness: f64,

    /// Swap outline fill and stroke colors
    #[arg(long)]
    invert: bool,

    /// PNG compression quality (0-100)
    #[arg(long, default_value_t = 80)]
    quality: u8,

    /// PNG output DPI (source is treated as 96 DPI)
    #[arg(long)]
    dpi: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {path:?}"))?;
            serde_json::from_str::<Config>(&text).context("Failed to parse config JSON")?
        }
        None => Config {
            style: args.style,
            intricacy: args.intricacy,
            seed: args.seed,
            thickness: args.thickness,
            invert: args.invert,
        },
    };
    config.validate()?;

    let outline = match &args.input {
        Some(path) => {
            let svg_text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read outline file: {path:?}"))?;
            Outline::from_svg_document(&svg_text)
                .with_context(|| format!("Failed to load outline from {path:?}"))?
        }
        None => {
            log::info!("no outline file given, using the built-in banner outline");
            Outline::from_path_data(DEFAULT_OUTLINE_PATH)
                .context("Failed to parse built-in outline")?
        }
    };
    log::debug!("bounding region: {:?}", outline.region());

    let motifs = layout(&outline.region(), config.style.profile(), config.intricacy, config.seed);
    let svg_content = generate_svg(&outline, &config, &motifs);

    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("scrollwork_{}_seed{}.svg", config.style, config.seed)));

    let extension = output_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("svg");

    match extension.to_lowercase().as_str() {
        "png" => {
            convert_svg_to_png(&svg_content, &output_path, None, args.quality, args.dpi)
                .with_context(|| format!("Failed to render PNG: {output_path:?}"))?;
        }
        _ => {
            fs::write(&output_path, svg_content)
                .with_context(|| format!("Failed to write SVG file: {output_path:?}"))?;
        }
    }

    println!(
        "Generated {} motifs ({} style, seed {}) -> {}",
        motifs.len(),
        config.style,
        config.seed,
        output_path.display()
    );

    Ok(())
}
