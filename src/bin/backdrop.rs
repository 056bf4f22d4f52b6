use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "backdrop", version, about = "Render a desktop background to a PNG")]
struct Cli {
    /// Background config JSON; command line flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Background image.
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// Placement mode: stretch, fill, fit, center, tile or solid_color.
    #[arg(short, long)]
    mode: Option<String>,

    /// Crop anchor for fill mode: north, south, east, west or center.
    #[arg(short, long)]
    gravity: Option<String>,

    /// Background color as #RRGGBB or #RRGGBBAA.
    #[arg(short, long)]
    color: Option<String>,

    /// Output size in pixels, e.g. 1920x1080.
    #[arg(long, value_parser = parse_size, default_value = "1920x1080")]
    size: (u32, u32),

    /// Output PNG path.
    #[arg(short, long)]
    out: PathBuf,
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("size '{s}' must look like WIDTHxHEIGHT"))?;
    let w: u32 = w.trim().parse().map_err(|_| format!("invalid width '{w}'"))?;
    let h: u32 = h.trim().parse().map_err(|_| format!("invalid height '{h}'"))?;
    if w == 0 || h == 0 {
        return Err(format!("size '{s}' must be non-zero"));
    }
    Ok((w, h))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => backdrop::BackgroundConfig::from_json_path(path)?,
        None => backdrop::BackgroundConfig::default(),
    };
    config.override_with(
        cli.image,
        cli.mode.as_deref(),
        cli.gravity.as_deref(),
        cli.color.as_deref(),
    )?;

    let (width, height) = cli.size;
    let frame = backdrop::render_background(&config, backdrop::Canvas::new(width, height))?;

    if let Some(parent) = cli.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &cli.out,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", cli.out.display()))?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}
