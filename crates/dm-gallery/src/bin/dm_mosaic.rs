use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use delaunay_mosaic::{
    BorderMode, ColorMode, Image, Mosaic, MosaicConfig, Point, Rgba, RgbaImage,
    extract_edge_points, filter_stages, generate,
};
use image::imageops::FilterType;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const OUTLINE: Rgba = Rgba::opaque(255, 0, 0);
const REMAINING: Rgba = Rgba::opaque(0, 0, 255);

#[derive(Parser, Debug)]
#[command(name = "dm_mosaic")]
#[command(about = "Render low-poly delaunay mosaics from images")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full pipeline: mosaic.png, triangles.json and meta.json.
    #[command(name = "render")]
    Render(RenderArgs),
    /// Intermediate filter buffers and the extracted feature points.
    #[command(name = "stages")]
    Stages(StagesArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, default_value = "out")]
    out: PathBuf,
    /// Downscale the input to fit this width before processing.
    #[arg(long)]
    max_width: Option<u32>,
    #[arg(long)]
    max_height: Option<u32>,
    #[arg(long, default_value_t = 5)]
    blur: usize,
    #[arg(long, default_value_t = 5)]
    edge: usize,
    #[arg(long, default_value_t = 50)]
    threshold: u8,
}

#[derive(Args, Debug, Clone)]
struct RenderArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[arg(long, default_value_t = 0.03)]
    rate: f64,
    #[arg(long, value_enum, default_value_t = ModeArg::Quick)]
    mode: ModeArg,
    #[arg(long)]
    seed: Option<u64>,
    /// Stroke triangle edges in red.
    #[arg(long)]
    outline: bool,
    /// Mark feature points left out of the triangulation in blue.
    #[arg(long)]
    show_points: bool,
}

#[derive(Args, Debug, Clone)]
struct StagesArgs {
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Exact,
    Quick,
}

impl From<ModeArg> for ColorMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Exact => ColorMode::Exact,
            ModeArg::Quick => ColorMode::Quick,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct MetaRender {
    input: String,
    source_size: [u32; 2],
    size: [usize; 2],
    config: MosaicConfig,
    feature_points: usize,
    sampled: usize,
    remaining: usize,
    triangles: usize,
    degenerate_triangles: usize,
}

#[derive(Debug, Clone, Serialize)]
struct PointsDto {
    width: usize,
    height: usize,
    threshold: u8,
    points: Vec<Point>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Render(args) => run_render(args),
        Command::Stages(args) => run_stages(args),
    }
}

fn run_render(args: RenderArgs) -> Result<()> {
    let out_dir = prepare_out(&args.common)?;
    let (img, source_size) = load_input(&args.common)?;

    let config = MosaicConfig {
        blur_kernel_size: args.common.blur,
        edge_kernel_size: args.common.edge,
        threshold: args.common.threshold,
        sample_rate: args.rate,
        color_mode: args.mode.into(),
        border: BorderMode::Clamp,
        seed: args.seed,
    };
    if let Err(e) = config.validate() {
        bail!("{e}.");
    }
    if !(args.rate > 0.0 && args.rate <= 1.0) {
        warn!(rate = args.rate, "rate outside (0, 1], mosaic will be empty");
    }

    let mosaic = generate(&img, &config)
        .with_context(|| format!("generating mosaic for {}", args.common.input.display()))?;

    let mut canvas = mosaic.rasterize();
    if args.outline {
        draw_outlines(&mut canvas, &mosaic);
    }
    if args.show_points {
        for &p in &mosaic.remaining {
            put_pixel(&mut canvas, p, REMAINING);
        }
    }

    save_rgba(out_dir.join("mosaic.png"), &canvas)?;
    write_json(out_dir.join("triangles.json"), &mosaic.triangles)?;

    let degenerate = mosaic
        .triangles
        .iter()
        .filter(|t| t.triangle().is_degenerate())
        .count();
    write_json(
        out_dir.join("meta.json"),
        &MetaRender {
            input: args.common.input.display().to_string(),
            source_size,
            size: [mosaic.width, mosaic.height],
            config,
            feature_points: mosaic.sampled.len() + mosaic.remaining.len(),
            sampled: mosaic.sampled.len(),
            remaining: mosaic.remaining.len(),
            triangles: mosaic.triangles.len(),
            degenerate_triangles: degenerate,
        },
    )?;

    info!(
        triangles = mosaic.triangles.len(),
        sampled = mosaic.sampled.len(),
        out = %out_dir.display(),
        "mosaic written"
    );
    Ok(())
}

fn run_stages(args: StagesArgs) -> Result<()> {
    let out_dir = prepare_out(&args.common)?;
    let (img, _) = load_input(&args.common)?;

    let stages = filter_stages(&img, args.common.blur, args.common.edge, BorderMode::Clamp)
        .with_context(|| {
            format!(
                "filtering with blur={} edge={}",
                args.common.blur, args.common.edge
            )
        })?;
    let points = extract_edge_points(&stages.edges, args.common.threshold);

    save_rgba(out_dir.join("gray.png"), &stages.gray)?;
    save_rgba(out_dir.join("blurred.png"), &stages.blurred)?;
    save_rgba(out_dir.join("edges.png"), &stages.edges)?;
    write_json(
        out_dir.join("points.json"),
        &PointsDto {
            width: img.width(),
            height: img.height(),
            threshold: args.common.threshold,
            points,
        },
    )?;

    info!(out = %out_dir.display(), "stages written");
    Ok(())
}

fn prepare_out(common: &CommonArgs) -> Result<PathBuf> {
    ensure_file_exists(&common.input, "input")?;
    fs::create_dir_all(&common.out)
        .with_context(|| format!("creating output directory {}", common.out.display()))?;
    Ok(common.out.clone())
}

fn ensure_file_exists(path: &Path, label: &str) -> Result<()> {
    if !path.is_file() {
        bail!("{label} file does not exist: {}.", path.display());
    }
    Ok(())
}

/// Decodes the input and shrinks it, keeping aspect ratio, to fit
/// `max_width x max_height`. Images are never enlarged.
fn load_input(common: &CommonArgs) -> Result<(RgbaImage, [u32; 2])> {
    let path = &common.input;
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;
    let (w, h) = (dyn_img.width(), dyn_img.height());

    let (fw, fh) = fit_within(w, h, common.max_width, common.max_height);
    let rgba = if (fw, fh) == (w, h) {
        dyn_img.to_rgba8()
    } else {
        info!(from = ?(w, h), to = ?(fw, fh), "resizing input");
        dyn_img.resize_exact(fw, fh, FilterType::Triangle).to_rgba8()
    };

    let (rw, rh) = rgba.dimensions();
    let img = Image::from_rgba_bytes(rw as usize, rh as usize, rgba.as_raw())
        .with_context(|| format!("constructing rgba buffer from {}", path.display()))?;
    Ok((img, [w, h]))
}

fn fit_within(w: u32, h: u32, max_w: Option<u32>, max_h: Option<u32>) -> (u32, u32) {
    let mut scale = 1.0f64;
    if let Some(mw) = max_w.filter(|&mw| w > mw) {
        scale = f64::from(mw) / f64::from(w);
    }
    if let Some(mh) = max_h.filter(|&mh| h > mh) {
        scale = scale.min(f64::from(mh) / f64::from(h));
    }
    if scale >= 1.0 {
        return (w, h);
    }
    let scaled = |v: u32| ((f64::from(v) * scale).floor() as u32).max(1);
    (scaled(w), scaled(h))
}

fn draw_outlines(canvas: &mut RgbaImage, mosaic: &Mosaic) {
    for t in &mosaic.triangles {
        let [a, b, c] = t.vertices;
        for (p, q) in [(a, b), (b, c), (c, a)] {
            draw_line(canvas, p, q, OUTLINE);
        }
    }
}

/// Bresenham; pixels outside the canvas are dropped.
fn draw_line(canvas: &mut RgbaImage, from: Point, to: Point, color: Rgba) {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;
    let mut p = from;

    loop {
        put_pixel(canvas, p, color);
        if p == to {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            p.x += sx;
        }
        if e2 <= dx {
            err += dx;
            p.y += sy;
        }
    }
}

fn put_pixel(canvas: &mut RgbaImage, p: Point, color: Rgba) {
    let (Ok(x), Ok(y)) = (usize::try_from(p.x), usize::try_from(p.y)) else {
        return;
    };
    if let Some(px) = canvas.get_mut(x, y) {
        *px = color;
    }
}

fn save_rgba(path: PathBuf, img: &RgbaImage) -> Result<()> {
    let buf = image::RgbaImage::from_raw(
        img.width() as u32,
        img.height() as u32,
        img.to_rgba_bytes(),
    )
    .context("constructing RgbaImage from raw bytes")?;
    buf.save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn write_json(path: PathBuf, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}
