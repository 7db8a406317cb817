use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cardfx::{
    CardConfig, CardPreview, CardRepository, EngineConfig, FrameTime, FsMediaStore, FsStore,
    Rasterizer, Size,
};

#[derive(Parser, Debug)]
#[command(name = "cardfx", version)]
struct Cli {
    /// Engine config JSON; defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding one JSON document per card.
    #[arg(long, global = true, default_value = "cards")]
    store: PathBuf,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a card at one instant as PNG or SVG (by output extension).
    Frame(FrameArgs),
    /// Print the slug a card would be saved under.
    Slug(SlugArgs),
    /// Save a card config into the store.
    Save(SaveArgs),
    /// Print a stored card and count the view.
    Show(ShowArgs),
    /// List public cards, newest first.
    Feed(FeedArgs),
    /// Delete expired cards and their managed media.
    Cleanup(CleanupArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input card config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Instant to render, in milliseconds after mount.
    #[arg(long, default_value_t = 0.0)]
    at_ms: f64,

    /// Clicks on the card, in milliseconds after mount. Repeatable.
    #[arg(long = "click-ms")]
    clicks: Vec<f64>,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Output path; `.svg` writes markup, anything else a PNG.
    #[arg(long)]
    out: PathBuf,

    /// Skip loading system fonts; text is not drawn.
    #[arg(long)]
    no_system_fonts: bool,
}

#[derive(Parser, Debug)]
struct SlugArgs {
    #[arg(long, default_value = "")]
    sender: String,
    #[arg(long, default_value = "")]
    receiver: String,
    #[arg(long, default_value = "")]
    event: String,
}

#[derive(Parser, Debug)]
struct SaveArgs {
    /// Input card config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[arg(long)]
    title: Option<String>,

    /// Keep the card out of the public feed.
    #[arg(long)]
    private: bool,
}

#[derive(Parser, Debug)]
struct ShowArgs {
    slug: String,
}

#[derive(Parser, Debug)]
struct FeedArgs {
    #[arg(long, default_value_t = 20)]
    limit: usize,
}

#[derive(Parser, Debug)]
struct CleanupArgs {
    /// Directory that managed media URLs resolve into.
    #[arg(long, default_value = "media")]
    media_root: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = match cli.config.as_deref() {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };
    match cli.cmd {
        Command::Frame(args) => cmd_frame(&engine, args),
        Command::Slug(args) => cmd_slug(args),
        Command::Save(args) => cmd_save(&cli.store, args),
        Command::Show(args) => cmd_show(&cli.store, args),
        Command::Feed(args) => cmd_feed(&cli.store, args),
        Command::Cleanup(args) => cmd_cleanup(&engine, &cli.store, args),
    }
}

fn read_card(path: &Path) -> anyhow::Result<CardConfig> {
    CardConfig::from_path(path).with_context(|| format!("load card '{}'", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value).context("encode output JSON")?);
    Ok(())
}

fn cmd_frame(engine: &EngineConfig, args: FrameArgs) -> anyhow::Result<()> {
    let card = read_card(&args.in_path)?;
    if !args.at_ms.is_finite() || args.at_ms < 0.0 {
        anyhow::bail!("--at-ms must be a non-negative number");
    }
    let container = Size::new(f64::from(args.width), f64::from(args.height));

    let mut clicks = args.clicks.clone();
    clicks.retain(|t| t.is_finite() && *t >= 0.0 && *t <= args.at_ms);
    clicks.sort_by(f64::total_cmp);
    let mut clicks = clicks.into_iter().peekable();

    let mut preview = CardPreview::new(card, engine.preview_options());
    preview.mount(container, FrameTime::ZERO);

    // Confetti and the resize debounce integrate over frames, so every frame up to the
    // instant is stepped.
    let step = engine.frame_interval_ms();
    let mut t = 0.0;
    loop {
        while let Some(click) = clicks.next_if(|c| *c <= t) {
            preview.click(FrameTime(click));
        }
        preview.tick(FrameTime(t));
        if t >= args.at_ms {
            break;
        }
        t = (t + step).min(args.at_ms);
    }

    let scene = preview.scene(FrameTime(args.at_ms));
    let svg = cardfx::render_svg(&scene);
    let is_svg = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(&args.out, svg)
            .with_context(|| format!("write svg '{}'", args.out.display()))?;
    } else {
        let rasterizer = if args.no_system_fonts {
            Rasterizer::without_fonts()
        } else {
            Rasterizer::with_system_fonts()
        };
        rasterizer
            .rasterize(&svg, args.width, args.height)?
            .write_png(&args.out)?;
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_slug(args: SlugArgs) -> anyhow::Result<()> {
    println!("{}", cardfx::slug_for(&args.sender, &args.receiver, &args.event));
    Ok(())
}

fn cmd_save(store: &Path, args: SaveArgs) -> anyhow::Result<()> {
    let card = read_card(&args.in_path)?;
    let mut repo = CardRepository::new(FsStore::new(store));
    let slug = repo.save(&card, args.title.as_deref(), !args.private, chrono::Utc::now())?;
    println!("{slug}");
    Ok(())
}

fn cmd_show(store: &Path, args: ShowArgs) -> anyhow::Result<()> {
    let mut repo = CardRepository::new(FsStore::new(store));
    let card = repo
        .load(&args.slug)?
        .with_context(|| format!("no card at '{}'", args.slug))?;
    print_json(&card)
}

fn cmd_feed(store: &Path, args: FeedArgs) -> anyhow::Result<()> {
    let repo = CardRepository::new(FsStore::new(store));
    print_json(&repo.public_feed(args.limit)?)
}

fn cmd_cleanup(engine: &EngineConfig, store: &Path, args: CleanupArgs) -> anyhow::Result<()> {
    let mut docs = FsStore::new(store);
    let mut media = FsMediaStore::new(args.media_root, engine.managed_media_prefix.clone());
    let report = engine.janitor().sweep(&mut docs, &mut media, chrono::Utc::now())?;
    print_json(&report)
}
