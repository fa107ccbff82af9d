//! Voice Ordering Counter
//!
//! Takes a coffee order end to end:
//! Speech → Utterance Parser → Price Calculator → Confirmation → Final Order

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info};

use order_dialogue::{DialogueSession, SessionConfig};
use order_parser::{
    compose_summary, format_price, load_menu_file, LoadedMenu, MenuCatalog, MenuConfig,
    PriceCalculator, UtteranceParser,
};
use voice_local::plugin::{new_listener, new_speaker, BackendKind};
use voice_local::{ListenConfig, SpeakConfig};

#[derive(Parser, Debug)]
#[command(name = "barista", version, about = "Voice coffee ordering counter")]
struct Args {
    /// Menu YAML file (defaults to the built-in coffee menu)
    #[arg(long)]
    menu: Option<PathBuf>,

    /// Replay utterances from a file, one per line, instead of reading stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Seed for reproducible base prices
    #[arg(long)]
    seed: Option<u64>,

    /// Use one fixed base price for every item instead of random prices;
    /// the menu's size and modifier surcharges still apply
    #[arg(long)]
    fixed_price: Option<f64>,

    /// Keep the running total when the customer rejects and re-orders
    #[arg(long)]
    keep_price_on_reorder: bool,

    /// Give up on a listen attempt after this many seconds and repeat the prompt
    #[arg(long)]
    listen_timeout_secs: Option<u64>,

    /// Parse a single utterance, print the result and exit
    #[arg(long)]
    parse: Option<String>,

    /// Print machine-readable JSON output
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    setup_tracing();

    let args = Args::parse();

    let menu = match &args.menu {
        Some(path) => load_menu_file(path)?,
        None => {
            let config = MenuConfig::default();
            let catalog = MenuCatalog::new(&config).context("building built-in menu")?;
            LoadedMenu { config, catalog }
        }
    };

    let mut pricing = menu.config.pricing.clone();
    if let Some(base) = args.fixed_price {
        pricing = pricing.with_flat_base(base);
    }
    let calculator = match args.seed {
        Some(seed) => PriceCalculator::with_seed(pricing, seed)?,
        None => PriceCalculator::new(pricing)?,
    };

    if let Some(text) = &args.parse {
        return parse_single_utterance(text, &menu.catalog, calculator, args.json);
    }

    info!("☕ Starting voice ordering counter");

    let session_config = SessionConfig {
        reset_price_on_reorder: !args.keep_price_on_reorder,
        ..Default::default()
    };
    let listen_config = ListenConfig {
        timeout: args.listen_timeout_secs.map(Duration::from_secs),
    };

    let (kind, script) = match &args.script {
        Some(path) => (BackendKind::Scripted, read_script(path)?),
        None => (BackendKind::Console, Vec::new()),
    };
    let mut listener = new_listener(kind, listen_config, script).map_err(anyhow::Error::msg)?;
    let mut speaker = new_speaker(
        kind,
        SpeakConfig {
            prefix: Some("🔊 ".to_string()),
        },
    )
    .map_err(anyhow::Error::msg)?;

    let mut session = DialogueSession::new(&menu.catalog, calculator, session_config)?;
    info!(session = %session.id(), "Session ready");
    match session.run(&mut listener, &mut speaker) {
        Ok(order) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(order)?);
            }
            info!("✅ Order complete");
            Ok(())
        }
        Err(e) => {
            error!("Session ended without a final order: {}", e);
            Err(e.into())
        }
    }
}

fn parse_single_utterance(
    text: &str,
    catalog: &MenuCatalog,
    mut calculator: PriceCalculator,
    json: bool,
) -> Result<()> {
    let parser = UtteranceParser::new(catalog)?;
    let components = parser.parse(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&components)?);
        return Ok(());
    }

    println!("🎤 Utterance: \"{}\"", text);
    if !components.has_items() {
        println!("❌ No menu items recognised");
        return Ok(());
    }
    let price = calculator.price(&components)?;
    println!("✅ Summary: {}", compose_summary(&components));
    for line in &price.lines {
        println!(
            "   {} x {} @ ${} = ${}",
            line.quantity,
            line.item,
            format_price(line.unit_price()),
            format_price(line.line_total)
        );
    }
    println!("💰 Total: ${}", format_price(price.total()));
    Ok(())
}

fn read_script(path: &Path) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading script: {}", path.display()))?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect())
}

fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
