use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{Context, Result, anyhow, bail};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use kline_chart::{
    ChartSession,
    config::AppConfig,
    logging,
    session::{
        ChartSlot, FetchOutcome, Handled, InputField, RecordingSurface, Region, UiEvent,
    },
};
use market_data_client::{DataSource, HttpProvider, JsonFileProvider, Period};

#[derive(Parser)]
#[command(author, version, about = "Render K-line chart specs for one stock")]
struct Cli {
    /// Path to the config file (kline_chart.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Replay a saved response document instead of calling the backend
    #[arg(long, value_name = "FILE")]
    source_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one series and write the price and volume chart specs
    Render(RenderArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Stock code (e.g. "600519")
    #[arg(long)]
    code: String,

    /// First date, YYYY-MM-DD (default: one year before today)
    #[arg(long)]
    start: Option<String>,

    /// Last date, YYYY-MM-DD (default: today)
    #[arg(long)]
    end: Option<String>,

    /// Bar period: day, week or month (default: day)
    #[arg(long)]
    period: Option<Period>,

    /// Directory that receives price.json and volume.json
    #[arg(long, value_name = "DIR", default_value = ".")]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    config.apply_env_overrides();
    config.validate()?;
    logging::init(&config.logging.filter).map_err(|e| anyhow!(e))?;

    match cli.command {
        Commands::Render(args) => render(&config, cli.source_file, args).await,
    }
}

async fn render(config: &AppConfig, source_file: Option<PathBuf>, args: RenderArgs) -> Result<()> {
    let source: Arc<dyn DataSource> = match source_file {
        Some(path) => Arc::new(JsonFileProvider::new(path)),
        None => Arc::new(HttpProvider::new(&config.source)?),
    };

    let mut session = ChartSession::new(source, config.chart.clone(), RecordingSurface::new());
    session.init(Utc::now().date_naive());

    let edits = [
        (InputField::StockCode, Some(args.code)),
        (InputField::StartDate, args.start),
        (InputField::EndDate, args.end),
    ];
    for (field, value) in edits {
        if let Some(value) = value {
            session.handle(UiEvent::Edit { field, value }).await;
        }
    }

    let trigger = match args.period {
        Some(period) => UiEvent::SelectPeriod(period),
        None => UiEvent::Submit,
    };
    let outcome = match session.handle(trigger).await {
        Handled::Fetched(outcome) => outcome,
        other => bail!("no fetch was triggered ({other:?})"),
    };

    let surface = session.surface();
    match outcome {
        FetchOutcome::Success { .. } => {}
        FetchOutcome::Error { message } => bail!(message),
        FetchOutcome::Stale => bail!("fetch result was superseded"),
    }

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;
    for (slot, file_name) in [(ChartSlot::Price, "price.json"), (ChartSlot::Volume, "volume.json")] {
        let spec = surface
            .chart(slot)
            .with_context(|| format!("{slot:?} chart was not rendered"))?;
        let path = args.out.join(file_name);
        fs::write(&path, serde_json::to_string_pretty(spec)?)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    for (label, region) in [
        ("Stock", Region::StockName),
        ("Price", Region::CurrentPrice),
        ("Change", Region::PriceChange),
        ("Volume", Region::Volume),
        ("Turnover", Region::Turnover),
    ] {
        println!("{label:<9}{}", surface.text(region));
    }

    session.teardown();
    Ok(())
}
