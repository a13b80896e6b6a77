use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use dialoguer::{Input, MultiSelect, Select};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use weathercast::config::LoggingConfig;
use weathercast::render::{render_json, render_text, write_output};
use weathercast::{
    ConsoleProgress, InputParser, PredictionReport, Predictor, ProgressAnimation, TimeOfDay,
    WeatherLabel, WeathercastConfig, WeathercastError,
};

const SAMPLE_PREVIOUS: &str = "25,26,27";
const SAMPLE_CURRENT: &str = "28,29,30";

#[derive(Parser, Debug)]
#[command(name = "weathercast", version)]
#[command(about = "Predict temperatures and weather types from short baseline readings")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Predict from readings given as flags
    Predict(PredictArgs),
    /// Predict from readings entered at prompts
    Interactive(OutputArgs),
    /// Show the effective configuration
    Config,
}

#[derive(Args, Debug)]
struct PredictArgs {
    /// Previous temperatures, comma-separated
    #[arg(long)]
    previous: String,

    /// Current temperatures, comma-separated
    #[arg(long)]
    current: String,

    /// Previous weather types, comma-separated
    #[arg(long, default_value = "")]
    previous_weather: String,

    /// Current weather types, comma-separated
    #[arg(long, default_value = "")]
    current_weather: String,

    /// Number of times to predict
    #[arg(long)]
    horizon: Option<usize>,

    /// Time of day (morning, afternoon, evening, night)
    #[arg(long)]
    time_of_day: Option<String>,

    /// Only accept whole-number temperatures
    #[arg(long)]
    integers: bool,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Seed for reproducible weather types
    #[arg(long)]
    seed: Option<u64>,

    /// Print progress without pauses
    #[arg(long)]
    no_animation: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Fully parsed prediction inputs
struct PredictionRequest {
    previous_temperatures: Vec<f64>,
    current_temperatures: Vec<f64>,
    previous_weather: Vec<WeatherLabel>,
    current_weather: Vec<WeatherLabel>,
    horizon: usize,
    time_of_day: TimeOfDay,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<WeathercastError>() {
                Some(e) if e.is_invalid_input() => eprintln!("Error: {}", e.user_message()),
                _ => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = WeathercastConfig::load_from_path(cli.config.clone())?;
    init_logging(&config.logging, cli.verbose);
    debug!(?cli, "Parsed arguments");

    match cli.command {
        Command::Predict(args) => {
            let request = request_from_args(&config, &args)?;
            execute(&config, request, &args.output).await
        }
        Command::Interactive(output) => {
            let request = request_from_prompts(&config)?;
            execute(&config, request, &output).await
        }
        Command::Config => {
            let source = cli
                .config
                .or_else(|| WeathercastConfig::get_config_path().filter(|p| p.exists()))
                .map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
            let text = format!(
                "Using config from: {source}\n{}",
                serde_json::to_string_pretty(&config)?
            );
            write_output(&mut std::io::stdout().lock(), &text)?;
            Ok(())
        }
    }
}

fn init_logging(config: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn request_from_args(config: &WeathercastConfig, args: &PredictArgs) -> Result<PredictionRequest> {
    let integers = args.integers || config.input.integer_temperatures;

    let time_of_day = match &args.time_of_day {
        Some(text) => InputParser::parse_time_of_day(text)?,
        None => config.time_of_day()?,
    };

    Ok(PredictionRequest {
        previous_temperatures: InputParser::parse_temperatures(&args.previous, integers)?,
        current_temperatures: InputParser::parse_temperatures(&args.current, integers)?,
        previous_weather: InputParser::parse_weather_labels(&args.previous_weather)?,
        current_weather: InputParser::parse_weather_labels(&args.current_weather)?,
        horizon: InputParser::validate_horizon(
            args.horizon.unwrap_or(config.defaults.horizon),
            config.limits.max_horizon,
        )?,
        time_of_day,
    })
}

fn request_from_prompts(config: &WeathercastConfig) -> Result<PredictionRequest> {
    let integers = config.input.integer_temperatures;

    let previous: String = Input::new()
        .with_prompt("Enter previous temperatures (comma-separated)")
        .default(SAMPLE_PREVIOUS.to_string())
        .interact_text()?;
    let previous_temperatures = InputParser::parse_temperatures(&previous, integers)?;

    let current: String = Input::new()
        .with_prompt("Enter current temperatures (comma-separated)")
        .default(SAMPLE_CURRENT.to_string())
        .interact_text()?;
    let current_temperatures = InputParser::parse_temperatures(&current, integers)?;

    let previous_weather = select_weather("Select previous weather types")?;
    let current_weather = select_weather("Select current weather types")?;

    let max = config.limits.max_horizon;
    let horizon: usize = Input::new()
        .with_prompt(format!("Number of times to predict (1-{max})"))
        .default(config.defaults.horizon)
        .interact_text()?;
    let horizon = InputParser::validate_horizon(horizon, max)?;

    let periods: Vec<&str> = TimeOfDay::ALL.iter().map(|t| t.as_str()).collect();
    let default_period = TimeOfDay::ALL
        .iter()
        .position(|&t| Some(t) == config.time_of_day().ok())
        .unwrap_or(0);
    let chosen = Select::new()
        .with_prompt("Time of day")
        .items(&periods)
        .default(default_period)
        .interact()?;

    Ok(PredictionRequest {
        previous_temperatures,
        current_temperatures,
        previous_weather,
        current_weather,
        horizon,
        time_of_day: TimeOfDay::ALL[chosen],
    })
}

fn select_weather(prompt: &str) -> Result<Vec<WeatherLabel>> {
    let names: Vec<&str> = WeatherLabel::OBSERVABLE.iter().map(|w| w.as_str()).collect();
    let chosen = MultiSelect::new()
        .with_prompt(prompt)
        .items(&names)
        .interact()?;
    Ok(chosen
        .into_iter()
        .map(|i| WeatherLabel::OBSERVABLE[i])
        .collect())
}

async fn execute(
    config: &WeathercastConfig,
    request: PredictionRequest,
    output: &OutputArgs,
) -> Result<()> {
    let predictor = Predictor::new(
        request.previous_temperatures,
        request.current_temperatures,
        request.previous_weather,
        request.current_weather,
    )?;
    info!(
        horizon = request.horizon,
        time_of_day = %request.time_of_day,
        "Running prediction"
    );

    let show_progress = output.format == OutputFormat::Text;
    let animation = if output.no_animation {
        ProgressAnimation::instant()
    } else {
        ProgressAnimation::from_config(&config.presentation)
    };
    let mut progress = ConsoleProgress::stderr();

    if show_progress {
        animation.play_stages(&mut progress).await;
    }

    let result = match output.seed.or(config.random.seed) {
        Some(seed) => predictor.predict_with_rng(
            request.horizon,
            request.time_of_day,
            &mut StdRng::seed_from_u64(seed),
        )?,
        None => predictor.predict(request.horizon, request.time_of_day)?,
    };

    match output.format {
        OutputFormat::Text => {
            animation.play_steps(&mut progress, &result).await;
            write_output(&mut std::io::stdout().lock(), &render_text(&result))?;
        }
        OutputFormat::Json => {
            let report = PredictionReport::new(request.time_of_day, result);
            write_output(&mut std::io::stdout().lock(), &render_json(&report)?)?;
        }
    }

    Ok(())
}
