use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use streamer_overlay::app::domain::{DisplayItem, Message, SettingKey, SettingValue};
use streamer_overlay::app::infrastructure::panel::RecordingPanel;
use streamer_overlay::app::infrastructure::persistence::JsonFileStore;
use streamer_overlay::app::infrastructure::view::RecordingView;
use streamer_overlay::app::services::cooldown::current_timestamp_ms;
use streamer_overlay::app::services::flight_plan::{FileFlightPlanSource, FlightPlanSource, NoFlightPlan};
use streamer_overlay::app::{AppError, OverlayState, Result};

type CliState = OverlayState<JsonFileStore, RecordingView, RecordingPanel, Box<dyn FlightPlanSource>>;

#[derive(Parser, Debug)]
#[command(name = "streamer-overlay")]
#[command(about = "Manage the streamer overlay settings from the command line", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Saved SimBrief OFP JSON used by `refresh`
    #[arg(long, value_name = "PATH")]
    flight_plan: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the settings schema and the item lists as JSON
    Show,
    /// List search bar results for a query, e.g. `search overlay type A20N`
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Execute the search result with the given uid
    Run {
        #[arg(long)]
        uid: String,
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Change one setting as the settings panel would
    Set { key: String, value: String },
    /// Click a display item
    Click { item: String },
    /// Scroll the mouse wheel over the overlay
    Wheel { direction: WheelDirection },
    /// Reload the flight plan
    Refresh,
    /// Restore default settings
    Reset,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum WheelDirection {
    Up,
    Down,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = cli.config.map(JsonFileStore::new).unwrap_or_else(JsonFileStore::default_location);
    let source: Box<dyn FlightPlanSource> = match cli.flight_plan {
        Some(path) => {
            let source = FileFlightPlanSource::new(path);
            tracing::debug!("Using flight plan file {}", source.path().display());
            Box::new(source)
        }
        None => Box::new(NoFlightPlan),
    };
    tracing::debug!("Using settings file {}", store.path().display());

    let mut state: CliState =
        OverlayState::new(store, RecordingView::mounted(), RecordingPanel::new(), source, current_timestamp_ms())?;
    state.handle(Message::DomReady)?;

    match cli.command {
        Command::Show => {}
        Command::Search { query } => {
            for result in state.search(&query.join(" ")) {
                match result.subtext {
                    Some(subtext) => println!("{}\t{}\t({})", result.uid, result.label, subtext),
                    None => println!("{}\t{}", result.uid, result.label),
                }
            }
            return Ok(());
        }
        Command::Run { uid, query } => {
            if !state.run_command(&query.join(" "), &uid)? {
                return Err(AppError::Settings(format!("No result '{}'", uid)));
            }
        }
        Command::Set { key, value } => {
            let key = SettingKey::from_name(&key).ok_or(AppError::UnknownKey(key))?;
            let value = SettingValue::parse_for(key, &value)?;
            state.handle(Message::SettingChanged { key, value })?;
        }
        Command::Click { item } => {
            let item = DisplayItem::from_name(&item).ok_or(AppError::UnknownKey(item))?;
            state.handle(Message::ItemClicked(item))?;
        }
        Command::Wheel { direction } => {
            let delta_y = match direction {
                WheelDirection::Up => -1.0,
                WheelDirection::Down => 1.0,
            };
            state.handle(Message::Wheel { delta_y })?;
        }
        Command::Refresh => {
            if !state.settings().simbrief_enabled || !state.settings().has_simbrief_username() {
                return Err(AppError::FlightPlan("SimBrief is off or has no username".to_string()));
            }
            state.load_flight_plan()?;
        }
        Command::Reset => {
            state.sync_mut().reset()?;
        }
    }

    print_state(&state)
}

fn print_state(state: &CliState) -> Result<()> {
    let sync = state.sync();
    let report = serde_json::json!({
        "info": state.info(current_timestamp_ms()),
        "icon": state.state_icon(),
        "enabled": sync.lists().enabled(),
        "disabled": sync.lists().disabled(),
        "schema": sync.schema(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
