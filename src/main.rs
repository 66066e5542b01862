use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::debug;

use yuletide::api::{AppState, BudgetInput, PlanRequest};
use yuletide::config::YuletideConfig;
use yuletide::{Catalog, Pace, TravelAgent, VERSION, YuletideError, logging, web};

mod cli;

use cli::prompt::{Prompter, split_interests};
use cli::render;

#[derive(Parser)]
#[command(name = "yuletide")]
#[command(about = "Christmas market trip planner: ranked destinations, day-by-day itineraries and travel advice")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to the per-user config or ./config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output and debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a Christmas market trip
    Plan(PlanArgs),

    /// List well-known Christmas markets by country
    Markets,

    /// Show the curated profile of one destination
    Show {
        /// Destination name, e.g. "Vienna"
        name: String,
    },

    /// Run the web API
    Serve {
        /// Port to listen on (overrides the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Args, Debug, Default)]
struct PlanArgs {
    /// Departure city
    #[arg(long)]
    from: Option<String>,

    /// First day of the trip (YYYY-MM-DD)
    #[arg(long)]
    start: Option<String>,

    /// Last day of the trip (YYYY-MM-DD)
    #[arg(long)]
    end: Option<String>,

    /// Trip length in days (ignored when --start and --end are both given)
    #[arg(long)]
    days: Option<u32>,

    /// Budget label (Budget-friendly, Mid-range, Luxury) or total amount in euros
    #[arg(long)]
    budget: Option<String>,

    /// Comma-separated interests, e.g. "food,history"
    #[arg(long)]
    interests: Option<String>,

    /// relaxed, moderate or active
    #[arg(long)]
    pace: Option<String>,

    /// Answer language (en, de, fr)
    #[arg(long)]
    language: Option<String>,

    /// Who is travelling (Solo, Couple, Family, Friends, Group)
    #[arg(long)]
    companions: Option<String>,

    /// Ask for every preference interactively
    #[arg(short, long)]
    interactive: bool,

    /// Never call the text generation backend
    #[arg(long)]
    offline: bool,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,

    /// Print how each destination was scored
    #[arg(long)]
    explain: bool,
}

impl PlanArgs {
    fn to_request(&self) -> Result<PlanRequest> {
        if let Some(pace) = &self.pace {
            pace.parse::<Pace>()?;
        }

        let budget = self.budget.as_deref().map(|raw| match raw.trim().parse::<f64>() {
            Ok(amount) => BudgetInput::Amount(amount),
            Err(_) => BudgetInput::Label(raw.to_string()),
        });

        Ok(PlanRequest {
            start_date: self.start.clone(),
            end_date: self.end.clone(),
            duration_days: self.days,
            departure_city: self.from.clone(),
            budget,
            interests: self.interests.as_deref().map(split_interests).unwrap_or_default(),
            pace: self.pace.clone(),
            language: self.language.clone(),
            travel_companions: self.companions.clone(),
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = YuletideConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    logging::init_tracing(&config.logging, cli.verbose);
    debug!("Configuration loaded");

    match cli.command {
        Some(Commands::Plan(args)) => handle_plan(&config, &args).await,
        Some(Commands::Markets) => handle_markets(&config),
        Some(Commands::Show { name }) => handle_show(&config, &name),
        Some(Commands::Serve { port }) => handle_serve(config, port).await,
        None => {
            print_banner(&config, cli.config.as_ref(), cli.verbose);
            Ok(())
        }
    }
}

fn load_catalog(config: &YuletideConfig) -> Result<Arc<Catalog>> {
    let catalog = Catalog::load(config.catalog.path.as_deref())
        .context("Failed to load destination catalog")?;
    Ok(Arc::new(catalog))
}

fn print_banner(config: &YuletideConfig, config_path: Option<&PathBuf>, verbose: bool) {
    println!(
        "{}",
        format!("Yuletide v{VERSION} - Christmas market trip planner").green().bold()
    );
    println!();
    println!("Plan a trip:        yuletide plan --from Berlin --days 4 --interests food,history");
    println!("Answer questions:   yuletide plan --interactive");
    println!("Browse markets:     yuletide markets");
    println!("Run the web API:    yuletide serve --port 5000");
    println!();

    if config.backend_enabled() {
        println!("Generated advice is enabled.");
    } else {
        println!(
            "{}",
            "Set GEMINI_API_KEY (or generator.api_key in config.toml) for generated advice; curated content is used otherwise."
                .yellow()
        );
    }

    if verbose {
        let path = config_path
            .cloned()
            .unwrap_or_else(YuletideConfig::resolve_config_path);
        println!();
        println!("Using config from: {}", path.display());
        match &config.catalog.path {
            Some(catalog) => println!("Catalog: {}", catalog.display()),
            None => println!("Catalog: built-in"),
        }
        println!("Log level: {}", config.logging.level);
        if config.backend_enabled() {
            println!("Text generation: enabled ({})", config.generator.model);
        } else {
            println!("Text generation: disabled (curated content)");
        }
    }
}

async fn handle_plan(config: &YuletideConfig, args: &PlanArgs) -> Result<()> {
    let mut request = args.to_request()?;

    if args.interactive {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        request = prompter
            .collect(request, &config.defaults.departure_city)
            .context("Failed to read answers")?;
        if !prompter
            .confirm("Ready to create your travel plan?", true)
            .context("Failed to read answers")?
        {
            println!("No plan created.");
            return Ok(());
        }
    }

    let preferences = request.into_preferences(&config.defaults)?;
    let agent = TravelAgent::from_config(config, load_catalog(config)?, args.offline);

    if !args.json {
        eprintln!("{}", "Planning your Christmas market trip...".dimmed());
    }
    let plan = agent.plan(preferences).await;
    let explanation = agent.explain(&plan.preferences, &plan.ranked_destinations);

    if args.json {
        let json = if args.explain {
            let rows: Vec<_> = explanation
                .iter()
                .map(|(name, breakdown)| serde_json::json!({ "name": name, "breakdown": breakdown }))
                .collect();
            serde_json::to_string_pretty(&serde_json::json!({
                "travelPlan": plan,
                "explanation": rows,
            }))
        } else {
            serde_json::to_string_pretty(&plan)
        };
        println!("{}", json.context("Failed to serialize travel plan")?);
        return Ok(());
    }

    print!("{}", render::plan(&plan));
    if args.explain {
        print!("{}", render::explanation(&explanation));
    }
    Ok(())
}

fn handle_markets(config: &YuletideConfig) -> Result<()> {
    let catalog = load_catalog(config)?;
    print!("{}", render::market_directory(|name| catalog.get(name).is_some()));
    Ok(())
}

fn handle_show(config: &YuletideConfig, name: &str) -> Result<()> {
    let catalog = load_catalog(config)?;
    let Some(profile) = catalog.find(name) else {
        return Err(YuletideError::general(format!(
            "No curated profile for '{name}'. Curated destinations: {}",
            catalog.names().join(", ")
        ))
        .into());
    };
    print!("{}", render::destination(profile));
    Ok(())
}

async fn handle_serve(mut config: YuletideConfig, port: Option<u16>) -> Result<()> {
    if let Some(port) = port {
        config.server.port = port;
    }
    let agent = TravelAgent::from_config(&config, load_catalog(&config)?, false);
    let state = AppState::new(agent, config.defaults.clone());
    web::run(&config.server, state).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_plan_flags_map_to_request() {
        let cli = Cli::parse_from([
            "yuletide", "plan", "--from", "Hamburg", "--budget", "3000", "--interests", "food, history",
            "--start", "2025-12-01", "--end", "2025-12-04",
        ]);
        let Some(Commands::Plan(args)) = cli.command else {
            panic!("expected plan subcommand");
        };

        let prefs = args
            .to_request()
            .unwrap()
            .into_preferences(&Default::default())
            .unwrap();
        assert_eq!(prefs.departure_city, "Hamburg");
        assert_eq!(prefs.budget_label, "Luxury");
        assert_eq!(prefs.interests, vec!["food", "history"]);
        assert_eq!(prefs.duration_days, Some(4));
    }

    #[test]
    fn test_unknown_pace_is_rejected() {
        let args = PlanArgs {
            pace: Some("sprint".to_string()),
            ..Default::default()
        };
        assert!(args.to_request().is_err());
    }
}
