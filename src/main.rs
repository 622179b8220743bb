//! Headless game runner
//!
//! Plays a full session from the command line: the AI drives every other
//! country, the player country holds whatever levers were pinned with
//! `--set`, and the final report prints when the horizon is reached.

use clap::Parser;

use saarc_sim::region::country::SOUTH_ASIAN_COUNTRIES;
use saarc_sim::region::decisions::Lever;
use saarc_sim::region::game::{Action, Game, GameConfig};

#[derive(Parser, Debug)]
#[command(
    name = "saarc-sim",
    about = "Turn-based policy simulation of the South Asian region"
)]
struct Args {
    /// Country to govern
    #[arg(long, default_value = "India")]
    country: String,

    /// Simulation seed
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// First simulated year
    #[arg(long, default_value_t = 2023)]
    start_year: i32,

    /// Final simulated year
    #[arg(long, default_value_t = 2043)]
    end_year: i32,

    /// Pin a player lever for the whole run, e.g. --set education=6.0
    #[arg(long = "set", value_name = "LEVER=VALUE")]
    set: Vec<String>,

    /// Dump the final world state as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn parse_lever_setting(raw: &str) -> Option<(Lever, f64)> {
    let (id, value) = raw.split_once('=')?;
    let lever = Lever::from_id(id.trim())?;
    let value: f64 = value.trim().parse().ok()?;
    Some((lever, value))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let config = GameConfig {
        start_year: args.start_year,
        end_year: args.end_year,
        seed: args.seed,
    };
    let mut game = Game::new(config);

    if let Err(e) = game.dispatch(Action::SelectCountry(args.country.clone())) {
        eprintln!("{e}");
        eprintln!(
            "known countries: {}",
            SOUTH_ASIAN_COUNTRIES
                .iter()
                .map(|c| c.name)
                .collect::<Vec<_>>()
                .join(", ")
        );
        std::process::exit(1);
    }

    for raw in &args.set {
        match parse_lever_setting(raw) {
            Some((lever, value)) => game
                .dispatch(Action::SetDecision(lever, value))
                .expect("decisions are settable during play"),
            None => {
                eprintln!("cannot parse --set {raw} (expected LEVER=VALUE)");
                std::process::exit(1);
            }
        }
    }

    while game.world().year < args.end_year {
        game.dispatch(Action::AdvanceYear)
            .expect("advancing is valid during play");
    }
    game.dispatch(Action::FinishGame)
        .expect("the horizon was reached");

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(game.world()).expect("world state serializes")
        );
        return;
    }

    let world = game.world();
    println!(
        "=== {} | {}-{} | score {:.0}/1000 ===",
        world.player_country,
        args.start_year,
        args.end_year,
        game.final_score().unwrap_or(0.0)
    );
    for snapshot in game.history() {
        println!(
            "{}  gdp {:+.2}%  unemployment {:>4.1}%  literacy {:>5.1}%  poverty {:>4.1}%  co2 {:.2}t",
            snapshot.year,
            snapshot.gdp_growth,
            snapshot.unemployment,
            snapshot.literacy_rate,
            snapshot.poverty_rate,
            snapshot.co2_emissions,
        );
    }

    println!("--- the region in {} ---", world.year);
    for (name, stats) in &world.countries {
        println!(
            "{name:<12} gdp {:+.2}%  literacy {:>5.1}%  life expectancy {:>4.1}",
            stats.gdp_growth, stats.literacy_rate, stats.life_expectancy
        );
    }
    println!(
        "cooperation index {:.1}, {} regional events, {} active spillovers",
        world.matrix.cooperation_index,
        world.matrix.events.len(),
        world.spillovers.len()
    );
}
