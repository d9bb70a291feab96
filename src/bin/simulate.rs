//! Catch-rate simulator CLI.
//!
//! Plays scripted casts against the real game rules on a virtual clock and
//! reports what was caught and what it sold for.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                         # 500 casts, starter rod
//!   cargo run --bin simulate -- -n 2000 --seed 42    # Reproducible run
//!   cargo run --bin simulate -- --rod luck-rod --bait golden-bait

use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeMap;
use std::env;
use tidecaster::character::Inventory;
use tidecaster::content::{Catalog, ItemKind, Rarity};
use tidecaster::core::{Game, GameEvent, GameState};
use tidecaster::economy::EnchantRollCounter;
use tidecaster::fishing::FishingPhase;
use tracing_subscriber::EnvFilter;

/// Virtual milliseconds between simulated player inputs.
const STEP_MS: u64 = 100;
/// Give up on a cast that has not resolved after this long.
const CAST_TIMEOUT_MS: u64 = 10 * 60 * 1000;

#[derive(Debug, Clone)]
struct SimConfig {
    casts: u32,
    seed: Option<u64>,
    rod: Option<String>,
    bait: String,
    level: u32,
    json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            casts: 500,
            seed: None,
            rod: None,
            bait: String::from("worm-bait"),
            level: 1,
            json: false,
        }
    }
}

#[derive(Debug, Default, Serialize)]
struct SimReport {
    casts: u32,
    caught: u32,
    escaped: u32,
    timed_out: u32,
    mutated: u32,
    xp_earned: u64,
    by_rarity: BTreeMap<Rarity, u32>,
    heaviest_kg: f64,
    coins_from_sales: u64,
    final_level: u32,
    final_luck: f64,
    virtual_minutes: u64,
}

impl SimReport {
    fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Casts:          {}\n", self.casts));
        out.push_str(&format!(
            "Caught:         {} ({:.1}%)\n",
            self.caught,
            percent(self.caught, self.casts)
        ));
        out.push_str(&format!("Escaped:        {}\n", self.escaped));
        if self.timed_out > 0 {
            out.push_str(&format!("Timed out:      {}\n", self.timed_out));
        }
        out.push_str(&format!("Mutated:        {}\n", self.mutated));
        out.push_str(&format!("Heaviest:       {:.2}kg\n", self.heaviest_kg));
        out.push_str(&format!("Sale coins:     {}\n", self.coins_from_sales));
        out.push_str(&format!("XP earned:      {}\n", self.xp_earned));
        out.push_str(&format!("Final level:    {}\n", self.final_level));
        out.push_str(&format!("Final luck:     {:.1}\n", self.final_luck));
        out.push_str(&format!("Virtual time:   {} min\n", self.virtual_minutes));
        out.push_str("\nBy rarity:\n");
        for (rarity, count) in &self.by_rarity {
            out.push_str(&format!(
                "  {:<12} {:>6} ({:.2}%)\n",
                rarity.name(),
                count,
                percent(*count, self.caught)
            ));
        }
        out
    }
}

fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

fn starting_state(catalog: &Catalog, config: &SimConfig) -> Result<GameState, String> {
    let mut state = GameState {
        inventory: Inventory::default(),
        ..GameState::default()
    };
    state.progression.level = config.level.max(1);
    if catalog.bait(&config.bait).is_none() {
        return Err(format!("unknown bait: {}", config.bait));
    }
    state
        .inventory
        .add_item(&config.bait, ItemKind::Bait, config.casts);
    if let Some(rod) = &config.rod {
        state
            .rods
            .add_and_equip(rod)
            .map_err(|e| format!("cannot equip {}: {}", rod, e))?;
    }
    Ok(state)
}

fn run_simulation(config: &SimConfig) -> Result<SimReport, String> {
    let catalog = Catalog::standard();
    let state = starting_state(&catalog, config)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = Game::new(catalog, state, EnchantRollCounter::default(), 0);
    let mut report = SimReport::default();
    let mut now = 0;

    for _ in 0..config.casts {
        if !game.consumables().has_bait() && game.use_item(&config.bait).is_err() {
            break;
        }
        if game.cast().is_err() {
            break;
        }
        report.casts += 1;

        let deadline = now + CAST_TIMEOUT_MS;
        loop {
            now += STEP_MS;
            game.advance_to(now, &mut rng);
            match game.session().phase() {
                FishingPhase::Biting | FishingPhase::Reeling => game.action(&mut rng),
                FishingPhase::Idle => break,
                _ => {}
            }
            if now >= deadline {
                report.timed_out += 1;
                break;
            }
        }

        for event in game.drain_events() {
            match event {
                GameEvent::FishCaught {
                    rarity,
                    weight,
                    mutation,
                    xp,
                    ..
                } => {
                    report.caught += 1;
                    report.xp_earned += xp;
                    *report.by_rarity.entry(rarity).or_default() += 1;
                    report.heaviest_kg = report.heaviest_kg.max(weight);
                    if mutation.is_some() {
                        report.mutated += 1;
                    }
                }
                GameEvent::FishEscaped => report.escaped += 1,
                _ => {}
            }
        }
    }

    for rarity in Rarity::ALL {
        if let Ok(receipt) = game.sell_rarity(rarity, &mut rng) {
            report.coins_from_sales += receipt.coins;
        }
    }
    report.final_level = game.state().progression.level;
    report.final_luck = game.luck();
    report.virtual_minutes = now / 60_000;
    Ok(report)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              TIDECASTER CATCH SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Casts:          {}", config.casts);
    println!("  Rod:            {}", config.rod.as_deref().unwrap_or("starter-rod"));
    println!("  Bait:           {}", config.bait);
    println!("  Level:          {}", config.level);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(message) => {
            eprintln!("error: {}", message);
            std::process::exit(2);
        }
    };
    println!("{}", report.to_text());

    if config.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        let written = serde_json::to_string_pretty(&report)
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(&filename, json).map_err(|e| e.to_string()));
        match written {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => eprintln!("Failed to write JSON report: {}", e),
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--casts" => {
                if i + 1 < args.len() {
                    config.casts = args[i + 1].parse().unwrap_or(500);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--rod" => {
                if i + 1 < args.len() {
                    config.rod = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--bait" => {
                if i + 1 < args.len() {
                    config.bait = args[i + 1].clone();
                    i += 1;
                }
            }
            "--level" => {
                if i + 1 < args.len() {
                    config.level = args[i + 1].parse().unwrap_or(1);
                    i += 1;
                }
            }
            "--json" => {
                config.json = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Tidecaster Catch Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --casts <N>     Number of casts to play (default: 500)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("        --rod <ID>      Rod to buy and equip first (default: starter rod)");
    println!("        --bait <ID>     Bait to fish with (default: worm-bait)");
    println!("        --level <L>     Starting player level (default: 1)");
    println!("        --json          Also write the report as JSON");
    println!("    -h, --help          Show this help message");
}
