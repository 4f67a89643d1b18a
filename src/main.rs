use crate::aircraft::FleetTable;
use crate::airport::AirportTable;
use crate::cargo::Cargo;
use crate::error::RosterError;
use crate::flight::Flight;
use crate::planner::Planner;
use crate::schedule::advisor::Thresholds;
use crate::store::{JsonFileStore, Store};
use crate::time::Time;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::str::FromStr;
use std::sync::Arc;
use tabled::Tabled;
use tabled::settings::Style;

mod aircraft;
mod airport;
mod cargo;
mod error;
mod flight;
mod logging;
mod planner;
mod schedule;
mod store;
mod time;

#[derive(Parser)]
struct Args {
    /// Path to the JSON roster store
    #[arg(short, long, value_name = "FILE", default_value = "data/roster.json")]
    store: PathBuf,

    /// Keep the stored fleet and airport tables instead of reseeding the defaults
    #[arg(long)]
    keep_tables: bool,

    /// Flights per available aircraft below which a type is reported as idle
    #[arg(long, value_name = "RATIO", default_value_t = 0.7, value_parser = parse_ratio)]
    fleet_threshold: f64,

    /// Share of cargo capacity below which a flight is reported as under-loaded
    #[arg(long, value_name = "RATIO", default_value_t = 0.5, value_parser = parse_ratio)]
    cargo_threshold: f64,
}

/// Thresholds are compared against utilization ratios, so only finite
/// non-negative values make sense.
fn parse_ratio(s: &str) -> Result<f64, String> {
    let ratio = s.parse::<f64>().map_err(|e| e.to_string())?;
    if !ratio.is_finite() || ratio < 0.0 {
        return Err(format!("expected a finite non-negative ratio, got {}", s));
    }
    Ok(ratio)
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

#[derive(Tabled)]
struct LoadRow {
    flight: Arc<str>,
    cargo: Arc<str>,
    #[tabled(rename = "weight (t)")]
    weight: f64,
    priority: u8,
    deadline: Time,
}

fn paginate(content: String) {
    let pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn());

    let Ok(mut pager) = pager else {
        println!("{}", content);
        return;
    };

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("Error writing to pager: {}", e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

fn print_table<T: Tabled>(rows: &[T], empty: &str) {
    if rows.is_empty() {
        println!("{}", empty);
        return;
    }
    let mut table = tabled::Table::new(rows);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    if rows.len() > 20 {
        paginate(table.to_string());
    } else {
        println!("{}", table);
    }
}

/// Splits a command line on whitespace, keeping double-quoted runs together.
fn tokenize(line: &str) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;
    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    parts.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if pending {
        parts.push(current);
    }
    parts
}

fn arg<T: FromStr>(parts: &[String], idx: usize, name: &str) -> Result<T, String> {
    let raw = parts
        .get(idx)
        .ok_or_else(|| format!("missing <{}>", name))?;
    raw.parse::<T>()
        .map_err(|_| format!("invalid <{}>: '{}'", name, raw))
}

fn parse_flight(parts: &[String]) -> Result<Flight, String> {
    Ok(Flight {
        flight_number: Arc::from(arg::<String>(parts, 1, "number")?),
        departure_airport: Arc::from(arg::<String>(parts, 2, "from")?),
        arrival_airport: Arc::from(arg::<String>(parts, 3, "to")?),
        departure_time: arg(parts, 4, "departs")?,
        arrival_time: arg(parts, 5, "arrives")?,
        aircraft_type: Arc::from(arg::<String>(parts, 6, "aircraft")?),
        capacity: arg(parts, 7, "seats")?,
        cargo_capacity: arg(parts, 8, "cargo")?,
    })
}

fn parse_cargo(parts: &[String]) -> Result<Cargo, String> {
    Ok(Cargo {
        cargo_id: Arc::from(arg::<String>(parts, 1, "id")?),
        weight: arg(parts, 2, "weight")?,
        departure_airport: Arc::from(arg::<String>(parts, 3, "from")?),
        arrival_airport: Arc::from(arg::<String>(parts, 4, "to")?),
        priority: arg(parts, 5, "priority")?,
        deadline: arg(parts, 6, "deadline")?,
    })
}

fn parse_entries(parts: &[String]) -> Result<Vec<(String, i64)>, String> {
    if parts.len() < 2 {
        return Err("expected at least one KEY=N entry".to_string());
    }
    parts[1..]
        .iter()
        .map(|entry| {
            let (key, value) = entry
                .rsplit_once('=')
                .ok_or_else(|| format!("expected KEY=N, got '{}'", entry))?;
            let value = value
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("invalid number in '{}'", entry))?;
            Ok((key.trim().to_string(), value))
        })
        .collect()
}

fn report(result: Result<(), RosterError>, success: &str) {
    match result {
        Ok(()) => println!("{}", success.green()),
        Err(e) => println!("{}", e.to_string().red()),
    }
}

fn usage(problem: String, usage: &str) {
    println!("{}", problem.red());
    println!("Usage: {}", usage);
}

const ADD_FLIGHT_USAGE: &str =
    "add-flight <number> <from> <to> <departs> <arrives> <aircraft> <seats> <cargo>";
const ADD_CARGO_USAGE: &str = "add-cargo <id> <weight> <from> <to> <priority> <deadline>";

fn run<S: Store>(planner: &mut Planner<S>, parts: &[String]) {
    match parts[0].as_str() {
        "ls" => match parts.get(1).map(|s| s.as_str()).unwrap_or("f") {
            "c" | "cargo" => print_table(&planner.schedule().cargo, "No pending cargo."),
            _ => print_table(&planner.schedule().flights, "No flights scheduled."),
        },
        "fleet" => {
            let fleet = planner.schedule().fleet.iter().cloned().collect::<Vec<_>>();
            print_table(&fleet, "Fleet table is empty.")
        }
        "airports" => {
            let airports = planner.schedule().airports.iter().cloned().collect::<Vec<_>>();
            print_table(&airports, "Airport table is empty.")
        }
        "add-flight" => match parse_flight(parts) {
            Ok(flight) => report(planner.add_flight(flight), "Flight added."),
            Err(e) => usage(e, ADD_FLIGHT_USAGE),
        },
        "check" => match parse_flight(parts) {
            Ok(flight) => match planner.check_flight(&flight) {
                Ok(()) => println!("{}", "Feasible.".green()),
                Err(reason) => println!("{} {}", "Infeasible:".red(), reason),
            },
            Err(e) => usage(e, ADD_FLIGHT_USAGE),
        },
        "add-cargo" => match parse_cargo(parts) {
            Ok(cargo) => report(planner.add_cargo(cargo), "Cargo request added."),
            Err(e) => usage(e, ADD_CARGO_USAGE),
        },
        "rm-flight" => match parts.get(1) {
            Some(id) => report(planner.delete_flight(&Arc::from(id.as_str())), "Flight deleted."),
            None => println!("Usage: rm-flight <number>"),
        },
        "rm-cargo" => match parts.get(1) {
            Some(id) => report(
                planner.delete_cargo(&Arc::from(id.as_str())),
                "Cargo request deleted.",
            ),
            None => println!("Usage: rm-cargo <id>"),
        },
        "allocate" => {
            let allocation = planner.allocate();
            let rows = allocation
                .assigned()
                .map(|(flight, c)| LoadRow {
                    flight: flight.clone(),
                    cargo: c.cargo_id.clone(),
                    weight: c.weight,
                    priority: c.priority,
                    deadline: c.deadline,
                })
                .collect::<Vec<_>>();
            print_table(&rows, "No cargo could be allocated.");
            let left = allocation.unallocated(&planner.schedule().cargo);
            if !left.is_empty() {
                let ids = left.iter().map(|c| c.cargo_id.to_string()).collect::<Vec<_>>();
                println!("{} {}", "Unallocated:".yellow(), ids.join(", "));
            }
        }
        "suggest" => {
            let suggestions = planner.suggest();
            if suggestions.is_empty() {
                println!("{}", "No suggestions, the schedule looks well utilized.".green());
            }
            suggestions
                .iter()
                .for_each(|s| println!("  {} {}", "•".yellow(), s));
        }
        "set-fleet" => match parse_entries(parts) {
            Ok(entries) => match FleetTable::from_entries(entries) {
                Ok(fleet) => report(planner.update_fleet(fleet), "Fleet table replaced."),
                Err(e) => println!("{}", e.to_string().red()),
            },
            Err(e) => usage(e, "set-fleet <type>=<count> ..."),
        },
        "set-airports" => match parse_entries(parts) {
            Ok(entries) => match AirportTable::from_entries(entries) {
                Ok(airports) => {
                    report(planner.update_airports(airports), "Airport table replaced.")
                }
                Err(e) => println!("{}", e.to_string().red()),
            },
            Err(e) => usage(e, "set-airports <code>=<capacity> ..."),
        },
        "seed" => report(
            planner.seed_defaults(),
            "Default fleet and airport tables restored.",
        ),
        "help" | "?" => {
            println!("\nAvailable Commands:");
            println!("  ls [flights|cargo]          - List flights (default) or pending cargo");
            println!("  fleet / airports            - Show the reference tables");
            println!("  {}", ADD_FLIGHT_USAGE);
            println!("                              - Validate and add a flight");
            println!("  check <same as add-flight>  - Explain whether a flight would be accepted");
            println!("  {}", ADD_CARGO_USAGE);
            println!(
                "                              - Add a cargo request (priority 1 = most urgent)"
            );
            println!("  rm-flight <number>          - Delete a flight");
            println!("  rm-cargo <id>               - Delete a cargo request");
            println!("  allocate                    - Allocate pending cargo to flights");
            println!("  suggest                     - Show utilization suggestions");
            println!("  set-fleet <type>=<n> ...    - Replace the fleet table");
            println!("  set-airports <code>=<n> ... - Replace the airport table");
            println!("  seed                        - Restore the default tables");
            println!("  help / ?                    - Show this help menu");
            println!("  exit / quit                 - Exit\n");
            println!("Times are HH:MM, \"DAY<n> HH:MM\" or minutes. Quote names with spaces.\n");
        }
        other => println!("Unknown command: {}", other),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init();

    let store = JsonFileStore::open(&args.store)?;
    let thresholds = Thresholds {
        fleet: args.fleet_threshold,
        cargo: args.cargo_threshold,
    };
    let mut planner = Planner::new(store, thresholds);
    if !args.keep_tables {
        planner.seed_defaults()?;
    }
    println!(
        "Roster online. {} flights and {} cargo requests loaded from {}",
        planner.schedule().flights.len(),
        planner.schedule().cargo.len(),
        args.store.display()
    );

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: [
            "ls", "fleet", "airports", "add-flight", "check", "add-cargo", "rm-flight",
            "rm-cargo", "allocate", "suggest", "set-fleet", "set-airports", "seed", "help",
            "exit",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                rl.add_history_entry(trimmed)?;

                let parts = tokenize(trimmed);
                match parts.first().map(|s| s.as_str()) {
                    Some("exit" | "quit") => break,
                    Some(_) => run(&mut planner, &parts),
                    None => continue,
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
