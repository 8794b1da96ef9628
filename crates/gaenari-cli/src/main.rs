//! Gaenari program service operator CLI.
//!
//! Provides the `gaenari` binary for working with a program database without
//! running the HTTP server: seeding programs, printing a member's favorite
//! list, and toggling favorites.
//!
//! Uses the same `FavoriteService` as the HTTP server, so the printed
//! favorite list is exactly what `GET /program/favorite` would return as data.

use std::process;

use clap::{Parser, Subcommand};

use gaenari_core::{MemberId, NewIntervalRange, NewProgram, ProgramId, ProgramType};
use gaenari_server::service::FavoriteService;

/// Gaenari program service tools.
#[derive(Parser)]
#[command(name = "gaenari", about = "Gaenari program service tools")]
struct Cli {
    /// Path to the program database file.
    #[arg(short, long, global = true, default_value = "gaenari.db")]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Store a new program.
    Seed {
        /// Owning member id.
        #[arg(short, long)]
        member: String,

        /// Program title.
        #[arg(short, long)]
        title: String,

        /// Program type code: D (distance), T (time) or I (interval).
        #[arg(long = "type")]
        program_type: ProgramType,

        /// Target distance or time (ignored for interval programs).
        #[arg(long, default_value_t = 0.0)]
        target: f64,

        /// Number of sets (interval programs).
        #[arg(long, default_value_t = 1)]
        sets: i32,

        /// Interval range as `run:<seconds>:<speed>` or `rest:<seconds>:<speed>`.
        /// Repeat in order.
        #[arg(long = "range", value_parser = parse_range)]
        ranges: Vec<NewIntervalRange>,
    },

    /// Print a member's favorite list as JSON.
    Favorites {
        /// Member id.
        #[arg(short, long)]
        member: String,
    },

    /// Mark a program as favorite.
    Favorite {
        /// Owning member id.
        #[arg(short, long)]
        member: String,

        /// Program id.
        program: i64,
    },

    /// Clear a program's favorite mark.
    Unfavorite {
        /// Owning member id.
        #[arg(short, long)]
        member: String,

        /// Program id.
        program: i64,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut service = match FavoriteService::open(&cli.db) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: failed to open database '{}': {}", cli.db, e);
            process::exit(3);
        }
    };

    let exit_code = match cli.command {
        Commands::Seed {
            member,
            title,
            program_type,
            target,
            sets,
            ranges,
        } => {
            let program = NewProgram {
                member_id: MemberId::new(member),
                title,
                program_type,
                target_value: target,
                set_count: sets,
                ranges,
            };
            run_seed(&mut service, &program)
        }
        Commands::Favorites { member } => run_favorites(&service, &MemberId::new(member)),
        Commands::Favorite { member, program } => {
            let result = service.register_favorite(&MemberId::new(member), ProgramId(program));
            report_toggle(result, "registered", program)
        }
        Commands::Unfavorite { member, program } => {
            let result = service.clear_favorite(&MemberId::new(member), ProgramId(program));
            report_toggle(result, "cleared", program)
        }
    };
    process::exit(exit_code);
}

/// Returns exit code: 0 = stored, 1 = rejected.
fn run_seed(service: &mut FavoriteService, program: &NewProgram) -> i32 {
    match service.create_program(program) {
        Ok(stored) => {
            println!("Created program {} ({})", stored.id, stored.title);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn run_favorites(service: &FavoriteService, member: &MemberId) -> i32 {
    let favorites = match service.get_favorite_list(member) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    match serde_json::to_string_pretty(&favorites) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to encode favorites: {}", e);
            1
        }
    }
}

fn report_toggle<E: std::fmt::Display>(result: Result<bool, E>, verb: &str, program: i64) -> i32 {
    match result {
        Ok(_) => {
            println!("Favorite {} for program {}", verb, program);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Parses `run:<seconds>:<speed>` / `rest:<seconds>:<speed>`.
fn parse_range(s: &str) -> Result<NewIntervalRange, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let [kind, time, speed] = parts.as_slice() else {
        return Err(format!(
            "invalid range '{}': expected run|rest:<seconds>:<speed>",
            s
        ));
    };
    let is_running = match kind.to_ascii_lowercase().as_str() {
        "run" => true,
        "rest" => false,
        other => return Err(format!("invalid range kind '{}': use run or rest", other)),
    };
    let time = time
        .parse::<i32>()
        .map_err(|_| format!("invalid range seconds '{}'", time))?;
    let speed = speed
        .parse::<f64>()
        .map_err(|_| format!("invalid range speed '{}'", speed))?;
    Ok(NewIntervalRange {
        is_running,
        time,
        speed,
    })
}
