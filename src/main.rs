//! midinote — convert between MIDI note numbers and note names.
//!
//! `midinote format 60 61`, `midinote parse C4 "F♯3"`, `midinote table`,
//! `midinote demo`.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use midinote::config::{default_config_path, load_config, save_config};
use midinote::logging;
use midinote::note::{AccentStyle, DisplayConfig, NoteConverter};

/// The twelve names parsed by `demo`.
const DEMO_NAMES: [&str; 12] = [
    "C3", "C♯3", "D3", "D♯3", "E3", "F3", "F♯3", "G3", "G♯3", "A3", "A♯3", "B3",
];

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    style: StyleArgs,

    /// Config file (default ~/.midinote/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct StyleArgs {
    /// Spell accidentals with flats
    #[arg(long, global = true)]
    flat: bool,
    /// Spell accidentals with sharps
    #[arg(long, global = true)]
    sharp: bool,
    /// Mark natural notes with ♮
    #[arg(long, global = true)]
    natural: bool,
    /// Use b, # and space instead of ♭, ♯ and ♮
    #[arg(long, global = true)]
    ascii: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// MIDI numbers to note names
    Format {
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i32>,
    },
    /// Note names (or plain numbers) to MIDI numbers
    Parse {
        #[arg(required = true, allow_hyphen_values = true)]
        names: Vec<String>,
    },
    /// Print a range of MIDI numbers with their names
    Table {
        #[arg(long, default_value_t = 60, allow_negative_numbers = true)]
        from: i32,
        #[arg(long, default_value_t = 71, allow_negative_numbers = true)]
        to: i32,
    },
    /// Print the 60..=71 table, then parse C3 through B3
    Demo,
    /// Write the effective display settings to the config file
    SaveConfig,
}

/// Command-line style flags override the file; with no style flags the
/// file's accent set is kept.
fn effective_config(file: DisplayConfig, args: &StyleArgs) -> DisplayConfig {
    let flags = [
        (args.flat, AccentStyle::Flat),
        (args.sharp, AccentStyle::Sharp),
        (args.natural, AccentStyle::Natural),
    ];
    let mut config = file;
    if flags.iter().any(|(on, _)| *on) {
        config.accent_style = flags
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, style)| *style)
            .collect();
    }
    config.ascii_style |= args.ascii;
    config
}

fn print_table(conv: &NoteConverter, from: i32, to: i32) {
    for m in from..=to {
        println!("midi # {m} = {}", conv.format(m));
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(logging::level_for_verbosity(cli.verbose));

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let file_config = match load_config(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("failed to load {}: {e}", config_path.display());
            process::exit(1);
        }
    };
    let config = effective_config(file_config, &cli.style);
    log::info!(
        "accent style {:?}, ascii {}",
        config.accent_style,
        config.ascii_style
    );
    let conv = NoteConverter::with_config(config);

    let mut failed = false;
    match cli.command {
        Commands::Format { numbers } => {
            for n in numbers {
                match conv.try_format(n) {
                    Ok(name) => println!("{name}"),
                    Err(e) => {
                        eprintln!("error: {e}");
                        failed = true;
                    }
                }
            }
        }
        Commands::Parse { names } => {
            for name in &names {
                match conv.parse(name) {
                    Ok(m) => println!("{m}"),
                    Err(e) => {
                        eprintln!("error: {e}");
                        failed = true;
                    }
                }
            }
        }
        Commands::Table { from, to } => print_table(&conv, from, to),
        Commands::Demo => {
            println!("Midi number to note name");
            print_table(&conv, 60, 71);
            println!("\nNote name to Midi number");
            for n in DEMO_NAMES {
                match conv.parse(n) {
                    Ok(m) => println!("note {n} = {m}"),
                    Err(e) => {
                        println!("error = {e}");
                        failed = true;
                    }
                }
            }
        }
        Commands::SaveConfig => {
            if let Err(e) = save_config(&config_path, conv.config()) {
                eprintln!("failed to save {}: {e}", config_path.display());
                process::exit(1);
            }
            println!("saved {}", config_path.display());
        }
    }

    if failed {
        process::exit(1);
    }
}
