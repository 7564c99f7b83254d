//! tagpaint - print a file with its tags colored by name

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use tagpaint::error::{Result, TagpaintError};
use tagpaint::{Config, DecorationController, EditorHost, TerminalHost, ThemeKind};

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    file: Option<PathBuf>,
    theme: Option<ThemeKind>,
    ranges: bool,
    verbose: u8,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let Some(args) = parse_args(env::args().skip(1))? else {
        return Ok(());
    };
    init_logging(args.verbose);
    info!("tagpaint {}", env!("CARGO_PKG_VERSION"));

    let Some(path) = args.file else {
        print_usage();
        return Err(TagpaintError::Message("no input file".to_string()));
    };

    let config = Config::load();
    let theme = args.theme.or(config.theme).unwrap_or_default();

    let mut host = TerminalHost::new(theme);
    host.open_file(&path)?;

    let mut controller = DecorationController::new(&config)?;
    controller.on_activate(&mut host);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.ranges {
        print_ranges(&controller, &host, &mut out)?;
    } else {
        host.render(&mut out)?;
    }

    controller.on_deactivate(&mut host);
    Ok(())
}

/// Parse arguments; `None` means help or version was printed
fn parse_args(args: impl Iterator<Item = String>) -> Result<Option<Args>> {
    let mut parsed = Args::default();
    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--version" | "-V" => {
                println!("tagpaint {}", env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            "--light" => parsed.theme = Some(ThemeKind::Light),
            "--dark" => parsed.theme = Some(ThemeKind::Dark),
            "--ranges" => parsed.ranges = true,
            flag if flag.starts_with("-v") && flag[1..].chars().all(|c| c == 'v') => {
                parsed.verbose = parsed.verbose.saturating_add((flag.len() - 1) as u8);
            }
            flag if flag.starts_with('-') => {
                return Err(TagpaintError::Message(format!("unknown option: {flag}")));
            }
            file => {
                if parsed.file.replace(PathBuf::from(file)).is_some() {
                    return Err(TagpaintError::Message("only one file may be given".to_string()));
                }
            }
        }
    }
    Ok(Some(parsed))
}

/// Log to stderr; RUST_LOG overrides the `-v` level
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// One line per tag: name, color, then `line:column` for each range start
fn print_ranges<W: Write>(
    controller: &DecorationController<TerminalHost>,
    host: &TerminalHost,
    out: &mut W,
) -> Result<()> {
    let Some(document) = host.active_document() else {
        return Ok(());
    };
    for entry in controller.registry().iter() {
        let positions: Vec<String> = entry
            .ranges()
            .iter()
            .map(|range| {
                let pos = document.position_at(range.start);
                format!("{}:{}", pos.line + 1, pos.column + 1)
            })
            .collect();
        writeln!(out, "{}\t{}\t{}", entry.name(), entry.color(), positions.join(" "))?;
    }
    Ok(())
}

fn print_usage() {
    println!("tagpaint {} - color HTML-like tags by name", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: tagpaint [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -h, --help     Show this help message");
    println!("  -V, --version  Show version information");
    println!("      --light    Use colors for a light background");
    println!("      --dark     Use colors for a dark background (default)");
    println!("      --ranges   List tag ranges instead of printing the file");
    println!("  -v             More logging (repeat for more)");
    println!();
    println!("Comment delimiters and the default theme are read from ~/.tagpaint.toml");
}
