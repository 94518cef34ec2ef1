use clap::{Parser, ValueEnum};
use console::{Term, set_colors_enabled, style};
use std::io::{self, IsTerminal};
use std::process;
use std::time::Duration;

use ntprobe::{fmt, probe_all};

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "ntprobe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Minimal NTP reachability and clock probe")]
struct Args {
    /// Servers to probe, reported in the given order - Examples: [time.google.com, [2001:4860:4860::8888]:123, 192.168.1.23:123]
    #[arg(index = 1, num_args = 1.., required = true)]
    servers: Vec<String>,

    /// Timeout per server in seconds
    #[arg(short = 't', long, default_value_t = 5.0)]
    timeout: f64,

    /// Output format: text or json
    #[arg(short = 'f', long, default_value = "text", value_enum)]
    format: OutputFormat,

    /// Alias for JSON output
    #[arg(short = 'j', long)]
    json: bool,

    /// Pretty-print JSON
    #[arg(short = 'p', long)]
    pretty: bool,

    /// Disable colored output
    #[arg(long = "no-color", alias = "nocolor")]
    no_color: bool,

    /// Use IPv6 resolution only
    #[arg(short = '6', long)]
    ipv6: bool,

    /// Show detailed output
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let mut args = Args::parse();

    // alias --json
    if args.json {
        args.format = OutputFormat::Json;
    }
    // colors
    let want_color = matches!(args.format, OutputFormat::Text)
        && io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none()
        && !args.no_color;
    set_colors_enabled(want_color);

    let term = Term::stdout();

    if !args.timeout.is_finite() || args.timeout <= 0.0 {
        term.write_line(
            &style("--timeout must be a positive number of seconds")
                .red()
                .to_string(),
        )
        .ok();
        process::exit(2);
    }
    let timeout = Duration::from_secs_f64(args.timeout);

    let outcomes = probe_all(&args.servers, args.ipv6, timeout).await;

    match args.format {
        OutputFormat::Text => {
            for outcome in &outcomes {
                term.write_line(&fmt::text::render_outcome(outcome, args.verbose))
                    .ok();
            }
            term.write_line(&fmt::text::render_summary(&outcomes)).ok();
        }
        OutputFormat::Json => match fmt::json::to_json(&outcomes, args.pretty) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("error serializing: {}", e),
        },
    }

    let unreachable = outcomes.iter().filter(|o| !o.is_success()).count();
    process::exit(if unreachable == 0 { 0 } else { 1 });
}
