use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use subnet_reach::check_forms;
use subnet_reach::config::{init_logging, Config};
use subnet_reach::models::HostForm;
use subnet_reach::output::{format_report, report_to_json};
use subnet_reach::processing::Reachability;

/// Check if two IPv4 hosts are on each other's subnet.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Address of host 1, e.g. 192.168.1.10
    ip1: String,
    /// Mask of host 1, dotted (255.255.255.0) or prefix length (24, /24)
    mask1: String,
    /// Address of host 2
    ip2: String,
    /// Mask of host 2
    mask2: String,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
    /// Fail on the first invalid field instead of answering "unknown"
    #[arg(long)]
    strict: bool,
}

fn run(args: &Args) -> Result<Reachability, Box<dyn Error>> {
    let a = HostForm::new(&args.ip1, &args.mask1);
    let b = HostForm::new(&args.ip2, &args.mask2);
    if args.strict {
        a.parse_strict().map_err(|e| format!("IP 1: {e}"))?;
        b.parse_strict().map_err(|e| format!("IP 2: {e}"))?;
    }

    let report = check_forms(&a, &b);
    if args.json {
        println!("{}", report_to_json(&report)?);
    } else {
        println!("{}", format_report(&report));
    }
    log::info!("Verdict {} <-> {}: {}", report.a, report.b, report.reachability);
    Ok(report.reachability)
}

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();
    let config = Config::from_env();
    if let Err(e) = init_logging(&config) {
        eprintln!("Error initializing logging: {e}");
    }
    log::info!("#Start main() {args:?}");

    match run(&args) {
        Ok(Reachability::Reachable) => ExitCode::from(0),
        Ok(Reachability::Unreachable) => ExitCode::from(1),
        Ok(Reachability::Unknown) => ExitCode::from(2),
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
