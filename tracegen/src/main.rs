use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use std::time::Instant;
use clap::Parser;
use log::info;
use tracelib::config::TraceRequest;
use tracelib::error::TraceError;
use tracelib::generator::Generator;
use tracelib::session::Session;
use tracelib::trace::TraceReport;

#[derive(Parser, Debug)]
#[command(about = String::from("Random address trace generator for cache simulator input"))]
struct Args {
    /// JSON request file, prompts interactively when absent
    config: Option<String>,

    /// Seed for a reproducible trace
    #[arg(short, long)]
    seed: Option<u64>,

    /// Line width the trace wraps at
    #[arg(short, long)]
    width: Option<usize>,

    /// Print the trace as JSON
    #[arg(short, long)]
    json: bool,

    #[arg(short, long)]
    performance: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{}", e.diagnostic());
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), TraceError> {
    let start = Instant::now();
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout().lock());
    let mut request = match &args.config {
        Some(path) => {
            info!("Reading request from {path}");
            let config_file = File::open(path)
                .map_err(|e| TraceError::Unexpected(format!("Couldn't open the request file at path {path}: {e}")))?;
            TraceRequest::from_reader(BufReader::new(config_file))?
        }
        None => session.read_request()?,
    };
    if args.seed.is_some() {
        request.seed = args.seed;
    }
    if let Some(width) = args.width {
        request.line_width = width;
    }
    let mut generator = Generator::seeded(request.seed);
    let list = request.generate(&mut generator)?;
    if args.json {
        session.write_report(&TraceReport::new(&request.start, &request.end, request.seed, &list))?;
    } else {
        session.write_trace(&list, request.line_width)?;
    }
    if args.performance {
        let generation_time = generator.get_execution_time();
        let total_time = start.elapsed();
        println!("Generation time: {}s", generation_time.as_nanos() as f64 / 1e9);
        println!("Total execution time (includes prompts, parsing, and output): {}s", total_time.as_nanos() as f64 / 1e9);
    }
    Ok(())
}
