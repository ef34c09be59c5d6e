use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use probe_bench::Error;
use probe_bench::Harness;
use probe_bench::ProbingTable;
use probe_bench::dataset;
use probe_bench::report::HashingReport;

/// Stores integer keys in a fixed-capacity quadratic-probing hash table and
/// times storage and retrieval.
#[derive(Parser, Debug)]
#[command(name = "hashing", version, about)]
struct Args {
    /// File with whitespace-separated integer keys to store.
    input_file: PathBuf,

    /// File with whitespace-separated integer keys to look up.
    search_file: PathBuf,

    /// Number of slots in the hash table. Must be positive.
    capacity: i64,

    /// Store/search repetitions used to average out timer granularity.
    #[arg(short, long, default_value_t = Harness::DEFAULT_HASHING_REPETITIONS)]
    repetitions: u32,
}

fn run(args: &Args) -> Result<(), Error> {
    if args.capacity <= 0 {
        return Err(Error::InvalidCapacity(args.capacity));
    }

    let input = dataset::load_keys(&args.input_file, dataset::MAX_INPUT_KEYS)?;
    let search = dataset::load_keys(&args.search_file, dataset::MAX_SEARCH_KEYS)?;
    let mut table = ProbingTable::with_capacity(args.capacity as usize)?;

    let harness = Harness::with_repetitions(args.repetitions);
    let run = harness.run_hashing(&mut table, &input, &search);

    print!(
        "{}",
        HashingReport {
            input_path: &args.input_file,
            search_path: &args.search_file,
            table: &table,
            run: &run,
        }
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
