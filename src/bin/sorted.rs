use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use probe_bench::Error;
use probe_bench::Harness;
use probe_bench::SortedSearch;
use probe_bench::dataset;
use probe_bench::report::SortedReport;

/// Sorts integer keys into an array by selection sort and times storage and
/// binary-search retrieval. The array size is the loaded input size.
#[derive(Parser, Debug)]
#[command(name = "sorted", version, about)]
struct Args {
    /// File with whitespace-separated integer keys to store.
    input_file: PathBuf,

    /// File with whitespace-separated integer keys to look up.
    search_file: PathBuf,

    /// Store/search repetitions used to average out timer granularity.
    #[arg(short, long, default_value_t = Harness::DEFAULT_SORTED_REPETITIONS)]
    repetitions: u32,
}

fn run(args: &Args) -> Result<(), Error> {
    let input = dataset::load_keys(&args.input_file, dataset::MAX_INPUT_KEYS)?;
    let search = dataset::load_keys(&args.search_file, dataset::MAX_SEARCH_KEYS)?;
    let mut engine = SortedSearch::new(&input)?;

    let harness = Harness::with_repetitions(args.repetitions);
    let run = harness.run_sorted(&mut engine, &search);

    print!(
        "{}",
        SortedReport {
            input_path: &args.input_file,
            search_path: &args.search_file,
            stored: engine.len(),
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
