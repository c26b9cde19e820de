use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::{error, info};
use reviewstats::driver;
use reviewstats::errors::Result;
use reviewstats::output::{self, Report};
use std::{fs, io, process};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Input file (TSV)
    infile: String,
    /// Write the finished aggregates as JSON, for chart rendering
    #[arg(short, long)]
    outfile: Option<String>,
    /// Produce a compact JSON file
    #[arg(long)]
    compact: bool,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn print_report(report: &Report) {
    println!("number of records: {}", report.records);
    println!("number of reviews per rating:");
    println!("{}", output::pretty_counts(&report.rating_counts));
    println!("number of reviews per category:");
    println!("{}", output::pretty_counts(&report.category_counts));
    println!("average rating per category:");
    println!(
        "{}",
        output::pretty_averages(&report.category_average_ratings)
    );
    println!("average rating per year:");
    println!("{}", output::pretty_averages(&report.year_average_ratings));
}

fn store_report(args: &Args, report: &Report) -> Result<()> {
    let Some(outfile) = &args.outfile else {
        return Ok(());
    };
    let file = fs::File::create(outfile)?;
    let writer = io::BufWriter::new(file);
    if args.compact {
        serde_json::to_writer(writer, report)?;
    } else {
        serde_json::to_writer_pretty(writer, report)?;
    }
    info!(target: "reviewstats", "write: {outfile}");
    Ok(())
}

fn process(args: &Args) -> Result<()> {
    let report = driver::report(&args.infile)?;
    print_report(&report);
    store_report(args, &report)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    match process(&args) {
        Ok(()) => (),
        Err(e) => {
            error!(target: "reviewstats", "{e}");
            process::exit(1);
        }
    }
}
