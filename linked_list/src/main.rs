use anyhow::{Context, Result};
use clap::Parser;
use common::config::Config;
use common::logger::init_logger;
use linked_list::{LinkedList, ReportSink, WriteSink};
use log::info;
use std::io;

const DEFAULT_PROBES: [i64; 4] = [0, 1, 3, 4];

#[derive(Parser, Debug)]
#[command(version, about = "Builds a linked list and reports it")]
struct Args {
    /// Dotenv file with PROJECT_NAME / LOG_LEVEL / LOG_FILE / LOG_TO_STDOUT
    #[arg(long, default_value = ".env")]
    env: String,
    /// Values to append in order. Without any, runs append(1), append(2), prepend(0), append(3)
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
    /// Values to look up with find (repeatable). Defaults to 0, 1, 3 and 4
    #[arg(long = "find", allow_negative_numbers = true)]
    probes: Vec<i64>,
}

fn walkthrough() -> LinkedList<i64> {
    let mut list = LinkedList::new();
    list.append(1);
    list.append(2);
    list.prepend(0);
    list.append(3);
    list
}

/// Builds the list from `values` (or the walkthrough), reports it and writes
/// one `find(<v>) = <index|null>` line per probe.
fn run<S: ReportSink + ?Sized>(values: &[i64], probes: &[i64], sink: &mut S) -> io::Result<()> {
    let list: LinkedList<i64> = if values.is_empty() {
        walkthrough()
    } else {
        values.iter().copied().collect()
    };

    list.report(sink)?;

    let probes = if probes.is_empty() {
        &DEFAULT_PROBES[..]
    } else {
        probes
    };
    for probe in probes {
        let line = match list.find(probe) {
            Some(index) => format!("find({}) = {}", probe, index),
            None => format!("find({}) = null", probe),
        };
        sink.emit(&line)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::init(&args.env);
    init_logger(&config.log_level, &config.log_file, config.log_to_stdout)
        .context("Failed to initialize logger")?;
    info!("{} starting", config.project_name);

    let mut sink = WriteSink::new(io::stdout().lock());
    run(&args.values, &args.probes, &mut sink).context("Failed to write report")?;

    info!("{} done", config.project_name);
    Ok(())
}
