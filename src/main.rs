use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::{debug, info};

use ip2asn::index::RangeIndex;
use ip2asn::lookup;
use ip2asn::store::{RecordSource, TsvStore};

/// Resolve IPv4 addresses to the Autonomous System announcing them
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the ip2asn-v4-u32.tsv table
    table: PathBuf,

    /// Resolve this address and exit instead of prompting (repeatable)
    #[arg(short, long = "query")]
    queries: Vec<String>,

    /// Print each result as a JSON object on its own line
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Reading file {:?}", args.table);
    let report = TsvStore::open(&args.table)
        .and_then(|store| store.load())
        .wrap_err_with(|| format!("Cannot open file: {}", args.table.display()))?;

    let index = RangeIndex::build(report.records);
    info!("Read {} records.", index.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.queries.is_empty() {
        for query in &args.queries {
            answer(&index, query, args.json, &mut out)?;
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        write!(out, "Enter your query (empty line to exit): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let query = line.trim_end_matches(|c| c == '\n' || c == '\r');
        if query.is_empty() {
            writeln!(out)?;
            break;
        }

        answer(&index, query, args.json, &mut out)?;
    }

    debug!("exiting");
    Ok(())
}

fn answer<W: Write>(index: &RangeIndex, query: &str, json: bool, out: &mut W) -> Result<()> {
    match lookup::resolve(index, query) {
        Ok(result) if json => {
            serde_json::to_writer(&mut *out, &result)?;
            writeln!(out)?;
        }
        Ok(result) => {
            writeln!(out, "{}", result)?;
            writeln!(out)?;
        }
        Err(err) => {
            debug!("{}", err);
            eprintln!("Invalid input");
            if !json {
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
