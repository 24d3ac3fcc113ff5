use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use algolab::{
    log::{build_logger_for_level, level_from_verbosity},
    problems::{PROBLEM_NAMES, run_by_name},
};
use anyhow::Context;
use log::info;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(about = "Solves Algorithms Lab problems; reads stdin unless -i is given")]
struct Opts {
    /// Name of the problem, see --list
    problem: Option<String>,

    #[structopt(short = "i", long)]
    input: Option<PathBuf>,

    #[structopt(short = "o", long)]
    output: Option<PathBuf>,

    /// Print the names of all problems
    #[structopt(long)]
    list: bool,

    #[structopt(short, parse(from_occurrences))]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_level(level_from_verbosity(opts.verbose));

    if opts.list {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for name in PROBLEM_NAMES {
            writeln!(out, "{name}")?;
        }
        return Ok(());
    }

    let Some(problem) = opts.problem else {
        anyhow::bail!("no problem given; use --list to see all problems");
    };
    info!("solving {problem}");

    let output: Box<dyn Write> = match &opts.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    match &opts.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            run_by_name(&problem, BufReader::new(file), output)?;
        }
        None => run_by_name(&problem, std::io::stdin().lock(), output)?,
    }
    Ok(())
}
