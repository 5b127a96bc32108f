mod run;

use crate::run::run;
use dnascan::{Analyzer, AnalyzerConfig, InputFormat};
use rayon::ThreadPoolBuilder;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "dnascan",
    about = "Composition, motif and ORF report for DNA sequences"
)]
pub struct Opt {
    /// Sequence text to analyze. May be given several times.
    #[structopt(short = "s", long = "sequence", number_of_values = 1)]
    sequences: Vec<String>,

    /// Sequence files (FASTA, FASTQ, TSV or raw text). Only the first record of each is analyzed.
    #[structopt(parse(from_os_str))]
    files: Vec<PathBuf>,

    /// Read files as this format instead of detecting it.
    #[structopt(short = "f", long, possible_values = &["fasta", "fastq", "tsv", "raw", "unknown"])]
    format: Option<InputFormat>,

    /// Comma separated motifs to scan for, replacing the default set.
    #[structopt(short = "m", long)]
    motifs: Option<String>,

    /// Always compute the molecular weight, however long the sequence.
    #[structopt(long)]
    no_weight_limit: bool,

    /// How many worker threads are allowed to be used? Zero will use the amount of logical cores.
    #[structopt(short = "p", default_value = "1")]
    threads: usize,

    /// Pretty-print the JSON output.
    #[structopt(long)]
    pretty: bool,

    /// Log more (-v info, -vv debug).
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

impl Opt {
    /// Builds the analyzer settings from the options.
    fn analyzer_config(&self) -> AnalyzerConfig {
        let mut config = AnalyzerConfig::default();
        if let Some(motifs) = &self.motifs {
            config.motifs = motifs
                .split(',')
                .map(str::trim)
                .filter(|motif| !motif.is_empty())
                .map(String::from)
                .collect();
        }
        if self.no_weight_limit {
            config.molecular_weight_limit = None;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Read & setup options
    let opt: Opt = Opt::from_args();

    let level = match opt.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    ThreadPoolBuilder::new()
        .num_threads(opt.threads)
        .build_global()?;

    if opt.sequences.is_empty() && opt.files.is_empty() {
        return Err(Box::new(io::Error::new(
            io::ErrorKind::Other,
            "nothing to analyze: pass sequence files or -s SEQUENCE",
        )));
    }

    let analyzer = Analyzer::new(opt.analyzer_config());
    let failed = run(&opt, &analyzer)?;
    if failed > 0 {
        return Err(format!("{} input(s) could not be analyzed", failed).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motifs_option_replaces_defaults() {
        let opt = Opt::from_iter(&["dnascan", "-m", "gaattc, TATA,", "--no-weight-limit", "x.fa"]);
        let config = opt.analyzer_config();
        assert_eq!(config.motifs, vec!["gaattc", "TATA"]);
        assert_eq!(config.molecular_weight_limit, None);
        assert_eq!(opt.files, vec![PathBuf::from("x.fa")]);
    }

    #[test]
    fn format_option_parses() {
        let opt = Opt::from_iter(&["dnascan", "-f", "tsv", "-s", "ACGTACGTAC"]);
        assert_eq!(opt.format, Some(InputFormat::Tsv));
        assert_eq!(opt.sequences, vec!["ACGTACGTAC"]);
        assert_eq!(opt.analyzer_config().motifs.len(), 6);
    }
}
