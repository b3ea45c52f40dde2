//! # genecall - batch gene calling from the command line
//!
//! Predicts the genes of every sequence in a nucleotide FASTA file and writes
//! the gene calls table (tab-separated) and, optionally, the amino acid
//! sequences of the genes (FASTA).
//!
//! ## Usage
//!
//! ```bash
//! # Metagenome mode, gene calls to stdout
//! genecall -i contigs.fa
//!
//! # Single genome mode on 8 workers, both tables to files
//! genecall -i genome.fa -p single -T 8 -o gene_calls.tsv -a amino_acids.fa
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: Input nucleotide FASTA file
//! - `-o, --output <FILE>`: Gene calls table (default: stdout)
//! - `-a, --amino-acids <FILE>`: Amino acid FASTA output
//! - `-p, --mode <MODE>`: `single` or `meta` (default: meta)
//! - `-g, --translation-table <TABLE>`: Translation table (only the default code is supported)
//! - `-T, --threads <N>`: Number of workers (default: all cores)
//! - `-c, --closed`: Closed ends (no genes off edges)
//! - `-q, --quiet`: Only log warnings and errors
//! - `--caller <NAME>`: Gene predictor (default: genecall-orf)

use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Instant;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use genecall_core::config::GeneCallerConfig;
use genecall_core::finder::{backend_by_name, ORF_BACKEND_NAME};
use genecall_core::output::{write_table, OutputTable};
use genecall_core::sequence::FastaFile;
use genecall_core::GeneCaller;
use log::{error, info, Level};
use simple_logger::init_with_level;

fn cli() -> Command {
    Command::new("genecall")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Batch gene calling for prokaryotic contigs")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .required(true)
                .help("Input nucleotide FASTA file"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Gene calls table (default: stdout)"),
        )
        .arg(
            Arg::new("amino-acids")
                .short('a')
                .long("amino-acids")
                .value_name("FILE")
                .help("Amino acid sequences as FASTA"),
        )
        .arg(
            Arg::new("mode")
                .short('p')
                .long("mode")
                .value_name("MODE")
                .value_parser(["single", "meta"])
                .default_value("meta")
                .help("Procedure: single genome or metagenome"),
        )
        .arg(
            Arg::new("translation-table")
                .short('g')
                .long("translation-table")
                .value_name("TABLE")
                .value_parser(value_parser!(u8))
                .help("Translation table (alternate tables are not supported)"),
        )
        .arg(
            Arg::new("threads")
                .short('T')
                .long("threads")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Number of workers (default: all cores)"),
        )
        .arg(
            Arg::new("closed")
                .short('c')
                .long("closed")
                .action(ArgAction::SetTrue)
                .help("Closed ends (no genes off edges)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Only report warnings and errors"),
        )
        .arg(
            Arg::new("caller")
                .long("caller")
                .value_name("NAME")
                .default_value(ORF_BACKEND_NAME)
                .help("Gene predictor"),
        )
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let config = GeneCallerConfig {
        single_mode: matches.get_one::<String>("mode").map(String::as_str) == Some("single"),
        num_threads: matches.get_one::<usize>("threads").copied(),
        translation_table: matches.get_one::<u8>("translation-table").copied(),
        closed_ends: matches.get_flag("closed"),
    };

    let caller_name = matches
        .get_one::<String>("caller")
        .map_or(ORF_BACKEND_NAME, String::as_str);
    let backend = backend_by_name(caller_name, config.closed_ends)?;

    let input = matches
        .get_one::<String>("input")
        .ok_or("No input file given")?;
    let tables = GeneCaller::new(config, backend).process(&FastaFile::new(input))?;

    let mut writer: Box<dyn Write> = match matches.get_one::<String>("output") {
        Some(output_file) => Box::new(BufWriter::new(File::create(output_file)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    write_table(&mut writer, &tables, OutputTable::GeneCalls)?;
    writer.flush()?;

    if let Some(amino_acid_file) = matches.get_one::<String>("amino-acids") {
        let mut writer = BufWriter::new(File::create(amino_acid_file)?);
        write_table(&mut writer, &tables, OutputTable::AminoAcids)?;
        writer.flush()?;
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let start = Instant::now();
    let matches = cli().get_matches();

    let level = if matches.get_flag("quiet") {
        Level::Warn
    } else {
        Level::Info
    };
    init_with_level(level)?;

    if let Err(e) = run(&matches) {
        error!("{}", e);
        process::exit(1);
    }

    info!("Elapsed time: {:.3?}", start.elapsed());
    Ok(())
}
