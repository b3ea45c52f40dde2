#![allow(dead_code)]

use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

/// Deterministic pseudo-random DNA.
pub fn random_dna(length: usize, seed: u64) -> String {
    let mut state = seed;
    (0..length)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            char::from(b"ACGT"[(state >> 62) as usize])
        })
        .collect()
}

/// Writes the records to a temporary FASTA file, wrapping sequences at 60 columns.
pub fn write_fasta(records: &[(&str, String)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for (id, sequence) in records {
        writeln!(file, ">{} test contig", id).unwrap();
        for line in sequence.as_bytes().chunks(60) {
            file.write_all(line).unwrap();
            writeln!(file).unwrap();
        }
    }
    file.flush().unwrap();
    file
}

/// A batch whose longest contig is long enough for single genome mode.
pub fn genome_fixture() -> NamedTempFile {
    write_fasta(&[
        ("contig_1", random_dna(24_000, 7)),
        ("contig_2", random_dna(6_000, 11)),
        ("contig_3", random_dna(900, 13)),
    ])
}

/// The `genecall` binary with the given arguments.
pub fn genecall(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("genecall").unwrap();
    cmd.args(args);
    cmd
}

/// Parses a gene calls table into its rows, header excluded.
pub fn rows(table: &str) -> Vec<Vec<String>> {
    table
        .lines()
        .skip(1)
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}
