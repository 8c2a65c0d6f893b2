//! hastycsv - Fast delimited record reader
//!
//! Reads a delimited file record by record and reports throughput.

use clap::Parser;
use hastycsv::{io::open, Reader};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "hastycsv")]
#[command(about = "A fast reader for simple delimited files", long_about = None)]
struct Args {
    /// Delimited file to read
    #[arg(value_name = "FILE")]
    file: String,

    /// Field delimiter (a single byte, or \t for tab)
    #[arg(short = 't', long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dump every record
    #[arg(short, long)]
    dump: bool,

    /// Sum the given 0-based column as uint32
    #[arg(short, long, value_name = "COL")]
    sum: Option<usize>,

    /// Number of iterations for benchmarking
    #[arg(short, long, default_value = "1")]
    iterations: usize,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        b"\\t" => Ok(b'\t'),
        &[b] => Ok(b),
        _ => Err(format!("delimiter must be a single byte, got {:?}", s)),
    }
}

/// Totals gathered over one pass of the file
#[derive(Debug, Default)]
struct Pass {
    records: usize,
    bytes: u64,
    sum: u64,
}

fn run_pass(args: &Args, reader: &mut Reader) -> Result<Pass, hastycsv::Error> {
    let input = open(&args.file)?;
    let mut pass = Pass::default();

    reader.read(input, |i, record| {
        pass.records += 1;
        pass.bytes += record.as_bytes().len() as u64 + 1;

        if let Some(col) = args.sum {
            let Some(field) = record.get(col) else {
                return Err(format!("column {} out of range ({} fields)", col, record.len()).into());
            };
            pass.sum += u64::from(field.as_u32());
        }

        if args.dump {
            print!("{}:", i);
            for field in record.iter() {
                print!(" [{}]", field);
            }
            println!();
        }
        Ok(())
    })?;

    Ok(pass)
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        eprintln!(
            "[verbose] reading {} with delimiter {:?}",
            args.file,
            char::from(args.delimiter)
        );
    }

    let mut reader = Reader::with_delimiter(args.delimiter);

    let mut total_time = 0.0;
    let mut last = Pass::default();

    for _ in 0..args.iterations.max(1) {
        let start = Instant::now();
        last = match run_pass(&args, &mut reader) {
            Ok(pass) => pass,
            Err(e) => {
                eprintln!("Error reading {}: {}", args.file, e);
                std::process::exit(1);
            }
        };
        total_time += start.elapsed().as_secs_f64();
    }

    if args.verbose {
        eprintln!("[verbose] records per pass     = {}", last.records);
        eprintln!("[verbose] total time in (s)    = {:.6}", total_time);
        eprintln!("[verbose] number of iterations = {}", args.iterations.max(1));
    }

    if let Some(col) = args.sum {
        println!("sum of column {}: {}", col, last.sum);
    }

    let volume = args.iterations.max(1) as f64 * last.bytes as f64;
    let gb_per_s = volume / total_time / (1024.0 * 1024.0 * 1024.0);
    println!("records: {}", last.records);
    println!(" GB/s: {:.5}", gb_per_s);

    if args.verbose {
        eprintln!("[verbose] done");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(","), Ok(b','));
        assert_eq!(parse_delimiter("|"), Ok(b'|'));
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("ab").is_err());
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["hastycsv", "-t", "|", "-s", "1", "data.csv"]).unwrap();
        assert_eq!(args.delimiter, b'|');
        assert_eq!(args.sum, Some(1));
        assert_eq!(args.iterations, 1);
        assert!(!args.dump);
    }
}
