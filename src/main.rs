mod cli;
mod logging;

use std::{io::Write, time::Instant};

use anyhow::Context;
use clap::Parser;
use readfile_bench::{read_file_chunks, read_file_lines, Docs};

use crate::cli::{Args, Method};

fn main() {
    logging::init_logging();
    let args = Args::parse();
    let stdout = std::io::stdout();
    if let Err(e) = run(&args, &mut stdout.lock()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    let start = Instant::now();
    let mut docs = if args.parse {
        Docs::parsing()
    } else {
        Docs::new()
    };
    match args.method() {
        Method::Line => {
            read_file_lines(&args.path, &mut docs).context("line read failed")?;
        }
        Method::Chunk => {
            let stats = read_file_chunks(&args.path, args.chunk_size, &mut docs)
                .context("chunk read failed")?;
            writeln!(out, "{}", stats.reads)?;
        }
    }
    writeln!(
        out,
        "docs_size:{} doc_lens_size:{}",
        docs.docs.len(),
        docs.doc_lens.len()
    )?;
    writeln!(out, "read file cost {} ms ", start.elapsed().as_millis())?;
    Ok(())
}
