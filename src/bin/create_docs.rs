use rand::prelude::*;
use rand_distr::Normal;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Instant;

const MEAN_DOC_LEN: f64 = 64.0;
const DOC_LEN_STD_DEV: f64 = 16.0;

fn main() -> std::io::Result<()> {
    let mut args = std::env::args();
    let Some(size) = args.nth(1) else {
        eprintln!("Usage: create_docs <number of records to create> [output file]");
        std::process::exit(1);
    };

    let Ok(size) = size.replace('_', "").parse::<usize>() else {
        eprintln!("Invalid value for <number of records to create>: {size}");
        std::process::exit(1);
    };
    let file_name = args.next();
    let path = Path::new(file_name.as_deref().unwrap_or("docs.txt"));
    let file = File::create(path)?;
    let writer = Arc::new(Mutex::new(BufWriter::new(file)));
    generate_docs(size, writer.clone())?;
    let mut writer = writer
        .lock()
        .map_err(|_| std::io::Error::other("writer lock poisoned"))?;
    writer.flush()
}

fn generate_docs<W: Write + Send + 'static>(size: usize, writer: Arc<Mutex<W>>) -> std::io::Result<()> {
    let start = Instant::now();
    let par_count = thread::available_parallelism().map_or(1, usize::from);
    println!("Starting generating {} records with {} threads", size, par_count);
    let task_size = size / par_count;
    let mut tasks = vec![task_size; par_count];
    for task in tasks.iter_mut().take(size % par_count) {
        *task += 1;
    }
    let handles = tasks
        .into_iter()
        .map(|c| (c, writer.clone()))
        .map(|(count, w)| thread::spawn(move || create_docs(count, w)))
        .collect::<Vec<_>>();
    for handle in handles {
        handle
            .join()
            .map_err(|_| std::io::Error::other("generator thread panicked"))??;
    }
    println!(
        "Created file with {} records in {} ms",
        size,
        start.elapsed().as_millis()
    );
    Ok(())
}

const TMP_VEC_CAPACITY: usize = 50_000;
fn create_docs<W: Write + Send>(count: usize, write_mutex: Arc<Mutex<W>>) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let lens = Normal::new(MEAN_DOC_LEN, DOC_LEN_STD_DEV).map_err(std::io::Error::other)?;
    let mut tmp_res = Vec::with_capacity(TMP_VEC_CAPACITY);
    let mut tmp_line = Vec::with_capacity(512);

    for _ in 0..count {
        let len = (lens.sample(&mut rng).round() as usize).max(1);
        for i in 0..len {
            if i > 0 {
                tmp_line.push(b',');
            }
            write!(tmp_line, "{}", rng.gen::<u16>())?;
        }
        tmp_line.push(b'\n');
        if tmp_line.len() + tmp_res.len() > TMP_VEC_CAPACITY {
            flush_into(&write_mutex, &tmp_res)?;
            tmp_res.clear();
        }
        tmp_res.extend_from_slice(&tmp_line);
        tmp_line.clear();
    }
    flush_into(&write_mutex, &tmp_res)
}

fn flush_into<W: Write>(write_mutex: &Mutex<W>, bytes: &[u8]) -> std::io::Result<()> {
    write_mutex
        .lock()
        .map_err(|_| std::io::Error::other("writer lock poisoned"))?
        .write_all(bytes)
}
