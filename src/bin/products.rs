use std::io::{Write, BufWriter};
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, ensure, Context};
use clap::Parser;
use indicatif::ProgressBar;
use itertools::Itertools;
use log::{debug, info};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;

use planar::Point;

const CHUNK: u64 = 1 << 16;

/// CLI
#[derive(clap::Parser, Debug, Clone)]
#[clap( name  = "products"
      , about = "Sample random vector pairs and record their dot and cross products")]
pub struct Cli {
    #[clap(short = 'o', long, default_value = "products.csv")]
    pub outfile : PathBuf,

    #[clap(short = 'j', long, default_value = "4")]
    pub threads : usize,

    #[clap(short = 'b', long, default_value = "10")]
    pub base : u8,

    #[clap(short = 'e', long)]
    pub exponent : u8,

    #[clap(short = 's', long, default_value = "1.0")]
    pub sigma : f64,
}

#[derive(Clone, Copy, Debug)]
struct Sample {
    a: Point,
    b: Point,
}

impl Sample {
    fn draw<R: Rng + ?Sized>(dist: &Normal<f64>, rng: &mut R) -> Self {
        let a = Point::new(dist.sample(rng), dist.sample(rng));
        let b = Point::new(dist.sample(rng), dist.sample(rng));
        Sample{a, b}
    }

    fn record(&self) -> String {
        let Sample{a, b} = self;
        [a.x, a.y, b.x, b.y, a.dot(*b), a.cross(*b)].iter().join(" ")
    }
}

struct CsvWriter<W: Write> {
    writer : BufWriter<W>,
}

impl CsvWriter<File> {
    pub fn create(filename : &Path) -> anyhow::Result<Self> {
        let file = File::create(filename)
            .with_context(|| format!("Cannot create {}", filename.display()))?;
        Ok(Self::new(file))
    }
}

impl<W: Write> CsvWriter<W> {
    pub fn new(inner : W) -> Self {
        Self{writer: BufWriter::new(inner)}
    }

    pub fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "ax ay bx by dot cross")?;
        Ok(())
    }

    pub fn write(&mut self, sample : &Sample) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", sample.record())?;
        Ok(())
    }

    pub fn finish(mut self) -> anyhow::Result<W> {
        self.writer.flush()?;
        self.writer.into_inner().map_err(|e| anyhow!("Cannot flush output: {}", e.error()))
    }
}

/// Centred normal distribution for each coordinate.
fn distribution(sigma: f64) -> anyhow::Result<Normal<f64>> {
    // false for NaN as well
    ensure!(sigma >= 0.0, "Invalid sigma {sigma}: must be a non-negative number");
    Normal::new(0.0, sigma).with_context(|| format!("Invalid sigma {sigma}"))
}

fn sample_chunk(dist: &Normal<f64>, len: usize) -> Vec<Sample> {
    (0..len).into_par_iter()
            .map_init(rand::thread_rng, |rng, _| Sample::draw(dist, rng))
            .collect()
}

fn run<W: Write>(writer: &mut CsvWriter<W>, dist: &Normal<f64>, n: u64, pb: &ProgressBar) -> anyhow::Result<()> {
    writer.write_header()?;
    let mut done = 0;
    while done < n {
        let len = CHUNK.min(n - done);
        debug!("sampling {len} pairs starting at {done}");
        sample_chunk(dist, len as usize)
            .iter()
            .try_for_each(|s| writer.write(s))?;
        pb.inc(len);
        done += len;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();
    info!("{args:?}");

    if let Some(parent) = args.outfile.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Cannot write to destination {}", args.outfile.display()))?;
    }

    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .context("Cannot build thread pool")?;

    let dist = distribution(args.sigma)?;

    let n = (args.base as u64).checked_pow(args.exponent as u32)
        .ok_or_else(|| anyhow!("{}^{} pairs overflows", args.base, args.exponent))?;

    let mut writer = CsvWriter::create(&args.outfile)?;
    let pb         = ProgressBar::new(n);
    run(&mut writer, &dist, n, &pb)?;
    writer.finish()?;
    pb.finish();

    info!("wrote {n} pairs to {}", args.outfile.display());
    Ok(())
}
