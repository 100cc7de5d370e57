use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use plotters::prelude::SVGBackend;
use plotters::prelude::*;
use rand::rngs::SmallRng;
use rand::{thread_rng, SeedableRng};
use structopt::StructOpt;
use thousands::Separable;

mod baseline;
mod bench;
mod data;
mod pool;
mod report;
mod sorters;
mod sys_info;

use crate::bench::{Measurement, RunConfig};
use crate::data::InputPattern;
use crate::sorters::{NopSort, PoolMergeSort, RayonSort, Sorter, StdSort};

// Enable this to use mimalloc
//#[global_allocator]
//static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sort-bench",
    about = "Benchmark concurrent sort implementations across thread counts"
)]
struct Opt {
    /// Number of elements to sort
    #[structopt(long, default_value = "10000000")]
    elems: usize,

    /// Thread counts to sweep
    #[structopt(long, use_delimiter = true, default_value = "2,4,8,16,32,64,100")]
    threads: Vec<usize>,

    /// Input patterns to benchmark (random, sorted, reversed, equal)
    #[structopt(long, use_delimiter = true, default_value = "random")]
    patterns: Vec<InputPattern>,

    /// Seed for input generation; omit for a fresh seed per run
    #[structopt(long)]
    seed: Option<u64>,

    /// Timed runs per configuration, keeping the fastest
    #[structopt(long, default_value = "1")]
    samples: usize,

    /// Verify that each output is sorted
    #[structopt(long)]
    verify: bool,

    /// Directory for CSV and SVG output
    #[structopt(long, default_value = ".", parse(from_os_str))]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    sys_info::write_cpu_info();
    fs::create_dir_all(&opt.out_dir)?;

    for &pattern in &opt.patterns {
        run_sort_sweep(pattern, &opt)?;
    }

    Ok(())
}

fn run_sort_sweep(pattern: InputPattern, opt: &Opt) -> Result<()> {
    let mut rng = match opt.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(thread_rng())?,
    };

    log::debug!("generating {} {} elements", opt.elems, pattern.label());
    let data = pattern.generate(opt.elems, &mut rng);

    let mut measurements = Vec::new();

    // The recorded sweep only lines up with a matching live configuration.
    if pattern == InputPattern::Random && opt.elems == baseline::RECORDED_ELEMS {
        measurements.extend(baseline::RECORDED_RANDOM_10M.iter().copied());
    } else {
        log::debug!("skipping recorded overlay for {} input", pattern.label());
    }

    let sorters: Vec<(&'static str, Box<dyn Sorter>)> = vec![
        ("pool", Box::new(PoolMergeSort)),
        ("rayon", Box::new(RayonSort)),
        ("std", Box::new(StdSort)),
        ("nop", Box::new(NopSort)),
    ];

    for &thread_count in &opt.threads {
        let config = RunConfig {
            thread_count,
            samples: opt.samples,
            check: opt.verify,
        };

        for (name, sorter) in &sorters {
            measurements.push(bench::run_workload(*name, sorter.as_ref(), &config, &data)?);
        }
    }

    report::write_csv(
        &opt.out_dir.join(format!("sort-{}.csv", pattern.label())),
        &measurements,
    )?;

    write_plot(
        &measurements,
        &format!(
            "Sort runtime ({} input, {} elements)",
            pattern.label(),
            opt.elems.separate_with_commas()
        ),
        "Runtime",
        &opt.out_dir.join(format!("sort-{}.svg", pattern.label())),
    )?;

    Ok(())
}

const FONT: &str = "Fira Code";
const PLOT_WIDTH: u32 = 800;
const PLOT_HEIGHT: u32 = 400;

pub fn write_plot(
    records: &[Measurement],
    caption: &str,
    y_label: &str,
    path: &Path,
) -> Result<()> {
    if records.is_empty() {
        log::warn!("no measurements to plot for {}", path.display());
        return Ok(());
    }

    let mut groups: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();

    let mut color_map = HashMap::new();
    color_map.insert("recorded", RED);
    color_map.insert("pool", GREEN);
    color_map.insert("rayon", BLUE);
    color_map.insert("std", MAGENTA);
    color_map.insert("nop", CYAN);

    for record in records.iter() {
        let group = groups.entry(record.name).or_insert_with(Vec::new);
        group.push(record);
    }

    let resolution = (PLOT_WIDTH, PLOT_HEIGHT);
    let root = SVGBackend::new(path, resolution).into_drawing_area();

    root.fill(&WHITE)?;

    let y_min = records.iter().map(|m| m.runtime_ms).min().unwrap();
    let y_max = records.iter().map(|m| m.runtime_ms).max().unwrap();
    let y_diff = y_max - y_min;
    let y_padding = (y_diff / 10).min(y_min);

    let x_max = records.iter().map(|m| m.thread_count).max().unwrap();

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(caption, (FONT, 20))
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Right, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(1..x_max + 1, y_min - y_padding..y_max + y_padding)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_label_formatter(&|v| format!("{}", v))
        .y_label_formatter(&|v| format!("{} ms", v))
        .x_labels(20)
        .y_labels(20)
        .y_desc(y_label)
        .x_desc("Threads")
        .draw()?;

    for records in groups.values() {
        let color = color_map.get(records[0].name).copied().unwrap_or(BLACK);
        chart
            .draw_series(LineSeries::new(
                records
                    .iter()
                    .map(|record| (record.thread_count, record.runtime_ms)),
                color,
            ))?
            .label(records[0].name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font((FONT, 13))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
