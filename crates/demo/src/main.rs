// File: crates/demo/src/main.rs
// Summary: Demo streams CSV sample columns into a line chart tick by tick and writes the geometry to CSV.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use linechart_core::{LineChart, LongSeries, PathCommand, RangeHandle, RangedSeries, RenderConfig, SeriesId};
use tracing_subscriber::EnvFilter;

/// Fraction of the remaining distance an animated range covers per tick.
const RANGE_ANIMATION_STEP: f64 = 0.5;

struct Args {
    input: Option<PathBuf>,
    ticks: usize,
    filled: bool,
    stacked: bool,
    stepped: bool,
    dashed: bool,
    marks: Vec<i64>,
    /// Scroll the time axis to show only the latest `window` time units.
    window: Option<i64>,
}

/// Samples of one CSV value column.
struct Column {
    name: String,
    samples: Vec<(i64, i64)>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let columns = match &args.input {
        Some(path) => {
            tracing::info!("Using input file: {}", path.display());
            load_columns(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            tracing::info!("No input file given; using generated samples");
            generated_columns()
        }
    };
    if columns.is_empty() || columns.iter().all(|c| c.samples.is_empty()) {
        anyhow::bail!("no samples loaded; check headers/delimiter.");
    }

    let (t_min, t_max) = time_bounds(&columns);
    tracing::info!("Loaded {} series spanning t=[{}, {}]", columns.len(), t_min, t_max);

    // One shared value axis that grows with the data, one shared time axis.
    let x = match args.window {
        Some(w) => RangeHandle::new(t_min as f64, (t_min + w) as f64),
        None => RangeHandle::new(t_min as f64, t_max as f64),
    };
    let y = RangeHandle::new(0.0, 1.0);
    let config_flags = |c: RenderConfig| {
        c.with_filled(args.filled).with_stacked(args.stacked).with_stepped(args.stepped).with_dashed(args.dashed)
    };

    let mut chart = LineChart::named("demo");
    let mut feeds = Vec::with_capacity(columns.len());
    for (i, col) in columns.iter().enumerate() {
        let store = Rc::new(LongSeries::new());
        let id = SeriesId(i as u64);
        let color = chart.registry().palette().color(i);
        let config = config_flags(RenderConfig::new(color));
        chart.register_series(id, RangedSeries::new(store.clone(), x.clone(), y.clone()), Some(config));
        tracing::debug!("series {} -> {id} ({:?})", col.name, config.color);
        feeds.push((store, col.samples.as_slice()));
    }

    let longest = columns.iter().map(|c| c.samples.len()).max().unwrap_or(0);
    let per_tick = longest.div_ceil(args.ticks.max(1)).max(1);
    let mut fed = 0usize;
    let mut latest = t_min;
    for tick in 0..args.ticks.max(1) {
        // Append the next slice of every column, as a live producer would.
        let upto = (fed + per_tick).min(longest);
        for (store, samples) in &feeds {
            for &(t, v) in samples.iter().take(upto).skip(fed) {
                store.push(t, v);
                latest = latest.max(t);
            }
        }
        fed = upto;
        if let Some(w) = args.window {
            let end = latest.max(t_min + w);
            x.set((end - w) as f64, end as f64);
        }

        if tick + 1 == args.ticks.max(1) {
            for &t in &args.marks {
                chart.request_marker(t);
            }
        }
        let stats = chart.tick();
        y.animate(RANGE_ANIMATION_STEP);
        tracing::info!(
            "tick {tick}: {} samples fed, {} commands, y max {:.1} -> {:.1}",
            fed,
            stats.commands,
            y.max(),
            y.target_max()
        );
    }

    let out_paths = out_name("paths");
    write_paths(&chart, &out_paths)?;
    tracing::info!("Wrote {}", out_paths.display());

    let out_markers = out_name("markers");
    write_markers(&chart, &out_markers)?;
    tracing::info!("Wrote {} ({} markers)", out_markers.display(), chart.markers().len());
    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args {
        input: None,
        ticks: 10,
        filled: false,
        stacked: false,
        stepped: false,
        dashed: false,
        marks: Vec::new(),
        window: None,
    };
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--ticks" => {
                let v = it.next().context("--ticks needs a value")?;
                args.ticks = v.parse().with_context(|| format!("invalid --ticks '{v}'"))?;
            }
            "--mark" => {
                let v = it.next().context("--mark needs a timestamp")?;
                args.marks.push(v.parse().with_context(|| format!("invalid --mark '{v}'"))?);
            }
            "--window" => {
                let v = it.next().context("--window needs a duration")?;
                let w: i64 = v.parse().with_context(|| format!("invalid --window '{v}'"))?;
                if w <= 0 {
                    anyhow::bail!("--window must be positive");
                }
                args.window = Some(w);
            }
            "--filled" => args.filled = true,
            "--stacked" => args.stacked = true,
            "--stepped" => args.stepped = true,
            "--dashed" => args.dashed = true,
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag {flag}"),
            path => args.input = Some(PathBuf::from(path)),
        }
    }
    Ok(args)
}

/// Load `time,<series...>` CSV. Rows whose time does not parse are skipped;
/// empty or unparsable cells are skipped for that column only.
fn load_columns(path: &Path) -> Result<Vec<Column>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>();
    tracing::debug!("Headers: {:?}", headers);
    if headers.len() < 2 {
        anyhow::bail!("expected a time column and at least one value column");
    }

    let mut columns: Vec<Column> = headers[1..]
        .iter()
        .map(|name| Column { name: name.clone(), samples: Vec::new() })
        .collect();

    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let Some(t) = rec.get(0).and_then(parse_long) else {
            skipped += 1;
            continue;
        };
        for (col, cell) in columns.iter_mut().zip(rec.iter().skip(1)) {
            if let Some(v) = parse_long(cell) {
                col.samples.push((t, v));
            }
        }
    }
    if skipped > 0 {
        tracing::warn!("Skipped {skipped} rows without a numeric time");
    }
    Ok(columns)
}

fn parse_long(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<i64>().ok().or_else(|| s.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v.round() as i64))
}

/// Three smooth waveforms, 10ms apart.
fn generated_columns() -> Vec<Column> {
    (0..3)
        .map(|k| Column {
            name: format!("wave{k}"),
            samples: (0..200i64)
                .map(|i| {
                    let v = ((i as f64 * 0.05 + k as f64).sin() * 20.0 + 30.0 + 10.0 * k as f64) as i64;
                    (i * 10, v)
                })
                .collect(),
        })
        .collect()
}

fn time_bounds(columns: &[Column]) -> (i64, i64) {
    let mut lo = i64::MAX;
    let mut hi = i64::MIN;
    for &(t, _) in columns.iter().flat_map(|c| c.samples.iter()) {
        lo = lo.min(t);
        hi = hi.max(t);
    }
    (lo, hi)
}

/// Produce output file name like target/out/linechart_<suffix>.csv
fn out_name(suffix: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("linechart_{suffix}.csv"));
    out
}

fn write_paths(chart: &LineChart, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(["series", "index", "command", "x", "y"])?;
    for (id, p) in chart.reporting_series().iter().zip(chart.paths()) {
        for (i, cmd) in p.commands().iter().enumerate() {
            let (tag, pt) = match cmd {
                PathCommand::MoveTo(pt) => ("M", pt),
                PathCommand::LineTo(pt) => ("L", pt),
            };
            wtr.write_record([id.0.to_string(), i.to_string(), tag.to_string(), pt.x.to_string(), pt.y.to_string()])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

fn write_markers(chart: &LineChart, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(["x", "y"])?;
    for m in chart.markers() {
        wtr.write_record([m.x.to_string(), m.y.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}
