use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use touchline_core::{
    EventOptions, TrackingOptions, load_event_from_paths, load_tracking_from_paths,
};
use touchline_model::CoordinateSystem;

use touchline_cli::summary::{print_event_summary, print_tracking_summary};

use crate::cli::{CoordinatesArg, EventsArgs, TrackingArgs};

pub fn run_events(args: &EventsArgs) -> Result<()> {
    let mut options = EventOptions::new().with_coordinates(coordinate_system(args.coordinates));
    if !args.event_types.is_empty() {
        options = options.with_event_types(args.event_types.iter().cloned());
    }
    if let Some(format) = &args.meta_format {
        options = options.with_metadata_format(format);
    }
    if let Some(feed) = &args.feed {
        options = options.with_feed(feed);
    }

    let dataset =
        load_event_from_paths(&args.events, &args.meta, &options).context("load event dataset")?;

    if let Some(path) = &args.output {
        write_json(path, &dataset).context("write dataset")?;
    }
    if args.summary || args.output.is_none() {
        print_event_summary(&dataset);
    }
    Ok(())
}

pub fn run_tracking(args: &TrackingArgs) -> Result<()> {
    let mut options = TrackingOptions::new()
        .with_only_alive(args.only_alive)
        .with_coordinates(coordinate_system(args.coordinates));
    if let Some(rate) = args.sample_rate {
        options = options.with_sample_rate(rate);
    }
    if let Some(limit) = args.limit {
        options = options.with_limit(limit);
    }
    if let Some(path) = &args.additional_meta {
        let additional =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        options = options.with_additional_meta(additional);
    }

    let dataset = load_tracking_from_paths(&args.raw, &args.meta, &options)
        .context("load tracking dataset")?;

    if let Some(path) = &args.output {
        write_json(path, &dataset).context("write dataset")?;
    }
    if args.summary || args.output.is_none() {
        print_tracking_summary(&dataset);
    }
    Ok(())
}

fn coordinate_system(arg: CoordinatesArg) -> CoordinateSystem {
    match arg {
        CoordinatesArg::Provider => CoordinateSystem::Provider,
        CoordinatesArg::Unit => CoordinateSystem::Unit,
        CoordinatesArg::Metric => CoordinateSystem::Metric,
    }
}

/// Writes the dataset as pretty JSON, to stdout when the path is "-".
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if path.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        serde_json::to_writer_pretty(&mut handle, value)?;
        handle.write_all(b"\n")?;
    } else {
        let file =
            fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
        let mut writer = io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        info!(path = %path.display(), "dataset written");
    }
    Ok(())
}
