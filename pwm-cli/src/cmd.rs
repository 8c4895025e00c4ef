//! Subcommand implementations for pwm-cli.

use anyhow::{anyhow, bail};
use clap::Subcommand;
use pwm_charts::choropleth::{choropleth, map_columns};
use pwm_charts::format::metric_text;
use pwm_charts::metrics::{average_density, facility_count, waste_generated};
use pwm_charts::pie::waste_breakdown;
use pwm_charts::ranking::ranking;
use pwm_charts::trend::trend;
use pwm_charts::{ControlOptions, DashboardView};
use pwm_core::columns::{DEFAULT_MAP_COLUMN, TOTAL_WASTE_COLUMNS};
use pwm_core::region::Region;
use pwm_core::selection::{ClassificationMode, Selection};
use pwm_data::DatasetStore;
use serde::Serialize;

#[derive(Subcommand)]
pub enum Command {
    /// Print the three metric cards for a year (and optional region)
    Summary {
        #[arg(short, long, default_value_t = 2015)]
        year: i32,

        /// Region name, e.g. "Region IV-A"; omit for nationwide
        #[arg(short, long)]
        region: Option<String>,
    },

    /// Print the choropleth map spec for a year and display column
    Choropleth {
        #[arg(short, long, default_value_t = 2015)]
        year: i32,

        #[arg(short, long, default_value = DEFAULT_MAP_COLUMN)]
        column: String,
    },

    /// Print the multi-year trend series for one or more metric columns
    Trend {
        #[arg(short, long)]
        region: Option<String>,

        /// Metric column(s); defaults to total hazardous wastes
        #[arg(short, long = "metric")]
        metrics: Vec<String>,
    },

    /// Print the categorical waste breakdown for a year
    Pie {
        #[arg(short, long, default_value_t = 2015)]
        year: i32,

        #[arg(short, long)]
        region: Option<String>,
    },

    /// Print the province ranking for an education facility category
    Rank {
        /// Classification mode: amenity or operator
        #[arg(short, long, default_value = "amenity")]
        mode: String,

        /// Category column; defaults to the first offered category
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Print the option sets offered by the interactive controls
    Options,

    /// Print the whole dashboard view for one selection
    Dashboard {
        #[arg(short, long, default_value_t = 2015)]
        year: i32,

        #[arg(short, long)]
        region: Option<String>,

        #[arg(short, long, default_value = DEFAULT_MAP_COLUMN)]
        column: String,

        #[arg(short, long, default_value = "amenity")]
        mode: String,
    },
}

pub fn run(store: &DatasetStore, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { year, region } => {
            let region = parse_region(region.as_deref())?;
            match store.dataset(year) {
                Ok(dataset) => {
                    println!(
                        "Waste Generated: {}",
                        metric_text(waste_generated(dataset, region), "tons")
                    );
                    println!(
                        "Waste Disposal Facilities: {}",
                        metric_text(facility_count(dataset, region), "")
                    );
                    println!(
                        "Average Population Density: {}",
                        metric_text(average_density(dataset, region), "")
                    );
                }
                Err(err) => {
                    log::warn!("{err}");
                    println!("Waste Generated: No Data");
                    println!("Waste Disposal Facilities: No Data");
                    println!("Average Population Density: No Data");
                }
            }
            Ok(())
        }
        Command::Choropleth { year, column } => {
            if !map_columns().contains(&column.as_str()) {
                bail!(
                    "unknown map column {:?}; available: {}",
                    column,
                    map_columns().join(", ")
                );
            }
            let bounds = store.boundaries(year)?;
            print_json(&choropleth(bounds, &column))
        }
        Command::Trend { region, metrics } => {
            let region = parse_region(region.as_deref())?;
            let metrics = if metrics.is_empty() {
                TOTAL_WASTE_COLUMNS.iter().map(|s| s.to_string()).collect()
            } else {
                metrics
            };
            let columns: Vec<&str> = metrics.iter().map(String::as_str).collect();
            print_json(&trend(store, region, &columns))
        }
        Command::Pie { year, region } => {
            let region = parse_region(region.as_deref())?;
            let dataset = store.dataset(year)?;
            print_json(&waste_breakdown(dataset, region))
        }
        Command::Rank { mode, column } => {
            let mode = parse_mode(&mode)?;
            let aggregate = store.education(mode)?;
            let (options, default) = aggregate.options();
            let column = match column {
                Some(column) if options.contains(&column) => column,
                Some(column) => bail!(
                    "unknown category {:?} for mode '{}'; available: {}",
                    column,
                    mode,
                    options.join(", ")
                ),
                None => default.ok_or_else(|| anyhow!("no categories for mode '{mode}'"))?,
            };
            print_json(&ranking(aggregate.provinces(), &column))
        }
        Command::Options => print_json(&ControlOptions::gather(store)),
        Command::Dashboard {
            year,
            region,
            column,
            mode,
        } => {
            if !map_columns().contains(&column.as_str()) {
                bail!(
                    "unknown map column {:?}; available: {}",
                    column,
                    map_columns().join(", ")
                );
            }
            let selection = Selection {
                year,
                region: parse_region(region.as_deref())?,
                map_column: column,
                education_column: None,
                mode: parse_mode(&mode)?,
            };
            print_json(&DashboardView::compute(store, &selection))
        }
    }
}

fn parse_region(raw: Option<&str>) -> anyhow::Result<Option<Region>> {
    match raw {
        None => Ok(None),
        Some(name) => Region::from_name(name)
            .map(Some)
            .ok_or_else(|| anyhow!("unknown region {name:?}")),
    }
}

fn parse_mode(raw: &str) -> anyhow::Result<ClassificationMode> {
    raw.parse()
        .map_err(|_| anyhow!("unknown classification mode {raw:?} (amenity or operator)"))
}

fn print_json<T: Serialize>(spec: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(spec)?);
    Ok(())
}
