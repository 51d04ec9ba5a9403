//! Print the worked sunspot temperature calculation
//!
//! Shows the Stefan-Boltzmann and Wien calculations for the configured spot
//! intensity, bar charts of region intensities and temperatures, and
//! optionally how the spot temperature changes across a set of intensities.
//!
//! Usage:
//! ```
//! cargo run --bin sunspot_report -- --intensity 35 --sweep 25,50,75
//! ```

use std::error::Error;

use clap::Parser;
use log::info;
use sunspot_sim::analysis::{
    describe_wavelength, region_intensities, temperature_comparison, temperature_sweep,
    SunspotAnalysis,
};
use sunspot_sim::shared_args::SharedSimulationArgs;
use viz::bar_chart::{BarChart, BarChartConfig};

/// Command line arguments for the sunspot report
#[derive(Parser, Debug)]
#[command(
    name = "Sunspot Report",
    about = "Derives sunspot temperature and peak wavelength from relative intensity",
    long_about = None
)]
struct Args {
    #[command(flatten)]
    shared: SharedSimulationArgs,

    /// Comma separated intensities (%) to tabulate, e.g. 25,50,75
    #[arg(long, value_delimiter = ',')]
    sweep: Vec<f64>,

    /// Width of the longest bar in characters
    #[arg(long, default_value_t = 40)]
    bar_width: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = args.shared.to_lab_config()?;
    info!("Report parameters: {:?}", config.parameters);

    let analysis = SunspotAnalysis::new(&config.parameters);
    println!("{analysis}");
    println!();

    let intensity_chart = BarChart::new(
        region_intensities(&config.parameters),
        BarChartConfig {
            title: Some("Relative intensity".to_string()),
            max_bar_width: args.bar_width,
            unit: "%".to_string(),
            precision: 0,
            ..Default::default()
        },
    )?;
    intensity_chart.print()?;
    println!();

    let temperature_chart = BarChart::new(
        temperature_comparison(&config.parameters),
        BarChartConfig {
            title: Some("Temperature".to_string()),
            max_bar_width: args.bar_width,
            unit: "K".to_string(),
            precision: 0,
            ..Default::default()
        },
    )?;
    temperature_chart.print()?;

    if !args.sweep.is_empty() {
        println!();
        println!("{:>10} | {:>8} | {:>9} | colour", "Intensity", "T (K)", "Peak (nm)");
        println!("{}", "-".repeat(46));
        for row in temperature_sweep(&args.sweep) {
            println!(
                "{:>9.0}% | {:>8.0} | {:>9.0} | {}",
                row.intensity_percent,
                row.temperature_k,
                row.peak_nm,
                describe_wavelength(row.peak_nm)
            );
        }
    }

    Ok(())
}
