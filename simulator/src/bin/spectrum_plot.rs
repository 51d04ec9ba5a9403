//! Plot normalized black-body spectra of the photosphere and a sunspot
//!
//! The visible band is shaded and the Wien peak of each curve is marked,
//! showing how the cooler spot's emission shifts towards the red.
//!
//! Usage:
//! ```
//! cargo run --bin spectrum_plot -- [OPTIONS]
//! ```

use std::error::Error;
use std::path::Path;

use clap::Parser;
use log::debug;
use plotters::prelude::*;
use shared::range_arg::SampledRange;
use sunspot_sim::analysis::{SunspotAnalysis, VISIBLE_BAND_NM};
use sunspot_sim::photometry::constants::SUN_TEMPERATURE_K;
use sunspot_sim::photometry::spectrum::{compute_spectrum, SpectralCurve, WavelengthRange};
use sunspot_sim::shared_args::SharedSimulationArgs;

/// Command line arguments for spectrum plotting
#[derive(Parser, Debug)]
#[command(
    name = "Sunspot Spectrum Plotter",
    about = "Plots photosphere and sunspot black-body spectra",
    long_about = None
)]
struct Args {
    #[command(flatten)]
    shared: SharedSimulationArgs,

    /// Output file path
    #[arg(short, long, default_value = "plots/sunspot_spectrum.png")]
    output: String,

    /// Wavelength sampling as start:stop:samples in nm (overrides the config file)
    #[arg(long)]
    wavelengths: Option<SampledRange>,
}

const PHOTOSPHERE_COLOR: RGBColor = RGBColor(255, 170, 0);
const SPOT_COLOR: RGBColor = RGBColor(200, 30, 30);

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = args.shared.to_lab_config()?;
    let range = match args.wavelengths {
        Some(r) => WavelengthRange::new(r.start, r.stop, r.samples)?,
        None => config.spectrum,
    };

    let analysis = SunspotAnalysis::new(&config.parameters);
    let photosphere = compute_spectrum(SUN_TEMPERATURE_K, &range);
    let spot = compute_spectrum(analysis.spot_temperature_k, &range);
    debug!(
        "Sampled peaks: photosphere {:?} nm, spot {:?} nm",
        photosphere.sampled_peak_nm(),
        spot.sampled_peak_nm()
    );

    if let Some(parent) = Path::new(&args.output).parent() {
        std::fs::create_dir_all(parent)?;
    }

    println!(
        "Plotting spectra at {:.0}K and {:.0}K over {:.0}-{:.0} nm...",
        SUN_TEMPERATURE_K, analysis.spot_temperature_k, range.start_nm, range.end_nm
    );
    draw_spectra(&args.output, &range, &analysis, &photosphere, &spot)?;

    println!("Plot saved to: {}", args.output);
    Ok(())
}

/// Draw both curves with the visible band and Wien peaks
fn draw_spectra(
    output: &str,
    range: &WavelengthRange,
    analysis: &SunspotAnalysis,
    photosphere: &SpectralCurve,
    spot: &SpectralCurve,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(output, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = 1.05;
    let mut chart = ChartBuilder::on(&root)
        .caption("Black-Body Spectra: Photosphere vs Sunspot", ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(range.start_nm..range.end_nm, 0.0f64..y_max)?;

    chart
        .configure_mesh()
        .x_label_formatter(&|x| format!("{}", *x as i32))
        .y_label_formatter(&|y| format!("{:.1}", y))
        .x_desc("Wavelength (nm)")
        .y_desc("Relative Spectral Radiance")
        .light_line_style(BLACK.mix(0.1))
        .draw()?;

    let band_start = VISIBLE_BAND_NM.0.max(range.start_nm);
    let band_end = VISIBLE_BAND_NM.1.min(range.end_nm);
    if band_start < band_end {
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(band_start, 0.0), (band_end, y_max)],
                YELLOW.mix(0.15).filled(),
            )))?
            .label("Visible band")
            .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], YELLOW.mix(0.3).filled()));
    }

    chart
        .draw_series(LineSeries::new(photosphere.points(), PHOTOSPHERE_COLOR.stroke_width(2)))?
        .label(format!("Photosphere {:.0}K", SUN_TEMPERATURE_K))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], PHOTOSPHERE_COLOR));

    chart
        .draw_series(LineSeries::new(spot.points(), SPOT_COLOR.stroke_width(2)))?
        .label(format!("Sunspot {:.0}K", analysis.spot_temperature_k))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], SPOT_COLOR));

    // Wien peaks, skipped when outside the plotted range or undefined
    for (peak_nm, color) in [
        (analysis.photosphere_peak_nm, PHOTOSPHERE_COLOR),
        (analysis.spot_peak_nm, SPOT_COLOR),
    ] {
        if peak_nm > range.start_nm && peak_nm < range.end_nm {
            chart.draw_series(LineSeries::new(
                vec![(peak_nm, 0.0), (peak_nm, y_max)],
                color.mix(0.6).stroke_width(1),
            ))?;
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    Ok(())
}
