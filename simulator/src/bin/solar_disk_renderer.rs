//! Render a synthetic solar disk with sunspots to a PNG image
//!
//! Usage:
//! ```
//! cargo run --release --bin solar_disk_renderer -- [OPTIONS]
//! ```
//!
//! Set `RUST_LOG=info` to see region statistics of the rendered disk.

use std::error::Error;

use clap::Parser;
use log::{info, warn};
use shared::image_proc::{save_rgb_image, save_u8_image, Colormap};
use sunspot_sim::shared_args::SharedSimulationArgs;
use sunspot_sim::solar::SolarDiskGenerator;

/// Command line arguments for disk rendering
#[derive(Parser, Debug)]
#[command(
    name = "Solar Disk Renderer",
    about = "Renders a limb-darkened solar disk with umbra/penumbra sunspots",
    long_about = None
)]
struct Args {
    #[command(flatten)]
    shared: SharedSimulationArgs,

    /// Output file path
    #[arg(short, long, default_value = "plots/solar_disk.png")]
    output: String,

    /// Colormap applied to the intensities (hot or gray)
    #[arg(long, default_value = "hot")]
    colormap: Colormap,

    /// Write raw 8-bit intensities instead of a colormapped image
    #[arg(long, default_value_t = false)]
    raw: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = args.shared.to_lab_config()?;

    println!(
        "Rendering {} spot(s) at {:.0}% intensity, {:.1}% radius on a {}x{} grid...",
        config.parameters.spot_count,
        config.parameters.spot_intensity_percent,
        config.parameters.spot_size_percent,
        config.disk.resolution,
        config.disk.resolution
    );

    let generator = SolarDiskGenerator::new(config.disk);
    let disk = generator.generate(&config.parameters);

    match disk.stats(&disk.photosphere_mask()) {
        Some(stats) => info!("Photosphere: {}", stats),
        None => warn!("No photosphere pixels at this resolution"),
    }
    for spot in disk.spots() {
        if let Some(stats) = disk.stats(&disk.umbra_mask(spot)) {
            info!("Spot {} umbra: {}", spot.index + 1, stats);
        }
        if let Some(stats) = disk.stats(&disk.penumbra_mask(spot)) {
            info!("Spot {} penumbra: {}", spot.index + 1, stats);
        }
    }

    if args.raw {
        save_u8_image(&disk.to_u8(), &args.output)?;
    } else {
        save_rgb_image(&disk.to_rgb(args.colormap), &args.output)?;
    }

    println!("Image saved to: {}", args.output);
    Ok(())
}
