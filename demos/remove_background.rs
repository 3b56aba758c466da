use std::env;

use imageops_matte::{MatteConfig, RemoveBackgroundExt};

/// Parses a fraction in `[0, 1]` or a percentage such as `65%`.
fn parse_unit(value: &str) -> Result<f32, String> {
    let parsed = match value.strip_suffix('%') {
        Some(percentage) => percentage.parse::<f32>().map(|p| p / 100.0),
        None => value.parse::<f32>(),
    };
    parsed.map_err(|_| format!("Invalid value: {value}"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!(
            "Usage: {} <input_image> <output.png> [sensitivity] [smoothness] [--preserve-hair] [--auto-enhance]",
            args[0]
        );
        eprintln!("Example: {} photo.jpg cutout.png 65% 40% --auto-enhance", args[0]);
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = &args[2];

    let mut values = Vec::new();
    let mut preserve_hair = false;
    let mut auto_enhance = false;
    for arg in &args[3..] {
        match arg.as_str() {
            "--preserve-hair" => preserve_hair = true,
            "--auto-enhance" => auto_enhance = true,
            value => values.push(parse_unit(value)?),
        }
    }

    let defaults = MatteConfig::default();
    let sensitivity = values.first().copied().unwrap_or(defaults.sensitivity());
    let smoothness = values.get(1).copied().unwrap_or(defaults.smoothness());
    let config = MatteConfig::new(sensitivity, smoothness)?
        .with_preserve_hair(preserve_hair)
        .with_auto_enhance(auto_enhance);

    // Decoded images without alpha come back fully opaque
    let image = image::open(input_path)?.to_rgba8();
    println!(
        "Processing {}x{} image: sensitivity {}, smoothness {}",
        image.width(),
        image.height(),
        config.sensitivity(),
        config.smoothness()
    );

    let mut matted = image;
    let report = matted.remove_background_mut(&config)?;
    println!(
        "Background {:?}: removed {} of {} pixels ({} edge, {} detail refined)",
        report.background.0,
        report.background_pixels,
        report.pixel_count,
        report.edge_pixels,
        report.detail_pixels
    );

    matted.save_with_format(output_path, image::ImageFormat::Png)?;
    println!("Saved to {output_path}");

    Ok(())
}
