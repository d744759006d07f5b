//! Standalone demo: prints a color through every conversion.
//!
//! Run with `RUST_LOG=trace` to see clamping events.

use picker_color::{modify_brightness, set_hue, Cmyk, Hsb, Rgb};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = std::env::args().nth(1).unwrap_or_else(|| "3B82F6".to_string());
    let color: Rgb = input.parse()?;

    let hsb: Hsb = color.into();
    let cmyk: Cmyk = color.into();
    println!("rgb      {color}");
    println!("hsb      {hsb}");
    println!("cmyk     {cmyk}");
    println!("web-safe {}", color.to_web_safe());
    println!("brighter {}", modify_brightness(color, 1.5));
    println!("darker   {}", modify_brightness(color, 0.5));
    println!("opposite {}", set_hue(color, (hsb.h() + 0.5) % 1.0));
    println!("clamped  {}", Hsb::new(1.5, -0.2, 2.0));

    Ok(())
}
