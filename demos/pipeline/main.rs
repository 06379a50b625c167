//! Runs a path through the Linea pipeline and prints each stage.
//!
//! Usage:
//! ```text
//! cargo run --example pipeline                              # built-in rounded rect
//! cargo run --example pipeline -- "M0,0 C0,10 10,10 10,0"   # custom path data
//! RUST_LOG=linea=debug cargo run --example pipeline         # with operation logs
//! ```

use linea::operations::offset::OffsetParams;
use linea::operations::smoothing::SmoothParams;
use linea::{LineaError, Path, ShapeRecord};

fn main() -> Result<(), LineaError> {
    // Default: WARN for everything, INFO for linea.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("linea=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let path = match std::env::args().nth(1) {
        Some(data) => Path::parse(&data)?,
        None => ShapeRecord::Rect {
            x: 0.0,
            y: 0.0,
            width: 40.0,
            height: 20.0,
            rx: Some(5.0),
            ry: None,
        }
        .to_path()?,
    };

    println!("input      {path}");
    println!("closed     {}", path.is_closed());
    println!("kinks      {:?}", path.kinks(1e-8));
    println!("cubics     {}", path.to_cubics(0.1)?);
    println!("polyline   {}", path.as_polyline(0.1)?);

    let smoothing = SmoothParams {
        ignore_unfixable_kinks: true,
        ..SmoothParams::default()
    };
    println!("smoothed   {}", path.smoothed(&smoothing)?);
    println!("offset     {}", path.offset(&OffsetParams::new(2.0))?);

    let geometry = path.to_geometry(0.1)?;
    println!(
        "geometry   {:?} with {} coordinates",
        geometry.kind(),
        geometry.coordinates.len()
    );
    Ok(())
}
