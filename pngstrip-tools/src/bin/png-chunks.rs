use pngstrip::display::{human_size, ChunkSummary};
use tracing_subscriber::prelude::*;

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("First argument must be a path.");

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let data = std::fs::read(path).unwrap();
    let png = match pngstrip::Png::new(data) {
        Ok(png) => png,
        Err(err) => {
            eprintln!("Not a readable PNG: {err}");
            std::process::exit(1);
        }
    };

    println!("PNG Chunks ({}):", human_size(png.data().len().try_into().unwrap_or(u64::MAX)));
    for chunk in png.chunks() {
        println!("{}", ChunkSummary::from(&chunk));
    }
}
