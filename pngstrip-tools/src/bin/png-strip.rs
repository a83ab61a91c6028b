use pngstrip::display::human_size;
use pngstrip::Png;
use tracing_subscriber::prelude::*;

const USAGE: &str = "Usage: png-strip <file> [<position>...|--all-removable] [-o <output>]";

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().expect(USAGE);

    let mut output = String::from("result.png");
    let mut all_removable = false;
    let mut positions = Vec::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--all-removable" => all_removable = true,
            "-o" => output = args.next().expect(USAGE),
            position => positions.push(position.parse::<usize>().expect(USAGE)),
        }
    }

    let data = std::fs::read(path).unwrap();
    let png = match Png::new(data) {
        Ok(png) => png,
        Err(err) => {
            eprintln!("Not a readable PNG: {err}");
            std::process::exit(1);
        }
    };

    let mut builder = png.selection_builder();
    if all_removable {
        builder.select_all_removable();
    }
    for position in positions {
        if let Err(err) = builder.select(position) {
            eprintln!("Skipping: {err}");
        }
    }

    let selection = match builder.snapshot().validate(png.data()) {
        Ok(selection) => selection,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let result = match png.remove_chunks(&selection) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    std::fs::write(&output, &result).unwrap();
    println!(
        "Wrote {output} ({}, {} removed)",
        human_size(result.len().try_into().unwrap_or(u64::MAX)),
        human_size(builder.removed_len().try_into().unwrap_or(u64::MAX))
    );
}
