use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rust_solar::error::Error;
use rust_solar::model::{Inspector, SolarSystem};

/// Prints what clicking on a body would show.
#[derive(Debug, Parser)]
struct Args {
    /// Body name, case-insensitive
    name: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Starting angles don't show up in the text, so any seed will do
    let mut rng = StdRng::seed_from_u64(0);
    let system = SolarSystem::new(&mut rng)?;
    let inspector = Inspector::new(&system);

    let body = system
        .find_body(&args.name)
        .ok_or_else(|| Error::UnknownBody(args.name.clone()))?;

    println!("{}", inspector.info_text(&system, body.id));
    if let Some(rings) = body.info.rings {
        println!("Rings: {} to {} radii", rings.inner, rings.outer);
    }
    Ok(())
}
