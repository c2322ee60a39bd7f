use std::path::PathBuf;

use anyhow::Result;

use super::load_registry;

pub fn run(config: Option<PathBuf>) -> Result<()> {
    let (_, registry) = load_registry(config)?;

    println!("{:<20} Description", "Name");
    println!("{}", "-".repeat(90));

    for d in registry.detectors() {
        println!("{:<20} {}", d.name(), d.description());
    }

    println!("\nTotal: {} detectors", registry.len());
    Ok(())
}
