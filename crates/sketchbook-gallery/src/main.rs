mod meshes;
mod registry;
mod sample;
mod samples;
mod shell;

use anyhow::Result;

use sketchbook_engine::logging::{LoggingConfig, init_logging};
use sketchbook_engine::window::{Runtime, RuntimeConfig};

use crate::shell::Shell;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // Optional initial sample by name; unknown names are ignored and the
    // gallery starts empty.
    let initial = std::env::args().nth(1);

    println!("sketchbook :: wgpu sample gallery");
    println!();
    for (i, entry) in registry::SAMPLES.iter().enumerate() {
        println!("  [{}] {}", i + 1, entry.name);
    }
    println!();
    println!("  number keys switch samples, Esc quits");
    println!();

    let shell = Shell::new(initial.as_deref());

    Runtime::run(RuntimeConfig::default(), shell)
}
