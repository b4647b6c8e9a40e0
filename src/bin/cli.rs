// src/bin/cli.rs
use vm_analyzer::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
