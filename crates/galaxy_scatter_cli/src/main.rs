use clap::Parser;
use galaxy_scatter_cli::{execute, init_tracing, Cli};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let output = execute(&cli)?;

    println!(
        "Map generated successfully! Check the {} folder for the output.",
        output.run_dir.display()
    );
    Ok(())
}
