use clap::Parser;
use julia_explorer::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let settings = Cli::parse().into_settings()?;
    julia_explorer::run_gui(settings)?;

    Ok(())
}
