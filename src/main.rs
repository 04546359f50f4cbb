use clap::Parser;
use julia_explorer::{Cli, CliRenderController, PpmFilePresenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let settings = Cli::parse().into_settings()?;
    let presenter = PpmFilePresenter::new();
    let mut controller = CliRenderController::new(settings.julia, settings.pixel_rect, presenter);

    controller.generate()?;
    controller.write(&settings.output)?;

    Ok(())
}
