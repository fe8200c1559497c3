//! Command-line driver for the `cubekin` cube engine.

mod cli;
mod settings;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    // Initialize logging.
    env_logger::builder().init();
    color_eyre::install()?;

    let args = cli::Args::parse();
    let settings = settings::Settings::load(args.config.as_deref())?;
    cli::exec(args.subcommand, &settings)
}
