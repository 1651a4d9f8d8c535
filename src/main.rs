mod args;
mod cli;

use args::{Cli, Commands};
use clap::Parser;
use slide_lines::RcLoader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    // Load RC configuration
    let config = RcLoader::load_config();

    let rows = match cli.command {
        Commands::Outline { file } => cli::outline(&file, &config)?,
        Commands::Normalize { file, check } => vec![cli::normalize(&file, check)?],
        Commands::Keys {
            file,
            keys,
            outline,
            write,
        } => cli::keys(&file, &keys, config, outline, write)?,
    };

    for row in rows {
        println!("{row}");
    }
    Ok(())
}
