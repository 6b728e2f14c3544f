use clap::Parser;
use pocketgate_core::Result;
use pocketgate_tools::convert::convert_file;
use pocketgate_tools::embed::embed_file;
use pocketgate_tools::inspect::inspect_file;
use pocketgate_tools::{Command, Config, preview};

fn main() -> Result<()> {
    env_logger::init();

    match Config::parse().command {
        Command::Convert {
            input,
            output,
            format,
        } => {
            let output = convert_file(&input, output.as_deref(), format)?;
            println!("Wrote {}", output.display());
        }
        Command::Inspect { path, samples } => print!("{}", inspect_file(&path, samples)?),
        Command::Preview(config) => preview::run(&config)?,
        Command::Embed {
            input,
            output,
            name,
        } => {
            let output = embed_file(&input, output.as_deref(), name.as_deref())?;
            println!("Wrote {}", output.display());
        }
    }

    Ok(())
}
