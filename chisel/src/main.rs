use anyhow::{Context, Result};
use chisel::FragmentKind;
use chisel::cli::{Cli, Cmd};
use chisel::config::load_config;
use chisel::render::render;
use chisel::sheet::Sheet;
use clap::Parser;
use strum::IntoEnumIterator;
use tracing::Level;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Cmd::Render { sheet, format } => {
            let config = load_config()?;
            let sheet_path = sheet.unwrap_or(config.render.sheet);
            let format = format.unwrap_or(config.render.format);

            let selectors = Sheet::from_file(&sheet_path)
                .and_then(|sheet| sheet.build())
                .with_context(|| format!("Failed to build {sheet_path}"))?;

            tracing::info!("rendering {} selector(s) as {format}", selectors.len());
            print!("{}", render(&selectors, format));
        }
        Cmd::Order => {
            for kind in FragmentKind::iter() {
                println!("{kind}");
            }
        }
    }

    Ok(())
}
