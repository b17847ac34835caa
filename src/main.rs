use clap::{CommandFactory, Parser};
use console::style;
use dialoguer::Confirm;
use mcasset_downloader::{Assembler, Config, ConsoleProgress, Error, MetaClient};
use std::{
    fs::File,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};
use tracing_subscriber::EnvFilter;

/// Packages the assets of a Minecraft version into a zip archive.
#[derive(Debug, Parser)]
#[command(
    version,
    after_help = "Note: versions below 1.7.3 will not work due to a different asset format"
)]
struct Cli {
    /// Version to download, e.g. 1.16.3
    #[arg(value_name = "VERSION")]
    version_id: String,
    /// Path of the zip archive to write
    output: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if std::env::args()
        .nth(1)
        .is_some_and(|arg| arg.eq_ignore_ascii_case("help"))
    {
        if let Err(err) = Cli::command().print_help() {
            tracing::error!("failed to print usage: {err}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, Error> {
    if cli.output.exists() && !confirm_overwrite(&cli.output) {
        println!("Aborting.");
        return Ok(ExitCode::SUCCESS);
    }

    let started = Instant::now();
    let client = MetaClient::new(Config::default())?;
    let catalog = client.resolve().await?;
    if catalog.get(&cli.version_id).is_none() {
        println!("Version {} not found", cli.version_id);
        return Ok(ExitCode::FAILURE);
    }

    let assembler = Assembler::new(&client, ConsoleProgress);
    let assembly = assembler.prepare(&catalog, &cli.version_id).await?;
    let output = File::create(&cli.output)?;
    assembler.write(&assembly, output).await?;

    println!(
        "{}",
        style(format!(
            "Done! Took {} seconds",
            started.elapsed().as_secs()
        ))
        .green()
    );
    Ok(ExitCode::SUCCESS)
}

// Anything but an explicit yes, including a closed stdin, keeps the file.
fn confirm_overwrite(path: &Path) -> bool {
    Confirm::new()
        .with_prompt(format!(
            "File {} already exists. Overwrite it?",
            path.display()
        ))
        .default(false)
        .interact()
        .unwrap_or(false)
}
