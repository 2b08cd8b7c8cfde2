use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sqlfmt", version)]
#[command(about = "Expand macros, format statements and check function calls in a script")]
struct Cli {
    /// Script to format; output goes to `<FILE>.formatted`
    file: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match sqlfmt::format_file(&cli.file) {
        Ok(output) => {
            println!(
                "Formatted and validated code written to {}",
                output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
