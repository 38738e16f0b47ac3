// Main entry point for the application

use clap::Parser;
use hashcheck::common::config::{CheckConfig, OutputFormat};
use log::{debug, info};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "hashcheck")]
#[command(about = "Verify files against a manifest of expected digests", long_about = None)]
struct Cli {
    /// Manifest file with `<file> <sha1|sha256|md5> <hex digest>` lines
    manifest: PathBuf,

    /// Directory the manifest's file names are resolved against
    directory: PathBuf,

    /// Emit one JSON object per entry instead of `name: OK` lines
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };
    let config = CheckConfig::new(cli.manifest, cli.directory).with_format(format);

    if let Err(e) = config.validate() {
        debug!("Rejected arguments: {:?}", e);
        eprintln!("Error occured while parsing command line arguments: ");
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    info!(
        "Checking {:?} against {:?}",
        config.manifest_path, config.base_dir
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match hashcheck::check::run(&config, &mut out) {
        Ok(summary) => {
            info!(
                "Checked {} entries: {} ok, {} failed, {} not found",
                summary.total(),
                summary.matched,
                summary.mismatched,
                summary.missing
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("Run aborted: {:?}", e);
            eprintln!("Error occured while running application:");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
