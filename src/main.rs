use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use iconfit::{DEFAULT_ICON_PATH, FitIcon, Placement, fit_icon_in_place};

/// Fit icon artwork into 832x832 and center it on a 1024x1024 transparent canvas.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Icon to rewrite in place.
    #[arg(default_value = DEFAULT_ICON_PATH)]
    path: PathBuf,
    /// Print the computed placement without writing anything.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let path = &args.path;
    if args.dry_run {
        let placement = FitIcon::open(path)
            .and_then(|icon| icon.placement())
            .with_context(|| format!("cannot fit icon {}", path.display()))?;
        report(path, &placement, "Would resize");
    } else {
        let fitted = fit_icon_in_place(path)
            .with_context(|| format!("cannot fit icon {}", path.display()))?;
        report(path, fitted.placement(), "Successfully resized");
    }
    Ok(())
}

fn report(path: &Path, placement: &Placement, verb: &str) {
    log::debug!("{} placed at {:?}", path.display(), placement.offset);
    println!(
        "{verb} icon. Content size: {}x{} on {}x{} canvas.",
        placement.resize_to.width,
        placement.resize_to.height,
        placement.canvas.width,
        placement.canvas.height
    );
}
