//! `hydroroute init` command - write the sample network definition

use std::path::Path;

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::print_json;
use crate::output_by_format_result;
use hydroroute_core::config::NetworkConfig;
use hydroroute_core::error::{HydroError, Result};

/// Execute the init command
pub fn execute(cli: &Cli, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(HydroError::already_exists(
            "network file",
            path.display(),
        ));
    }

    let config = NetworkConfig::sample();
    config.save(path)?;
    tracing::info!(path = %path.display(), "network_written");

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "status": "ok",
            "path": path.display().to_string(),
            "centers": config.centers,
            "pipes": config.pipes.len(),
        })),
        human => {
            println!("Wrote sample network to {}", path.display());
            if !cli.quiet {
                println!(
                    "{} centers, {} pipes. Pass it with `--network {}`.",
                    config.centers,
                    config.pipes.len(),
                    path.display()
                );
            }
        }
    )
}
