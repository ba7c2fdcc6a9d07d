use log::info;

use crate::types::AppResult;
use crate::types::config::config;

pub fn execute(format: String) -> AppResult<()> {
    let effective_config = config().to_effective();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&effective_config)?);
    } else {
        // Table format
        info!("Effective Configuration:");
        info!("");
        info!("Global:");
        info!(
            "  baseline_dir: {}",
            effective_config.baseline_dir.as_ref().unwrap()
        );
        info!(
            "  restricted_dir: {}",
            effective_config.restricted_dir.as_ref().unwrap()
        );
        info!(
            "  suites: [{}]",
            effective_config.suites.as_ref().unwrap().join(", ")
        );
        info!("  marker: {}", effective_config.marker.as_ref().unwrap());

        info!("");
        info!("Log:");
        if let Some(log) = &effective_config.log {
            info!("  level: {}", log.level.as_ref().unwrap());
            match log.color {
                Some(true) => info!("  color: on"),
                Some(false) => info!("  color: off"),
                None => info!("  color: auto"),
            }
        }

        info!("");
        info!("Scan:");
        if let Some(scan) = &effective_config.scan {
            if let Some(ignore) = &scan.ignore {
                if ignore.is_empty() {
                    info!("  ignore: []");
                } else {
                    info!("  ignore: [{}]", ignore.join(", "));
                }
            } else {
                info!("  ignore: (not set)");
            }
        }
    }

    Ok(())
}
