use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

const DEFAULT_BASELINE_DIR: &str = "spilldata_baseline";
const DEFAULT_RESTRICTED_DIR: &str = "spilldata_restricted";
const DEFAULT_SUITES: [&str; 2] = ["sunspider", "kraken"];
const DEFAULT_MARKER: &str = "spill count";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn color(&self) -> Option<bool> {
        self.color // None has semantic meaning (auto-detect)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            level: Some(self.level().to_string()),
            color: self.color,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ScanConfig {
    pub ignore: Option<Vec<String>>, // glob patterns excluded from traversal
}

impl ScanConfig {
    pub fn ignore(&self) -> &[String] {
        self.ignore.as_deref().unwrap_or(&[])
    }

    pub fn to_effective(&self) -> Self {
        Self {
            ignore: Some(self.ignore().to_vec()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    // Top-level fields
    pub baseline_dir: Option<String>,
    pub restricted_dir: Option<String>,
    pub suites: Option<Vec<String>>, // report order
    pub marker: Option<String>,

    // Nested sections
    pub log: Option<LogConfig>,
    pub scan: Option<ScanConfig>,
}

impl Config {
    pub fn baseline_dir(&self) -> &str {
        self.baseline_dir.as_deref().unwrap_or(DEFAULT_BASELINE_DIR)
    }

    pub fn restricted_dir(&self) -> &str {
        self.restricted_dir
            .as_deref()
            .unwrap_or(DEFAULT_RESTRICTED_DIR)
    }

    pub fn suites(&self) -> Vec<String> {
        self.suites
            .clone()
            .unwrap_or_else(|| DEFAULT_SUITES.iter().map(|s| s.to_string()).collect())
    }

    pub fn marker(&self) -> &str {
        self.marker.as_deref().unwrap_or(DEFAULT_MARKER)
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn scan(&self) -> ScanConfig {
        self.scan.clone().unwrap_or_default()
    }

    pub fn to_effective(&self) -> Self {
        Self {
            baseline_dir: Some(self.baseline_dir().to_string()),
            restricted_dir: Some(self.restricted_dir().to_string()),
            suites: Some(self.suites()),
            marker: Some(self.marker().to_string()),
            log: Some(self.log().to_effective()),
            scan: Some(self.scan().to_effective()),
        }
    }

    /// CLI value wins over the config file, which wins over the default.
    pub fn resolve_baseline_dir(&self, cli: Option<&str>) -> PathBuf {
        PathBuf::from(cli.unwrap_or_else(|| self.baseline_dir()))
    }

    pub fn resolve_restricted_dir(&self, cli: Option<&str>) -> PathBuf {
        PathBuf::from(cli.unwrap_or_else(|| self.restricted_dir()))
    }

    /// A non-empty CLI suite list replaces the configured one outright.
    pub fn resolve_suites(&self, cli: &[String]) -> Vec<String> {
        if cli.is_empty() {
            self.suites()
        } else {
            cli.to_vec()
        }
    }

    pub fn resolve_marker(&self, cli: Option<&str>) -> String {
        cli.unwrap_or_else(|| self.marker()).to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
}

const CONFIG_FILENAME: &str = "spillstat.toml";

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn get_config_filename() -> &'static str {
    CONFIG_FILENAME
}

pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        let mut cfg = Config::default();
        // Apply nearest config file found by walking up from cwd
        if let Some(path) = find_nearest_config_file()
            && let Some(file_cfg) = read_config_file(&path)
        {
            apply_file_config(&mut cfg, &file_cfg);
        }
        cfg
    })
}

pub fn init_with_overrides(overrides: &CliOverrides) {
    let mut cfg = Config::default();

    // 1) Config file: walk up from cwd and use the first config file found
    if let Some(path) = find_nearest_config_file()
        && let Some(file_cfg) = read_config_file(&path)
    {
        apply_file_config(&mut cfg, &file_cfg);
    }

    // 2) CLI arguments (highest priority). Only override if user specified.
    apply_cli_overrides(&mut cfg, overrides);

    let _ = CONFIG.set(cfg);
}

fn read_config_file(path: &Path) -> Option<Config> {
    match fs::read_to_string(path) {
        Ok(contents) => toml::from_str::<Config>(&contents).ok(),
        Err(_) => None,
    }
}

fn apply_file_config(cfg: &mut Config, file: &Config) {
    // Merge top-level fields
    if file.baseline_dir.is_some() {
        cfg.baseline_dir = file.baseline_dir.clone();
    }
    if file.restricted_dir.is_some() {
        cfg.restricted_dir = file.restricted_dir.clone();
    }
    if file.suites.is_some() {
        cfg.suites = file.suites.clone(); // override semantics, order preserved
    }
    if file.marker.is_some() {
        cfg.marker = file.marker.clone();
    }

    // Merge log section
    if let Some(file_log) = &file.log {
        let mut log = cfg.log.clone().unwrap_or_default();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }

    // Merge scan section
    if let Some(file_scan) = &file.scan {
        let mut scan = cfg.scan.clone().unwrap_or_default();
        if let Some(patterns) = &file_scan.ignore {
            scan.ignore = Some(
                scan.ignore()
                    .iter()
                    .chain(patterns.iter())
                    .cloned()
                    .collect(),
            );
        }
        cfg.scan = Some(scan);
    }
}

fn apply_cli_overrides(cfg: &mut Config, overrides: &CliOverrides) {
    let mut log = cfg.log.clone().unwrap_or_default();
    if let Some(level) = &overrides.log_level
        && !level.trim().is_empty()
    {
        log.level = Some(level.trim().to_string());
    }
    if let Some(color_str) = &overrides.log_color {
        match color_str.to_lowercase().as_str() {
            "on" => log.color = Some(true),
            "off" => log.color = Some(false),
            _ => {}
        }
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }
}

fn find_nearest_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let config_filename = get_config_filename();
    for dir in cwd.ancestors() {
        let candidate = dir.join(config_filename);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

pub fn colors_enabled() -> bool {
    match config().log().color() {
        Some(force) => force,
        None => console::colors_enabled(),
    }
}
