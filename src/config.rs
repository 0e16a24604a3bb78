use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::GroupOrder;
use crate::domains::components::COMPONENTS_FILE;
use crate::domains::landing::LANDING_FILE;
use crate::domains::tech_stack::{PATTERNS_FILE, PERFORMANCE_FILE, PRACTICES_FILE};
use crate::domains::ux_guide::UX_FILE;
use crate::error::{CatalogError, Result};

pub const CONFIG_ENV: &str = "DESIGN_CATALOG_CONFIG";
pub const PROJECT_CONFIG_FILE: &str = "design-catalog.toml";
const GLOBAL_CONFIG_PATH: &str = "design-catalog/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub quick_wins: QuickWinsConfig,
}

impl Config {
    /// Layer defaults, the global and project files (or an explicit file), then env overrides.
    pub fn load(explicit_path: Option<&Path>, root: &Path) -> Result<Self> {
        Self::load_with_env(explicit_path, root, |key| std::env::var(key).ok())
    }

    /// [`Self::load`] with a caller-supplied environment lookup.
    pub fn load_with_env<F>(explicit_path: Option<&Path>, root: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| env(CONFIG_ENV).map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?.ok_or_else(|| {
                CatalogError::MissingConfig(format!("config file {} not found", path.display()))
            })?;
            config.merge_patch(patch);
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides(&env)?;
        config.data.resolve_against(root);
        config.validate()?;

        debug!(data_dir = %config.data.dir.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse a complete configuration from TOML text; absent keys keep their defaults.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let patch: ConfigPatch = toml::from_str(raw)
            .map_err(|err| CatalogError::Config(format!("parse config: {err}")))?;
        let mut config = Self::default();
        config.merge_patch(patch);
        config.validate()?;
        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            debug!("no user config directory, skipping global config");
            return Ok(None);
        };
        Self::load_patch(&dir.join(GLOBAL_CONFIG_PATH))
    }

    fn load_project(root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&root.join(PROJECT_CONFIG_FILE))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path).map_err(|err| {
            CatalogError::Config(format!("read config {}: {err}", path.display()))
        })?;
        let patch = toml::from_str(&raw).map_err(|err| {
            CatalogError::Config(format!("parse config {}: {err}", path.display()))
        })?;
        debug!(path = %path.display(), "merged config file");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.data {
            self.data.merge(patch);
        }
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
        if let Some(patch) = patch.quick_wins {
            self.quick_wins.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self, env: &impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = env("DESIGN_CATALOG_DATA_DIR") {
            self.data.dir = PathBuf::from(value);
        }
        if let Some(value) = env_usize(env, "DESIGN_CATALOG_MAX_RESULTS")? {
            self.search.max_results = value;
        }
        if let Some(value) = env_usize(env, "DESIGN_CATALOG_QUICK_WINS_MAX")? {
            self.quick_wins.max_results = value;
        }
        if let Some(value) = env_u64(env, "DESIGN_CATALOG_QUICK_WINS_SEED")? {
            self.quick_wins.seed = Some(value);
        }
        if let Some(value) = env("DESIGN_CATALOG_QUICK_WINS_ORDER") {
            self.quick_wins.order = value;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.search.max_results == 0 {
            return Err(CatalogError::Config(
                "search.max_results must be at least 1".to_string(),
            ));
        }
        self.quick_wins.group_order()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default)]
    pub dir: PathBuf,
    #[serde(default)]
    pub landing_file: String,
    #[serde(default)]
    pub practices_file: String,
    #[serde(default)]
    pub patterns_file: String,
    #[serde(default)]
    pub performance_file: String,
    #[serde(default)]
    pub ux_file: String,
    #[serde(default)]
    pub components_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data/design"),
            landing_file: LANDING_FILE.to_string(),
            practices_file: PRACTICES_FILE.to_string(),
            patterns_file: PATTERNS_FILE.to_string(),
            performance_file: PERFORMANCE_FILE.to_string(),
            ux_file: UX_FILE.to_string(),
            components_file: COMPONENTS_FILE.to_string(),
        }
    }
}

impl DataConfig {
    fn merge(&mut self, patch: DataPatch) {
        if let Some(value) = patch.dir {
            self.dir = value;
        }
        if let Some(value) = patch.landing_file {
            self.landing_file = value;
        }
        if let Some(value) = patch.practices_file {
            self.practices_file = value;
        }
        if let Some(value) = patch.patterns_file {
            self.patterns_file = value;
        }
        if let Some(value) = patch.performance_file {
            self.performance_file = value;
        }
        if let Some(value) = patch.ux_file {
            self.ux_file = value;
        }
        if let Some(value) = patch.components_file {
            self.components_file = value;
        }
    }

    fn resolve_against(&mut self, root: &Path) {
        if self.dir.is_relative() {
            self.dir = root.join(&self.dir);
        }
    }

    #[must_use]
    pub fn landing_path(&self) -> PathBuf {
        self.dir.join(&self.landing_file)
    }

    #[must_use]
    pub fn practices_path(&self) -> PathBuf {
        self.dir.join(&self.practices_file)
    }

    #[must_use]
    pub fn patterns_path(&self) -> PathBuf {
        self.dir.join(&self.patterns_file)
    }

    #[must_use]
    pub fn performance_path(&self) -> PathBuf {
        self.dir.join(&self.performance_file)
    }

    #[must_use]
    pub fn ux_path(&self) -> PathBuf {
        self.dir.join(&self.ux_file)
    }

    #[must_use]
    pub fn components_path(&self) -> PathBuf {
        self.dir.join(&self.components_file)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_results: 5 }
    }
}

impl SearchConfig {
    fn merge(&mut self, patch: SearchPatch) {
        if let Some(value) = patch.max_results {
            self.max_results = value;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickWinsConfig {
    #[serde(default)]
    pub max_results: usize,
    /// `shuffled` or `insertion`.
    #[serde(default)]
    pub order: String,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for QuickWinsConfig {
    fn default() -> Self {
        Self {
            max_results: 5,
            order: "shuffled".to_string(),
            seed: None,
        }
    }
}

impl QuickWinsConfig {
    fn merge(&mut self, patch: QuickWinsPatch) {
        if let Some(value) = patch.max_results {
            self.max_results = value;
        }
        if let Some(value) = patch.order {
            self.order = value;
        }
        if let Some(value) = patch.seed {
            self.seed = Some(value);
        }
    }

    pub fn group_order(&self) -> Result<GroupOrder> {
        match self.order.trim().to_lowercase().as_str() {
            "shuffled" | "random" => Ok(GroupOrder::Shuffled { seed: self.seed }),
            "insertion" => Ok(GroupOrder::Insertion),
            other => Err(CatalogError::Config(format!(
                "invalid quick_wins.order {other} (expected shuffled|insertion)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub data: Option<DataPatch>,
    pub search: Option<SearchPatch>,
    pub quick_wins: Option<QuickWinsPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DataPatch {
    pub dir: Option<PathBuf>,
    pub landing_file: Option<String>,
    pub practices_file: Option<String>,
    pub patterns_file: Option<String>,
    pub performance_file: Option<String>,
    pub ux_file: Option<String>,
    pub components_file: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SearchPatch {
    pub max_results: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct QuickWinsPatch {
    pub max_results: Option<usize>,
    pub order: Option<String>,
    pub seed: Option<u64>,
}

fn env_usize(env: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<usize>> {
    match env(key) {
        Some(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|err| CatalogError::Config(format!("invalid {key} value {value}: {err}"))),
        None => Ok(None),
    }
}

fn env_u64(env: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<u64>> {
    match env(key) {
        Some(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|err| CatalogError::Config(format!("invalid {key} value {value}: {err}"))),
        None => Ok(None),
    }
}
