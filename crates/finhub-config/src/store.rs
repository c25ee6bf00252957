use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use finhub_domain::PlanConfiguration;

use crate::ConfigError;

const PLAN_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Handles persistence of [`PlanConfiguration`] documents.
///
/// One file per named plan under a single directory. Saves go through a
/// temp file and rename so a crash never leaves a half-written plan.
#[derive(Debug, Clone)]
pub struct PlanStore {
    plans_dir: PathBuf,
}

impl PlanStore {
    pub fn new(plans_dir: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&plans_dir)?;
        Ok(Self { plans_dir })
    }

    /// Opens the store at the default location under the user's documents
    /// directory (falling back to the home directory, then the CWD).
    pub fn with_default_dir() -> Result<Self, ConfigError> {
        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("FinancialHub").join("plans"))
    }

    pub fn plans_dir(&self) -> &Path {
        &self.plans_dir
    }

    pub fn plan_path(&self, name: &str) -> PathBuf {
        self.plans_dir
            .join(format!("{}.{}", canonical_name(name), PLAN_EXTENSION))
    }

    /// Loads a named plan. A missing file is an I/O `NotFound` error; use
    /// [`PlanStore::load_or_default`] when a fresh default is acceptable.
    pub fn load(&self, name: &str) -> Result<PlanConfiguration, ConfigError> {
        let path = self.plan_path(name);
        let data = fs::read_to_string(&path)?;
        serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
    }

    /// Loads a named plan, or returns the default configuration when no
    /// file exists yet.
    pub fn load_or_default(&self, name: &str) -> Result<PlanConfiguration, ConfigError> {
        if self.plan_path(name).exists() {
            self.load(name)
        } else {
            Ok(PlanConfiguration::default())
        }
    }

    pub fn save(&self, name: &str, plan: &PlanConfiguration) -> Result<(), ConfigError> {
        let path = self.plan_path(name);
        let json = serde_json::to_string_pretty(plan)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Lists stored plan slugs in alphabetical order.
    pub fn list_plans(&self) -> Result<Vec<String>, ConfigError> {
        if !self.plans_dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.plans_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(PLAN_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                entries.push(stem.to_string());
            }
        }
        entries.sort();
        Ok(entries)
    }

    pub fn delete(&self, name: &str) -> Result<(), ConfigError> {
        let path = self.plan_path(name);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Lowercased alphanumeric slug with dashes, safe as a file stem.
fn canonical_name(name: &str) -> String {
    let mut slug = String::new();
    let mut last_dash = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !slug.is_empty() && !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        "plan".to_string()
    } else {
        trimmed.to_string()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
