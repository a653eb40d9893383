use anyhow::Context;
use loadcore::{LoadProfile, RangeSelector, DEFAULT_HORIZON_MINUTES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_BRIDGE_PORT: u16 = 9000;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorkflowConfig {
    pub horizon_minutes: usize,
    /// Fixed seed for reproducible noise; fresh entropy when absent.
    pub seed: Option<u64>,
    pub default_range: RangeSelector,
    pub bridge_port: u16,
    pub profile: LoadProfile,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            horizon_minutes: DEFAULT_HORIZON_MINUTES,
            seed: None,
            default_range: RangeSelector::Month,
            bridge_port: DEFAULT_BRIDGE_PORT,
            profile: LoadProfile::default(),
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        horizon_minutes: usize,
        seed: Option<u64>,
        default_range: RangeSelector,
        bridge_port: u16,
    ) -> Self {
        Self {
            horizon_minutes,
            seed,
            default_range,
            bridge_port,
            profile: LoadProfile::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_keeps_default_profile() {
        let cfg = WorkflowConfig::from_args(1440, Some(7), RangeSelector::Year, 9100);
        assert_eq!(cfg.horizon_minutes, 1440);
        assert_eq!(cfg.profile, LoadProfile::default());
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"horizon_minutes: 2880\nseed: 5\ndefault_range: year\nprofile:\n  base_watts: 350.0\n  evening_peak:\n    start_hour: 17\n    end_hour: 21\n    multiplier: 2.0\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.horizon_minutes, 2880);
        assert_eq!(cfg.seed, Some(5));
        assert_eq!(cfg.default_range, RangeSelector::Year);
        assert_eq!(cfg.bridge_port, DEFAULT_BRIDGE_PORT);
        assert_eq!(cfg.profile.base_watts, 350.0);
        assert_eq!(cfg.profile.evening_peak.start_hour, 17);
        assert_eq!(cfg.profile.floor_watts, 50.0);
    }

    #[test]
    fn config_load_reports_missing_file() {
        let err = WorkflowConfig::load("does/not/exist.yaml").unwrap_err();
        assert!(err.to_string().contains("reading workflow config"));
    }
}
