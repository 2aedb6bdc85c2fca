use std::fs;
use std::path::Path;

use chrono::Utc;
use fastapi_output::RichOutput;
use serde::Serialize;
use sqlmodel_console::OutputMode;

use crate::error::Result;

/// UTC timestamp for report headers.
#[must_use]
pub fn now_utc_iso() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// How the surrounding environment wants output delivered.
///
/// Agent and CI environments get one machine-readable JSON line per command;
/// interactive terminals get rich status lines.
#[derive(Debug, Clone, Serialize)]
pub struct OutputIntegration {
    pub output_mode: String,
    pub agent: bool,
    pub ci: bool,
    pub tty: bool,
}

impl OutputIntegration {
    #[must_use]
    pub fn detect() -> Self {
        let environment = fastapi_output::detect_environment();
        let mode = OutputMode::detect();
        Self {
            output_mode: mode.as_str().to_string(),
            agent: environment.is_agent || OutputMode::is_agent_environment(),
            ci: environment.is_ci,
            tty: environment.is_tty,
        }
    }

    #[must_use]
    pub fn should_emit_json(&self) -> bool {
        self.output_mode == "json"
    }
}

/// Rich status output that stays quiet in JSON mode.
#[derive(Debug, Clone)]
pub struct CliOutput {
    inner: RichOutput,
    enabled: bool,
}

impl CliOutput {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            inner: RichOutput::auto(),
            enabled,
        }
    }

    pub fn info(&self, message: &str) {
        if self.enabled {
            self.inner.info(message);
        }
    }

    pub fn success(&self, message: &str) {
        if self.enabled {
            self.inner.success(message);
        }
    }

    pub fn warning(&self, message: &str) {
        if self.enabled {
            self.inner.warning(message);
        }
    }

    pub fn error(&self, message: &str) {
        if self.enabled {
            self.inner.error(message);
        }
    }
}

#[must_use]
pub fn output_for(integration: &OutputIntegration) -> CliOutput {
    CliOutput::new(!integration.should_emit_json())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

pub fn write_string(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{OutputIntegration, output_for, write_string};

    fn integration_with_mode(mode: &str) -> OutputIntegration {
        OutputIntegration {
            output_mode: mode.to_string(),
            agent: false,
            ci: false,
            tty: false,
        }
    }

    #[test]
    fn json_mode_suppresses_human_output() {
        assert!(integration_with_mode("json").should_emit_json());
        assert!(!integration_with_mode("plain").should_emit_json());

        let json_output = output_for(&integration_with_mode("json"));
        let human_output = output_for(&integration_with_mode("plain"));
        assert!(!json_output.enabled);
        assert!(human_output.enabled);
    }

    #[test]
    fn write_string_creates_missing_parents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/report.txt");
        write_string(&path, "content").expect("write succeeds");
        assert_eq!(std::fs::read_to_string(&path).expect("readable"), "content");
    }
}
