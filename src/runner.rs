use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::error::{Error, Result};
use crate::findings::{Finding, parse_findings};
use crate::process::{ProcessConfig, run_combined};

/// Name of the bundled analyzer executable.
pub const ANALYZER_BINARY: &str = "golint";

/// Runs the bundled analyzer against a file and maps its line-delimited
/// JSON output into [`Finding`] records.
///
/// The analyzer path is resolved once at construction and held
/// explicitly; it never depends on the working directory or `PATH`.
#[derive(Debug, Clone)]
pub struct LintRunner {
    analyzer: PathBuf,
    config_path: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl LintRunner {
    pub fn new(analyzer: PathBuf) -> Self {
        Self {
            analyzer,
            config_path: None,
            timeout: None,
        }
    }

    /// Locate the analyzer bundled under `<root>/bin/` of an install tree.
    pub fn from_install_root(root: &Path) -> Self {
        Self::new(root.join("bin").join(ANALYZER_BINARY))
    }

    /// Locate the analyzer bundled alongside the running executable,
    /// anchored on the executable's own install root.
    pub fn bundled() -> Result<Self> {
        let exe = std::env::current_exe()?;
        let root = exe
            .parent()
            .and_then(Path::parent)
            .ok_or_else(|| Error::Process("cannot determine install root".into()))?;
        Ok(Self::from_install_root(root))
    }

    /// Forward an analyzer configuration file via `-config_path`.
    pub fn with_config_path(mut self, config_path: Option<PathBuf>) -> Self {
        self.config_path = config_path;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn analyzer_path(&self) -> &Path {
        &self.analyzer
    }

    /// Build the analyzer invocation for a target path.
    pub fn build_command(&self, path: &str) -> (PathBuf, Vec<String>) {
        let mut args = vec!["-format".to_string(), "json".to_string()];

        if let Some(ref config_path) = self.config_path {
            args.push("-config_path".to_string());
            args.push(config_path.display().to_string());
        }

        args.push(path.to_string());

        (self.analyzer.clone(), args)
    }

    /// Run the analyzer on `path` and return its findings in emission
    /// order.
    ///
    /// The subprocess's exit status is not treated as fatal: the analyzer
    /// exits non-zero when it reports issues, so whatever output was
    /// captured is parsed regardless. An empty output stream yields an
    /// empty vec.
    pub async fn lint(&self, path: &str) -> Result<Vec<Finding>> {
        if !self.analyzer.exists() {
            return Err(Error::AnalyzerNotFound(self.analyzer.clone()));
        }

        let (command, args) = self.build_command(path);
        debug!(analyzer = %command.display(), path, "running analyzer");

        let output = run_combined(ProcessConfig {
            command,
            args,
            timeout: self.timeout,
        })
        .await?;

        parse_findings(&output.combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_command_defaults() {
        let runner = LintRunner::new(PathBuf::from("/opt/lintpipe/bin/golint"));
        let (cmd, args) = runner.build_command("./pkg/widget.go");
        assert_eq!(cmd, PathBuf::from("/opt/lintpipe/bin/golint"));
        assert_eq!(args, vec!["-format", "json", "./pkg/widget.go"]);
    }

    #[test]
    fn test_build_command_path_is_last() {
        let runner = LintRunner::new(PathBuf::from("golint"))
            .with_config_path(Some(PathBuf::from("/etc/golint.yml")));
        let (_cmd, args) = runner.build_command("main.go");
        assert_eq!(
            args,
            vec!["-format", "json", "-config_path", "/etc/golint.yml", "main.go"]
        );
    }

    #[test]
    fn test_from_install_root() {
        let runner = LintRunner::from_install_root(Path::new("/opt/lintpipe"));
        assert_eq!(
            runner.analyzer_path(),
            Path::new("/opt/lintpipe/bin/golint")
        );
    }

    #[test]
    fn test_no_config_path_by_default() {
        let runner = LintRunner::new(PathBuf::from("golint"));
        let (_cmd, args) = runner.build_command("main.go");
        assert!(!args.contains(&"-config_path".to_string()));
    }
}
