//! Optional CPU profiling of a whole run.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pprof::ProfilerGuard;

/// Samples the process while alive; [`CpuProfile::finish`] writes the
/// flamegraph to the requested path.
pub struct CpuProfile {
    guard: ProfilerGuard<'static>,
    path: PathBuf,
}

pub fn start(path: &Path) -> Result<CpuProfile> {
    let guard = ProfilerGuard::new(100).context("failed to start CPU profiler")?;
    Ok(CpuProfile {
        guard,
        path: path.to_path_buf(),
    })
}

impl CpuProfile {
    pub fn finish(self) -> Result<()> {
        let report = self
            .guard
            .report()
            .build()
            .context("failed to build CPU profile report")?;
        let file = File::create(&self.path)
            .with_context(|| format!("failed to create profile file {}", self.path.display()))?;
        report
            .flamegraph(file)
            .with_context(|| format!("failed to write profile to {}", self.path.display()))?;
        Ok(())
    }
}
