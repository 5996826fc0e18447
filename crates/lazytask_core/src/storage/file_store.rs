//! File-backed task store.
//!
//! # Responsibility
//! - Read and write the pipe-delimited save file.
//! - Emit `task_load` / `task_saved` logging events with counts and timing.
//!
//! # Invariants
//! - A missing file loads as an empty list, not an error.
//! - Saves go through a sibling temp file and a rename, so readers never see
//!   a half-written list.
//! - Log lines carry metadata only; task descriptions are never logged.

use crate::error::{AppError, AppResult};
use crate::model::task::Task;
use crate::storage::codec::{decode_line, encode_task};
use crate::storage::TaskStore;
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Task store persisted to one plain-text file.
#[derive(Debug, Clone)]
pub struct FileTaskStore {
    path: PathBuf,
}

impl FileTaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_lines(&self, tasks: &[Task]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut contents = String::new();
        for task in tasks {
            contents.push_str(&encode_task(task));
            contents.push('\n');
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &self.path)
    }
}

impl TaskStore for FileTaskStore {
    fn load(&self) -> AppResult<Vec<Task>> {
        let started_at = Instant::now();
        if !self.path.exists() {
            info!("event=task_load module=storage status=ok source=missing count=0");
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|err| {
            error!(
                "event=task_load module=storage status=error error_code=read_failed error={}",
                err
            );
            AppError::storage(format!("Warning: save file is unreadable. {err}"))
        })?;

        let mut tasks = Vec::new();
        for (line_no, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match decode_line(line) {
                Ok(task) => tasks.push(task),
                Err(err) => {
                    error!(
                        "event=task_load module=storage status=error error_code=corrupt_line line={}",
                        line_no + 1
                    );
                    return Err(err);
                }
            }
        }

        info!(
            "event=task_load module=storage status=ok source=file count={} duration_ms={}",
            tasks.len(),
            started_at.elapsed().as_millis()
        );
        Ok(tasks)
    }

    fn save(&mut self, tasks: &[Task]) -> AppResult<()> {
        let started_at = Instant::now();
        match self.write_lines(tasks) {
            Ok(()) => {
                info!(
                    "event=task_saved module=storage status=ok count={} duration_ms={}",
                    tasks.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=task_saved module=storage status=error error_code=write_failed error={}",
                    err
                );
                Err(AppError::storage(format!(
                    "Oops, couldn't save tasks: {err}"
                )))
            }
        }
    }
}
