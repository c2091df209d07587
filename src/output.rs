use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use thiserror::Error;
use tracing::warn;

use crate::explore::write_dir_tree;
use crate::models::DirTree;

pub const REPORT_EXTENSION: &str = "txt";
const REPORT_SUFFIX: &str = " file tree";

#[derive(Error, Debug)]
pub enum OutputPathError {
    #[error("{} must have the extension .{}", .0.display(), REPORT_EXTENSION)]
    WrongExtension(PathBuf),
}

/// `<directory name> file tree.txt`
pub fn default_report_name(dir_path: &Path) -> String {
    format!(
        "{}{REPORT_SUFFIX}.{REPORT_EXTENSION}",
        crate::root_display_name(dir_path)
    )
}

/// Decide where the report for `dir_path` goes.
///
/// Without an output, the report sits next to the explored directory. An
/// existing directory as output receives the default report name. Any other
/// output must be a `.txt` file.
pub fn resolve_output_path(
    dir_path: &Path,
    output: Option<&Path>,
) -> Result<PathBuf, OutputPathError> {
    let Some(output) = output else {
        let parent = dir_path.parent().unwrap_or(dir_path);
        return Ok(parent.join(default_report_name(dir_path)));
    };

    if output.is_dir() {
        return Ok(output.join(default_report_name(dir_path)));
    }

    if output.extension() != Some(OsStr::new(REPORT_EXTENSION)) {
        return Err(OutputPathError::WrongExtension(output.to_path_buf()));
    }

    Ok(output.to_path_buf())
}

/// Write the report for `tree` to `output_path`. A partly written report is
/// removed before the error is returned.
pub fn write_report(
    output_path: &Path,
    root_path: &Path,
    tree: &DirTree,
) -> anyhow::Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("cannot create {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    let written = write_dir_tree(&mut writer, root_path, tree).and_then(|()| writer.flush());
    drop(writer);

    if let Err(err) = written {
        if let Err(remove_err) = std::fs::remove_file(output_path) {
            warn!(
                output = %output_path.display(),
                error = %remove_err,
                "cannot remove incomplete report"
            );
        }
        return Err(err).with_context(|| format!("cannot write {}", output_path.display()));
    }

    Ok(())
}
