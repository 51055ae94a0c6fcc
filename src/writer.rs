//! Writing generated files to disk

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Permission bits of generated files (rw-r--r--)
pub const FILE_MODE: u32 = 0o644;

#[derive(Debug, Error)]
#[error("cannot write {}: {source}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

/// Append `part` to `base` component by component
///
/// Root, drive prefix and `.` components of `part` are dropped, so an absolute
/// `part` still lands under `base`.
pub fn join_under(base: &Path, part: &str) -> PathBuf {
    let mut path = base.to_path_buf();
    for component in Path::new(part).components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            other => path.push(other),
        }
    }
    path
}

/// Output path for a generated file: `<base>/<output_dir>/<file_name>`
pub fn output_path(base: &Path, output_dir: &str, file_name: &str) -> PathBuf {
    join_under(&join_under(base, output_dir), file_name)
}

/// Create or truncate `path` and write `content` to it
///
/// Parent directories are not created.
pub fn write_file(path: &Path, content: &[u8]) -> Result<(), WriteError> {
    let wrap = |source| WriteError {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options.open(path).map_err(wrap)?;
    file.write_all(content).map_err(wrap)?;
    Ok(())
}
