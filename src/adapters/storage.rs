use crate::core::Storage;
use crate::utils::error::{FileTransformError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Filesystem storage. Relative paths resolve against `base_path`.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        fs::read(&full_path).map_err(|e| FileTransformError::from_io(&full_path, e))
    }

    /// 先寫入同目錄的暫存檔再 rename，失敗時不會動到原本的輸出檔
    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        let io_error = |source: std::io::Error| FileTransformError::IoError {
            path: full_path.clone(),
            source,
        };

        let target = write_target(&full_path).map_err(io_error)?;
        ensure_writable(&target).map_err(io_error)?;

        let parent = match target.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut temp = NamedTempFile::new_in(&parent).map_err(io_error)?;
        temp.write_all(data).map_err(io_error)?;
        temp.as_file().sync_all().map_err(io_error)?;
        copy_target_permissions(&target, temp.path()).map_err(io_error)?;
        temp.persist(&target).map_err(|e| io_error(e.error))?;

        tracing::debug!("Persisted {} bytes to {}", data.len(), target.display());
        Ok(())
    }
}

// 輸出路徑是 symlink 時寫到它指向的檔案，而不是把 link 換掉
fn write_target(path: &Path) -> std::io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => match fs::canonicalize(path) {
            Ok(resolved) => Ok(resolved),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let link = fs::read_link(path)?;
                let base = path.parent().unwrap_or_else(|| Path::new("."));
                Ok(base.join(link))
            }
            Err(e) => Err(e),
        },
        _ => Ok(path.to_path_buf()),
    }
}

// rename 不需要目標檔的寫入權限，所以先確認既有檔案本身可寫
fn ensure_writable(target: &Path) -> std::io::Result<()> {
    if fs::symlink_metadata(target).is_ok() {
        fs::OpenOptions::new().write(true).open(target)?;
    }
    Ok(())
}

// 暫存檔預設權限是 0600，沿用既有檔案的權限或一般檔案的 0644
fn copy_target_permissions(target: &Path, temp: &Path) -> std::io::Result<()> {
    match fs::metadata(target) {
        Ok(metadata) => fs::set_permissions(temp, metadata.permissions()),
        Err(_) => default_permissions(temp),
    }
}

#[cfg(unix)]
fn default_permissions(temp: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(temp, fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(_temp: &Path) -> std::io::Result<()> {
    Ok(())
}
