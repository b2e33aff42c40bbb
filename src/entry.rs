use chrono::{DateTime, Local};
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

pub const DIR_ICON: &str = "📁";
pub const FILE_ICON: &str = "📄";

/// One row of a directory listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub is_symlink: bool,
    pub modified: SystemTime,
}

impl FileEntry {
    /// Builds an entry from a path, following symlinks for the directory flag.
    ///
    /// Entries whose metadata cannot be read are still listed: they count as
    /// plain files and carry `UNIX_EPOCH` as their modification time.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_string();

        let symlink_meta = fs::symlink_metadata(&path).ok();
        let is_symlink = symlink_meta
            .as_ref()
            .map(|m| m.is_symlink())
            .unwrap_or(false);

        let metadata = fs::metadata(&path).ok();
        let is_dir = metadata.as_ref().map(|m| m.is_dir()).unwrap_or(false);
        let modified = metadata
            .as_ref()
            .and_then(|m| m.modified().ok())
            .or_else(|| symlink_meta.as_ref().and_then(|m| m.modified().ok()))
            .unwrap_or(SystemTime::UNIX_EPOCH);

        Some(Self {
            path,
            name,
            is_dir,
            is_symlink,
            modified,
        })
    }

    pub fn icon(&self) -> &'static str {
        if self.is_dir {
            DIR_ICON
        } else {
            FILE_ICON
        }
    }

    pub fn display_name(&self) -> String {
        if self.is_symlink {
            format!("{} \u{2192}", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Local-time rendering of the modification time using a chrono format string.
    pub fn modified_label(&self, format: &str) -> String {
        let datetime: DateTime<Local> = self.modified.into();
        datetime.format(format).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_from_path_detects_directories() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = tmp.path().join("photos");
        let file = tmp.path().join("notes.txt");
        fs::create_dir(&dir).unwrap();
        fs::write(&file, b"hello").unwrap();

        let dir_entry = FileEntry::from_path(dir.clone()).unwrap();
        assert!(dir_entry.is_dir);
        assert_eq!(dir_entry.name, "photos");
        assert_eq!(dir_entry.path, dir);
        assert_eq!(dir_entry.icon(), DIR_ICON);

        let file_entry = FileEntry::from_path(file).unwrap();
        assert!(!file_entry.is_dir);
        assert_eq!(file_entry.icon(), FILE_ICON);
        assert!(file_entry.modified > SystemTime::UNIX_EPOCH);
    }

    #[test]
    fn test_missing_path_is_listed_as_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let entry = FileEntry::from_path(tmp.path().join("gone")).unwrap();
        assert!(!entry.is_dir);
        assert_eq!(entry.modified, SystemTime::UNIX_EPOCH);
    }

    #[test]
    fn test_root_has_no_entry() {
        assert!(FileEntry::from_path(PathBuf::from("/")).is_none());
    }

    #[test]
    fn test_modified_label_uses_format() {
        let entry = FileEntry {
            path: PathBuf::from("/tmp/a"),
            name: "a".to_string(),
            is_dir: false,
            is_symlink: false,
            modified: SystemTime::UNIX_EPOCH + Duration::from_secs(86_400 * 400),
        };
        let label = entry.modified_label("%Y");
        assert_eq!(label.len(), 4);
        assert!(label.starts_with("197"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_directory() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let target = tmp.path().join("target");
        fs::create_dir(&target).unwrap();
        let link = tmp.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let entry = FileEntry::from_path(link).unwrap();
        assert!(entry.is_dir);
        assert!(entry.is_symlink);
        assert_eq!(entry.display_name(), "link \u{2192}");
    }
}
