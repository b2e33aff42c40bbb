use crate::entry::FileEntry;
use crate::error::SelectorError;
use crate::model::SelectionType;
use log::debug;
use std::fs;
use std::path::Path;

/// Lists `dir` for display: directories sorted by name, followed by files
/// sorted by name when `selection` is [`SelectionType::File`].
pub fn list_directory(dir: &Path, selection: SelectionType) -> Result<Vec<FileEntry>, SelectorError> {
    list_directory_with(dir, selection, || false)
}

/// Same as [`list_directory`], giving up as soon as `is_cancelled` reports true.
pub fn list_directory_with<F>(
    dir: &Path,
    selection: SelectionType,
    is_cancelled: F,
) -> Result<Vec<FileEntry>, SelectorError>
where
    F: Fn() -> bool,
{
    let read_dir = fs::read_dir(dir).map_err(|source| SelectorError::Unreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in read_dir {
        if is_cancelled() {
            return Err(SelectorError::Cancelled {
                path: dir.to_path_buf(),
            });
        }
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        if let Some(file_entry) = FileEntry::from_path(entry.path()) {
            if file_entry.is_dir {
                dirs.push(file_entry);
            } else {
                files.push(file_entry);
            }
        }
    }

    // Raw file names, so non-UTF-8 names keep their byte order
    dirs.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    if selection == SelectionType::File {
        files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        dirs.append(&mut files);
    }
    Ok(dirs)
}
