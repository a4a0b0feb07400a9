//! File helpers on top of the `FileSystem` port, plus pure path builders.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::{DOT, SLASH};
use crate::error::{Error, Result};
use crate::ports::filesystem::FileSystem;
use crate::strings::{clean_path, concat, has_text};

/// File operations that report failures as [`Error::FileSystem`].
///
/// All I/O goes through the wrapped port so the helpers work against the
/// live disk and against in-memory test doubles alike.
pub struct Files<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> Files<'a> {
    /// Wraps a filesystem port.
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Reads a UTF-8 file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable.
    pub fn read_to_string(&self, path: &Path) -> Result<String> {
        self.fs.read_to_string(path).map_err(|e| Error::fs(path, e))
    }

    /// Reads a file as bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable.
    pub fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        self.fs.read(path).map_err(|e| Error::fs(path, e))
    }

    /// Writes `data` to `path`, creating the file and its parents if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for blank `data`, or a filesystem
    /// error if the write fails.
    pub fn write_string(&self, path: &Path, data: &str) -> Result<()> {
        if !has_text(data) {
            return Err(Error::InvalidArgument(format!(
                "refusing to write blank data to {}",
                path.display()
            )));
        }
        debug!(path = %path.display(), bytes = data.len(), "writing file");
        self.fs.write(path, data).map_err(|e| Error::fs(path, e))
    }

    /// Creates a new empty file, failing if it already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists or cannot be created.
    pub fn create_file(&self, path: &Path) -> Result<PathBuf> {
        if self.fs.exists(path) {
            return Err(Error::fs(path, "file already exists"));
        }
        self.fs.create_new(path).map_err(|e| Error::fs(path, e))?;
        debug!(path = %path.display(), "created file");
        Ok(path.to_path_buf())
    }

    /// Returns `path`, creating an empty file there first if it is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn get_or_create_file(&self, path: &Path) -> Result<PathBuf> {
        if self.fs.exists(path) {
            return Ok(path.to_path_buf());
        }
        self.create_file(path)
    }

    /// Returns `path`, creating the directory (and parents) if it is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn get_or_create_dir(&self, path: &Path) -> Result<PathBuf> {
        if !self.fs.is_dir(path) {
            self.fs.create_dir_all(path).map_err(|e| Error::fs(path, e))?;
            debug!(path = %path.display(), "created directory");
        }
        Ok(path.to_path_buf())
    }

    /// Deletes a directory recursively. A missing directory is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be removed.
    pub fn remove_dir_all(&self, path: &Path) -> Result<()> {
        if !self.fs.exists(path) {
            return Ok(());
        }
        debug!(path = %path.display(), "removing directory");
        self.fs.remove_dir_all(path).map_err(|e| Error::fs(path, e))
    }

    /// Lists the entries of a directory as full paths, sorted by name.
    ///
    /// A missing path or a path that is not a directory yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be read.
    pub fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !self.fs.is_dir(dir) {
            return Ok(Vec::new());
        }
        let names = self.fs.list_dir(dir).map_err(|e| Error::fs(dir, e))?;
        Ok(names.into_iter().map(|name| dir.join(name)).collect())
    }

    /// Renames `from` to `to`, replacing `to` if the platform allows it.
    ///
    /// # Errors
    ///
    /// Returns an error if `from` is missing or the rename fails.
    pub fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        self.fs.rename(from, to).map_err(|e| Error::fs(from, e))
    }

    /// Moves `from` to `to`, refusing to overwrite an existing destination.
    ///
    /// # Errors
    ///
    /// Returns an error if `from` is missing, `to` exists, or the move fails.
    pub fn move_file(&self, from: &Path, to: &Path) -> Result<()> {
        if !self.fs.exists(from) {
            return Err(Error::fs(from, "source file does not exist"));
        }
        if self.fs.exists(to) {
            return Err(Error::fs(to, "destination already exists"));
        }
        debug!(from = %from.display(), to = %to.display(), "moving file");
        self.rename(from, to)
    }
}

/// Builds `<dirs...>/<name>.<extension>` and normalizes it.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `extension` or `name` is blank.
pub fn file_name<S: AsRef<str>>(extension: &str, name: &str, dirs: &[S]) -> Result<String> {
    if !has_text(extension) {
        return Err(Error::InvalidArgument("file extension must not be blank".into()));
    }
    if !has_text(name) {
        return Err(Error::InvalidArgument("file name must not be blank".into()));
    }
    let dir = concat(SLASH, dirs).unwrap_or_default();
    normalize_path(&format!("{dir}{SLASH}{name}{DOT}{extension}"))
}

/// Joins path parts with `/` and normalizes the result.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if every part is blank.
pub fn file_path<S: AsRef<str>>(parts: &[S]) -> Result<String> {
    normalize_path(&concat(SLASH, parts).unwrap_or_default())
}

/// Normalizes a path with [`clean_path`] and collapses repeated slashes.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `path` is blank.
pub fn normalize_path(path: &str) -> Result<String> {
    if !has_text(path) {
        return Err(Error::InvalidArgument("path must not be blank".into()));
    }
    let cleaned = clean_path(path);
    let mut out = String::with_capacity(cleaned.len());
    for c in cleaned.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::adapters::live::filesystem::LiveFileSystem;
    use crate::ports::filesystem::FsError;

    /// In-memory filesystem: files map to contents, directories are implied
    /// by file paths or listed explicitly.
    #[derive(Default)]
    struct MemFs {
        files: Mutex<HashMap<PathBuf, String>>,
        dirs: Mutex<Vec<PathBuf>>,
    }

    impl FileSystem for MemFs {
        fn read_to_string(&self, path: &Path) -> std::result::Result<String, FsError> {
            let files = self.files.lock().unwrap();
            files
                .get(path)
                .cloned()
                .ok_or_else(|| format!("File not found: {}", path.display()).into())
        }

        fn read(&self, path: &Path) -> std::result::Result<Vec<u8>, FsError> {
            self.read_to_string(path).map(String::into_bytes)
        }

        fn write(&self, path: &Path, contents: &str) -> std::result::Result<(), FsError> {
            self.files.lock().unwrap().insert(path.to_path_buf(), contents.to_string());
            Ok(())
        }

        fn create_new(&self, path: &Path) -> std::result::Result<(), FsError> {
            let mut files = self.files.lock().unwrap();
            if files.contains_key(path) {
                return Err("exists".into());
            }
            files.insert(path.to_path_buf(), String::new());
            Ok(())
        }

        fn create_dir_all(&self, path: &Path) -> std::result::Result<(), FsError> {
            self.dirs.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }

        fn remove_dir_all(&self, path: &Path) -> std::result::Result<(), FsError> {
            self.files.lock().unwrap().retain(|k, _| !k.starts_with(path));
            self.dirs.lock().unwrap().retain(|d| !d.starts_with(path));
            Ok(())
        }

        fn rename(&self, from: &Path, to: &Path) -> std::result::Result<(), FsError> {
            let mut files = self.files.lock().unwrap();
            let contents = files.remove(from).ok_or("File not found")?;
            files.insert(to.to_path_buf(), contents);
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            let is_file = self.files.lock().unwrap().contains_key(path);
            is_file || self.is_dir(path)
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.dirs.lock().unwrap().iter().any(|d| d.starts_with(path))
                || self.files.lock().unwrap().keys().any(|k| k.starts_with(path) && k != path)
        }

        fn list_dir(&self, path: &Path) -> std::result::Result<Vec<String>, FsError> {
            let files = self.files.lock().unwrap();
            let mut names: Vec<String> = files
                .keys()
                .filter(|k| k.parent() == Some(path))
                .filter_map(|k| k.file_name().map(|n| n.to_string_lossy().into_owned()))
                .collect();
            names.sort();
            Ok(names)
        }
    }

    #[test]
    fn file_name_joins_dirs_name_and_extension() {
        let name = file_name("pdf", "report", &["C:\\Users\\me\\Desktop\\tmp\\", "pdf"]).unwrap();
        assert_eq!(name, "C:/Users/me/Desktop/tmp/pdf/report.pdf");
        assert!(name.ends_with(".pdf"));

        let name = file_name::<&str>("txt", "a", &[]).unwrap();
        assert_eq!(name, "/a.txt");
    }

    #[test]
    fn file_name_rejects_blank_parts() {
        assert!(matches!(file_name("", "a", &["x"]), Err(Error::InvalidArgument(_))));
        assert!(matches!(file_name("txt", " ", &["x"]), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn file_path_and_normalize() {
        assert_eq!(file_path(&["/data", "in", "../out", "x.csv"]).unwrap(), "/data/out/x.csv");
        assert_eq!(normalize_path("a///b//c").unwrap(), "a/b/c");
        assert!(normalize_path("  ").is_err());
        assert!(file_path::<&str>(&[]).is_err());
    }

    #[test]
    fn write_and_read_through_the_port() {
        let fs = MemFs::default();
        let files = Files::new(&fs);
        let path = Path::new("/store/a.txt");

        files.write_string(path, "hello").unwrap();
        assert_eq!(files.read_to_string(path).unwrap(), "hello");
        assert_eq!(files.read_bytes(path).unwrap(), b"hello");
    }

    #[test]
    fn write_rejects_blank_data() {
        let fs = MemFs::default();
        let err = Files::new(&fs).write_string(Path::new("/a"), "  ").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn missing_file_is_a_filesystem_error() {
        let fs = MemFs::default();
        let err = Files::new(&fs).read_to_string(Path::new("/nope")).unwrap_err();
        assert!(matches!(err, Error::FileSystem { ref path, .. } if path == Path::new("/nope")));
    }

    #[test]
    fn create_file_once_then_get_or_create() {
        let fs = MemFs::default();
        let files = Files::new(&fs);
        let path = Path::new("/x/new.txt");

        files.create_file(path).unwrap();
        assert!(files.create_file(path).is_err());
        assert_eq!(files.get_or_create_file(path).unwrap(), path);
    }

    #[test]
    fn list_files_returns_full_paths() {
        let fs = MemFs::default();
        let files = Files::new(&fs);
        files.write_string(Path::new("/d/b.txt"), "b").unwrap();
        files.write_string(Path::new("/d/a.txt"), "a").unwrap();

        let listed = files.list_files(Path::new("/d")).unwrap();
        assert_eq!(listed, vec![PathBuf::from("/d/a.txt"), PathBuf::from("/d/b.txt")]);
        assert!(files.list_files(Path::new("/missing")).unwrap().is_empty());
    }

    #[test]
    fn move_file_refuses_to_overwrite() {
        let fs = MemFs::default();
        let files = Files::new(&fs);
        files.write_string(Path::new("/a"), "1").unwrap();
        files.write_string(Path::new("/b"), "2").unwrap();

        assert!(files.move_file(Path::new("/a"), Path::new("/b")).is_err());
        files.move_file(Path::new("/a"), Path::new("/c")).unwrap();
        assert_eq!(files.read_to_string(Path::new("/c")).unwrap(), "1");
        assert!(files.move_file(Path::new("/a"), Path::new("/d")).is_err());
    }

    #[test]
    fn live_directories_are_created_and_removed() {
        let tmp = tempfile::tempdir().unwrap();
        let files = Files::new(&LiveFileSystem);
        let dir = tmp.path().join("x/y");

        files.get_or_create_dir(&dir).unwrap();
        files.write_string(&dir.join("f.txt"), "data").unwrap();
        assert_eq!(files.list_files(&dir).unwrap().len(), 1);

        files.remove_dir_all(&tmp.path().join("x")).unwrap();
        assert!(files.list_files(&dir).unwrap().is_empty());
        files.remove_dir_all(&tmp.path().join("x")).unwrap();
    }
}
