#![cfg(test)]
use std::io::Write;
use std::path::Path;

use tempfile::{NamedTempFile, TempDir};

/// A scratch directory holding a configuration file and the files it references.
pub struct ConfigFixture {
    pub dir: TempDir,
}

impl ConfigFixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("creating fixture directory"),
        }
    }

    /// Writes `name` inside the fixture directory and returns its path as a string.
    pub fn file(&self, name: &str, contents: &str) -> String {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("writing fixture file");
        path.display().to_string()
    }

    pub fn config(&self, contents: &str) -> String {
        self.file("lvsm.conf", contents)
    }

    pub fn path(&self, name: &str) -> String {
        self.dir.path().join(name).display().to_string()
    }
}

pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("creating temp file");
    file.write_all(contents.as_bytes()).expect("writing temp file");
    file
}

pub fn exists(path: &str) -> bool {
    Path::new(path).exists()
}
