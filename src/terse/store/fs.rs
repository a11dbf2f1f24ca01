use super::DocumentStore;
use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
    file_ext: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_ext: ".terse".to_string(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
        self
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }
}

/// Invalid UTF-8 sequences become U+FFFD so any file can be opened.
fn decode_lossy(path: &Path, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                valid_up_to = e.utf8_error().valid_up_to(),
                "document is not valid UTF-8, replacing invalid bytes"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

impl DocumentStore for FileStore {
    fn read_document(&self, name: &str) -> Result<Option<String>> {
        let path = self.document_path(name);
        match fs::read(&path) {
            Ok(bytes) => {
                tracing::trace!(path = %path.display(), bytes = bytes.len(), "read document");
                Ok(Some(decode_lossy(&path, bytes)))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_document(&mut self, name: &str, text: &str) -> Result<()> {
        let path = self.document_path(name);
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent)?;
        }

        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &path)?;

        tracing::trace!(path = %path.display(), bytes = text.len(), "wrote document");
        Ok(())
    }

    /// Relative names resolve against the store root; names without an
    /// extension get the configured one.
    fn document_path(&self, name: &str) -> PathBuf {
        let mut path = self.root.join(name);
        if path.extension().is_none() {
            let mut file_name = path.file_name().unwrap_or_default().to_os_string();
            file_name.push(&self.file_ext);
            path.set_file_name(file_name);
        }
        path
    }
}
