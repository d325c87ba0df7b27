#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use crate::core::error::{ErrorKind, Result, StorageError};
#[cfg(test)]
use crate::modules::storage::{ListPage, ObjectBackend, StoredObject};

/// Backend whose every call fails with the configured kind
#[cfg(test)]
pub struct FailingBackend {
    kind: ErrorKind,
}

#[cfg(test)]
impl FailingBackend {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    fn error(&self, key: &str) -> StorageError {
        let message = format!("simulated failure for '{}'", key);
        match self.kind {
            ErrorKind::Configuration => StorageError::Configuration(message),
            ErrorKind::LocalFileNotFound => StorageError::LocalFileNotFound(key.into()),
            ErrorKind::Io => StorageError::Io(std::io::Error::other(message)),
            ErrorKind::NotFound => StorageError::NotFound(message),
            ErrorKind::AccessDenied => StorageError::AccessDenied(message),
            ErrorKind::Remote => StorageError::Remote(message),
            ErrorKind::Presign => StorageError::Presign(message),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl ObjectBackend for FailingBackend {
    fn bucket_name(&self) -> &str {
        "failing-bucket"
    }

    async fn put_object(&self, key: &str, _data: &[u8], _content_type: &str) -> Result<()> {
        Err(self.error(key))
    }

    async fn get_object(&self, key: &str) -> Result<StoredObject> {
        Err(self.error(key))
    }

    async fn list_page(&self, prefix: &str, _continuation_token: Option<&str>) -> Result<ListPage> {
        Err(self.error(prefix))
    }

    async fn delete_object(&self, key: &str) -> Result<()> {
        Err(self.error(key))
    }

    async fn presign_get(&self, key: &str, _expiry_secs: u32) -> Result<String> {
        Err(self.error(key))
    }
}

/// In-memory sink for formatted log lines, used as a `tracing-subscriber`
/// writer
#[cfg(test)]
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: std::sync::Arc<std::sync::Mutex<Vec<u8>>>,
}

#[cfg(test)]
impl LogCapture {
    /// Subscriber that writes plain (no ANSI) output into this capture
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        let capture = self.clone();
        tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || capture.clone())
            .finish()
    }

    pub fn contents(&self) -> String {
        let buffer = self
            .buffer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

#[cfg(test)]
impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
