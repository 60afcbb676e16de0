// Mirror adapter that dumps the registry to a plaintext file.
//
// Responsibilities
// - Truncate and rewrite the whole file on every call.
// - Create the file when it does not exist yet.

use crate::modules::events::core::event::{Event, EventId};
use crate::shared::infrastructure::mirror::{EventMirror, MirrorError, render};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct TextFileMirror {
    path: PathBuf,
}

impl TextFileMirror {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[cfg(test)]
    fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl EventMirror for TextFileMirror {
    async fn write(&self, snapshot: &BTreeMap<EventId, Event>) -> Result<(), MirrorError> {
        tokio::fs::write(&self.path, render(snapshot)).await?;
        debug!(path = %self.path.display(), events = snapshot.len(), "Mirror rewritten");
        Ok(())
    }
}
