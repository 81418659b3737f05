//! Photo upload call

use async_trait::async_trait;

use crate::{ClientResult, HttpClient, SAVE_FILE_PATH};

/// Uploads a single file and returns the stored filename.
#[async_trait]
pub trait AttachmentClient: Send + Sync {
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> ClientResult<String>;
}

#[async_trait]
impl AttachmentClient for HttpClient {
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> ClientResult<String> {
        self.post_file(SAVE_FILE_PATH, file_name, bytes).await
    }
}
