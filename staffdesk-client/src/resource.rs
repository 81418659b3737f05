//! Typed CRUD surface over one resource endpoint

use std::marker::PhantomData;

use async_trait::async_trait;
use shared::Resource;

use crate::{ClientResult, HttpClient};

/// Upload endpoint for employee photos.
pub const SAVE_FILE_PATH: &str = "employee/savefile";

/// CRUD calls against one remote collection.
///
/// The view controllers hold this trait object rather than the
/// concrete client so tests can exercise them against an in-memory
/// collection.
#[async_trait]
pub trait CollectionClient<R: Resource>: Send + Sync {
    /// GET the whole collection.
    async fn fetch_all(&self) -> ClientResult<Vec<R>>;

    /// GET one record by id.
    async fn fetch_one(&self, id: i64) -> ClientResult<R>;

    /// POST a partial record; the server assigns the id.
    async fn create(&self, payload: &R::Create) -> ClientResult<R>;

    /// PUT the full record.
    async fn update(&self, id: i64, record: &R) -> ClientResult<R>;

    /// DELETE by id.
    async fn delete(&self, id: i64) -> ClientResult<()>;
}

/// Remote collection client for one resource type
#[derive(Debug, Clone)]
pub struct ResourceClient<R> {
    http: HttpClient,
    _resource: PhantomData<R>,
}

impl<R: Resource> ResourceClient<R> {
    /// Create a client for `R`'s collection endpoint
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            _resource: PhantomData,
        }
    }

    /// The underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

#[async_trait]
impl<R: Resource> CollectionClient<R> for ResourceClient<R> {
    async fn fetch_all(&self) -> ClientResult<Vec<R>> {
        self.http.get(R::PATH).await
    }

    async fn fetch_one(&self, id: i64) -> ClientResult<R> {
        self.http.get(&format!("{}/{}", R::PATH, id)).await
    }

    async fn create(&self, payload: &R::Create) -> ClientResult<R> {
        self.http.post(R::PATH, payload).await
    }

    async fn update(&self, id: i64, record: &R) -> ClientResult<R> {
        self.http.put(&format!("{}/{}", R::PATH, id), record).await
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("{}/{}", R::PATH, id)).await
    }
}
