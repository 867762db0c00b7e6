use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use hectane_types::{Domain, Folder, NewDomain, NewFolder, NewUser, User};

use super::{CreateRecord, DeleteRecord, FindAll, ListShape};
use crate::ajax::{Ajax, decode, to_payload};
use crate::error::Result;

pub const FOLDERS_URL: &str = "/api/folders";
pub const USERS_URL: &str = "/api/admin/users";
pub const DOMAINS_URL: &str = "/api/admin/domains";

pub type FolderAdapter = RestAdapter<NewFolder, Folder>;
pub type UserAdapter = RestAdapter<NewUser, User>;
pub type DomainAdapter = RestAdapter<NewDomain, Domain>;

/// Adapter for a collection laid out as
/// `GET {collection}`, `POST {collection}/new`, `POST {collection}/:id/delete`.
pub struct RestAdapter<D, R> {
    ajax: Ajax,
    collection: &'static str,
    shape: ListShape,
    _record: PhantomData<fn(&D) -> R>,
}

impl<D, R> RestAdapter<D, R> {
    pub fn new(ajax: Ajax, collection: &'static str, shape: ListShape) -> Self {
        Self {
            ajax,
            collection,
            shape,
            _record: PhantomData,
        }
    }

    pub fn collection_url(&self) -> &'static str {
        self.collection
    }

    pub fn create_url(&self) -> String {
        format!("{}/new", self.collection)
    }

    pub fn delete_url(&self, id: i64) -> String {
        format!("{}/{id}/delete", self.collection)
    }
}

impl FolderAdapter {
    pub fn folders(ajax: Ajax, shape: ListShape) -> Self {
        Self::new(ajax, FOLDERS_URL, shape)
    }
}

impl UserAdapter {
    pub fn users(ajax: Ajax) -> Self {
        Self::new(ajax, USERS_URL, ListShape::Bare)
    }
}

impl DomainAdapter {
    pub fn domains(ajax: Ajax) -> Self {
        Self::new(ajax, DOMAINS_URL, ListShape::Bare)
    }
}

impl<D, R> Clone for RestAdapter<D, R> {
    fn clone(&self) -> Self {
        Self::new(self.ajax.clone(), self.collection, self.shape)
    }
}

impl<D, R> fmt::Debug for RestAdapter<D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestAdapter")
            .field("collection", &self.collection)
            .field("shape", &self.shape)
            .finish()
    }
}

impl<D, R> CreateRecord for RestAdapter<D, R>
where
    D: Serialize + Sync,
    R: DeserializeOwned + Send,
{
    type Draft = D;
    type Record = R;

    async fn create_record(&self, draft: &D) -> Result<R> {
        let payload = to_payload(draft)?;
        let body = self.ajax.request(&self.create_url(), Some(payload)).await?;
        decode(body)
    }
}

impl<D, R> DeleteRecord for RestAdapter<D, R> {
    async fn delete_record(&self, id: i64) -> Result<()> {
        self.ajax.post_empty(&self.delete_url(id)).await?;
        debug!(collection = self.collection, id, "record deleted");
        Ok(())
    }
}

impl<D, R> FindAll for RestAdapter<D, R>
where
    R: DeserializeOwned + Send,
{
    type Record = R;

    async fn find_all(&self) -> Result<Vec<R>> {
        let body = self.ajax.get(self.collection).await?;
        self.shape.extract(body)
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;
    use crate::config::ClientConfig;

    fn ajax() -> Ajax {
        Ajax::new(&ClientConfig::new(Url::parse("http://localhost:8000").unwrap())).unwrap()
    }

    #[test]
    fn endpoint_layout() {
        let users = UserAdapter::users(ajax());
        assert_eq!(users.collection_url(), "/api/admin/users");
        assert_eq!(users.create_url(), "/api/admin/users/new");
        assert_eq!(users.delete_url(12), "/api/admin/users/12/delete");

        let folders = FolderAdapter::folders(ajax(), ListShape::Keyed("folders"));
        assert_eq!(folders.create_url(), "/api/folders/new");
        assert_eq!(folders.delete_url(3), "/api/folders/3/delete");

        let domains = DomainAdapter::domains(ajax());
        assert_eq!(domains.create_url(), "/api/admin/domains/new");
    }
}
