//! Resource adapters: CRUD operations mapped onto the REST endpoints.
//!
//! Each resource exposes the subset of [`CreateRecord`], [`DeleteRecord`] and
//! [`FindAll`] its backend supports. Messages are read-only.

mod message;
mod rest;

use std::future::Future;

use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;

use crate::ajax::decode;
use crate::error::{Error, Result};

pub use message::{FolderMessages, MessageAdapter};
pub use rest::{
    DOMAINS_URL, DomainAdapter, FOLDERS_URL, FolderAdapter, RestAdapter, USERS_URL, UserAdapter,
};

pub trait CreateRecord {
    type Draft;
    type Record;

    /// Serialize `draft`, POST it to the creation endpoint and decode the
    /// record the backend created.
    fn create_record(&self, draft: &Self::Draft)
    -> impl Future<Output = Result<Self::Record>> + Send;
}

pub trait DeleteRecord {
    /// POST to the per-id deletion endpoint, without a body.
    fn delete_record(&self, id: i64) -> impl Future<Output = Result<()>> + Send;
}

pub trait FindAll {
    type Record;

    fn find_all(&self) -> impl Future<Output = Result<Vec<Self::Record>>> + Send;
}

/// Where a collection response keeps its array.
///
/// Backends disagree: some answer `{"folders": [...]}`, others the bare array.
/// The adapter is told which one to expect and a mismatch is a decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    /// The response body is the array. `null` reads as empty.
    Bare,
    /// The array is stored under the named field.
    Keyed(&'static str),
}

impl ListShape {
    pub fn extract<T: DeserializeOwned>(self, body: Value) -> Result<Vec<T>> {
        match (self, body) {
            (ListShape::Bare, Value::Null) => Ok(Vec::new()),
            (ListShape::Bare, list @ Value::Array(_)) => decode(list),
            (ListShape::Keyed(field), Value::Object(mut map)) => match map.remove(field) {
                Some(Value::Null) => Ok(Vec::new()),
                Some(list) => decode(list),
                None => Err(shape_error(
                    format!("missing field `{field}`"),
                    Value::Object(map),
                )),
            },
            (ListShape::Bare, other) => Err(shape_error("expected a JSON array".into(), other)),
            (ListShape::Keyed(field), other) => Err(shape_error(
                format!("expected an object with field `{field}`"),
                other,
            )),
        }
    }
}

fn shape_error(msg: String, body: Value) -> Error {
    Error::Decode {
        source: serde_json::Error::custom(msg),
        body: body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use hectane_types::Folder;

    use super::*;

    #[test]
    fn bare_shape_reads_array_and_null() {
        let folders: Vec<Folder> = ListShape::Bare
            .extract(json!([{"id": 1, "name": "Inbox", "user_id": 7}]))
            .unwrap();
        assert_eq!(folders[0].name, "Inbox");

        let empty: Vec<Folder> = ListShape::Bare.extract(Value::Null).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn keyed_shape_unwraps_named_field() {
        let folders: Vec<Folder> = ListShape::Keyed("folders")
            .extract(json!({"folders": [{"id": 2, "name": "Sent"}]}))
            .unwrap();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].id, 2);
    }

    #[test]
    fn mismatched_shapes_are_not_normalised() {
        let keyed = json!({"folders": []});
        assert!(matches!(
            ListShape::Bare.extract::<Folder>(keyed),
            Err(Error::Decode { .. })
        ));

        let bare = json!([]);
        assert!(matches!(
            ListShape::Keyed("folders").extract::<Folder>(bare),
            Err(Error::Decode { .. })
        ));

        match ListShape::Keyed("folders").extract::<Folder>(json!({"items": []})) {
            Err(Error::Decode { body, .. }) => assert_eq!(body, r#"{"items":[]}"#),
            other => panic!("expected decode error, got {other:?}"),
        }
    }
}
