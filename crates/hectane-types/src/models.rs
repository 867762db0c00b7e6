use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Records that carry a backend-assigned id.
pub trait Identified {
    fn id(&self) -> i64;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub user_id: i64,
}

/// A user as returned by the admin API. The password hash is never sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// A FQDN used for routing incoming mail and validating outgoing mail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: i64,
    pub name: String,
}

/// A message header as listed in a folder. Read-only on the client.
///
/// Older backends reported the IMAP flags one by one; the only flag kept here
/// is `is_unread`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub is_unread: bool,
    #[serde(default)]
    pub has_attachments: bool,
    #[serde(default)]
    pub folder_id: i64,
    #[serde(default)]
    pub user_id: i64,
}

impl Identified for Folder {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for User {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Domain {
    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_defaults_missing_flags() {
        let msg: Message = serde_json::from_str(
            r#"{"time":"2017-06-01T12:00:00Z","from":"a@example.com","subject":"hi"}"#,
        )
        .unwrap();
        assert!(!msg.is_unread);
        assert!(!msg.has_attachments);
        assert_eq!(msg.to, "");
    }

    #[test]
    fn user_ignores_password_field() {
        let user: User =
            serde_json::from_str(r#"{"id":3,"username":"bob","password":"x","is_admin":false}"#)
                .unwrap();
        assert_eq!(user.id(), 3);
        assert_eq!(user.username, "bob");
    }
}
