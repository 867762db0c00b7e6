use serde::{Deserialize, Serialize};

// -- Auth --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// -- Folders --

/// Body of `POST /api/folders/new`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewFolder {
    pub name: String,
}

// -- Admin --

/// Body of `POST /api/admin/users/new`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

/// Body of `POST /api/admin/domains/new`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewDomain {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_folder_serializes_to_name_only() {
        let body = serde_json::to_string(&NewFolder {
            name: "Invoices".into(),
        })
        .unwrap();
        assert_eq!(body, r#"{"name":"Invoices"}"#);
    }

    #[test]
    fn new_user_uses_snake_case_admin_flag() {
        let value = serde_json::to_value(NewUser {
            username: "alice".into(),
            password: "hunter2".into(),
            is_admin: true,
        })
        .unwrap();
        assert_eq!(value["is_admin"], serde_json::Value::Bool(true));
    }

    #[test]
    fn login_request_rejects_unknown_fields() {
        let err = serde_json::from_str::<LoginRequest>(
            r#"{"username":"a","password":"b","remember":true}"#,
        );
        assert!(err.is_err());
    }
}
