use hectane_types::{LoginRequest, NewDomain, NewFolder, NewUser};

/// Transient fields behind a dialog. `Default` is the blank form shown when
/// the dialog opens.
pub trait Form: Default {
    type Draft: Clone;

    /// Build the record to send from the current field values.
    fn draft(&self) -> Self::Draft;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl Form for LoginForm {
    type Draft = LoginRequest;

    fn draft(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderForm {
    pub name: String,
}

impl Form for FolderForm {
    type Draft = NewFolder;

    fn draft(&self) -> NewFolder {
        NewFolder {
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

impl Form for UserForm {
    type Draft = NewUser;

    fn draft(&self) -> NewUser {
        NewUser {
            username: self.username.clone(),
            password: self.password.clone(),
            is_admin: self.is_admin,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainForm {
    pub name: String,
}

impl Form for DomainForm {
    type Draft = NewDomain;

    fn draft(&self) -> NewDomain {
        NewDomain {
            name: self.name.clone(),
        }
    }
}
