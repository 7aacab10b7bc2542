use super::{ApiClient, ClientError, ClientResult, Credential};
use crate::model::User;

impl ApiClient {
    /// Profile of the credential's owner
    pub async fn user_own(&self, cred: &Credential) -> ClientResult<User> {
        self.get("/users/own", cred).await
    }

    /// Validate a fresh credential, translating denied/expired/revoked
    /// sessions into dedicated errors.
    pub async fn user_login(&self, cred: &Credential) -> ClientResult<User> {
        self.get("/users/login", cred)
            .await
            .map_err(ClientError::into_login_error)
    }
}
