use tuiter_core::{ListParams, ListResult, ServiceError, merge_patch};

use crate::model::{CreateUser, LoginResponse, User};
use crate::service::SocialService;

impl SocialService {
    /// Create a new user. The username doubles as the document key, so a
    /// taken username surfaces as a Conflict.
    pub fn create_user(&self, input: CreateUser) -> Result<User, ServiceError> {
        if input.username.trim().is_empty() {
            return Err(ServiceError::Validation("username must not be empty".into()));
        }
        let user = User {
            id: String::new(),
            username: input.username.clone(),
            password: input.password,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            bio: input.bio,
            created_at: String::new(),
            updated_at: String::new(),
        };
        self.users
            .save_new(user)
            .map_err(|e| match e {
                ServiceError::Conflict(_) => {
                    ServiceError::Conflict(format!("username '{}' is taken", input.username))
                }
                other => other,
            })
    }

    /// Get a user by id.
    pub fn get_user(&self, id: &str) -> Result<User, ServiceError> {
        self.users
            .get(id)?
            .ok_or_else(|| ServiceError::NotFound(format!("user '{}' not found", id)))
    }

    /// List users with pagination.
    pub fn list_users(&self, params: &ListParams) -> Result<ListResult<User>, ServiceError> {
        let all = self.users.list()?;
        let total = all.len();
        let items = all
            .into_iter()
            .skip(params.offset)
            .take(params.limit)
            .collect();
        Ok(ListResult { items, total })
    }

    /// Update a user with JSON merge-patch semantics.
    pub fn update_user(
        &self,
        id: &str,
        patch: serde_json::Value,
    ) -> Result<User, ServiceError> {
        let current = self.get_user(id)?;

        let mut base = serde_json::to_value(&current)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        merge_patch(&mut base, &patch);
        // Preserve identity and creation time.
        base["id"] = serde_json::json!(current.id);
        base["createdAt"] = serde_json::json!(current.created_at);

        let updated: User = serde_json::from_value(base)
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        self.users.save(updated)
    }

    /// Delete a user by id.
    pub fn delete_user(&self, id: &str) -> Result<(), ServiceError> {
        self.users
            .delete(id)
            .map_err(|_| ServiceError::NotFound(format!("user '{}' not found", id)))
    }

    /// Verify credentials and issue a bearer token.
    pub fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ServiceError> {
        let user = self
            .users
            .get(username)?
            .filter(|u| u.password == password)
            .ok_or_else(|| ServiceError::Unauthorized("bad username or password".into()))?;
        self.issue_token(user)
    }

    /// Create a user and log them in.
    pub fn register(&self, input: CreateUser) -> Result<LoginResponse, ServiceError> {
        let user = self.create_user(input)?;
        self.issue_token(user)
    }

    fn issue_token(&self, user: User) -> Result<LoginResponse, ServiceError> {
        let token = self
            .jwt
            .issue(&user.id, &user.username)
            .map_err(ServiceError::Internal)?;
        Ok(LoginResponse {
            access_token: token,
            token_type: "Bearer".into(),
            expires_in: self.jwt.expire_secs(),
            user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_util::test_service;

    #[test]
    fn user_crud() {
        let svc = test_service();

        let user = svc.get_user("alice").unwrap();
        assert_eq!(user.username, "alice");
        assert!(!user.created_at.is_empty());

        let updated = svc
            .update_user("alice", serde_json::json!({"bio": "Rust dev"}))
            .unwrap();
        assert_eq!(updated.bio.as_deref(), Some("Rust dev"));
        assert_eq!(updated.id, "alice");

        svc.delete_user("alice").unwrap();
        assert!(svc.get_user("alice").is_err());
    }

    #[test]
    fn duplicate_username_conflicts() {
        let svc = test_service();
        let err = svc
            .create_user(CreateUser {
                username: "alice".into(),
                password: "other".into(),
                first_name: None,
                last_name: None,
                email: None,
                bio: None,
            })
            .unwrap_err();
        assert_eq!(err.error_code(), "ALREADY_EXISTS");
    }

    #[test]
    fn list_users_paginates() {
        let svc = test_service();
        let page = svc
            .list_users(&ListParams { limit: 1, offset: 0 })
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn login_checks_password() {
        let svc = test_service();
        assert!(svc.login("alice", "pw").is_ok());

        let err = svc.login("alice", "wrong").unwrap_err();
        assert_eq!(err.error_code(), "UNAUTHENTICATED");

        let err = svc.login("nobody", "pw").unwrap_err();
        assert_eq!(err.error_code(), "UNAUTHENTICATED");
    }

    #[test]
    fn merge_patch_cannot_change_id() {
        let svc = test_service();
        let updated = svc
            .update_user("alice", serde_json::json!({"id": "mallory"}))
            .unwrap();
        assert_eq!(updated.id, "alice");
    }
}
