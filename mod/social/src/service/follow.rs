use tuiter_core::ServiceError;

use crate::model::{Follow, User};
use crate::service::SocialService;

impl SocialService {
    /// Record that `follower_id` follows `followee_id`.
    pub fn follow(&self, follower_id: &str, followee_id: &str) -> Result<Follow, ServiceError> {
        if follower_id == followee_id {
            return Err(ServiceError::Validation("cannot follow yourself".into()));
        }
        self.get_user(followee_id)?;
        self.follows.save_new(Follow {
            id: String::new(),
            follower_id: follower_id.to_string(),
            followee_id: followee_id.to_string(),
            created_at: String::new(),
        })
    }

    /// Remove a follow edge.
    pub fn unfollow(&self, follower_id: &str, followee_id: &str) -> Result<(), ServiceError> {
        self.follows
            .delete(&format!("{}:{}", follower_id, followee_id))
            .map_err(|_| {
                ServiceError::NotFound(format!(
                    "'{}' does not follow '{}'",
                    follower_id, followee_id
                ))
            })
    }

    /// Users that `user_id` follows.
    pub fn list_following(&self, user_id: &str) -> Result<Vec<User>, ServiceError> {
        let mut users = Vec::new();
        for edge in self.follows.list()? {
            if edge.follower_id == user_id {
                if let Some(user) = self.users.get(&edge.followee_id)? {
                    users.push(user);
                }
            }
        }
        Ok(users)
    }

    /// Users following `user_id`.
    pub fn list_followers(&self, user_id: &str) -> Result<Vec<User>, ServiceError> {
        let mut users = Vec::new();
        for edge in self.follows.list()? {
            if edge.followee_id == user_id {
                if let Some(user) = self.users.get(&edge.follower_id)? {
                    users.push(user);
                }
            }
        }
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_util::test_service;

    #[test]
    fn follow_and_unfollow() {
        let svc = test_service();

        svc.follow("alice", "bob").unwrap();
        let following = svc.list_following("alice").unwrap();
        assert_eq!(following.len(), 1);
        assert_eq!(following[0].username, "bob");

        let followers = svc.list_followers("bob").unwrap();
        assert_eq!(followers.len(), 1);
        assert_eq!(followers[0].username, "alice");

        svc.unfollow("alice", "bob").unwrap();
        assert!(svc.list_following("alice").unwrap().is_empty());
    }

    #[test]
    fn double_follow_conflicts() {
        let svc = test_service();
        svc.follow("alice", "bob").unwrap();
        let err = svc.follow("alice", "bob").unwrap_err();
        assert_eq!(err.error_code(), "ALREADY_EXISTS");
    }

    #[test]
    fn self_follow_rejected() {
        let svc = test_service();
        let err = svc.follow("alice", "alice").unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
    }

    #[test]
    fn unfollow_without_edge_not_found() {
        let svc = test_service();
        let err = svc.unfollow("alice", "bob").unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn follow_unknown_user_not_found() {
        let svc = test_service();
        let err = svc.follow("alice", "nobody").unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }
}
