use tuiter_core::ServiceError;

use crate::model::{Bookmark, Tuit};
use crate::service::SocialService;

impl SocialService {
    /// Bookmark a tuit for a user.
    pub fn bookmark(&self, user_id: &str, tuit_id: &str) -> Result<Bookmark, ServiceError> {
        self.get_tuit(tuit_id)?;
        self.bookmarks.save_new(Bookmark {
            id: String::new(),
            user_id: user_id.to_string(),
            tuit_id: tuit_id.to_string(),
            created_at: String::new(),
        })
    }

    /// Remove a bookmark.
    pub fn unbookmark(&self, user_id: &str, tuit_id: &str) -> Result<(), ServiceError> {
        self.bookmarks
            .delete(&format!("{}:{}", user_id, tuit_id))
            .map_err(|_| {
                ServiceError::NotFound(format!(
                    "no bookmark by '{}' on tuit '{}'",
                    user_id, tuit_id
                ))
            })
    }

    /// All tuits a user has bookmarked. Bookmarks whose tuit has since been
    /// deleted are skipped.
    pub fn list_bookmarked_tuits(&self, user_id: &str) -> Result<Vec<Tuit>, ServiceError> {
        let mut tuits = Vec::new();
        for bookmark in self.bookmarks.list()? {
            if bookmark.user_id == user_id {
                if let Some(tuit) = self.tuits.get(&bookmark.tuit_id)? {
                    tuits.push(tuit);
                }
            }
        }
        Ok(tuits)
    }
}
