use tuiter_core::{ListParams, ListResult, ServiceError, merge_patch};

use crate::model::{CreateTuit, Tuit, TuitStats};
use crate::service::SocialService;

impl SocialService {
    /// Create a tuit authored by `user_id`.
    pub fn create_tuit(&self, user_id: &str, input: CreateTuit) -> Result<Tuit, ServiceError> {
        if input.content.trim().is_empty() {
            return Err(ServiceError::Validation("tuit must not be empty".into()));
        }
        if input.content.chars().count() > 280 {
            return Err(ServiceError::Validation("tuit exceeds 280 characters".into()));
        }
        // The author must exist; tuits never dangle.
        self.get_user(user_id)?;

        let tuit = Tuit {
            id: String::new(),
            posted_by: user_id.to_string(),
            content: input.content,
            stats: TuitStats::default(),
            created_at: String::new(),
            updated_at: String::new(),
        };
        self.tuits.save_new(tuit)
    }

    /// Get a tuit by id.
    pub fn get_tuit(&self, id: &str) -> Result<Tuit, ServiceError> {
        self.tuits
            .get(id)?
            .ok_or_else(|| ServiceError::NotFound(format!("tuit '{}' not found", id)))
    }

    /// List tuits with pagination, newest first.
    pub fn list_tuits(&self, params: &ListParams) -> Result<ListResult<Tuit>, ServiceError> {
        let mut all = self.tuits.list()?;
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let total = all.len();
        let items = all
            .into_iter()
            .skip(params.offset)
            .take(params.limit)
            .collect();
        Ok(ListResult { items, total })
    }

    /// List all tuits posted by a user, newest first.
    pub fn list_tuits_by_user(&self, user_id: &str) -> Result<Vec<Tuit>, ServiceError> {
        let mut tuits: Vec<Tuit> = self
            .tuits
            .list()?
            .into_iter()
            .filter(|t| t.posted_by == user_id)
            .collect();
        tuits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tuits)
    }

    /// Update a tuit with JSON merge-patch semantics.
    pub fn update_tuit(
        &self,
        id: &str,
        patch: serde_json::Value,
    ) -> Result<Tuit, ServiceError> {
        let current = self.get_tuit(id)?;

        let mut base = serde_json::to_value(&current)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        merge_patch(&mut base, &patch);
        // Preserve identity, authorship and creation time.
        base["id"] = serde_json::json!(current.id);
        base["postedBy"] = serde_json::json!(current.posted_by);
        base["createdAt"] = serde_json::json!(current.created_at);

        let updated: Tuit = serde_json::from_value(base)
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        self.tuits.save(updated)
    }

    /// Delete a tuit by id.
    pub fn delete_tuit(&self, id: &str) -> Result<(), ServiceError> {
        self.tuits
            .delete(id)
            .map_err(|_| ServiceError::NotFound(format!("tuit '{}' not found", id)))
    }

    /// Overwrite the embedded stats on a tuit document. A single-document
    /// write; no transaction spans this and the reaction records.
    pub fn set_stats(&self, tuit_id: &str, stats: TuitStats) -> Result<Tuit, ServiceError> {
        let mut tuit = self.get_tuit(tuit_id)?;
        tuit.stats = stats;
        self.tuits.save(tuit)
    }
}
