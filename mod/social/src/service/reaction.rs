//! Reaction store and toggle workflows.
//!
//! Likes and dislikes are mutually exclusive per (user, tuit) pair. A toggle
//! flips the caller's record of one kind, removes the opposite kind if
//! present, then recomputes both counters from the reaction records and
//! writes them onto the tuit document. Counting happens *after* the
//! mutation, against the store of record, so the persisted counters match
//! the records for every sequential history.
//!
//! There is no transaction spanning the reaction write and the stats write.
//! A failure between them leaves the counter stale until the next toggle
//! recounts; the workflow aborts on the first error with no rollback.

use tracing::debug;

use tuiter_core::ServiceError;
use tuiter_store::KvOps;

use crate::model::{Dislike, Like, ReactionRecord, Tuit, TuitStats, User};
use crate::service::SocialService;

fn pair_key(user_id: &str, tuit_id: &str) -> String {
    format!("{}:{}", user_id, tuit_id)
}

/// True if a reaction record of this kind exists for the pair.
fn exists<R: ReactionRecord>(
    ops: &KvOps<R>,
    user_id: &str,
    tuit_id: &str,
) -> Result<bool, ServiceError> {
    Ok(ops.get(&pair_key(user_id, tuit_id))?.is_some())
}

/// Number of reaction records of this kind for the tuit, counted from the
/// records themselves.
fn count<R: ReactionRecord>(ops: &KvOps<R>, tuit_id: &str) -> Result<u32, ServiceError> {
    let n = ops
        .list()?
        .iter()
        .filter(|r| r.tuit_id() == tuit_id)
        .count();
    Ok(n as u32)
}

/// Insert a reaction record. The composite key makes a duplicate a Conflict,
/// never a second record.
fn add<R: ReactionRecord>(
    ops: &KvOps<R>,
    user_id: &str,
    tuit_id: &str,
) -> Result<R, ServiceError> {
    ops.save_new(R::new(user_id, tuit_id)).map_err(|e| match e {
        ServiceError::Conflict(_) => ServiceError::Conflict(format!(
            "duplicate {}: user '{}' on tuit '{}'",
            R::KIND,
            user_id,
            tuit_id
        )),
        other => other,
    })
}

/// Delete a reaction record; NotFound if none exists.
fn remove<R: ReactionRecord>(
    ops: &KvOps<R>,
    user_id: &str,
    tuit_id: &str,
) -> Result<(), ServiceError> {
    ops.delete(&pair_key(user_id, tuit_id)).map_err(|e| match e {
        ServiceError::NotFound(_) => ServiceError::NotFound(format!(
            "no {} by user '{}' on tuit '{}'",
            R::KIND,
            user_id,
            tuit_id
        )),
        other => other,
    })
}

impl SocialService {
    // ── Reaction store surface ──

    pub fn like_exists(&self, user_id: &str, tuit_id: &str) -> Result<bool, ServiceError> {
        exists(&self.likes, user_id, tuit_id)
    }

    pub fn dislike_exists(&self, user_id: &str, tuit_id: &str) -> Result<bool, ServiceError> {
        exists(&self.dislikes, user_id, tuit_id)
    }

    pub fn count_likes(&self, tuit_id: &str) -> Result<u32, ServiceError> {
        count(&self.likes, tuit_id)
    }

    pub fn count_dislikes(&self, tuit_id: &str) -> Result<u32, ServiceError> {
        count(&self.dislikes, tuit_id)
    }

    /// Point lookup of a dislike record.
    pub fn find_dislike(
        &self,
        user_id: &str,
        tuit_id: &str,
    ) -> Result<Option<Dislike>, ServiceError> {
        self.dislikes.get(&pair_key(user_id, tuit_id))
    }

    /// Point lookup of a like record.
    pub fn find_like(&self, user_id: &str, tuit_id: &str) -> Result<Option<Like>, ServiceError> {
        self.likes.get(&pair_key(user_id, tuit_id))
    }

    // ── Toggle workflows ──

    /// Flip the user's dislike on a tuit and return the updated stats.
    ///
    /// Disliking removes an existing like (the two kinds are mutually
    /// exclusive). The tuit is loaded first, so a missing tuit aborts before
    /// any reaction mutation.
    pub fn toggle_dislike(
        &self,
        user_id: &str,
        tuit_id: &str,
    ) -> Result<TuitStats, ServiceError> {
        let tuit = self.get_tuit(tuit_id)?;

        if exists(&self.dislikes, user_id, tuit_id)? {
            remove(&self.dislikes, user_id, tuit_id)?;
            debug!(user_id, tuit_id, "dislike removed");
        } else {
            add(&self.dislikes, user_id, tuit_id)?;
            if exists(&self.likes, user_id, tuit_id)? {
                remove(&self.likes, user_id, tuit_id)?;
            }
            debug!(user_id, tuit_id, "dislike added");
        }

        self.recount_and_save(tuit)
    }

    /// Flip the user's like on a tuit and return the updated stats.
    ///
    /// The mirror of [`toggle_dislike`](Self::toggle_dislike): liking
    /// removes an existing dislike.
    pub fn toggle_like(&self, user_id: &str, tuit_id: &str) -> Result<TuitStats, ServiceError> {
        let tuit = self.get_tuit(tuit_id)?;

        if exists(&self.likes, user_id, tuit_id)? {
            remove(&self.likes, user_id, tuit_id)?;
            debug!(user_id, tuit_id, "like removed");
        } else {
            add(&self.likes, user_id, tuit_id)?;
            if exists(&self.dislikes, user_id, tuit_id)? {
                remove(&self.dislikes, user_id, tuit_id)?;
            }
            debug!(user_id, tuit_id, "like added");
        }

        self.recount_and_save(tuit)
    }

    /// Recompute both counters from the reaction records and persist them.
    fn recount_and_save(&self, mut tuit: Tuit) -> Result<TuitStats, ServiceError> {
        tuit.stats.likes = count(&self.likes, &tuit.id)?;
        tuit.stats.dislikes = count(&self.dislikes, &tuit.id)?;
        let saved = self.tuits.save(tuit)?;
        Ok(saved.stats)
    }

    // ── Query workflows ──

    /// All tuits the user has disliked. Records whose tuit has since been
    /// deleted are skipped.
    pub fn list_disliked_tuits(&self, user_id: &str) -> Result<Vec<Tuit>, ServiceError> {
        self.joined_tuits(self.dislikes.list()?, user_id)
    }

    /// All tuits the user has liked.
    pub fn list_liked_tuits(&self, user_id: &str) -> Result<Vec<Tuit>, ServiceError> {
        self.joined_tuits(self.likes.list()?, user_id)
    }

    /// All users who liked a tuit.
    pub fn list_tuit_likers(&self, tuit_id: &str) -> Result<Vec<User>, ServiceError> {
        let mut users = Vec::new();
        for like in self.likes.list()? {
            if like.tuit_id == tuit_id {
                if let Some(user) = self.users.get(&like.user_id)? {
                    users.push(user);
                }
            }
        }
        Ok(users)
    }

    fn joined_tuits<R: ReactionRecord>(
        &self,
        records: Vec<R>,
        user_id: &str,
    ) -> Result<Vec<Tuit>, ServiceError> {
        let mut tuits = Vec::new();
        for record in records {
            if record.user_id() == user_id {
                if let Some(tuit) = self.tuits.get(record.tuit_id())? {
                    tuits.push(tuit);
                }
            }
        }
        Ok(tuits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CreateTuit;
    use crate::service::test_util::test_service;

    fn seed_tuit(svc: &SocialService) -> String {
        svc.create_tuit("alice", CreateTuit { content: "react to me".into() })
            .unwrap()
            .id
    }

    #[test]
    fn double_toggle_is_idempotent() {
        let svc = test_service();
        let tid = seed_tuit(&svc);

        let first = svc.toggle_dislike("bob", &tid).unwrap();
        assert_eq!(first.dislikes, 1);
        assert!(svc.dislike_exists("bob", &tid).unwrap());

        let second = svc.toggle_dislike("bob", &tid).unwrap();
        assert_eq!(second.dislikes, 0);
        assert!(!svc.dislike_exists("bob", &tid).unwrap());
    }

    #[test]
    fn dislike_removes_existing_like() {
        let svc = test_service();
        let tid = seed_tuit(&svc);

        let liked = svc.toggle_like("bob", &tid).unwrap();
        assert_eq!(liked.likes, 1);

        let stats = svc.toggle_dislike("bob", &tid).unwrap();
        assert!(svc.dislike_exists("bob", &tid).unwrap());
        assert!(!svc.like_exists("bob", &tid).unwrap());
        assert_eq!(stats.likes, 0);
        assert_eq!(stats.dislikes, 1);
    }

    #[test]
    fn like_removes_existing_dislike() {
        let svc = test_service();
        let tid = seed_tuit(&svc);

        svc.toggle_dislike("bob", &tid).unwrap();
        let stats = svc.toggle_like("bob", &tid).unwrap();

        assert!(svc.like_exists("bob", &tid).unwrap());
        assert!(!svc.dislike_exists("bob", &tid).unwrap());
        assert_eq!(stats.likes, 1);
        assert_eq!(stats.dislikes, 0);
    }

    #[test]
    fn missing_tuit_leaves_store_untouched() {
        let svc = test_service();

        let err = svc.toggle_dislike("bob", "ghost").unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");

        assert!(!svc.dislike_exists("bob", "ghost").unwrap());
        assert_eq!(svc.count_dislikes("ghost").unwrap(), 0);
    }

    #[test]
    fn sequential_counters_are_exact() {
        let svc = test_service();
        let tid = seed_tuit(&svc);

        // Five distinct users dislike once each.
        for i in 0..5 {
            let uid = format!("user{}", i);
            let stats = svc.toggle_dislike(&uid, &tid).unwrap();
            assert_eq!(stats.dislikes, i + 1);
        }
        assert_eq!(svc.get_tuit(&tid).unwrap().stats.dislikes, 5);

        // Un-dislike in a different order; counter returns to zero.
        for (n, i) in [3u32, 0, 4, 1, 2].into_iter().enumerate() {
            let uid = format!("user{}", i);
            let stats = svc.toggle_dislike(&uid, &tid).unwrap();
            assert_eq!(stats.dislikes, 4 - n as u32);
        }
        assert_eq!(svc.get_tuit(&tid).unwrap().stats.dislikes, 0);
    }

    #[test]
    fn counter_matches_record_count_after_interleaving() {
        // Regression for the recount-after-mutation design: interleaved
        // toggles by different users must end with the persisted counter
        // equal to the true record count, which the legacy
        // read-count-then-overwrite sequence could not guarantee.
        let svc = test_service();
        let tid = seed_tuit(&svc);

        svc.toggle_dislike("alice", &tid).unwrap();
        svc.toggle_dislike("bob", &tid).unwrap();
        svc.toggle_dislike("carol", &tid).unwrap();
        svc.toggle_dislike("alice", &tid).unwrap(); // alice un-dislikes

        let stats = svc.get_tuit(&tid).unwrap().stats;
        assert_eq!(stats.dislikes, svc.count_dislikes(&tid).unwrap());
        assert_eq!(stats.dislikes, 2);
    }

    #[test]
    fn stats_isolated_per_tuit() {
        let svc = test_service();
        let t1 = seed_tuit(&svc);
        let t2 = svc
            .create_tuit("bob", CreateTuit { content: "other".into() })
            .unwrap()
            .id;

        svc.toggle_dislike("alice", &t1).unwrap();
        assert_eq!(svc.get_tuit(&t2).unwrap().stats.dislikes, 0);
        assert_eq!(svc.count_dislikes(&t2).unwrap(), 0);
    }

    #[test]
    fn query_workflows_join_tuits() {
        let svc = test_service();
        let tid = seed_tuit(&svc);

        assert!(svc.find_dislike("bob", &tid).unwrap().is_none());
        svc.toggle_dislike("bob", &tid).unwrap();

        let record = svc.find_dislike("bob", &tid).unwrap().unwrap();
        assert_eq!(record.user_id, "bob");
        assert_eq!(record.tuit_id, tid);

        let tuits = svc.list_disliked_tuits("bob").unwrap();
        assert_eq!(tuits.len(), 1);
        assert_eq!(tuits[0].id, tid);

        assert!(svc.list_disliked_tuits("alice").unwrap().is_empty());
    }

    #[test]
    fn likers_resolve_to_users() {
        let svc = test_service();
        let tid = seed_tuit(&svc);

        svc.toggle_like("alice", &tid).unwrap();
        svc.toggle_like("bob", &tid).unwrap();

        let likers = svc.list_tuit_likers(&tid).unwrap();
        let names: Vec<&str> = likers.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[test]
    fn deleted_tuit_skipped_in_join() {
        let svc = test_service();
        let tid = seed_tuit(&svc);

        svc.toggle_dislike("bob", &tid).unwrap();
        svc.delete_tuit(&tid).unwrap();

        // The dangling record is skipped, not an error.
        assert!(svc.list_disliked_tuits("bob").unwrap().is_empty());
    }
}
