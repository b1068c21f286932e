//! Account storage for [`User`] records.
//!
//! The store knows nothing about passwords: the only credential in the
//! whole system is the hardcoded administrator pair checked in the auth
//! layer. Lookups match the username exactly (case-sensitive).
//!
//! There is no atomic check-and-insert; callers who need uniqueness query
//! with [`Database::find_user`] first. Acceptable for the single-user demo
//! deployment.

use strange_shows_shared::types::User;

use crate::collection::KEY_USERS;
use crate::database::Database;
use crate::error::Result;

impl Database {
    /// Fetch all accounts, insertion order preserved.
    pub fn users_get_all(&self) -> Result<Vec<User>> {
        self.read_collection(KEY_USERS)
    }

    /// Look up an account by exact username.
    pub fn find_user(&self, username: &str) -> Result<Option<User>> {
        let users = self.users_get_all()?;
        Ok(users.into_iter().find(|u| u.username == username))
    }

    /// Append an account and persist the full list.
    pub fn insert_user(&self, user: &User) -> Result<Vec<User>> {
        let mut users = self.users_get_all()?;
        users.push(user.clone());
        self.write_collection(KEY_USERS, &users)?;
        tracing::debug!(username = %user.username, "user inserted");
        Ok(users)
    }

    /// Replace the account whose username matches `user.username`; silent
    /// no-op when no username matches.
    pub fn update_user(&self, user: &User) -> Result<Vec<User>> {
        let mut users = self.users_get_all()?;
        for existing in &mut users {
            if existing.username == user.username {
                *existing = user.clone();
            }
        }
        self.write_collection(KEY_USERS, &users)?;
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use strange_shows_shared::constants::ADMIN_USERNAME;

    use super::*;

    fn sample_user(username: &str) -> User {
        User {
            username: username.to_string(),
            avatar: None,
            credits: 100,
            level: 1,
            is_admin: false,
        }
    }

    #[test]
    fn find_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("test.db")).unwrap();

        db.insert_user(&sample_user("alice")).unwrap();

        assert!(db.find_user("alice").unwrap().is_some());
        assert!(db.find_user("Alice").unwrap().is_none());
    }

    #[test]
    fn admin_account_is_seeded() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("test.db")).unwrap();

        let admin = db.find_user(ADMIN_USERNAME).unwrap().expect("seeded admin");
        assert!(admin.is_admin);
        assert_eq!(admin.credits, 999_999);
    }

    #[test]
    fn update_replaces_by_username() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("test.db")).unwrap();

        db.insert_user(&sample_user("bob")).unwrap();

        let mut richer = sample_user("bob");
        richer.credits = 250;
        db.update_user(&richer).unwrap();

        assert_eq!(db.find_user("bob").unwrap().unwrap().credits, 250);
    }
}
