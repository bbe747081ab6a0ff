//! Recorded gb fleet and the user session.

use std::collections::HashMap;

use bevy::prelude::*;

/// One tracked gb as recorded from the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Gb {
    pub username: String,
    pub color: Color,
}

/// The recorded device set, replaced wholesale on each registry update.
#[derive(Resource, Default)]
pub struct GbRegistry {
    gbs: HashMap<String, Gb>,
}

impl GbRegistry {
    /// Apply a registry update: an empty update clears the recorded set, a
    /// non-empty one replaces it.
    pub fn apply_update(&mut self, update: HashMap<String, Gb>) {
        if update.is_empty() {
            if !self.gbs.is_empty() {
                info!("Registry emptied, clearing {} recorded gbs", self.gbs.len());
            }
            self.gbs.clear();
        } else {
            self.gbs = update;
        }
    }

    pub fn get(&self, username: &str) -> Option<&Gb> {
        self.gbs.get(username)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.gbs.contains_key(username)
    }

    pub fn is_empty(&self) -> bool {
        self.gbs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.gbs.len()
    }

    /// Usernames in stable order for the badge panel.
    pub fn usernames(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.gbs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// The signed-in user, read once at startup from the session store.
#[derive(Resource, Default)]
pub struct UserSession {
    pub username: Option<String>,
    pub role: Option<String>,
}

impl UserSession {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    fn gb(username: &str) -> Gb {
        Gb {
            username: username.to_string(),
            color: theme::GB_FALLBACK,
        }
    }

    fn fleet(names: &[&str]) -> HashMap<String, Gb> {
        names
            .iter()
            .map(|n| (n.to_string(), gb(n)))
            .collect()
    }

    #[test]
    fn test_empty_update_clears_recorded_set() {
        let mut registry = GbRegistry::default();
        registry.apply_update(fleet(&["gb1", "gb2"]));
        assert_eq!(registry.len(), 2);

        registry.apply_update(HashMap::new());
        assert!(registry.is_empty());
        assert!(!registry.contains("gb1"));
    }

    #[test]
    fn test_nonempty_update_repopulates() {
        let mut registry = GbRegistry::default();
        registry.apply_update(HashMap::new());
        registry.apply_update(fleet(&["gb1"]));

        assert!(registry.contains("gb1"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_update_replaces_not_merges() {
        let mut registry = GbRegistry::default();
        registry.apply_update(fleet(&["gb1", "gb2"]));
        registry.apply_update(fleet(&["gb3"]));

        assert!(!registry.contains("gb1"));
        assert!(registry.contains("gb3"));
    }

    #[test]
    fn test_usernames_sorted() {
        let mut registry = GbRegistry::default();
        registry.apply_update(fleet(&["gb3", "gb1", "gb2"]));
        assert_eq!(registry.usernames(), vec!["gb1", "gb2", "gb3"]);
    }

    #[test]
    fn test_is_admin() {
        let mut session = UserSession::default();
        assert!(!session.is_admin());

        session.role = Some("viewer".to_string());
        assert!(!session.is_admin());

        session.role = Some("admin".to_string());
        assert!(session.is_admin());
    }
}
