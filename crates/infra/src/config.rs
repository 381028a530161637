//! Process configuration, read from `ORDERDESK_*` environment variables.

use std::path::PathBuf;

use orderdesk_core::{ActorContext, CompanyId, CompanySummary, CurrentUser, UserId};

pub const DATA_DIR_VAR: &str = "ORDERDESK_DATA_DIR";
pub const USER_ID_VAR: &str = "ORDERDESK_USER_ID";
pub const USER_NAME_VAR: &str = "ORDERDESK_USER_NAME";
pub const COMPANY_ID_VAR: &str = "ORDERDESK_COMPANY_ID";
pub const COMPANY_NAME_VAR: &str = "ORDERDESK_COMPANY_NAME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `orders.json`, `products.json` and `companies.json`.
    pub data_dir: PathBuf,
    pub user_id: String,
    pub user_name: String,
    pub company_id: String,
    pub company_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            user_id: "user-001".to_string(),
            user_name: "User Name".to_string(),
            company_id: "company-001".to_string(),
            company_name: "Company 001".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys fall back to
    /// the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str, default: String| match lookup(key) {
            Some(value) => value,
            None => {
                tracing::debug!(key, %default, "config value not set; using default");
                default
            }
        };

        Self {
            data_dir: PathBuf::from(read(DATA_DIR_VAR, defaults.data_dir.display().to_string())),
            user_id: read(USER_ID_VAR, defaults.user_id),
            user_name: read(USER_NAME_VAR, defaults.user_name),
            company_id: read(COMPANY_ID_VAR, defaults.company_id),
            company_name: read(COMPANY_NAME_VAR, defaults.company_name),
        }
    }

    /// The configured user, as the actor every store operation runs under.
    pub fn actor(&self) -> ActorContext {
        ActorContext::new(CurrentUser {
            id: UserId::new(self.user_id.as_str()),
            name: self.user_name.clone(),
            company: CompanySummary {
                id: CompanyId::new(self.company_id.as_str()),
                name: self.company_name.clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn unset_values_fall_back_to_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.company_id, "company-001");
    }

    #[test]
    fn lookup_values_override_defaults() {
        let vars: HashMap<&str, &str> = [
            (DATA_DIR_VAR, "/srv/orderdesk"),
            (COMPANY_ID_VAR, "company-002"),
            (COMPANY_NAME_VAR, "Nordic Mills"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_dir, PathBuf::from("/srv/orderdesk"));
        assert_eq!(config.company_id, "company-002");
        assert_eq!(config.company_name, "Nordic Mills");
        assert_eq!(config.user_id, "user-001");
        assert_eq!(config.user_name, "User Name");
    }

    #[test]
    fn actor_carries_configured_company() {
        let actor = Config::default().actor();
        assert_eq!(actor.company_id().map(|id| id.as_str()), Some("company-001"));
        assert_eq!(actor.current_user().name, "User Name");
    }

    #[test]
    fn empty_company_id_yields_actor_without_company() {
        let config = Config::from_lookup(|key| (key == COMPANY_ID_VAR).then(String::new));
        assert!(config.actor().company_id().is_none());
    }
}
