use serde::{Deserialize, Serialize};

pub const OFFICIAL_REPOSITORY_ID: &str = "com.vrchat.repos.official";
pub const CURATED_REPOSITORY_ID: &str = "com.vrchat.repos.curated";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRepository {
    pub id: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoriesInfo {
    #[serde(default)]
    pub user_repositories: Vec<UserRepository>,
    #[serde(default)]
    pub hidden_user_repositories: Vec<String>,
    #[serde(default)]
    pub hide_local_user_packages: bool,
    #[serde(default)]
    pub show_prerelease_packages: bool,
}

impl RepositoriesInfo {
    pub fn is_repository_shown(&self, id: &str) -> bool {
        !self.hidden_user_repositories.iter().any(|hidden| hidden == id)
    }

    pub fn set_repository_shown(&mut self, id: &str, shown: bool) {
        if shown {
            self.hidden_user_repositories.retain(|hidden| hidden != id);
        } else if self.is_repository_shown(id) {
            self.hidden_user_repositories.push(id.to_string());
        }
    }

    // official and curated first, then user repositories in configured order
    pub fn menu_repository_ids(&self) -> Vec<&str> {
        let mut ids = vec![OFFICIAL_REPOSITORY_ID, CURATED_REPOSITORY_ID];
        ids.extend(
            self.user_repositories
                .iter()
                .map(|repository| repository.id.as_str()),
        );
        ids
    }
}
