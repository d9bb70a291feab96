//! Account registry: register, authenticate, change avatar.

use crate::content::data::AVATARS;
use crate::core::error::{GameError, Result};
use crate::utils::persistence::{load_json_or_default, save_json};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::info;

/// Hex SHA-256 of `username:password`.
pub fn hash_password(username: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(username.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

fn default_avatar() -> String {
    AVATARS[0].to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub password_hash: String,
    #[serde(default = "default_avatar")]
    pub avatar: String,
}

/// Register/authenticate collaborator.
pub trait CredentialStore {
    fn register(&mut self, username: &str, password: &str) -> Result<Account>;
    fn authenticate(&self, username: &str, password: &str) -> Result<Account>;
    fn set_avatar(&mut self, username: &str, avatar: &str) -> Result<Account>;
}

/// In-memory account list. Also the on-disk shape of the registry file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountRegistry {
    pub accounts: Vec<Account>,
}

impl AccountRegistry {
    pub fn find(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username == username)
    }
}

impl CredentialStore for AccountRegistry {
    fn register(&mut self, username: &str, password: &str) -> Result<Account> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(GameError::InvalidCredentials);
        }
        if self.find(username).is_some() {
            return Err(GameError::UsernameTaken);
        }
        let account = Account {
            username: username.to_string(),
            password_hash: hash_password(username, password),
            avatar: default_avatar(),
        };
        self.accounts.push(account.clone());
        info!(username, "Account registered");
        Ok(account)
    }

    fn authenticate(&self, username: &str, password: &str) -> Result<Account> {
        let hash = hash_password(username, password);
        self.find(username)
            .filter(|a| a.password_hash == hash)
            .cloned()
            .ok_or(GameError::InvalidCredentials)
    }

    fn set_avatar(&mut self, username: &str, avatar: &str) -> Result<Account> {
        if !AVATARS.contains(&avatar) {
            return Err(GameError::UnknownItem(avatar.to_string()));
        }
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.username == username)
            .ok_or(GameError::NotLoggedIn)?;
        account.avatar = avatar.to_string();
        Ok(account.clone())
    }
}

/// Registry persisted to a JSON file, rewritten after every change.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
    registry: AccountRegistry,
}

impl FileCredentialStore {
    /// Opens the registry file. A missing or unreadable file starts empty.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let registry = load_json_or_default(&path);
        Self { path, registry }
    }

    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    fn persist(&self) -> Result<()> {
        save_json(&self.path, &self.registry)?;
        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn register(&mut self, username: &str, password: &str) -> Result<Account> {
        let account = self.registry.register(username, password)?;
        self.persist()?;
        Ok(account)
    }

    fn authenticate(&self, username: &str, password: &str) -> Result<Account> {
        self.registry.authenticate(username, password)
    }

    fn set_avatar(&mut self, username: &str, avatar: &str) -> Result<Account> {
        let account = self.registry.set_avatar(username, avatar)?;
        self.persist()?;
        Ok(account)
    }
}
