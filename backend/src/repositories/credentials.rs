//! Credential repository backed by a CSV flat file
//!
//! The file has the header `username,password_hash` and one record per line.
//! Files written with the older `username,password` header are read as well.
//! Every operation loads the whole file; every write rewrites it in full.
//! Registrations within one process are serialized; there is no file lock,
//! so two processes registering at the same moment can still race and the
//! last writer wins.

use crate::auth::PasswordService;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use weight_goal_shared::AuthError;

/// One row of the credential file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub username: String,
    #[serde(alias = "password")]
    pub password_hash: String,
}

/// Credential operation failure
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Credential storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Flat-file credential store
#[derive(Debug, Clone)]
pub struct CredentialRepository {
    path: PathBuf,
    passwords: PasswordService,
    write_lock: Arc<Mutex<()>>,
}

impl CredentialRepository {
    pub fn new(path: impl Into<PathBuf>, passwords: PasswordService) -> Self {
        Self {
            path: path.into(),
            passwords,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record; a missing file is an empty store
    pub fn load(&self) -> Result<Vec<CredentialRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;

        reader
            .deserialize()
            .collect::<Result<Vec<CredentialRecord>, _>>()
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    /// Replace the file contents with `records`
    pub fn save_all(&self, records: &[CredentialRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let mut writer = csv::Writer::from_path(&self.path)
            .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
        for record in records {
            writer
                .serialize(record)
                .map_err(|e| anyhow::anyhow!("CSV serialization error: {}", e))?;
        }
        writer.flush().context("Failed to flush credential file")?;
        Ok(())
    }

    pub fn find(&self, username: &str) -> Result<Option<CredentialRecord>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|record| record.username == username))
    }

    pub fn exists(&self, username: &str) -> Result<bool> {
        Ok(self.find(username)?.is_some())
    }

    /// Append a new user, failing with `AlreadyExists` for a taken username
    pub fn register(&self, username: &str, password: &str) -> Result<(), CredentialError> {
        // Held across the read and the rewrite; the guarded data is `()`,
        // so a poisoned lock is still usable.
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut records = self.load()?;
        if records.iter().any(|record| record.username == username) {
            return Err(AuthError::AlreadyExists(username.to_string()).into());
        }

        records.push(CredentialRecord {
            username: username.to_string(),
            password_hash: self.passwords.hash(password)?,
        });
        self.save_all(&records)?;
        Ok(())
    }

    /// True iff a record with this username exists and the password matches
    pub fn validate(&self, username: &str, password: &str) -> Result<bool> {
        match self.find(username)? {
            Some(record) => self.passwords.verify(password, &record.password_hash),
            None => Ok(false),
        }
    }

    /// Check the store can be read (used by the readiness probe)
    pub fn health_check(&self) -> Result<()> {
        self.load().map(|_| ())
    }
}
