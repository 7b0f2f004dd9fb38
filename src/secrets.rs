use crate::error::AppResult;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

/// Outcome of inspecting a single secret file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Missing,
    Empty,
    InvalidJson(String),
    /// Valid JSON; carries the top-level keys found
    Valid(Vec<String>),
}

/// Inspect one secret file without touching its contents
pub fn check_file(path: &str) -> FileStatus {
    if !Path::new(path).exists() {
        return FileStatus::Missing;
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return FileStatus::InvalidJson(e.to_string()),
    };

    if content.is_empty() {
        return FileStatus::Empty;
    }

    match serde_json::from_str::<Value>(&content) {
        Ok(value) => {
            let keys = value
                .as_object()
                .map(|obj| obj.keys().cloned().collect())
                .unwrap_or_default();
            FileStatus::Valid(keys)
        }
        Err(e) => FileStatus::InvalidJson(e.to_string()),
    }
}

/// Report on every secret file. Advisory only: failures are logged and the
/// run continues, nothing is ever written back.
pub fn check_files_integrity(paths: &[&str]) -> Vec<(String, FileStatus)> {
    debug!("Checking secret file integrity");

    paths
        .iter()
        .map(|path| {
            let status = check_file(path);
            match &status {
                FileStatus::Missing => error!("{} does not exist", path),
                FileStatus::Empty => error!("{} is empty (0 bytes)", path),
                FileStatus::InvalidJson(e) => error!("{} contains invalid JSON: {}", path, e),
                FileStatus::Valid(keys) => info!("{} is valid JSON, keys: {:?}", path, keys),
            }
            ((*path).to_string(), status)
        })
        .collect()
}

/// Stored OAuth token in Google's authorized-user file format
#[derive(Debug, Clone, Deserialize)]
pub struct StoredToken {
    #[serde(alias = "access_token")]
    pub token: String,
    pub refresh_token: Option<String>,
    /// RFC 3339 expiry instant, if the flow that wrote the file recorded one
    pub expiry: Option<String>,
    #[serde(default)]
    pub scopes: Vec<String>,
}

impl StoredToken {
    pub fn load(path: &str) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// A token with no recorded expiry counts as valid; the API rejects a
    /// stale one anyway. An unparseable expiry counts as expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match &self.expiry {
            Some(expiry) => DateTime::parse_from_rfc3339(expiry)
                .map(|e| e <= now)
                .unwrap_or(true),
            None => false,
        }
    }
}

/// OAuth client credentials in Google's installed-app file format
#[derive(Debug, Clone, Deserialize)]
pub struct AppSecret {
    pub installed: InstalledClient,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstalledClient {
    pub client_id: String,
    pub client_secret: String,
}

impl AppSecret {
    pub fn load(path: &str) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_file(name: &str, content: Option<&str>) -> PathBuf {
        let path = std::env::temp_dir().join(format!("muistutin-{}-{}", std::process::id(), name));
        if let Some(content) = content {
            fs::write(&path, content).unwrap();
        } else {
            let _ = fs::remove_file(&path);
        }
        path
    }

    #[test]
    fn valid_json_reports_keys() {
        let path = scratch_file("valid.json", Some(r#"{"token": "abc", "refresh_token": "r"}"#));
        match check_file(path.to_str().unwrap()) {
            FileStatus::Valid(keys) => {
                assert!(keys.contains(&"token".to_string()));
                assert!(keys.contains(&"refresh_token".to_string()));
            }
            other => panic!("expected Valid, got {:?}", other),
        }
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn empty_file_reports_empty() {
        let path = scratch_file("empty.json", Some(""));
        assert_eq!(check_file(path.to_str().unwrap()), FileStatus::Empty);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn garbage_reports_invalid_json() {
        let path = scratch_file("garbage.json", Some("not json at all"));
        assert!(matches!(
            check_file(path.to_str().unwrap()),
            FileStatus::InvalidJson(_)
        ));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn absent_file_reports_missing() {
        let path = scratch_file("absent.json", None);
        assert_eq!(check_file(path.to_str().unwrap()), FileStatus::Missing);
    }

    #[test]
    fn integrity_check_never_fails() {
        let missing = scratch_file("gone.json", None);
        let reports = check_files_integrity(&[missing.to_str().unwrap()]);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].1, FileStatus::Missing);
    }

    #[test]
    fn token_expiry_comparison() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();

        let fresh = StoredToken {
            token: "t".to_string(),
            refresh_token: None,
            expiry: Some("2026-03-01T13:00:00Z".to_string()),
            scopes: vec![],
        };
        assert!(!fresh.is_expired(now));

        let stale = StoredToken {
            expiry: Some("2026-03-01T11:00:00Z".to_string()),
            ..fresh.clone()
        };
        assert!(stale.is_expired(now));

        let no_expiry = StoredToken {
            expiry: None,
            ..fresh.clone()
        };
        assert!(!no_expiry.is_expired(now));

        let bad_expiry = StoredToken {
            expiry: Some("not a timestamp".to_string()),
            ..fresh
        };
        assert!(bad_expiry.is_expired(now));
    }

    #[test]
    fn stored_token_accepts_access_token_alias() {
        let token: StoredToken =
            serde_json::from_str(r#"{"access_token": "abc", "refresh_token": null}"#).unwrap();
        assert_eq!(token.token, "abc");
        assert!(token.refresh_token.is_none());
    }
}
