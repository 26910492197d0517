use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use bhub_core::{CoreError, SessionStore};
use bhub_domain::UserSession;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SESSION_FILE: &str = "session.json";
const TMP_SUFFIX: &str = "tmp";

/// On-disk shape of the persisted session.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionFile {
    user: UserSession,
    saved_at: DateTime<Utc>,
}

/// Filesystem-backed JSON persistence for the signed-in user.
#[derive(Debug, Clone)]
pub struct JsonSessionStore {
    path: PathBuf,
}

impl JsonSessionStore {
    pub fn new(dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join(SESSION_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for JsonSessionStore {
    fn load(&self) -> Result<Option<UserSession>, CoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        let file: SessionFile =
            serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))?;
        tracing::debug!(path = %self.path.display(), saved_at = %file.saved_at, "session file read");
        Ok(Some(file.user))
    }

    fn save(&self, user: &UserSession) -> Result<(), CoreError> {
        let file = SessionFile {
            user: user.clone(),
            saved_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), CoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
