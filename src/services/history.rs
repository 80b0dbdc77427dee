use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Words consulted when excluding repeats
pub const RECENT_WINDOW: usize = 80;
/// Hard cap on the persisted ledger; oldest entries pruned past this
pub const LEDGER_CAP: usize = 100;

/// One word shown to a player, in normalized form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsedWordRecord {
    pub word: String,
    pub shown_at: DateTime<Utc>,
}

/// Consumer contract for the per-player used-word ledger
///
/// An anonymous player (`None`) reads empty and writes nothing. Callers are
/// expected to treat read/write failures as "no history this round" rather
/// than aborting.
pub trait WordHistory: Send + Sync {
    /// Up to RECENT_WINDOW normalized words, most recent first
    fn read_recent(&self, player_id: Option<&str>) -> io::Result<Vec<String>>;

    /// Append a word and prune the persisted ledger to LEDGER_CAP
    fn append(&self, player_id: Option<&str>, word: &str) -> io::Result<()>;

    /// Drop a player's entire ledger
    fn clear(&self, player_id: &str) -> io::Result<()>;
}

/// File-backed ledger: one JSON array of records per player under a data dir
/// Writes are read-modify-write under a store-level lock so rapid successive
/// requests for the same player cannot lose updates
pub struct FileLedger {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileLedger {
    pub fn open(dir: &str) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        info!("History ledger directory: {}", dir);
        Ok(FileLedger {
            dir: PathBuf::from(dir),
            write_lock: Mutex::new(()),
        })
    }

    fn player_path(&self, player_id: &str) -> Option<PathBuf> {
        // Player ids become file names; anything outside a conservative
        // character set is refused rather than escaped
        if player_id.is_empty()
            || !player_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            warn!("Refusing history access for unusable player id: {:?}", player_id);
            return None;
        }
        Some(self.dir.join(format!("{}.json", player_id)))
    }

    fn load_records(path: &Path) -> io::Result<Vec<UsedWordRecord>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn store_records(path: &Path, records: &[UsedWordRecord]) -> io::Result<()> {
        let raw = serde_json::to_string(records)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, raw)
    }
}

impl WordHistory for FileLedger {
    fn read_recent(&self, player_id: Option<&str>) -> io::Result<Vec<String>> {
        let player_id = match player_id {
            Some(id) => id,
            None => return Ok(Vec::new()),
        };
        let path = match self.player_path(player_id) {
            Some(p) => p,
            None => return Ok(Vec::new()),
        };

        let records = Self::load_records(&path)?;
        Ok(records
            .iter()
            .rev()
            .take(RECENT_WINDOW)
            .map(|r| r.word.clone())
            .collect())
    }

    fn append(&self, player_id: Option<&str>, word: &str) -> io::Result<()> {
        let player_id = match player_id {
            Some(id) => id,
            None => return Ok(()),
        };
        let path = match self.player_path(player_id) {
            Some(p) => p,
            None => return Ok(()),
        };

        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut records = Self::load_records(&path).unwrap_or_else(|e| {
            warn!("Unreadable ledger for {}, starting fresh: {}", player_id, e);
            Vec::new()
        });

        records.push(UsedWordRecord {
            word: word.to_string(),
            shown_at: Utc::now(),
        });
        if records.len() > LEDGER_CAP {
            let excess = records.len() - LEDGER_CAP;
            records.drain(..excess);
        }

        Self::store_records(&path, &records)?;
        info!("Recorded word for {}, ledger size {}", player_id, records.len());
        Ok(())
    }

    fn clear(&self, player_id: &str) -> io::Result<()> {
        let path = match self.player_path(player_id) {
            Some(p) => p,
            None => return Ok(()),
        };
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        if path.exists() {
            fs::remove_file(&path)?;
            info!("Cleared word history for {}", player_id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_ledger(tag: &str) -> FileLedger {
        let dir = std::env::temp_dir().join(format!("wordgend-test-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        FileLedger::open(dir.to_str().unwrap()).unwrap()
    }

    #[test]
    fn test_anonymous_player_is_noop() {
        let ledger = temp_ledger("anon");
        ledger.append(None, "apple").unwrap();
        assert!(ledger.read_recent(None).unwrap().is_empty());
    }

    #[test]
    fn test_append_and_read_recent_order() {
        let ledger = temp_ledger("order");
        ledger.append(Some("p1"), "first").unwrap();
        ledger.append(Some("p1"), "second").unwrap();
        ledger.append(Some("p1"), "third").unwrap();

        let recent = ledger.read_recent(Some("p1")).unwrap();
        assert_eq!(recent, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_ledger_prunes_to_cap() {
        let ledger = temp_ledger("prune");
        for i in 0..(LEDGER_CAP + 20) {
            ledger.append(Some("p1"), &format!("word{}", i)).unwrap();
        }

        let recent = ledger.read_recent(Some("p1")).unwrap();
        assert_eq!(recent.len(), RECENT_WINDOW);
        // Newest first, oldest twenty pruned entirely
        assert_eq!(recent[0], format!("word{}", LEDGER_CAP + 19));
        assert!(!recent.contains(&"word0".to_string()));
    }

    #[test]
    fn test_unusable_player_id_degrades() {
        let ledger = temp_ledger("badid");
        ledger.append(Some("../escape"), "apple").unwrap();
        assert!(ledger.read_recent(Some("../escape")).unwrap().is_empty());
        ledger.clear("../escape").unwrap();
    }

    #[test]
    fn test_clear_empties_ledger() {
        let ledger = temp_ledger("clear");
        ledger.append(Some("p1"), "apple").unwrap();
        ledger.clear("p1").unwrap();
        assert!(ledger.read_recent(Some("p1")).unwrap().is_empty());
    }
}
