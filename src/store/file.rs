//! JSON file storage
//!
//! The file holds a pretty-printed JSON array in the same layout as a backup
//! export, so a data file can be imported directly.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::core::DailyEntry;
use crate::error::AppError;
use crate::store::Storage;

const DEFAULT_FILE_NAME: &str = "entries.json";

#[derive(Debug, Clone)]
pub(crate) struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `<data dir>/adspend/entries.json`, falling back to `~/.adspend/entries.json`
    pub(crate) fn default_path() -> PathBuf {
        if let Some(dir) = dirs::data_dir() {
            return dir.join("adspend").join(DEFAULT_FILE_NAME);
        }
        dirs::home_dir()
            .unwrap_or_default()
            .join(".adspend")
            .join(DEFAULT_FILE_NAME)
    }
}

impl Storage for JsonFileStorage {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<DailyEntry>, AppError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(AppError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_reader(BufReader::new(file)).map_err(|source| AppError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, entries: &[DailyEntry]) -> Result<(), AppError> {
        let storage_err = |source: std::io::Error| AppError::Storage {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(storage_err)?;
        }
        let file = File::create(&self.path).map_err(storage_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.flush().map_err(storage_err)?;
        Ok(())
    }

    /// Rename the file to `<name>.bak`, or `<name>.bak.N` when that is taken
    fn set_aside(&self) -> Result<String, AppError> {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".bak");
        let base = PathBuf::from(name);
        let mut backup = base.clone();
        let mut n = 1;
        while backup.exists() {
            let mut numbered = base.as_os_str().to_owned();
            numbered.push(format!(".{n}"));
            backup = PathBuf::from(numbered);
            n += 1;
        }
        fs::rename(&self.path, &backup).map_err(|source| AppError::Storage {
            path: self.path.clone(),
            source,
        })?;
        Ok(backup.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Platform, Project};

    fn sample() -> Vec<DailyEntry> {
        vec![DailyEntry {
            id: "a1".into(),
            date: "2024-01-01".into(),
            project: Project::Maraya,
            platform: Platform::Snapchat,
            spend: 10.5,
            purchases: 2.0,
        }]
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("none.json"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_parent_dirs_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested").join("entries.json"));
        storage.save(&sample()).unwrap();
        assert_eq!(storage.load().unwrap(), sample());
    }

    #[test]
    fn saved_layout_uses_plain_fields() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("entries.json"));
        storage.save(&sample()).unwrap();
        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&storage.path).unwrap()).unwrap();
        let obj = &raw.as_array().unwrap()[0];
        assert_eq!(obj["id"], "a1");
        assert_eq!(obj["project"], "maraya");
        assert_eq!(obj["platform"], "snapchat");
        assert_eq!(obj["purchases"], 2.0);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        fs::write(&path, "{not json").unwrap();
        let err = JsonFileStorage::new(path.clone()).load().unwrap_err();
        assert!(matches!(err, AppError::Parse { .. }));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn set_aside_keeps_the_original_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        let corrupt = r#"[{"id":"keep-me"},]"#;
        fs::write(&path, corrupt).unwrap();
        fs::write(dir.path().join("entries.json.bak"), "older").unwrap();

        let storage = JsonFileStorage::new(path.clone());
        let backup = storage.set_aside().unwrap();
        assert!(backup.ends_with("entries.json.bak.1"));
        assert!(!path.exists());
        assert_eq!(fs::read_to_string(&backup).unwrap(), corrupt);
        assert_eq!(
            fs::read_to_string(dir.path().join("entries.json.bak")).unwrap(),
            "older"
        );
    }

    #[test]
    fn store_over_corrupt_file_does_not_lose_it() {
        use crate::core::NewEntry;
        use crate::store::EntryStore;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        let corrupt = r#"[{"id":"keep-me","date":"2024-01-01"},]"#;
        fs::write(&path, corrupt).unwrap();

        let mut store = EntryStore::open(JsonFileStorage::new(path.clone()));
        assert!(store.snapshot().is_empty());
        store
            .append(NewEntry {
                date: "2024-01-02".into(),
                project: Project::Azza,
                platform: Platform::Meta,
                spend: 1.0,
                purchases: 1.0,
            })
            .unwrap();

        let kept = fs::read_to_string(dir.path().join("entries.json.bak")).unwrap();
        assert!(kept.contains("keep-me"));
        let reloaded = JsonFileStorage::new(path).load().unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].date, "2024-01-02");
    }
}
