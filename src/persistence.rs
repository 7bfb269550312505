use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

const APP_DIR: &str = "codecraft";
const STORAGE_FILE: &str = "storage.json";
pub(crate) const SAVED_CODE_KEY: &str = "savedCode";

pub(crate) fn config_dir() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join(APP_DIR));
    }
    if let Ok(appdata) = std::env::var("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join(APP_DIR));
    }
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join(APP_DIR))
}

/// Local key-value storage holding exactly one entry: the saved document.
#[derive(Debug, Clone)]
pub(crate) struct SaveSlot {
    path: Option<PathBuf>,
}

impl SaveSlot {
    pub(crate) fn default_location() -> Self {
        Self {
            path: config_dir().map(|dir| dir.join(STORAGE_FILE)),
        }
    }

    pub(crate) fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    #[cfg(test)]
    pub(crate) fn load(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        let raw = fs::read_to_string(path).ok()?;
        let mut entries: BTreeMap<String, String> = serde_json::from_str(&raw).ok()?;
        entries.remove(SAVED_CODE_KEY)
    }

    /// Overwrites the slot with the whole document.
    pub(crate) fn save(&self, code: &str) -> io::Result<()> {
        let Some(path) = self.path.as_ref() else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "no config directory for storage",
            ));
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let entries = BTreeMap::from([(SAVED_CODE_KEY, code)]);
        let raw = serde_json::to_string_pretty(&entries)
            .map_err(|e| io::Error::other(format!("serialize storage: {e}")))?;
        fs::write(path, raw)?;
        tracing::info!(path = %path.display(), bytes = code.len(), "saved document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_then_load_returns_whole_document() {
        let tmp = tempdir().expect("tempdir");
        let slot = SaveSlot::at(tmp.path().join("nested").join(STORAGE_FILE));
        slot.save("let a = 1;\nlet b = 2;\n").expect("save");
        assert_eq!(slot.load().as_deref(), Some("let a = 1;\nlet b = 2;\n"));
    }

    #[test]
    fn save_overwrites_previous_value() {
        let tmp = tempdir().expect("tempdir");
        let slot = SaveSlot::at(tmp.path().join(STORAGE_FILE));
        slot.save("first").expect("save first");
        slot.save("second").expect("save second");
        assert_eq!(slot.load().as_deref(), Some("second"));
    }

    #[test]
    fn stored_file_uses_single_key() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join(STORAGE_FILE);
        SaveSlot::at(&path).save("x").expect("save");
        let raw = fs::read_to_string(&path).expect("read");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
        let obj = value.as_object().expect("object");
        assert_eq!(obj.len(), 1);
        assert_eq!(obj[SAVED_CODE_KEY], "x");
    }

    #[test]
    fn missing_or_corrupt_storage_loads_nothing() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join(STORAGE_FILE);
        assert!(SaveSlot::at(&path).load().is_none());
        fs::write(&path, "not json").expect("write");
        assert!(SaveSlot::at(&path).load().is_none());
    }

    #[test]
    fn slot_without_location_refuses_to_save() {
        let slot = SaveSlot { path: None };
        let err = slot.save("x").expect_err("no path");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
