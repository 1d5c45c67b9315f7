use crate::commands::{CmdMessage, CmdResult, DataPaths};
use crate::config::ListGamesConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Unknown keys and bad values are errors; nothing is saved for them.
pub fn run(paths: &DataPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    let mut config = ListGamesConfig::load(dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => result.add_message(CmdMessage::info(config.get(&key)?)),
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(&key)?
            )));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListGamesError;
    use crate::query::SortKey;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> DataPaths {
        DataPaths {
            data_dir: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn set_then_show() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        let result = run(&paths, ConfigAction::Set("sort-key".into(), "ID".into())).unwrap();
        assert_eq!(result.messages[0].content, "sort-key set to id");

        let result = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().sort_key, SortKey::Id);

        let result = run(&paths, ConfigAction::ShowKey("sort-key".into())).unwrap();
        assert_eq!(result.messages[0].content, "id");
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        let err = run(&paths, ConfigAction::Set("colour".into(), "red".into())).unwrap_err();
        assert!(matches!(err, ListGamesError::Config(_)));
        assert!(!dir.path().join("config.json").exists());

        assert!(run(&paths, ConfigAction::ShowKey("colour".into())).is_err());
    }

    #[test]
    fn bad_value_is_not_saved() {
        let dir = TempDir::new().unwrap();
        let err = run(&paths(&dir), ConfigAction::Set("sort-direction".into(), "up".into()));
        assert!(err.is_err());
        assert!(!dir.path().join("config.json").exists());
    }
}
