use crate::commands::{CmdMessage, CmdResult, NewsdeskPaths};
use crate::config::{NewsdeskConfig, CONFIG_KEYS};
use crate::error::{NewsdeskError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &NewsdeskPaths, action: ConfigAction) -> Result<CmdResult> {
    let config_dir = paths.config_dir();
    let mut config = NewsdeskConfig::load(&config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in CONFIG_KEYS {
                if let Some(value) = config.get(key) {
                    result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
                }
            }
        }
        ConfigAction::ShowKey(key) => {
            let value = config
                .get(&key)
                .ok_or_else(|| NewsdeskError::Config(format!("Unknown config key: {}", key)))?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(&config_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value.trim())));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_persists_and_show_reads_back() {
        let temp = TempDir::new().unwrap();
        let paths = NewsdeskPaths::new(temp.path().to_path_buf());

        run(&paths, ConfigAction::Set("site-title".into(), "KDNS 5".into())).unwrap();
        let result = run(&paths, ConfigAction::ShowKey("site-title".into())).unwrap();

        assert_eq!(result.messages[0].content, "site-title = KDNS 5");
        assert_eq!(result.config.unwrap().site_title, "KDNS 5");
    }

    #[test]
    fn show_all_lists_every_key() {
        let temp = TempDir::new().unwrap();
        let paths = NewsdeskPaths::new(temp.path().to_path_buf());
        let result = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.messages.len(), CONFIG_KEYS.len());
    }

    #[test]
    fn unknown_key_is_an_error() {
        let temp = TempDir::new().unwrap();
        let paths = NewsdeskPaths::new(temp.path().to_path_buf());
        assert!(run(&paths, ConfigAction::ShowKey("nope".into())).is_err());
        assert!(run(&paths, ConfigAction::Set("nope".into(), "1".into())).is_err());
    }
}
