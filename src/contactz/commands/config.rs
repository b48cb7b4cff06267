use crate::commands::{CmdMessage, CmdResult, ContactzPaths};
use crate::config::ContactzConfig;
use crate::error::Result;
use crate::model::IdStyle;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetIdStyle(IdStyle),
    SetDataFile(String),
}

pub fn run(paths: &ContactzPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ContactzConfig::load(&paths.data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {}
        ConfigAction::SetIdStyle(style) => {
            config.id_style = style;
            config.save(&paths.data_dir)?;
            result.add_message(CmdMessage::success(format!("id-style set to {}", style)));
        }
        ConfigAction::SetDataFile(name) => {
            config.set_data_file(&name)?;
            config.save(&paths.data_dir)?;
            result.add_message(CmdMessage::success(format!(
                "data-file set to {}",
                config.data_file
            )));
        }
    }

    Ok(result.with_config(config))
}
