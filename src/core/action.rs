//! # Actions
//!
//! Every top-level call from the web layer becomes an `Action`.
//! `update` takes the chrome and an action, mutates the chrome, and queues
//! render commands. Painting happens elsewhere.
//!
//! ```text
//! ("update", [config, force])  →  Action::parse  →  update()  →  Chrome + RenderCommands
//! ```

use log::{info, warn};
use serde_json::Value;

use crate::bridge::assets::AssetContext;
use crate::core::error::ChromeError;
use crate::core::message::ConfigMessage;
use crate::core::reconcile::reconcile;
use crate::core::state::Chrome;
use crate::render::{RenderCommand, RenderQueue};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Init,
    Update { message: ConfigMessage, force: bool },
    Hide,
    Show,
}

impl Action {
    /// Parses a bridge call: an action name plus its JSON argument array.
    ///
    /// For `update`, `args[0]` is the configuration object (missing means an
    /// empty one) and `args[1]` the optional force flag.
    pub fn parse(name: &str, args: &Value) -> Result<Self, ChromeError> {
        match name {
            "init" => Ok(Action::Init),
            "hide" => Ok(Action::Hide),
            "show" => Ok(Action::Show),
            "update" => {
                let message = match args.get(0) {
                    Some(config) => ConfigMessage::from_value(config)?,
                    None => ConfigMessage::default(),
                };
                let force = match args.get(1) {
                    Some(flag) => parse_force(flag)?,
                    None => false,
                };
                Ok(Action::Update { message, force })
            }
            other => Err(ChromeError::UnknownAction(other.to_string())),
        }
    }
}

fn parse_force(flag: &Value) -> Result<bool, ChromeError> {
    match flag {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(false),
        other => Err(ChromeError::ConfigParse(format!(
            "force flag must be a boolean, got {other}"
        ))),
    }
}

pub fn update(
    chrome: &mut Chrome,
    action: Action,
    assets: &AssetContext,
    queue: &RenderQueue,
) -> Result<(), ChromeError> {
    match action {
        Action::Init => {
            info!("Chrome init");
            Ok(())
        }
        Action::Update { message, force } => {
            let result = reconcile(chrome, &message, force, assets, queue);
            if let Err(ref e) = result {
                warn!("Update aborted: {}", e);
            }
            result
        }
        Action::Hide => {
            chrome.state.visible = false;
            queue.post(RenderCommand::Hide);
            Ok(())
        }
        Action::Show => {
            chrome.state.visible = true;
            queue.post(RenderCommand::Show);
            Ok(())
        }
    }
}
