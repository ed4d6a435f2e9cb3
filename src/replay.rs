//! # Script Replay
//!
//! Drives a host from a JSON-lines script, one bridge call or native event
//! per line. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! {"action": "update", "args": [{"title": "Inbox", "menu": [{"label": "Refresh", "callback": "cb1"}]}]}
//! {"action": "show"}
//! {"event": "menu", "title": "Refresh"}
//! {"event": "tab_selected", "callback": "tab1"}
//! {"event": "prepare_menu"}
//! ```

use std::io::{self, BufRead};

use log::{info, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::bridge::{HostHandle, PluginResult, ResultSink};
use crate::core::router::ChromeEvent;
use crate::render::{MenuEntry, RenderSurface, TabSpec};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScriptLine {
    Call {
        action: String,
        #[serde(default)]
        args: Value,
    },
    Event(ScriptEvent),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum ScriptEvent {
    Menu { title: String },
    TabSelected { callback: String },
    TabReselected { callback: String },
    TabUnselected { callback: String },
    PrepareMenu,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    pub calls: usize,
    pub failed: usize,
    pub events: usize,
    pub skipped: usize,
}

pub async fn replay<R: BufRead>(handle: &HostHandle, reader: R) -> io::Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match serde_json::from_str::<ScriptLine>(trimmed) {
            Ok(ScriptLine::Call { action, args }) => {
                let result = handle.execute(&action, args).await;
                println!("{action} -> {result}");
                summary.calls += 1;
                if !result.is_ok() {
                    summary.failed += 1;
                }
            }
            Ok(ScriptLine::Event(event)) => {
                match event {
                    ScriptEvent::Menu { title } => {
                        handle.dispatch(ChromeEvent::MenuItemActivated { title })
                    }
                    ScriptEvent::TabSelected { callback } => handle.dispatch(
                        ChromeEvent::TabSelected { callback_id: callback },
                    ),
                    ScriptEvent::TabReselected { callback } => handle.dispatch(
                        ChromeEvent::TabReselected { callback_id: callback },
                    ),
                    ScriptEvent::TabUnselected { callback } => handle.dispatch(
                        ChromeEvent::TabUnselected { callback_id: callback },
                    ),
                    ScriptEvent::PrepareMenu => handle.prepare_menu(),
                }
                summary.events += 1;
            }
            Err(e) => {
                warn!("Skipping script line {}: {}", lineno + 1, e);
                summary.skipped += 1;
            }
        }
    }

    info!("Replay finished: {:?}", summary);
    Ok(summary)
}

/// Surface that prints every call to stdout.
#[derive(Debug, Default)]
pub struct PrintSurface;

impl RenderSurface for PrintSurface {
    fn set_title(&mut self, title: &str) {
        println!("  title {title:?}");
    }

    fn set_back_affordance(&mut self, enabled: bool) {
        println!("  back-affordance {enabled}");
    }

    fn hide(&mut self) {
        println!("  hide");
    }

    fn show(&mut self) {
        println!("  show");
    }

    fn clear_menu(&mut self) {
        println!("  menu cleared");
    }

    fn add_menu_entry(&mut self, entry: &MenuEntry) {
        println!(
            "  menu [{}] {:?} flags={} enabled={} icon={}",
            entry.order,
            entry.title,
            entry.flags.bits(),
            entry.enabled,
            entry.icon.as_ref().map_or("-", |i| i.name.as_str())
        );
    }

    fn add_tab(&mut self, tab: &TabSpec) {
        println!(
            "  tab {:?} callback={:?} selected={}",
            tab.title, tab.callback_id, tab.selected
        );
    }

    fn set_tabbed_navigation_mode(&mut self) {
        println!("  tabbed navigation");
    }
}

/// Sink that prints results as they are emitted.
#[derive(Debug, Default)]
pub struct PrintSink;

impl ResultSink for PrintSink {
    fn emit_result(&self, callback_id: &str, result: PluginResult) {
        println!("{callback_id} <- {result}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{HostOptions, spawn};
    use crate::test_support::{RecordingSink, RecordingSurface, test_assets};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_replay_script() {
        let script = r#"
# comment
{"action": "init"}
{"action": "update", "args": [{"title": "Inbox", "menu": [{"label": "Refresh", "callback": "cb1"}]}]}
{"action": "update", "args": [{"nav": "sideways"}]}
{"action": "teleport"}
{"event": "menu", "title": "Refresh"}
{"event": "tab_unselected", "callback": "t"}
not json
"#;
        let sink = Arc::new(RecordingSink::default());
        let (handle, join) = spawn(
            HostOptions::new(test_assets(), sink.clone()),
            RecordingSurface::default,
        )
        .unwrap();

        let summary = replay(&handle, script.as_bytes()).await.unwrap();
        assert_eq!(
            summary,
            ReplaySummary {
                calls: 4,
                failed: 2,
                events: 2,
                skipped: 1,
            }
        );

        handle.shutdown();
        join.join().unwrap();
        assert_eq!(sink.results(), vec![("cb1".to_string(), PluginResult::keep_alive())]);
    }
}
