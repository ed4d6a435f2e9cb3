//! # Owner Thread Host
//!
//! Chrome state, the registry, and the rendering surface belong to one
//! thread. Calls from the web bridge arrive on other threads, so they are
//! marshaled onto the owner thread as requests over a channel.
//!
//! ```text
//!  bridge thread(s)                        owner thread ("navchrome-ui")
//! ┌──────────────┐  Request (mpsc)   ┌───────────────────────────────────┐
//! │ HostHandle   │ ────────────────▶ │ ChromeHost                        │
//! │  .execute()  │ ◀──────────────── │  action::update / router::route   │
//! │  .dispatch() │  PluginResult     │  Painter::flush → RenderSurface   │
//! └──────────────┘  (oneshot)        └───────────────────────────────────┘
//! ```
//!
//! Each request runs to completion before the next is taken. The surface is
//! built on the owner thread by a factory, so it does not have to be `Send`.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

use crate::bridge::assets::AssetContext;
use crate::bridge::{PluginBridge, PluginResult, ResultSink, Status};
use crate::core::action::{self, Action};
use crate::core::router::{self, ChromeEvent, Routed};
use crate::core::state::Chrome;
use crate::render::{self, Painter, RenderCommand, RenderQueue, RenderSurface};

/// Name the web layer addresses the chrome plugin by.
pub const PLUGIN_NAME: &str = "NavChrome";

const DEFAULT_THREAD_NAME: &str = "navchrome-ui";

pub struct HostOptions {
    pub assets: AssetContext,
    pub sink: Arc<dyn ResultSink>,
    pub thread_name: String,
}

impl HostOptions {
    pub fn new(assets: AssetContext, sink: Arc<dyn ResultSink>) -> Self {
        Self {
            assets,
            sink,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }
}

enum Request {
    Execute {
        action: String,
        args: Value,
        reply: oneshot::Sender<PluginResult>,
    },
    Event(ChromeEvent),
    PrepareMenu,
    Shutdown,
}

/// Chrome session plus the surface it drives. Lives on the owner thread.
pub struct ChromeHost<S> {
    chrome: Chrome,
    surface: S,
    queue: RenderQueue,
    painter: Painter,
    assets: AssetContext,
    sink: Arc<dyn ResultSink>,
}

impl<S: RenderSurface> ChromeHost<S> {
    /// Creates the session; the chrome starts hidden until shown.
    pub fn new(surface: S, assets: AssetContext, sink: Arc<dyn ResultSink>) -> Self {
        let (queue, painter) = render::channel();
        let mut host = Self {
            chrome: Chrome::new(),
            surface,
            queue,
            painter,
            assets,
            sink,
        };
        host.queue.post(RenderCommand::Hide);
        host.flush();
        host
    }

    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Runs one top-level action and paints whatever it queued, even on failure.
    pub fn execute(&mut self, name: &str, args: &Value) -> PluginResult {
        debug!("Executing action '{}'", name);
        let result = Action::parse(name, args)
            .and_then(|a| action::update(&mut self.chrome, a, &self.assets, &self.queue));
        if let Err(ref e) = result {
            warn!("Action '{}' failed: {}", name, e);
        }
        self.flush();
        PluginResult::from(result)
    }

    pub fn handle_event(&mut self, event: &ChromeEvent) -> Routed {
        debug!("Routing {:?}", event);
        router::route(event, &self.chrome.registry, self.sink.as_ref())
    }

    /// Repaints the menu from the current registry ("menu about to show").
    pub fn prepare_menu(&mut self) {
        self.queue
            .post(RenderCommand::RebuildMenu(self.chrome.registry.menu_entries()));
        self.flush();
    }

    fn flush(&mut self) {
        self.painter.flush(&mut self.surface);
    }

    fn handle(&mut self, request: Request) -> bool {
        match request {
            Request::Execute {
                action,
                args,
                reply,
            } => {
                let result = self.execute(&action, &args);
                if reply.send(result).is_err() {
                    debug!("Caller for '{}' went away before the reply", action);
                }
            }
            Request::Event(event) => {
                self.handle_event(&event);
            }
            Request::PrepareMenu => self.prepare_menu(),
            Request::Shutdown => return false,
        }
        true
    }
}

/// Cloneable, thread-safe handle to a running host.
#[derive(Clone)]
pub struct HostHandle {
    tx: mpsc::UnboundedSender<Request>,
}

/// Starts the owner thread. `make_surface` runs on that thread.
///
/// The thread exits on [`HostHandle::shutdown`] or once every handle is dropped.
pub fn spawn<S, F>(options: HostOptions, make_surface: F) -> io::Result<(HostHandle, JoinHandle<()>)>
where
    S: RenderSurface + 'static,
    F: FnOnce() -> S + Send + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<Request>();
    let HostOptions {
        assets,
        sink,
        thread_name,
    } = options;

    let join = thread::Builder::new()
        .name(thread_name.clone())
        .spawn(move || {
            info!("Chrome host '{}' starting", thread_name);
            let mut host = ChromeHost::new(make_surface(), assets, sink);
            while let Some(request) = rx.blocking_recv() {
                if !host.handle(request) {
                    break;
                }
            }
            info!("Chrome host '{}' stopped", thread_name);
        })?;

    Ok((HostHandle { tx }, join))
}

impl HostHandle {
    pub async fn execute(&self, action: &str, args: Value) -> PluginResult {
        let Some(reply) = self.request(action, args) else {
            return host_stopped();
        };
        reply.await.unwrap_or_else(|_| host_stopped())
    }

    /// Blocking variant of [`execute`](Self::execute) for callers outside an async runtime.
    ///
    /// # Panics
    ///
    /// Panics if called from within an asynchronous execution context, such
    /// as a task on a tokio runtime. Use [`execute`](Self::execute) there.
    pub fn execute_blocking(&self, action: &str, args: Value) -> PluginResult {
        let Some(reply) = self.request(action, args) else {
            return host_stopped();
        };
        reply.blocking_recv().unwrap_or_else(|_| host_stopped())
    }

    pub fn dispatch(&self, event: ChromeEvent) {
        self.send(Request::Event(event));
    }

    pub fn prepare_menu(&self) {
        self.send(Request::PrepareMenu);
    }

    pub fn shutdown(&self) {
        self.send(Request::Shutdown);
    }

    fn request(&self, action: &str, args: Value) -> Option<oneshot::Receiver<PluginResult>> {
        let (reply, rx) = oneshot::channel();
        let sent = self.tx.send(Request::Execute {
            action: action.to_string(),
            args,
            reply,
        });
        match sent {
            Ok(()) => Some(rx),
            Err(_) => {
                warn!("Failed to send '{}': chrome host stopped", action);
                None
            }
        }
    }

    fn send(&self, request: Request) {
        if self.tx.send(request).is_err() {
            warn!("Failed to send request: chrome host stopped");
        }
    }
}

fn host_stopped() -> PluginResult {
    PluginResult {
        status: Status::Error,
        message: Some("chrome host stopped".into()),
        keep_callback: false,
    }
}

#[async_trait]
impl PluginBridge for HostHandle {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    async fn execute(&self, action: &str, args: Value) -> PluginResult {
        HostHandle::execute(self, action, args).await
    }
}
