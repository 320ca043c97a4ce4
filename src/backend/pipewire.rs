//! Live audio-graph source backed by the PipeWire registry.
//!
//! A dedicated thread runs the PipeWire main loop and mirrors registry
//! globals (nodes and links) into shared state. The thread is started
//! lazily, exactly once per process, and runs until process exit; snapshot
//! reads only lock the mirror, never the loop, so they are safe to call
//! repeatedly and concurrently with the graph's own updates.

use std::collections::BTreeMap;
use std::sync::mpsc;
use std::sync::{Arc, OnceLock};
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use pipewire as pw;
use pw::types::ObjectType;

use super::graph::GraphSource;
use crate::error::BackendError;
use crate::graph::{NodeProperties, RawLink, RawNode};

/// How long to wait for the registry thread to come up before falling
/// back to the no-op backend.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

static CONTEXT: OnceLock<Option<PipeWireGraph>> = OnceLock::new();

/// Registry state mirrored from the PipeWire main-loop thread.
///
/// Keyed by global id, so enumeration order is stable (ascending id) and
/// removals are O(log n). A lock is held only long enough to copy or
/// update entries; no torn records are ever observable.
#[derive(Debug, Default)]
struct Mirror {
    nodes: BTreeMap<u32, RawNode>,
    links: BTreeMap<u32, RawLink>,
}

/// Handle to the process-wide PipeWire graph mirror.
///
/// Cheap to clone; all clones read the same mirror.
#[derive(Debug, Clone)]
pub struct PipeWireGraph {
    mirror: Arc<Mutex<Mirror>>,
}

impl PipeWireGraph {
    /// Connects to the process-wide graph mirror, starting the PipeWire
    /// thread on first use.
    ///
    /// Returns `None` when PipeWire is unavailable (no daemon, missing
    /// library). The outcome of the first call is sticky for the process
    /// lifetime: the background context is never re-initialized.
    #[must_use]
    pub fn connect() -> Option<Self> {
        CONTEXT
            .get_or_init(|| match Self::spawn() {
                Ok(graph) => Some(graph),
                Err(err) => {
                    tracing::warn!("PipeWire graph mirror failed to start: {err}");
                    None
                }
            })
            .clone()
    }

    /// Spawns the main-loop thread and waits for the registry listener to
    /// be registered.
    fn spawn() -> Result<Self, BackendError> {
        let mirror = Arc::new(Mutex::new(Mirror::default()));
        let state = Arc::clone(&mirror);
        let (ready_tx, ready_rx) = mpsc::channel();

        thread::Builder::new()
            .name("audio-usage-pipewire".to_string())
            .spawn(move || {
                if let Err(err) = run_registry_loop(&state, &ready_tx) {
                    // Delivered to spawn() if it is still waiting; logged
                    // either way since the mirror stops updating.
                    tracing::error!("PipeWire registry loop exited: {err}");
                    let _ = ready_tx.send(Err(err));
                }
            })
            .map_err(|err| BackendError::load_failed(err.to_string()))?;

        match ready_rx.recv_timeout(CONNECT_TIMEOUT) {
            Ok(Ok(())) => Ok(Self { mirror }),
            Ok(Err(err)) => Err(err),
            Err(_) => Err(BackendError::connection_failed(
                "timed out waiting for the PipeWire registry",
            )),
        }
    }
}

impl GraphSource for PipeWireGraph {
    fn nodes(&self) -> Vec<RawNode> {
        self.mirror.lock().nodes.values().cloned().collect()
    }

    fn links(&self) -> Vec<RawLink> {
        self.mirror.lock().links.values().cloned().collect()
    }
}

/// Body of the main-loop thread: connect, mirror registry globals, run
/// until process exit.
fn run_registry_loop(
    mirror: &Arc<Mutex<Mirror>>,
    ready: &mpsc::Sender<Result<(), BackendError>>,
) -> Result<(), BackendError> {
    pw::init();

    let mainloop = pw::main_loop::MainLoop::new(None)
        .map_err(|err| BackendError::load_failed(err.to_string()))?;
    let context = pw::context::Context::new(&mainloop)
        .map_err(|err| BackendError::load_failed(err.to_string()))?;
    let core = context
        .connect(None)
        .map_err(|err| BackendError::connection_failed(err.to_string()))?;
    let registry = core
        .get_registry()
        .map_err(|err| BackendError::connection_failed(err.to_string()))?;

    let added = Arc::clone(mirror);
    let removed = Arc::clone(mirror);
    let _listener = registry
        .add_listener_local()
        .global(move |global| {
            let Some(props) = global.props else {
                return;
            };
            match global.type_ {
                ObjectType::Node => {
                    let node = RawNode {
                        id: global.id,
                        name: props.get("node.name").unwrap_or_default().to_string(),
                        properties: NodeProperties {
                            application_name: props.get("application.name").map(str::to_string),
                            device_description: props.get("node.description").map(str::to_string),
                        },
                    };
                    added.lock().nodes.insert(global.id, node);
                }
                ObjectType::Link => {
                    // Links without both endpoint ids are useless to the
                    // resolver; skip them rather than inventing endpoints.
                    let input = props.get("link.input.node").and_then(|v| v.parse().ok());
                    let output = props.get("link.output.node").and_then(|v| v.parse().ok());
                    if let (Some(input_node_id), Some(output_node_id)) = (input, output) {
                        added.lock().links.insert(
                            global.id,
                            RawLink {
                                id: global.id,
                                input_node_id,
                                output_node_id,
                            },
                        );
                    }
                }
                _ => {}
            }
        })
        .global_remove(move |id| {
            let mut mirror = removed.lock();
            mirror.nodes.remove(&id);
            mirror.links.remove(&id);
        })
        .register();

    tracing::debug!("PipeWire registry mirror started");
    let _ = ready.send(Ok(()));

    mainloop.run();
    Ok(())
}
