//! Renderers that consume the per-tick [`DrawList`].
//!
//! The simulation only produces transforms; a [`Renderer`] decides what to do
//! with them. [`HeadlessRenderer`] counts draw calls per mesh and is used by
//! the default binary and by tests. The raylib window renderer lives in
//! [`window`] and requires the `render` feature.
use log::trace;
use rustc_hash::FxHashMap;

use crate::resources::drawlist::{DrawCall, DrawList, MeshHandle};

#[cfg(feature = "render")]
pub mod window;

/// Something that can draw one frame's worth of entities.
pub trait Renderer {
    fn begin_frame(&mut self) {}
    fn draw_entity(&mut self, call: &DrawCall);
    fn end_frame(&mut self) {}
}

/// Feed a whole draw list through `renderer`, framed by the begin/end hooks.
pub fn render_draw_list(renderer: &mut dyn Renderer, list: &DrawList) {
    renderer.begin_frame();
    for call in list.iter() {
        renderer.draw_entity(call);
    }
    renderer.end_frame();
}

/// Renderer without a window. Tracks how many calls each mesh received in
/// the current frame and over the whole run.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frame_counts: FxHashMap<MeshHandle, usize>,
    total_counts: FxHashMap<MeshHandle, u64>,
    frames: u64,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received for `mesh` in the most recent frame.
    pub fn frame_count(&self, mesh: MeshHandle) -> usize {
        self.frame_counts.get(&mesh).copied().unwrap_or(0)
    }

    /// Calls received for `mesh` since creation.
    pub fn total_count(&self, mesh: MeshHandle) -> u64 {
        self.total_counts.get(&mesh).copied().unwrap_or(0)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for HeadlessRenderer {
    fn begin_frame(&mut self) {
        self.frame_counts.clear();
    }

    fn draw_entity(&mut self, call: &DrawCall) {
        *self.frame_counts.entry(call.mesh).or_insert(0) += 1;
        *self.total_counts.entry(call.mesh).or_insert(0) += 1;
    }

    fn end_frame(&mut self) {
        self.frames += 1;
        if log::log_enabled!(log::Level::Trace) {
            let mut counts: Vec<_> = self
                .frame_counts
                .iter()
                .map(|(mesh, n)| format!("{}={}", mesh.name(), n))
                .collect();
            counts.sort();
            trace!("Frame {}: {}", self.frames, counts.join(" "));
        }
    }
}
