//! Host-facing lifecycle: mount a scene, feed it events, dispose it

use std::future::Future;

use crate::config::SceneConfig;
use crate::core::{DisplayContext, FrameClock, ResourceId};
use crate::error::BindingError;
use crate::frame::FrameInfo;
use crate::scene::{EntityId, PointerEvent, RenderFrame, SceneGraph};
use crate::scroll::{
    BindingHandle, BindingSpec, ElementHost, IntroTimeline, ScrollAnimationOrchestrator,
};

/// Mount the scene into a container and start the intro timeline
pub fn mount(
    container: DisplayContext,
    config: &SceneConfig,
    host: &mut dyn ElementHost,
) -> SceneHandle {
    log::info!("mounting scene into {}x{} container", container.width, container.height);

    SceneHandle {
        clock: FrameClock::new(),
        scene: SceneGraph::build(config, container),
        scroll: ScrollAnimationOrchestrator::new(),
        intro: IntroTimeline::mount(config.intro.iter().cloned(), host),
        container,
    }
}

/// Everything one mounted scene owns
///
/// All listeners and per-frame work live here; `dispose` consumes the handle
/// so nothing can tick or write to the host afterwards.
#[derive(Debug)]
pub struct SceneHandle {
    clock: FrameClock,
    scene: SceneGraph,
    scroll: ScrollAnimationOrchestrator,
    intro: IntroTimeline,
    container: DisplayContext,
}

impl SceneHandle {
    /// Display refresh with a host-measured delta in seconds
    pub fn frame(&mut self, delta: f32, host: &mut dyn ElementHost) -> RenderFrame {
        let frame = self.clock.advance(delta);
        self.step(frame, host)
    }

    /// Display refresh timed by the wall clock
    pub fn tick(&mut self, host: &mut dyn ElementHost) -> RenderFrame {
        let frame = self.clock.tick();
        self.step(frame, host)
    }

    fn step(&mut self, frame: FrameInfo, host: &mut dyn ElementHost) -> RenderFrame {
        // Absolute clock time, so the schedule cannot drift from `t`
        self.intro.seek(self.clock.elapsed_millis(), host);

        // The scene stays frozen behind the placeholder until resources are in
        if self.scene.gate().is_ready() {
            self.scene.update(&frame);
        }
        self.scene.render()
    }

    /// Wait for resource loads; the only suspension point of the engine
    pub async fn load_resources<I, F>(&mut self, loads: I)
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = ResourceId>,
    {
        self.scene.gate_mut().resolve(loads).await;
    }

    /// Callback-style alternative to `load_resources`
    pub fn mark_resource_ready(&mut self, id: &ResourceId) -> bool {
        self.scene.gate_mut().mark_ready(id)
    }

    pub fn is_ready(&self) -> bool {
        self.scene.gate().is_ready()
    }

    pub fn on_pointer_enter(&mut self, id: EntityId) -> bool {
        self.scene.on_pointer(id, PointerEvent::Enter)
    }

    pub fn on_pointer_leave(&mut self, id: EntityId) -> bool {
        self.scene.on_pointer(id, PointerEvent::Leave)
    }

    pub fn on_drag(&mut self, dx: f32, dy: f32) {
        let height = self.container.height;
        self.scene.camera_mut().on_drag(dx, dy, height);
    }

    pub fn on_drag_end(&mut self) {
        self.scene.camera_mut().on_drag_end();
    }

    pub fn zoom(&mut self, factor: f32) -> bool {
        self.scene.camera_mut().zoom(factor)
    }

    pub fn pan(&mut self, dx: f32, dy: f32) -> bool {
        self.scene.camera_mut().pan(dx, dy)
    }

    /// Container resized: new camera aspect, bindings recomputed
    pub fn on_resize(&mut self, width: u32, height: u32, host: &mut dyn ElementHost) {
        self.container = DisplayContext::new(width, height);
        self.scene.camera_mut().resize(width, height);
        self.scroll.on_resize(host);
    }

    pub fn on_scroll(&mut self, reference_point: f32, host: &mut dyn ElementHost) {
        self.scroll.on_scroll(reference_point, host);
    }

    pub fn register_binding(
        &mut self,
        host: &mut dyn ElementHost,
        spec: BindingSpec,
    ) -> Result<BindingHandle, BindingError> {
        self.scroll.register_binding(host, spec)
    }

    pub fn register_group(
        &mut self,
        host: &mut dyn ElementHost,
        specs: impl IntoIterator<Item = BindingSpec>,
    ) -> Vec<BindingHandle> {
        self.scroll.register_group(host, specs)
    }

    pub fn unregister_binding(&mut self, handle: BindingHandle) -> bool {
        self.scroll.unregister(handle)
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn scroll(&self) -> &ScrollAnimationOrchestrator {
        &self.scroll
    }

    pub fn intro(&self) -> &IntroTimeline {
        &self.intro
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    /// Release every binding and stop ticking; returns the number of bindings released
    pub fn dispose(mut self) -> usize {
        let released = self.scroll.clear();
        log::info!(
            "scene disposed after {} frames, {released} bindings released",
            self.clock.frame_count()
        );
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::{presets, MemoryHost, Property, TargetRef};

    fn hero_host() -> MemoryHost {
        MemoryHost::with_elements([
            presets::HERO_TITLE,
            presets::HERO_SUBTITLE,
            presets::CTA_BUTTON,
        ])
    }

    fn mounted(host: &mut MemoryHost) -> SceneHandle {
        mount(DisplayContext::new(1280, 720), &SceneConfig::default(), host)
    }

    fn ready(handle: &mut SceneHandle) {
        for id in handle.scene().resources() {
            handle.mark_resource_ready(&id);
        }
    }

    #[test]
    fn test_scene_waits_for_resources() {
        let mut host = hero_host();
        let mut handle = mounted(&mut host);

        let frame = handle.frame(0.5, &mut host);
        assert!(matches!(frame, RenderFrame::Loading { .. }));
        assert_eq!(handle.scene().particles().rotation(), 0.0);

        ready(&mut handle);
        let frame = handle.frame(0.5, &mut host);
        let snapshot = frame.snapshot().expect("scene renders once ready");
        assert_eq!(snapshot.time, 1.0);
        assert_eq!(snapshot.particles.rotation, 0.05);
    }

    #[test]
    fn test_intro_runs_while_loading() {
        let mut host = hero_host();
        let mut handle = mounted(&mut host);

        for _ in 0..13 {
            handle.frame(0.1, &mut host);
        }

        assert!(!handle.is_ready());
        assert!(handle.intro().is_complete());
        let cta = TargetRef::from(presets::CTA_BUTTON);
        assert_eq!(host.get(&cta, Property::Scale), Some(1.0));
    }

    #[test]
    fn test_load_resources_opens_gate() {
        let mut host = hero_host();
        let mut handle = mounted(&mut host);

        let loads = handle.scene().resources().into_iter().map(futures::future::ready);
        pollster::block_on(handle.load_resources(loads));

        assert!(handle.is_ready());
    }

    #[test]
    fn test_resize_keeps_scene_state() {
        let mut host = hero_host();
        let mut handle = mounted(&mut host);
        let azimuth = handle.scene().camera().azimuth();

        handle.on_resize(500, 1000, &mut host);

        assert_eq!(handle.scene().camera().aspect(), 0.5);
        assert_eq!(handle.scene().camera().azimuth(), azimuth);
    }

    #[test]
    fn test_dispose_releases_bindings() {
        let mut host = hero_host();
        host.insert("about-title");
        let mut handle = mounted(&mut host);
        handle
            .register_binding(&mut host, presets::section_title("about-title", 0.0, 100.0))
            .unwrap();

        assert_eq!(handle.dispose(), 1);
    }
}
