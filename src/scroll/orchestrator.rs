use slotmap::{new_key_type, SlotMap};

use super::binding::{BindingSpec, ScrollBinding};
use super::host::ElementHost;
use crate::error::BindingError;

new_key_type! {
    /// Handle returned by registration; pass it back to unregister
    pub struct BindingHandle;
}

/// Maps scroll position to progress for every live binding
///
/// Progress depends only on the latest reference point, so scroll events and
/// frame ticks may interleave in any order.
#[derive(Debug, Default)]
pub struct ScrollAnimationOrchestrator {
    bindings: SlotMap<BindingHandle, ScrollBinding>,
    reference_point: Option<f32>,
}

impl ScrollAnimationOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding and write its current state to the host
    pub fn register_binding(
        &mut self,
        host: &mut dyn ElementHost,
        spec: BindingSpec,
    ) -> Result<BindingHandle, BindingError> {
        if !host.contains(&spec.target) {
            log::warn!("not binding `{}`: element not found", spec.target);
            return Err(BindingError::MissingTarget(spec.target));
        }

        let mut binding =
            ScrollBinding::new(spec).inspect_err(|e| log::warn!("binding rejected: {e}"))?;
        if let Some(point) = self.reference_point {
            binding.update(point);
        }
        apply(host, &binding);

        let (start, end) = binding.range();
        log::debug!("bound `{}` over [{start}, {end}]", binding.target());
        Ok(self.bindings.insert(binding))
    }

    /// Register several bindings, skipping the ones that are refused
    pub fn register_group(
        &mut self,
        host: &mut dyn ElementHost,
        specs: impl IntoIterator<Item = BindingSpec>,
    ) -> Vec<BindingHandle> {
        specs
            .into_iter()
            .filter_map(|spec| self.register_binding(host, spec).ok())
            .collect()
    }

    /// Drop a binding; its element receives no further writes
    pub fn unregister(&mut self, handle: BindingHandle) -> bool {
        match self.bindings.remove(handle) {
            Some(binding) => {
                log::debug!("unbound `{}`", binding.target());
                true
            }
            None => false,
        }
    }

    /// Drop every binding, returning how many were live
    pub fn clear(&mut self) -> usize {
        let count = self.bindings.len();
        self.bindings.clear();
        count
    }

    /// Scroll event: recompute progress and write changed bindings
    pub fn on_scroll(&mut self, reference_point: f32, host: &mut dyn ElementHost) {
        if !reference_point.is_finite() {
            log::warn!("ignoring non-finite scroll reference point {reference_point}");
            return;
        }
        self.reference_point = Some(reference_point);

        for binding in self.bindings.values_mut() {
            if binding.update(reference_point) {
                apply(host, binding);
            }
        }
    }

    /// Resize event: recompute against the last reference point and rewrite all
    pub fn on_resize(&mut self, host: &mut dyn ElementHost) {
        let point = self.reference_point;
        for binding in self.bindings.values_mut() {
            if let Some(point) = point {
                binding.update(point);
            }
            apply(host, binding);
        }
    }

    pub fn progress(&self, handle: BindingHandle) -> Option<f32> {
        self.bindings.get(handle).map(ScrollBinding::progress)
    }

    pub fn binding(&self, handle: BindingHandle) -> Option<&ScrollBinding> {
        self.bindings.get(handle)
    }

    pub fn reference_point(&self) -> Option<f32> {
        self.reference_point
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

fn apply(host: &mut dyn ElementHost, binding: &ScrollBinding) {
    for (property, value) in binding.values() {
        host.set_property(binding.target(), property, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::{MemoryHost, Property, TargetRef};

    fn title_spec() -> BindingSpec {
        BindingSpec::scrub("about-title", 100.0, 500.0)
            .track(Property::Opacity, 0.0, 1.0)
            .track(Property::TranslateY, 100.0, 0.0)
    }

    #[test]
    fn test_registration_applies_from_values() {
        let mut host = MemoryHost::with_elements(["about-title"]);
        let mut orchestrator = ScrollAnimationOrchestrator::new();

        orchestrator.register_binding(&mut host, title_spec()).unwrap();

        let title = TargetRef::from("about-title");
        assert_eq!(host.get(&title, Property::Opacity), Some(0.0));
        assert_eq!(host.get(&title, Property::TranslateY), Some(100.0));
    }

    #[test]
    fn test_registration_uses_last_reference_point() {
        let mut host = MemoryHost::with_elements(["about-title"]);
        let mut orchestrator = ScrollAnimationOrchestrator::new();
        orchestrator.on_scroll(300.0, &mut host);

        let handle = orchestrator.register_binding(&mut host, title_spec()).unwrap();

        assert_eq!(orchestrator.progress(handle), Some(0.5));
        assert_eq!(host.get(&"about-title".into(), Property::Opacity), Some(0.5));
    }

    #[test]
    fn test_missing_target_is_not_bound() {
        let mut host = MemoryHost::new();
        let mut orchestrator = ScrollAnimationOrchestrator::new();

        let err = orchestrator.register_binding(&mut host, title_spec()).unwrap_err();

        assert_eq!(err, BindingError::MissingTarget("about-title".into()));
        assert!(orchestrator.is_empty());
        assert_eq!(host.writes(), 0);
    }

    #[test]
    fn test_unregistered_binding_stops_writing() {
        let mut host = MemoryHost::with_elements(["about-title"]);
        let mut orchestrator = ScrollAnimationOrchestrator::new();
        let handle = orchestrator.register_binding(&mut host, title_spec()).unwrap();

        assert!(orchestrator.unregister(handle));
        assert!(!orchestrator.unregister(handle));
        let writes = host.writes();
        orchestrator.on_scroll(450.0, &mut host);
        orchestrator.on_resize(&mut host);

        assert_eq!(host.writes(), writes);
        assert_eq!(orchestrator.progress(handle), None);
    }

    #[test]
    fn test_non_finite_scroll_is_ignored() {
        let mut host = MemoryHost::with_elements(["about-title"]);
        let mut orchestrator = ScrollAnimationOrchestrator::new();
        let handle = orchestrator.register_binding(&mut host, title_spec()).unwrap();
        orchestrator.on_scroll(500.0, &mut host);

        orchestrator.on_scroll(f32::NAN, &mut host);

        assert_eq!(orchestrator.progress(handle), Some(1.0));
        assert_eq!(orchestrator.reference_point(), Some(500.0));
    }

    #[test]
    fn test_register_group_skips_refused_specs() {
        let mut host = MemoryHost::with_elements(["a", "b"]);
        let mut orchestrator = ScrollAnimationOrchestrator::new();
        let specs = ["a", "missing", "b"]
            .into_iter()
            .map(|t| BindingSpec::scrub(t, 0.0, 1.0).track(Property::Scale, 0.9, 1.0));

        let handles = orchestrator.register_group(&mut host, specs);

        assert_eq!(handles.len(), 2);
        assert_eq!(orchestrator.clear(), 2);
        assert!(orchestrator.is_empty());
    }
}
