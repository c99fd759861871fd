use std::collections::BTreeMap;

use serde::Serialize;

use super::binding::{Property, TargetRef};

/// Element surface the animations write into
///
/// Implemented by the host page layer; the engine never owns elements.
pub trait ElementHost {
    /// Whether the target currently exists
    fn contains(&self, target: &TargetRef) -> bool;

    /// Write one visual property of a target
    fn set_property(&mut self, target: &TargetRef, property: Property, value: f32);
}

/// In-memory element host - records the latest value of every property
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemoryHost {
    elements: BTreeMap<TargetRef, BTreeMap<Property, f32>>,
    #[serde(skip)]
    writes: u64,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements<I, T>(targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TargetRef>,
    {
        let mut host = Self::new();
        for target in targets {
            host.insert(target);
        }
        host
    }

    pub fn insert(&mut self, target: impl Into<TargetRef>) {
        self.elements.entry(target.into()).or_default();
    }

    pub fn remove(&mut self, target: &TargetRef) -> bool {
        self.elements.remove(target).is_some()
    }

    /// Latest written value, or the resting value for untouched properties
    pub fn get(&self, target: &TargetRef, property: Property) -> Option<f32> {
        self.elements
            .get(target)
            .map(|props| props.get(&property).copied().unwrap_or(property.resting_value()))
    }

    /// Total number of property writes received
    pub fn writes(&self) -> u64 {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl ElementHost for MemoryHost {
    fn contains(&self, target: &TargetRef) -> bool {
        self.elements.contains_key(target)
    }

    fn set_property(&mut self, target: &TargetRef, property: Property, value: f32) {
        if let Some(props) = self.elements.get_mut(target) {
            props.insert(property, value);
            self.writes += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_properties_read_resting_values() {
        let host = MemoryHost::with_elements(["hero-title"]);
        let title = TargetRef::from("hero-title");

        assert_eq!(host.get(&title, Property::Opacity), Some(1.0));
        assert_eq!(host.get(&title, Property::TranslateY), Some(0.0));
        assert_eq!(host.get(&"missing".into(), Property::Opacity), None);
    }

    #[test]
    fn test_writes_to_missing_elements_are_dropped() {
        let mut host = MemoryHost::with_elements(["card-0"]);

        host.set_property(&"card-0".into(), Property::Rotation, -5.0);
        host.set_property(&"card-9".into(), Property::Rotation, 5.0);

        assert_eq!(host.writes(), 1);
        assert_eq!(host.get(&"card-0".into(), Property::Rotation), Some(-5.0));
        assert!(!host.contains(&"card-9".into()));
    }

    #[test]
    fn test_serializes_by_target_and_property() {
        let mut host = MemoryHost::with_elements(["a"]);
        host.set_property(&"a".into(), Property::TranslateY, 50.0);

        let json = serde_json::to_value(&host).unwrap();
        assert_eq!(json["elements"]["a"]["translate_y"], 50.0);
    }
}
