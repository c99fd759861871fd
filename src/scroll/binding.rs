use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BindingError;
use crate::math::{inverse_lerp_clamped, lerp, Easing};

/// Host-side identifier of an animated element
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetRef(String);

impl TargetRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TargetRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visual property an animation can drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
    /// Degrees, clockwise
    Rotation,
}

impl Property {
    /// Value of the property when no animation has touched it
    pub const fn resting_value(self) -> f32 {
        match self {
            Property::Opacity | Property::Scale => 1.0,
            Property::TranslateX | Property::TranslateY | Property::Rotation => 0.0,
        }
    }
}

/// One animated property and its endpoints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyTrack {
    pub property: Property,
    pub from: f32,
    pub to: f32,
}

impl PropertyTrack {
    pub const fn new(property: Property, from: f32, to: f32) -> Self {
        Self { property, from, to }
    }

    pub fn value_at(&self, progress: f32) -> f32 {
        lerp(self.from, self.to, progress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BindingMode {
    /// Progress follows the reference point in both directions
    #[default]
    Scrub,
    /// Progress only moves forward; scrolling back does not reverse it
    OneShot,
}

/// Registration request for a scroll binding
#[derive(Debug, Clone, PartialEq)]
pub struct BindingSpec {
    pub target: TargetRef,
    pub start: f32,
    pub end: f32,
    pub tracks: Vec<PropertyTrack>,
    pub mode: BindingMode,
    pub easing: Option<Easing>,
}

impl BindingSpec {
    pub fn scrub(target: impl Into<TargetRef>, start: f32, end: f32) -> Self {
        Self {
            target: target.into(),
            start,
            end,
            tracks: Vec::new(),
            mode: BindingMode::Scrub,
            easing: None,
        }
    }

    pub fn one_shot(target: impl Into<TargetRef>, start: f32, end: f32) -> Self {
        Self {
            mode: BindingMode::OneShot,
            ..Self::scrub(target, start, end)
        }
    }

    pub fn track(mut self, property: Property, from: f32, to: f32) -> Self {
        self.tracks.push(PropertyTrack::new(property, from, to));
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }
}

impl From<String> for TargetRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Live binding between a trigger range and an element's properties
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollBinding {
    target: TargetRef,
    start: f32,
    end: f32,
    tracks: Vec<PropertyTrack>,
    mode: BindingMode,
    easing: Option<Easing>,
    progress: f32,
}

impl ScrollBinding {
    /// Validate a spec; host presence is checked by the orchestrator
    pub fn new(spec: BindingSpec) -> Result<Self, BindingError> {
        let BindingSpec { target, start, end, tracks, mode, easing } = spec;

        if !start.is_finite() || !end.is_finite() || end <= start {
            return Err(BindingError::InvalidRange { start, end });
        }
        if tracks.is_empty() {
            return Err(BindingError::NoProperties(target));
        }

        Ok(Self {
            target,
            start,
            end,
            tracks,
            mode,
            easing,
            progress: 0.0,
        })
    }

    pub fn target(&self) -> &TargetRef {
        &self.target
    }

    pub fn range(&self) -> (f32, f32) {
        (self.start, self.end)
    }

    pub fn mode(&self) -> BindingMode {
        self.mode
    }

    pub fn tracks(&self) -> &[PropertyTrack] {
        &self.tracks
    }

    /// Current linear progress in [0, 1]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Progress this binding's range assigns to a reference point
    pub fn progress_at(&self, reference_point: f32) -> f32 {
        inverse_lerp_clamped(self.start, self.end, reference_point)
    }

    /// Recompute progress for a reference point; returns true if it changed
    pub fn update(&mut self, reference_point: f32) -> bool {
        let raw = self.progress_at(reference_point);
        let next = match self.mode {
            BindingMode::Scrub => raw,
            BindingMode::OneShot => self.progress.max(raw),
        };

        let changed = next != self.progress;
        self.progress = next;
        changed
    }

    /// Property values for the current progress
    pub fn values(&self) -> impl Iterator<Item = (Property, f32)> + '_ {
        let eased = self.easing.map_or(self.progress, |e| e.apply(self.progress));
        self.tracks.iter().map(move |t| (t.property, t.value_at(eased)))
    }
}
