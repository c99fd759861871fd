//! Entrance animations used by the profile page

use super::binding::{BindingSpec, Property, PropertyTrack, TargetRef};
use super::timeline::TimelineEntry;
use crate::math::Easing;

/// Section titles animate while the section top moves from 80% to 50% of the viewport
pub const SECTION_TRIGGER: (f32, f32) = (0.8, 0.5);
/// Cards animate while their top moves from 90% to 60% of the viewport
pub const CARD_TRIGGER: (f32, f32) = (0.9, 0.6);

/// Starting tilt magnitude of a card, in degrees
pub const CARD_TILT_DEGREES: f32 = 5.0;

pub const HERO_TITLE: &str = "hero-title";
pub const HERO_SUBTITLE: &str = "hero-subtitle";
pub const CTA_BUTTON: &str = "cta-button";

/// Scroll range over which an element's top travels between two viewport anchors
///
/// Anchors are fractions of the viewport height measured from its top, so
/// `(0.8, 0.5)` starts when the element top sits at 80% of the viewport and
/// ends at 50%. The reference point is the page scroll offset.
pub fn trigger_range(element_top: f32, viewport_height: f32, anchors: (f32, f32)) -> (f32, f32) {
    let (start_anchor, end_anchor) = anchors;
    (
        element_top - start_anchor * viewport_height,
        element_top - end_anchor * viewport_height,
    )
}

pub fn section_title(target: impl Into<TargetRef>, start: f32, end: f32) -> BindingSpec {
    BindingSpec::scrub(target, start, end)
        .track(Property::Opacity, 0.0, 1.0)
        .track(Property::TranslateY, 100.0, 0.0)
        .track(Property::Scale, 0.8, 1.0)
}

/// Entrance tilt for the card at `index`: even cards lean left, odd cards right
pub fn card_tilt(index: usize) -> f32 {
    if index % 2 == 0 {
        -CARD_TILT_DEGREES
    } else {
        CARD_TILT_DEGREES
    }
}

pub fn card(target: impl Into<TargetRef>, index: usize, start: f32, end: f32) -> BindingSpec {
    BindingSpec::scrub(target, start, end)
        .track(Property::Opacity, 0.0, 1.0)
        .track(Property::TranslateY, 50.0, 0.0)
        .track(Property::Rotation, card_tilt(index), 0.0)
        .track(Property::Scale, 0.9, 1.0)
}

/// Bindings for a homogeneous card collection sharing one trigger range
pub fn card_group<I, T>(targets: I, start: f32, end: f32) -> Vec<BindingSpec>
where
    I: IntoIterator<Item = T>,
    T: Into<TargetRef>,
{
    targets
        .into_iter()
        .enumerate()
        .map(|(index, target)| card(target, index, start, end))
        .collect()
}

/// Hero entrance: title, subtitle, then a call-to-action pop
pub fn hero_intro() -> Vec<TimelineEntry> {
    let slide_in = |target: &str, delay_ms, offset| TimelineEntry {
        target: target.into(),
        delay_ms,
        duration_ms: 100,
        easing: Easing::Power3Out,
        tracks: vec![
            PropertyTrack::new(Property::Opacity, 0.0, 1.0),
            PropertyTrack::new(Property::TranslateY, offset, 0.0),
        ],
    };

    vec![
        slide_in(HERO_TITLE, 500, 50.0),
        slide_in(HERO_SUBTITLE, 800, 30.0),
        TimelineEntry {
            target: CTA_BUTTON.into(),
            delay_ms: 1200,
            duration_ms: 100,
            easing: Easing::BackOut { overshoot: 1.7 },
            tracks: vec![
                PropertyTrack::new(Property::Opacity, 0.0, 1.0),
                PropertyTrack::new(Property::Scale, 0.8, 1.0),
            ],
        },
    ]
}
