use std::time::Duration;

use folio_scene::core::DisplayContext;
use folio_scene::scroll::{
    presets, ElementHost, EntryState, IntroTimeline, MemoryHost, Property, TargetRef,
};
use folio_scene::{mount, SceneConfig};

fn hero_host() -> MemoryHost {
    MemoryHost::with_elements([presets::HERO_TITLE, presets::HERO_SUBTITLE, presets::CTA_BUTTON])
}

fn opacity(host: &MemoryHost, target: &str) -> f32 {
    host.get(&TargetRef::from(target), Property::Opacity).unwrap()
}

#[test]
fn test_mount_hides_hero_content() {
    let mut host = hero_host();
    let timeline = IntroTimeline::mount(presets::hero_intro(), &mut host);

    assert_eq!(timeline.len(), 3);
    for target in [presets::HERO_TITLE, presets::HERO_SUBTITLE, presets::CTA_BUTTON] {
        assert_eq!(opacity(&host, target), 0.0);
    }
    assert_eq!(host.get(&presets::CTA_BUTTON.into(), Property::Scale), Some(0.8));
}

#[test]
fn test_title_done_before_subtitle_starts() {
    let mut host = hero_host();
    let mut timeline = IntroTimeline::mount(presets::hero_intro(), &mut host);

    timeline.advance(Duration::from_millis(600), &mut host);

    assert_eq!(opacity(&host, presets::HERO_TITLE), 1.0);
    assert_eq!(opacity(&host, presets::HERO_SUBTITLE), 0.0);
    assert_eq!(timeline.state(&presets::HERO_TITLE.into()), Some(EntryState::Complete));
    assert_eq!(timeline.state(&presets::HERO_SUBTITLE.into()), Some(EntryState::Pending));
}

#[test]
fn test_all_entries_done_by_1300ms() {
    let mut host = hero_host();
    let mut timeline = IntroTimeline::mount(presets::hero_intro(), &mut host);

    timeline.advance(Duration::from_millis(600), &mut host);
    timeline.advance(Duration::from_millis(700), &mut host);

    assert!(timeline.is_complete());
    for target in [presets::HERO_TITLE, presets::HERO_SUBTITLE, presets::CTA_BUTTON] {
        assert_eq!(opacity(&host, target), 1.0);
    }
    assert_eq!(host.get(&presets::CTA_BUTTON.into(), Property::Scale), Some(1.0));
    assert_eq!(host.get(&presets::HERO_TITLE.into(), Property::TranslateY), Some(0.0));
}

#[test]
fn test_cta_overshoots_while_popping() {
    let mut host = hero_host();
    let mut timeline = IntroTimeline::mount(presets::hero_intro(), &mut host);

    timeline.advance(Duration::from_millis(1260), &mut host);

    let scale = host.get(&presets::CTA_BUTTON.into(), Property::Scale).unwrap();
    assert!(scale > 1.0, "back-out easing should overshoot, got {scale}");
}

#[test]
fn test_finished_intro_never_replays() {
    let mut host = hero_host();
    let mut timeline = IntroTimeline::mount(presets::hero_intro(), &mut host);
    timeline.advance(Duration::from_secs(2), &mut host);

    // Page code owns the element once the intro is done
    host.set_property(&presets::HERO_TITLE.into(), Property::Opacity, 0.25);
    timeline.advance(Duration::from_secs(10), &mut host);

    assert_eq!(opacity(&host, presets::HERO_TITLE), 0.25);
}

#[test]
fn test_handle_completes_intro_at_1300ms() {
    let mut host = hero_host();
    let mut handle = mount(DisplayContext::new(1280, 720), &SceneConfig::default(), &mut host);

    handle.frame(1.3, &mut host);

    assert!(handle.intro().is_complete());
    assert_eq!(host.get(&presets::CTA_BUTTON.into(), Property::Scale), Some(1.0));
}

#[test]
fn test_handle_intro_follows_clock_over_many_frames() {
    let mut host = hero_host();
    let mut handle = mount(DisplayContext::new(1280, 720), &SceneConfig::default(), &mut host);

    for _ in 0..36 {
        handle.frame(1.0 / 60.0, &mut host);
    }
    assert_eq!(opacity(&host, presets::HERO_TITLE), 1.0);
    assert_eq!(opacity(&host, presets::HERO_SUBTITLE), 0.0);

    for _ in 36..78 {
        handle.frame(1.0 / 60.0, &mut host);
    }
    assert!(handle.intro().is_complete());
}
