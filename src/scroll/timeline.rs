use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::binding::{PropertyTrack, TargetRef};
use super::host::ElementHost;
use crate::math::Easing;

/// One step of the intro sequence, scheduled at an absolute delay from mount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub target: TargetRef,
    pub delay_ms: u32,
    pub duration_ms: u32,
    #[serde(default)]
    pub easing: Easing,
    pub tracks: Vec<PropertyTrack>,
}

impl TimelineEntry {
    fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.into())
    }

    fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms.into())
    }

    /// Linear progress of this entry at `elapsed` since mount
    fn progress_at(&self, elapsed: Duration) -> f32 {
        let since = elapsed.saturating_sub(self.delay());
        let duration = self.duration();
        if since >= duration {
            1.0
        } else {
            (since.as_secs_f64() / duration.as_secs_f64()) as f32
        }
    }

    fn apply(&self, host: &mut dyn ElementHost, progress: f32) {
        let eased = self.easing.apply(progress);
        for track in &self.tracks {
            host.set_property(&self.target, track.property, track.value_at(eased));
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Pending,
    Running,
    Complete,
}

/// One-shot intro sequence
///
/// Mounting writes every entry's from-values; advancing plays entries on their
/// absolute schedule. Once complete the timeline ignores further time. There
/// is no restart: a remount builds a new timeline.
#[derive(Debug, Clone)]
pub struct IntroTimeline {
    entries: Vec<(TimelineEntry, EntryState)>,
    elapsed: Duration,
}

impl IntroTimeline {
    pub fn mount(
        entries: impl IntoIterator<Item = TimelineEntry>,
        host: &mut dyn ElementHost,
    ) -> Self {
        let mut entries: Vec<_> = entries
            .into_iter()
            .filter(|entry| {
                let present = host.contains(&entry.target);
                if !present {
                    log::warn!("intro entry for `{}` skipped: element not found", entry.target);
                }
                present
            })
            .map(|entry| (entry, EntryState::Pending))
            .collect();
        entries.sort_by_key(|(entry, _)| entry.delay_ms);

        for (entry, _) in &entries {
            entry.apply(host, 0.0);
        }

        Self {
            entries,
            elapsed: Duration::ZERO,
        }
    }

    /// Move the timeline forward by `delta` and write running entries
    pub fn advance(&mut self, delta: Duration, host: &mut dyn ElementHost) {
        self.seek(self.elapsed.saturating_add(delta), host);
    }

    /// Move the timeline to `elapsed` since mount; earlier times are ignored
    pub fn seek(&mut self, elapsed: Duration, host: &mut dyn ElementHost) {
        if self.is_complete() || elapsed < self.elapsed {
            return;
        }
        self.elapsed = elapsed;

        for (entry, state) in &mut self.entries {
            if *state == EntryState::Complete || self.elapsed < entry.delay() {
                continue;
            }

            let progress = entry.progress_at(self.elapsed);
            entry.apply(host, progress);
            *state = if progress >= 1.0 {
                log::debug!("intro entry `{}` complete", entry.target);
                EntryState::Complete
            } else {
                EntryState::Running
            };
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn state(&self, target: &TargetRef) -> Option<EntryState> {
        self.entries
            .iter()
            .find(|(entry, _)| &entry.target == target)
            .map(|(_, state)| *state)
    }

    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|(_, state)| *state == EntryState::Complete)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
