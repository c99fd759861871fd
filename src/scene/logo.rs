use glam::{Vec2, Vec3};
use serde::Serialize;

use super::EntityId;
use crate::config::{FloatConfig, LogoConfig, LogoMaterial};
use crate::frame::FrameInfo;
use crate::math::Rgb;
use crate::traits::Animated;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverState {
    Idle,
    Hovered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
}

impl HoverState {
    /// Instantaneous two-state transition; repeated events are no-ops
    pub const fn on(self, event: PointerEvent) -> HoverState {
        match event {
            PointerEvent::Enter => HoverState::Hovered,
            PointerEvent::Leave => HoverState::Idle,
        }
    }
}

/// Idle float motion, applied on top of the logo's own transform
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FloatPose {
    pub rotation: Vec3,
    pub offset: f32,
}

impl FloatPose {
    pub fn at(time: f32, config: &FloatConfig) -> Self {
        let phase = time / 4.0 * config.speed;
        let ri = config.rotation_intensity;

        Self {
            rotation: Vec3::new(
                phase.cos() / 8.0 * ri,
                phase.sin() / 8.0 * ri,
                phase.sin() / 20.0 * ri,
            ),
            offset: phase.sin() / 10.0 * config.float_intensity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogoState {
    pub rotation: Vec2,
    pub vertical_offset: f32,
    pub hover: HoverState,
    pub float: FloatPose,
}

impl LogoState {
    /// Base rotation `(cos(t/2)/2, sin(t/3)/2)`
    pub fn rotation_at(time: f32) -> Vec2 {
        Vec2::new((time / 2.0).cos() / 2.0, (time / 3.0).sin() / 2.0)
    }

    pub fn vertical_offset_at(time: f32) -> f32 {
        time.sin() * 0.1
    }
}

/// Centerpiece icosahedron
#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveLogo {
    state: LogoState,
    style: LogoConfig,
}

impl InteractiveLogo {
    pub const ID: EntityId = EntityId::LOGO;

    pub fn new(style: LogoConfig) -> Self {
        Self {
            state: LogoState {
                rotation: LogoState::rotation_at(0.0),
                vertical_offset: LogoState::vertical_offset_at(0.0),
                hover: HoverState::Idle,
                float: FloatPose::at(0.0, &style.float),
            },
            style,
        }
    }

    pub fn state(&self) -> &LogoState {
        &self.state
    }

    pub fn rotation(&self) -> Vec2 {
        self.state.rotation
    }

    pub fn vertical_offset(&self) -> f32 {
        self.state.vertical_offset
    }

    pub fn hovered(&self) -> bool {
        self.state.hover == HoverState::Hovered
    }

    pub fn scale(&self) -> f32 {
        match self.state.hover {
            HoverState::Hovered => self.style.hover_scale,
            HoverState::Idle => self.style.idle_scale,
        }
    }

    pub fn color(&self) -> Rgb {
        match self.state.hover {
            HoverState::Hovered => self.style.hover_color,
            HoverState::Idle => self.style.idle_color,
        }
    }

    pub fn material(&self) -> LogoMaterial {
        self.style.material
    }

    /// Combined rotation: base plus float envelope
    pub fn world_rotation(&self) -> Vec3 {
        self.state.rotation.extend(0.0) + self.state.float.rotation
    }

    /// Combined vertical position: base plus float envelope
    pub fn world_offset(&self) -> f32 {
        self.state.vertical_offset + self.state.float.offset
    }

    pub fn on_pointer(&mut self, event: PointerEvent) {
        let next = self.state.hover.on(event);
        if next != self.state.hover {
            log::debug!("logo hover {:?} -> {:?}", self.state.hover, next);
        }
        self.state.hover = next;
    }
}

impl Animated for InteractiveLogo {
    fn update(&self, frame: &FrameInfo) -> Self {
        let t = frame.time;
        Self {
            state: LogoState {
                rotation: LogoState::rotation_at(t),
                vertical_offset: LogoState::vertical_offset_at(t),
                hover: self.state.hover,
                float: FloatPose::at(t, &self.style.float),
            },
            style: self.style.clone(),
        }
    }
}
