use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TransitionError;
use crate::scenes;
use crate::transition::Transition;

fn default_circles() -> u16 {
    8
}

fn default_points() -> u16 {
    128
}

fn default_helix_rows() -> u16 {
    20
}

fn default_columns() -> u16 {
    8
}

fn default_rows() -> u16 {
    6
}

fn default_vertical() -> bool {
    true
}

fn default_parts() -> u16 {
    8
}

/// Every named transition with its construction parameters.
///
/// Parses from a JSON object such as `{"kind": "venetian_blinds", "vertical": false}`
/// or from a bare name, in which case parameters take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransitionKind {
    OutsideCubeFaceToLeft,
    InsideCubeFaceToLeft,
    FallLeaving,
    TurnAround,
    TurnDown,
    Iris,
    Rochade,
    RevolvingCircles {
        #[serde(default = "default_circles")]
        circles: u16,
        #[serde(default = "default_points")]
        points: u16,
    },
    Helix {
        #[serde(default = "default_helix_rows")]
        rows: u16,
    },
    #[serde(rename = "n_by_m_tile_flip")]
    TileFlip {
        #[serde(default = "default_columns")]
        columns: u16,
        #[serde(default = "default_rows")]
        rows: u16,
    },
    VenetianBlinds {
        #[serde(default = "default_vertical")]
        vertical: bool,
        #[serde(default = "default_parts")]
        parts: u16,
    },
    Diamond,
    Vortex,
    Glitter,
    Honeycomb,
    Newsflash,
    FadeSmoothly,
    FadeThroughColor {
        #[serde(default)]
        white: bool,
    },
    StaticNoise,
    Dissolve,
    Ripple,
}

impl TransitionKind {
    /// One entry per transition, parameters at their defaults
    pub fn all() -> Vec<TransitionKind> {
        vec![
            TransitionKind::OutsideCubeFaceToLeft,
            TransitionKind::InsideCubeFaceToLeft,
            TransitionKind::FallLeaving,
            TransitionKind::TurnAround,
            TransitionKind::TurnDown,
            TransitionKind::Iris,
            TransitionKind::Rochade,
            TransitionKind::RevolvingCircles {
                circles: default_circles(),
                points: default_points(),
            },
            TransitionKind::Helix {
                rows: default_helix_rows(),
            },
            TransitionKind::TileFlip {
                columns: default_columns(),
                rows: default_rows(),
            },
            TransitionKind::VenetianBlinds {
                vertical: default_vertical(),
                parts: default_parts(),
            },
            TransitionKind::Diamond,
            TransitionKind::Vortex,
            TransitionKind::Glitter,
            TransitionKind::Honeycomb,
            TransitionKind::Newsflash,
            TransitionKind::FadeSmoothly,
            TransitionKind::FadeThroughColor { white: false },
            TransitionKind::StaticNoise,
            TransitionKind::Dissolve,
            TransitionKind::Ripple,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TransitionKind::OutsideCubeFaceToLeft => "outside_cube_face_to_left",
            TransitionKind::InsideCubeFaceToLeft => "inside_cube_face_to_left",
            TransitionKind::FallLeaving => "fall_leaving",
            TransitionKind::TurnAround => "turn_around",
            TransitionKind::TurnDown => "turn_down",
            TransitionKind::Iris => "iris",
            TransitionKind::Rochade => "rochade",
            TransitionKind::RevolvingCircles { .. } => "revolving_circles",
            TransitionKind::Helix { .. } => "helix",
            TransitionKind::TileFlip { .. } => "n_by_m_tile_flip",
            TransitionKind::VenetianBlinds { .. } => "venetian_blinds",
            TransitionKind::Diamond => "diamond",
            TransitionKind::Vortex => "vortex",
            TransitionKind::Glitter => "glitter",
            TransitionKind::Honeycomb => "honeycomb",
            TransitionKind::Newsflash => "newsflash",
            TransitionKind::FadeSmoothly => "fade_smoothly",
            TransitionKind::FadeThroughColor { .. } => "fade_through_color",
            TransitionKind::StaticNoise => "static_noise",
            TransitionKind::Dissolve => "dissolve",
            TransitionKind::Ripple => "ripple",
        }
    }

    pub fn build(&self) -> Transition {
        self.build_with_rng(&mut rand::thread_rng())
    }

    /// Build with `rng` supplying the random axes of revolving circles
    pub fn build_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Transition {
        match *self {
            TransitionKind::OutsideCubeFaceToLeft => scenes::create_outside_cube_face_to_left_transition(),
            TransitionKind::InsideCubeFaceToLeft => scenes::create_inside_cube_face_to_left_transition(),
            TransitionKind::FallLeaving => scenes::create_fall_leaving_transition(),
            TransitionKind::TurnAround => scenes::create_turn_around_transition(),
            TransitionKind::TurnDown => scenes::create_turn_down_transition(),
            TransitionKind::Iris => scenes::create_iris_transition(),
            TransitionKind::Rochade => scenes::create_rochade_transition(),
            TransitionKind::RevolvingCircles { circles, points } => {
                scenes::create_revolving_circles_transition_with_rng(circles, points, rng)
            }
            TransitionKind::Helix { rows } => scenes::create_helix_transition(rows),
            TransitionKind::TileFlip { columns, rows } => scenes::create_tile_flip_transition(columns, rows),
            TransitionKind::VenetianBlinds { vertical, parts } => {
                scenes::create_venetian_blinds_transition(vertical, parts)
            }
            TransitionKind::Diamond => scenes::create_diamond_transition(),
            TransitionKind::Vortex => scenes::create_vortex_transition(),
            TransitionKind::Glitter => scenes::create_glitter_transition(),
            TransitionKind::Honeycomb => scenes::create_honeycomb_transition(),
            TransitionKind::Newsflash => scenes::create_newsflash_transition(),
            TransitionKind::FadeSmoothly => scenes::create_fade_smoothly_transition(),
            TransitionKind::FadeThroughColor { white } => scenes::create_fade_through_color_transition(white),
            TransitionKind::StaticNoise => scenes::create_static_transition(),
            TransitionKind::Dissolve => scenes::create_dissolve_transition(),
            TransitionKind::Ripple => scenes::create_ripple_transition(),
        }
    }
}

impl FromStr for TransitionKind {
    type Err = TransitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('{') {
            return Ok(serde_json::from_str(s)?);
        }
        serde_json::from_value(serde_json::json!({ "kind": s }))
            .map_err(|_| TransitionError::UnknownTransition(s.to_string()))
    }
}
