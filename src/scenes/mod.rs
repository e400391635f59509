mod blinds;
mod circles;
mod common;
mod cube;
mod diamond;
mod fades;
mod glitter;
mod helix;
mod honeycomb;
mod iris;
mod newsflash;
mod rochade;
mod tiles;
mod vortex;

pub use blinds::create_venetian_blinds_transition;
pub use circles::{create_revolving_circles_transition, create_revolving_circles_transition_with_rng};
pub use cube::{
    create_fall_leaving_transition, create_inside_cube_face_to_left_transition,
    create_outside_cube_face_to_left_transition, create_turn_around_transition, create_turn_down_transition,
};
pub use diamond::{create_diamond_transition, diamond_leaving_slide};
pub use fades::{
    create_dissolve_transition, create_fade_smoothly_transition, create_fade_through_color_transition,
    create_ripple_transition, create_static_transition,
};
pub use glitter::{create_glitter_transition, hexagon_centers};
pub use helix::create_helix_transition;
pub use honeycomb::create_honeycomb_transition;
pub use iris::create_iris_transition;
pub use newsflash::create_newsflash_transition;
pub use rochade::create_rochade_transition;
pub use tiles::create_tile_flip_transition;
pub use vortex::{create_vortex_transition, tile_info};
