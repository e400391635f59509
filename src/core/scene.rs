use glam::Mat4;

use super::operation::Operation;
use super::primitive::{compose_operations, Primitive};
use super::scene_object::SceneObject;

/// Geometry for both slides plus operations that move the whole scene
#[derive(Debug, Clone, Default)]
pub struct TransitionScene {
    leaving: Vec<Primitive>,
    entering: Vec<Primitive>,
    overall: Vec<Operation>,
    scene_objects: Vec<SceneObject>,
}

impl TransitionScene {
    pub fn new(leaving: Vec<Primitive>, entering: Vec<Primitive>) -> Self {
        Self {
            leaving,
            entering,
            ..Self::default()
        }
    }

    pub fn with_overall(mut self, overall: Vec<Operation>) -> Self {
        self.overall = overall;
        self
    }

    pub fn with_scene_objects(mut self, scene_objects: Vec<SceneObject>) -> Self {
        self.scene_objects = scene_objects;
        self
    }

    pub fn leaving(&self) -> &[Primitive] {
        &self.leaving
    }

    pub fn entering(&self) -> &[Primitive] {
        &self.entering
    }

    pub fn overall(&self) -> &[Operation] {
        &self.overall
    }

    pub fn scene_objects(&self) -> &[SceneObject] {
        &self.scene_objects
    }

    pub fn scene_objects_mut(&mut self) -> &mut [SceneObject] {
        &mut self.scene_objects
    }

    /// Exchange every member with `other`
    pub fn swap(&mut self, other: &mut TransitionScene) {
        std::mem::swap(self, other);
    }

    /// Overall operations folded at `time`
    pub fn overall_transform(&self, time: f32, width_scale: f32, height_scale: f32) -> Mat4 {
        compose_operations(&self.overall, time, width_scale, height_scale)
    }

    pub fn vertex_count(&self) -> usize {
        let slides = self.leaving.iter().chain(&self.entering);
        slides.map(Primitive::vertex_count).sum::<usize>()
            + self.scene_objects.iter().map(SceneObject::vertex_count).sum::<usize>()
    }
}
