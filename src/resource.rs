//! The resource module encapsulates domain entities for use with Bevy.

use std::ops::{Deref, DerefMut};

use bevy::ecs::system::Resource;

use crate::domain;

#[derive(Resource)]
pub struct LightRes(domain::LightSource);

impl Deref for LightRes {
    type Target = domain::LightSource;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LightRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<domain::LightSource> for LightRes {
    fn from(value: domain::LightSource) -> Self {
        Self(value)
    }
}

#[derive(Resource)]
pub struct SceneRes(domain::ObstacleRegistry);

impl Deref for SceneRes {
    type Target = domain::ObstacleRegistry;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SceneRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<domain::ObstacleRegistry> for SceneRes {
    fn from(value: domain::ObstacleRegistry) -> Self {
        Self(value)
    }
}
