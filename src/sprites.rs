//! Sprite specs, instances, and broadcast operations.
//!
//! A sprite spec is declared once with [`define_sprite`] (image key plus
//! frame geometry) and animations are declared against it with
//! [`add_animation`]. Every [`spawn`] registers a new instance entity in the
//! spec's arena; the spec-level operation forms fan out to every live
//! instance in creation order, while the [`Instance`] handle targets one.
//!
//! # Broadcast failure policy
//!
//! Spec-level validation (unknown animation, bad stop frame) fails before
//! any instance is touched. Once the fan-out loop starts it never aborts:
//! per-instance failures are collected and reported after the loop as one
//! [`EngineError::Broadcast`], so a bad instance cannot block its siblings.

use std::sync::Arc;

use bevy_ecs::prelude::{Entity, World};

use crate::components::opacity::Opacity;
use crate::components::playback::Playback;
use crate::components::position::Position;
use crate::components::rotation::Rotation;
use crate::components::sprite::Sprite;
use crate::components::velocity::Velocity;
use crate::coords::{self, Coord};
use crate::error::EngineError;
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::imagestore::ImageStore;
use crate::resources::renderorder::RenderOrder;
use crate::resources::spritestore::{InstanceSlot, SpriteSpec, SpriteStore};
use crate::resources::worldbounds::WorldBounds;

/// Handle to a defined sprite spec.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpriteKey(Arc<str>);

impl SpriteKey {
    pub fn name(&self) -> &str {
        &self.0
    }

    pub(crate) fn arc(&self) -> Arc<str> {
        Arc::clone(&self.0)
    }
}

/// Handle to one spawned instance of a spec.
///
/// `index` is the instance's stable slot in the owning spec's arena; it
/// never changes, even after siblings are killed.
#[derive(Debug, Clone)]
pub struct Instance {
    pub entity: Entity,
    pub index: usize,
    spec: SpriteKey,
}

/// Frames in a sheet of `image_w`×`image_h` pixels cut into
/// `frame_w`×`frame_h` frames. Partial frames at the edges do not count.
pub fn frames_in_sheet(image_w: u32, image_h: u32, frame_w: u32, frame_h: u32) -> usize {
    if frame_w == 0 || frame_h == 0 {
        return 0;
    }
    ((image_w / frame_w) * (image_h / frame_h)) as usize
}

fn total_frames(spec: &SpriteSpec, images: &ImageStore) -> Result<usize, EngineError> {
    if spec.frame_width == 0 || spec.frame_height == 0 {
        return Err(EngineError::InvalidDimensions {
            sprite: spec.name.to_string(),
        });
    }
    let (w, h) = images
        .dimensions(&spec.image)
        .ok_or_else(|| EngineError::UnknownImage {
            key: spec.image.to_string(),
        })?;
    Ok(frames_in_sheet(w, h, spec.frame_width, spec.frame_height))
}

/// Top-left pixel of sheet frame `frame`. Frames are numbered left to
/// right, top to bottom. Specs without frame geometry always map to (0, 0).
pub(crate) fn frame_offset(
    spec: &SpriteSpec,
    images: &ImageStore,
    frame: usize,
) -> Result<(f32, f32), EngineError> {
    if spec.frame_width == 0 || spec.frame_height == 0 {
        return Ok((0.0, 0.0));
    }
    let (img_w, _) = images
        .dimensions(&spec.image)
        .ok_or_else(|| EngineError::UnknownImage {
            key: spec.image.to_string(),
        })?;
    let columns = (img_w / spec.frame_width).max(1) as usize;
    let col = frame % columns;
    let row = frame / columns;
    Ok((
        (col as u32 * spec.frame_width) as f32,
        (row as u32 * spec.frame_height) as f32,
    ))
}

/// Define a sprite spec over a loaded image.
///
/// Frame width/height of 0 mean the sprite is a single static image with
/// animations disabled. The name is generated (`Sprite{n}`) when absent;
/// explicit names must be unique. The new spec draws on top of everything
/// defined before it.
pub fn define_sprite(
    world: &mut World,
    image: &str,
    frame_width: u32,
    frame_height: u32,
    name: Option<&str>,
) -> Result<SpriteKey, EngineError> {
    let name: Arc<str> = {
        let mut store = world.resource_mut::<SpriteStore>();
        match name {
            Some(n) => {
                if store.contains(n) {
                    return Err(EngineError::DuplicateName { name: n.to_owned() });
                }
                Arc::from(n)
            }
            None => Arc::from(store.generate_name("Sprite")),
        }
    };
    world.resource_mut::<SpriteStore>().insert(SpriteSpec {
        name: Arc::clone(&name),
        image: Arc::from(image),
        frame_width,
        frame_height,
        animations: Vec::new(),
        instances: Vec::new(),
    });
    world.resource_mut::<RenderOrder>().push(Arc::clone(&name));
    Ok(SpriteKey(name))
}

/// Discard a spec: despawns every live instance, drops its animations, and
/// removes it from the draw order. Instance handles into the spec are dead
/// afterwards.
pub fn discard_sprite(world: &mut World, sprite: &SpriteKey) -> Result<(), EngineError> {
    let slots = world.resource_mut::<SpriteStore>().remove(sprite.name())?;
    for slot in slots.iter().filter(|s| s.alive) {
        world.despawn(slot.entity);
    }
    world
        .resource_mut::<AnimationStore>()
        .remove_spec(sprite.name());
    world.resource_mut::<RenderOrder>().remove(sprite.name());
    Ok(())
}

/// Declare an animation on a spec and return its name.
///
/// Fails with `DuplicateName` if the name was declared before (the first
/// declaration stays intact), `InvalidDimensions` if the spec has no frame
/// geometry, and `FrameOutOfRange` if any frame lies outside the sheet.
/// Instances spawned before the declaration can play it immediately.
pub fn add_animation(
    world: &mut World,
    sprite: &SpriteKey,
    name: &str,
    frames: &[usize],
    fps: f32,
    looped: bool,
) -> Result<Arc<str>, EngineError> {
    debug_assert!(fps > 0.0, "animation frame rate must be positive");
    {
        let store = world.resource::<SpriteStore>();
        let images = world.resource::<ImageStore>();
        let spec = store.get(sprite.name())?;
        if spec.has_animation(name) {
            return Err(EngineError::DuplicateName {
                name: name.to_owned(),
            });
        }
        let total = total_frames(spec, images)?;
        for &frame in frames {
            if frame >= total {
                return Err(EngineError::FrameOutOfRange {
                    frame,
                    max: total.saturating_sub(1),
                });
            }
        }
    }
    let name: Arc<str> = Arc::from(name);
    world
        .resource_mut::<SpriteStore>()
        .get_mut(sprite.name())?
        .animations
        .push(Arc::clone(&name));
    world.resource_mut::<AnimationStore>().insert(
        sprite.arc(),
        Arc::clone(&name),
        AnimationResource {
            frames: frames.to_vec(),
            fps,
            looped,
        },
    );
    Ok(name)
}

/// A size input of 0, numeric or textual, means "use the image's natural
/// dimension".
fn is_zero(coord: &Coord) -> bool {
    match coord {
        Coord::Px(v) => *v == 0.0,
        Coord::Pct(p) => *p == 0.0,
        Coord::Raw(s) => matches!(s.trim().parse::<f32>(), Ok(v) if v == 0.0),
    }
}

/// Spawn an instance of a spec.
///
/// Width and height fall back to the image's natural dimensions when given
/// as 0, and are resolved before x and y so that position clamping can use
/// the resolved extents. All four accept percentages (see
/// [`crate::coords`]).
pub fn spawn(
    world: &mut World,
    sprite: &SpriteKey,
    x: impl Into<Coord>,
    y: impl Into<Coord>,
    width: impl Into<Coord>,
    height: impl Into<Coord>,
) -> Result<Instance, EngineError> {
    let (x, y, width, height) = (x.into(), y.into(), width.into(), height.into());
    let bounds = *world.resource::<WorldBounds>();
    let (natural_w, natural_h, spec_name) = {
        let store = world.resource::<SpriteStore>();
        let images = world.resource::<ImageStore>();
        let spec = store.get(sprite.name())?;
        let (w, h) = images
            .dimensions(&spec.image)
            .ok_or_else(|| EngineError::UnknownImage {
                key: spec.image.to_string(),
            })?;
        (w as f32, h as f32, Arc::clone(&spec.name))
    };

    let w = if is_zero(&width) {
        natural_w
    } else {
        coords::resolve_size(width, bounds.width)
    };
    let h = if is_zero(&height) {
        natural_h
    } else {
        coords::resolve_size(height, bounds.height)
    };
    let x = coords::resolve_position(x, bounds.width, w);
    let y = coords::resolve_position(y, bounds.height, h);

    let entity = world
        .spawn((
            Position::new(x, y),
            Velocity::default(),
            Rotation::default(),
            Opacity::default(),
            Sprite::new(spec_name, w, h),
            Playback::default(),
        ))
        .id();

    let mut store = world.resource_mut::<SpriteStore>();
    let spec = store.get_mut(sprite.name())?;
    spec.instances.push(InstanceSlot {
        entity,
        alive: true,
    });
    Ok(Instance {
        entity,
        index: spec.instances.len() - 1,
        spec: sprite.clone(),
    })
}

impl Instance {
    pub fn spec(&self) -> &SpriteKey {
        &self.spec
    }

    /// Whether this instance's arena slot is still live.
    pub fn is_alive(&self, world: &World) -> bool {
        world
            .resource::<SpriteStore>()
            .get(self.spec.name())
            .ok()
            .and_then(|spec| spec.instances.get(self.index))
            .is_some_and(|slot| slot.alive)
    }

    pub fn set_velocity_x(&self, world: &mut World, vx: f32) -> Result<(), EngineError> {
        let mut vel = world
            .get_mut::<Velocity>(self.entity)
            .ok_or(EngineError::InstanceDead)?;
        vel.x = vx;
        Ok(())
    }

    pub fn set_velocity_y(&self, world: &mut World, vy: f32) -> Result<(), EngineError> {
        let mut vel = world
            .get_mut::<Velocity>(self.entity)
            .ok_or(EngineError::InstanceDead)?;
        vel.y = vy;
        Ok(())
    }

    pub fn set_x(&self, world: &mut World, x: f32) -> Result<(), EngineError> {
        let mut pos = world
            .get_mut::<Position>(self.entity)
            .ok_or(EngineError::InstanceDead)?;
        pos.x = x;
        Ok(())
    }

    pub fn set_y(&self, world: &mut World, y: f32) -> Result<(), EngineError> {
        let mut pos = world
            .get_mut::<Position>(self.entity)
            .ok_or(EngineError::InstanceDead)?;
        pos.y = y;
        Ok(())
    }

    /// Current position in pixels.
    pub fn position(&self, world: &World) -> Result<(f32, f32), EngineError> {
        world
            .get::<Position>(self.entity)
            .map(|p| (p.x, p.y))
            .ok_or(EngineError::InstanceDead)
    }

    pub fn set_alpha(&self, world: &mut World, alpha: f32) -> Result<(), EngineError> {
        let mut opacity = world
            .get_mut::<Opacity>(self.entity)
            .ok_or(EngineError::InstanceDead)?;
        opacity.alpha = alpha;
        Ok(())
    }

    pub fn set_angle(&self, world: &mut World, degrees: f32) -> Result<(), EngineError> {
        let mut rotation = world
            .get_mut::<Rotation>(self.entity)
            .ok_or(EngineError::InstanceDead)?;
        rotation.degrees = degrees;
        Ok(())
    }

    pub fn set_visible(&self, world: &mut World, visible: bool) -> Result<(), EngineError> {
        let mut sprite = world
            .get_mut::<Sprite>(self.entity)
            .ok_or(EngineError::InstanceDead)?;
        sprite.visible = visible;
        Ok(())
    }

    pub fn set_width(&self, world: &mut World, width: f32) -> Result<(), EngineError> {
        let mut sprite = world
            .get_mut::<Sprite>(self.entity)
            .ok_or(EngineError::InstanceDead)?;
        sprite.width = width;
        Ok(())
    }

    pub fn set_height(&self, world: &mut World, height: f32) -> Result<(), EngineError> {
        let mut sprite = world
            .get_mut::<Sprite>(self.entity)
            .ok_or(EngineError::InstanceDead)?;
        sprite.height = height;
        Ok(())
    }

    /// Play an animation declared on the owning spec.
    pub fn play_animation(&self, world: &mut World, name: &str) -> Result<(), EngineError> {
        {
            let store = world.resource::<SpriteStore>();
            let spec = store.get(self.spec.name())?;
            if !spec.has_animation(name) {
                return Err(EngineError::UnknownAnimation {
                    name: name.to_owned(),
                });
            }
        }
        let mut playback = world
            .get_mut::<Playback>(self.entity)
            .ok_or(EngineError::InstanceDead)?;
        playback.start(Arc::from(name));
        Ok(())
    }

    /// Set the sheet frame shown while stopped.
    pub fn set_stop_frame(&self, world: &mut World, frame: usize) -> Result<(), EngineError> {
        {
            let store = world.resource::<SpriteStore>();
            let images = world.resource::<ImageStore>();
            let spec = store.get(self.spec.name())?;
            let total = total_frames(spec, images)?;
            if frame >= total {
                return Err(EngineError::FrameOutOfRange {
                    frame,
                    max: total.saturating_sub(1),
                });
            }
        }
        let mut playback = world
            .get_mut::<Playback>(self.entity)
            .ok_or(EngineError::InstanceDead)?;
        playback.stop_frame = frame;
        Ok(())
    }

    /// Halt the current animation and show the stop frame.
    pub fn stop(&self, world: &mut World) -> Result<(), EngineError> {
        let stop_frame = world
            .get::<Playback>(self.entity)
            .ok_or(EngineError::InstanceDead)?
            .stop_frame;
        let offset = {
            let store = world.resource::<SpriteStore>();
            let images = world.resource::<ImageStore>();
            let spec = store.get(self.spec.name())?;
            frame_offset(spec, images, stop_frame)?
        };
        let mut playback = world
            .get_mut::<Playback>(self.entity)
            .ok_or(EngineError::InstanceDead)?;
        playback.halt();
        let mut sprite = world
            .get_mut::<Sprite>(self.entity)
            .ok_or(EngineError::InstanceDead)?;
        sprite.offset = offset;
        Ok(())
    }

    /// Kill the instance: despawn its entity and mark the arena slot dead,
    /// excluding it from future broadcasts. Killing twice is a no-op.
    pub fn kill(&self, world: &mut World) -> Result<(), EngineError> {
        let entity = {
            let mut store = world.resource_mut::<SpriteStore>();
            let spec = store.get_mut(self.spec.name())?;
            let Some(slot) = spec.instances.get_mut(self.index) else {
                return Ok(());
            };
            if !slot.alive {
                return Ok(());
            }
            slot.alive = false;
            slot.entity
        };
        world.despawn(entity);
        Ok(())
    }
}

fn live_entities(
    world: &World,
    sprite: &SpriteKey,
) -> Result<Vec<(usize, Entity)>, EngineError> {
    Ok(world
        .resource::<SpriteStore>()
        .get(sprite.name())?
        .live_instances()
        .collect())
}

/// Apply `op` to every live instance of a spec in creation order,
/// collecting per-instance failures instead of aborting.
fn broadcast(
    world: &mut World,
    sprite: &SpriteKey,
    mut op: impl FnMut(&mut World, Entity) -> Result<(), EngineError>,
) -> Result<(), EngineError> {
    let slots = live_entities(world, sprite)?;
    let mut failures = Vec::new();
    for (index, entity) in slots {
        if let Err(err) = op(world, entity) {
            failures.push((index, err));
        }
    }
    if failures.is_empty() {
        Ok(())
    } else {
        Err(EngineError::Broadcast { failures })
    }
}

/// Set the x velocity of every live instance.
pub fn set_velocity_x(world: &mut World, sprite: &SpriteKey, vx: f32) -> Result<(), EngineError> {
    broadcast(world, sprite, |world, entity| {
        let mut vel = world
            .get_mut::<Velocity>(entity)
            .ok_or(EngineError::InstanceDead)?;
        vel.x = vx;
        Ok(())
    })
}

/// Set the y velocity of every live instance.
pub fn set_velocity_y(world: &mut World, sprite: &SpriteKey, vy: f32) -> Result<(), EngineError> {
    broadcast(world, sprite, |world, entity| {
        let mut vel = world
            .get_mut::<Velocity>(entity)
            .ok_or(EngineError::InstanceDead)?;
        vel.y = vy;
        Ok(())
    })
}

/// Set the x position of every live instance.
pub fn set_x(world: &mut World, sprite: &SpriteKey, x: f32) -> Result<(), EngineError> {
    broadcast(world, sprite, |world, entity| {
        let mut pos = world
            .get_mut::<Position>(entity)
            .ok_or(EngineError::InstanceDead)?;
        pos.x = x;
        Ok(())
    })
}

/// Set the y position of every live instance.
pub fn set_y(world: &mut World, sprite: &SpriteKey, y: f32) -> Result<(), EngineError> {
    broadcast(world, sprite, |world, entity| {
        let mut pos = world
            .get_mut::<Position>(entity)
            .ok_or(EngineError::InstanceDead)?;
        pos.y = y;
        Ok(())
    })
}

/// Set the alpha of every live instance.
pub fn set_alpha(world: &mut World, sprite: &SpriteKey, alpha: f32) -> Result<(), EngineError> {
    broadcast(world, sprite, |world, entity| {
        let mut opacity = world
            .get_mut::<Opacity>(entity)
            .ok_or(EngineError::InstanceDead)?;
        opacity.alpha = alpha;
        Ok(())
    })
}

/// Set the angle of every live instance.
pub fn set_angle(world: &mut World, sprite: &SpriteKey, degrees: f32) -> Result<(), EngineError> {
    broadcast(world, sprite, |world, entity| {
        let mut rotation = world
            .get_mut::<Rotation>(entity)
            .ok_or(EngineError::InstanceDead)?;
        rotation.degrees = degrees;
        Ok(())
    })
}

/// Show or hide every live instance.
pub fn set_visible(world: &mut World, sprite: &SpriteKey, visible: bool) -> Result<(), EngineError> {
    broadcast(world, sprite, |world, entity| {
        let mut sprite = world
            .get_mut::<Sprite>(entity)
            .ok_or(EngineError::InstanceDead)?;
        sprite.visible = visible;
        Ok(())
    })
}

/// Play a declared animation on every live instance.
///
/// Fails with `UnknownAnimation` before touching any instance if the name
/// was never declared on the spec.
pub fn play_animation(world: &mut World, sprite: &SpriteKey, name: &str) -> Result<(), EngineError> {
    {
        let store = world.resource::<SpriteStore>();
        let spec = store.get(sprite.name())?;
        if !spec.has_animation(name) {
            return Err(EngineError::UnknownAnimation {
                name: name.to_owned(),
            });
        }
    }
    let name: Arc<str> = Arc::from(name);
    broadcast(world, sprite, move |world, entity| {
        let mut playback = world
            .get_mut::<Playback>(entity)
            .ok_or(EngineError::InstanceDead)?;
        playback.start(Arc::clone(&name));
        Ok(())
    })
}

/// Set the stop frame of every live instance. The frame is validated once
/// against the spec before the fan-out.
pub fn set_stop_frame(world: &mut World, sprite: &SpriteKey, frame: usize) -> Result<(), EngineError> {
    {
        let store = world.resource::<SpriteStore>();
        let images = world.resource::<ImageStore>();
        let spec = store.get(sprite.name())?;
        let total = total_frames(spec, images)?;
        if frame >= total {
            return Err(EngineError::FrameOutOfRange {
                frame,
                max: total.saturating_sub(1),
            });
        }
    }
    broadcast(world, sprite, |world, entity| {
        let mut playback = world
            .get_mut::<Playback>(entity)
            .ok_or(EngineError::InstanceDead)?;
        playback.stop_frame = frame;
        Ok(())
    })
}

/// Halt animation on every live instance and show each one's stop frame.
pub fn stop(world: &mut World, sprite: &SpriteKey) -> Result<(), EngineError> {
    let geometry = {
        let store = world.resource::<SpriteStore>();
        let images = world.resource::<ImageStore>();
        let spec = store.get(sprite.name())?;
        if spec.frame_width == 0 || spec.frame_height == 0 {
            None
        } else {
            let (img_w, _) =
                images
                    .dimensions(&spec.image)
                    .ok_or_else(|| EngineError::UnknownImage {
                        key: spec.image.to_string(),
                    })?;
            let columns = (img_w / spec.frame_width).max(1) as usize;
            Some((spec.frame_width, spec.frame_height, columns))
        }
    };
    broadcast(world, sprite, move |world, entity| {
        let stop_frame = world
            .get::<Playback>(entity)
            .ok_or(EngineError::InstanceDead)?
            .stop_frame;
        let offset = match geometry {
            Some((fw, fh, columns)) => (
                ((stop_frame % columns) as u32 * fw) as f32,
                ((stop_frame / columns) as u32 * fh) as f32,
            ),
            None => (0.0, 0.0),
        };
        let mut playback = world
            .get_mut::<Playback>(entity)
            .ok_or(EngineError::InstanceDead)?;
        playback.halt();
        let mut sprite = world
            .get_mut::<Sprite>(entity)
            .ok_or(EngineError::InstanceDead)?;
        sprite.offset = offset;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_in_sheet_floors_partial_frames() {
        assert_eq!(frames_in_sheet(100, 40, 32, 32), 3);
        assert_eq!(frames_in_sheet(128, 64, 32, 32), 8);
        assert_eq!(frames_in_sheet(128, 64, 0, 32), 0);
    }
}
