//! Integration tests for sprite definition, spawning, instance arenas, and
//! broadcast operations.

use bevy_ecs::prelude::*;

use headstart::components::position::Position;
use headstart::components::sprite::Sprite;
use headstart::components::velocity::Velocity;
use headstart::error::EngineError;
use headstart::game;
use headstart::resources::gameconfig::GameConfig;
use headstart::resources::renderorder::RenderOrder;
use headstart::resources::spritestore::SpriteStore;
use headstart::sprites;

const EPSILON: f32 = 1e-6;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// 800x600 world with a 128x64 sheet ("sheet", 8 frames of 32x32) and a
/// 200x100 static image ("photo").
fn make_world() -> World {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut world = game::init_world(GameConfig::new());
    game::load_image(&mut world, "sheet", "assets/sheet.png", 128, 64);
    game::load_image(&mut world, "photo", "assets/photo.png", 200, 100);
    world
}

#[test]
fn duplicate_animation_name_is_rejected_and_first_survives() {
    let mut world = make_world();
    let player = sprites::define_sprite(&mut world, "sheet", 32, 32, Some("player")).unwrap();
    sprites::add_animation(&mut world, &player, "walk", &[0, 1, 2], 8.0, true).unwrap();

    let err = sprites::add_animation(&mut world, &player, "walk", &[3, 4], 4.0, false);
    assert!(matches!(err, Err(EngineError::DuplicateName { .. })));

    let instance = sprites::spawn(&mut world, &player, 0.0, 0.0, 0.0, 0.0).unwrap();
    instance.play_animation(&mut world, "walk").unwrap();
}

#[test]
fn animation_frames_must_fit_the_sheet() {
    let mut world = make_world();
    let player = sprites::define_sprite(&mut world, "sheet", 32, 32, Some("player")).unwrap();

    // 128x64 at 32x32 is 8 frames, so 8 is one past the end.
    let err = sprites::add_animation(&mut world, &player, "walk", &[0, 8], 8.0, true);
    assert!(matches!(
        err,
        Err(EngineError::FrameOutOfRange { frame: 8, max: 7 })
    ));
}

#[test]
fn sprites_without_frame_geometry_reject_animations() {
    let mut world = make_world();
    let photo = sprites::define_sprite(&mut world, "photo", 0, 0, Some("photo")).unwrap();
    let err = sprites::add_animation(&mut world, &photo, "fade", &[0], 8.0, false);
    assert!(matches!(err, Err(EngineError::InvalidDimensions { .. })));
}

#[test]
fn animations_registered_after_spawning_play_on_existing_instances() {
    let mut world = make_world();
    let player = sprites::define_sprite(&mut world, "sheet", 32, 32, Some("player")).unwrap();
    let a = sprites::spawn(&mut world, &player, 0.0, 0.0, 0.0, 0.0).unwrap();
    let b = sprites::spawn(&mut world, &player, 50.0, 0.0, 0.0, 0.0).unwrap();

    sprites::add_animation(&mut world, &player, "walk", &[0, 1, 2], 8.0, true).unwrap();

    a.play_animation(&mut world, "walk").unwrap();
    sprites::play_animation(&mut world, &player, "walk").unwrap();
    let _ = b;
}

#[test]
fn playing_an_undeclared_animation_fails_before_touching_instances() {
    let mut world = make_world();
    let player = sprites::define_sprite(&mut world, "sheet", 32, 32, Some("player")).unwrap();
    sprites::spawn(&mut world, &player, 0.0, 0.0, 0.0, 0.0).unwrap();

    let err = sprites::play_animation(&mut world, &player, "ghost");
    assert!(matches!(err, Err(EngineError::UnknownAnimation { .. })));
}

#[test]
fn broadcast_skips_killed_instances() {
    let mut world = make_world();
    let player = sprites::define_sprite(&mut world, "sheet", 32, 32, Some("player")).unwrap();
    let a = sprites::spawn(&mut world, &player, 0.0, 0.0, 0.0, 0.0).unwrap();
    let b = sprites::spawn(&mut world, &player, 0.0, 0.0, 0.0, 0.0).unwrap();
    let c = sprites::spawn(&mut world, &player, 0.0, 0.0, 0.0, 0.0).unwrap();

    b.kill(&mut world).unwrap();
    sprites::set_velocity_x(&mut world, &player, 5.0).unwrap();

    assert!(approx_eq(world.get::<Velocity>(a.entity).unwrap().x, 5.0));
    assert!(approx_eq(world.get::<Velocity>(c.entity).unwrap().x, 5.0));
    assert!(world.get::<Velocity>(b.entity).is_none());
}

#[test]
fn broadcast_failures_are_collected_not_fatal() {
    let mut world = make_world();
    let player = sprites::define_sprite(&mut world, "sheet", 32, 32, Some("player")).unwrap();
    let a = sprites::spawn(&mut world, &player, 0.0, 0.0, 0.0, 0.0).unwrap();
    let b = sprites::spawn(&mut world, &player, 0.0, 0.0, 0.0, 0.0).unwrap();
    let c = sprites::spawn(&mut world, &player, 0.0, 0.0, 0.0, 0.0).unwrap();

    // Despawn behind the arena's back so the slot still reads live.
    world.despawn(b.entity);

    let err = sprites::set_velocity_x(&mut world, &player, 5.0);
    match err {
        Err(EngineError::Broadcast { failures }) => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].0, b.index);
            assert_eq!(failures[0].1, EngineError::InstanceDead);
        }
        other => panic!("expected a broadcast failure, got {other:?}"),
    }

    // The survivors were still updated.
    assert!(approx_eq(world.get::<Velocity>(a.entity).unwrap().x, 5.0));
    assert!(approx_eq(world.get::<Velocity>(c.entity).unwrap().x, 5.0));
}

#[test]
fn kill_is_idempotent_and_keeps_sibling_indices() {
    let mut world = make_world();
    let player = sprites::define_sprite(&mut world, "sheet", 32, 32, Some("player")).unwrap();
    let a = sprites::spawn(&mut world, &player, 0.0, 0.0, 0.0, 0.0).unwrap();
    let b = sprites::spawn(&mut world, &player, 0.0, 0.0, 0.0, 0.0).unwrap();
    let c = sprites::spawn(&mut world, &player, 0.0, 0.0, 0.0, 0.0).unwrap();

    b.kill(&mut world).unwrap();
    b.kill(&mut world).unwrap();
    assert!(!b.is_alive(&world));
    assert!(a.is_alive(&world));

    // Indices are stable: c keeps slot 2 after b dies.
    assert_eq!(c.index, 2);
    let store = world.resource::<SpriteStore>();
    assert_eq!(store.get("player").unwrap().live_count(), 2);
}

#[test]
fn operations_on_killed_instances_report_dead() {
    let mut world = make_world();
    let player = sprites::define_sprite(&mut world, "sheet", 32, 32, Some("player")).unwrap();
    let a = sprites::spawn(&mut world, &player, 0.0, 0.0, 0.0, 0.0).unwrap();
    a.kill(&mut world).unwrap();

    assert_eq!(a.set_x(&mut world, 10.0), Err(EngineError::InstanceDead));
    assert_eq!(a.position(&world), Err(EngineError::InstanceDead));
}

#[test]
fn percentage_positions_scale_and_clamp_to_the_world() {
    let mut world = make_world();
    let photo = sprites::define_sprite(&mut world, "photo", 0, 0, Some("photo")).unwrap();

    // 50% of 800 is 400, inside the clamp for a 200-wide object.
    let a = sprites::spawn(&mut world, &photo, "50", "0", 0.0, 0.0).unwrap();
    let (x, _) = a.position(&world).unwrap();
    assert!(approx_eq(x, 400.0));

    // 100% clamps so the far edge stays inside: 800 - 200.
    let b = sprites::spawn(&mut world, &photo, "100", "0", 0.0, 0.0).unwrap();
    let (x, _) = b.position(&world).unwrap();
    assert!(approx_eq(x, 600.0));

    // Garbage resolves to 0 rather than failing the spawn.
    let c = sprites::spawn(&mut world, &photo, "wat", "0", 0.0, 0.0).unwrap();
    let (x, _) = c.position(&world).unwrap();
    assert!(approx_eq(x, 0.0));
}

#[test]
fn zero_size_spawns_use_natural_image_dimensions() {
    let mut world = make_world();
    let photo = sprites::define_sprite(&mut world, "photo", 0, 0, Some("photo")).unwrap();
    let a = sprites::spawn(&mut world, &photo, 0.0, 0.0, 0.0, 0.0).unwrap();
    let sprite = world.get::<Sprite>(a.entity).unwrap();
    assert!(approx_eq(sprite.width, 200.0));
    assert!(approx_eq(sprite.height, 100.0));

    // Textual zeroes mean "natural size" too, not a 0% width.
    let b = sprites::spawn(&mut world, &photo, 0.0, 0.0, "0", "0").unwrap();
    let sprite = world.get::<Sprite>(b.entity).unwrap();
    assert!(approx_eq(sprite.width, 200.0));
    assert!(approx_eq(sprite.height, 100.0));

    // Percentage sizes scale against the world without clamping.
    let c = sprites::spawn(&mut world, &photo, 0.0, 0.0, "50", "200").unwrap();
    let sprite = world.get::<Sprite>(c.entity).unwrap();
    assert!(approx_eq(sprite.width, 400.0));
    assert!(approx_eq(sprite.height, 1200.0));
}

#[test]
fn generated_sprite_names_count_up() {
    let mut world = make_world();
    let a = sprites::define_sprite(&mut world, "sheet", 32, 32, None).unwrap();
    let b = sprites::define_sprite(&mut world, "sheet", 32, 32, None).unwrap();
    assert_eq!(a.name(), "Sprite1");
    assert_eq!(b.name(), "Sprite2");

    let err = sprites::define_sprite(&mut world, "sheet", 32, 32, Some("Sprite1"));
    assert!(matches!(err, Err(EngineError::DuplicateName { .. })));
}

#[test]
fn swap_exchanges_draw_depths_only() {
    let mut world = make_world();
    let a = sprites::define_sprite(&mut world, "sheet", 32, 32, Some("a")).unwrap();
    let b = sprites::define_sprite(&mut world, "sheet", 32, 32, Some("b")).unwrap();
    let c = sprites::define_sprite(&mut world, "sheet", 32, 32, Some("c")).unwrap();

    game::swap(&mut world, &a, &c).unwrap();

    let order = world.resource::<RenderOrder>();
    assert_eq!(order.index_of("a"), Some(2));
    assert_eq!(order.index_of("b"), Some(1));
    assert_eq!(order.index_of("c"), Some(0));
    let _ = b;
}

#[test]
fn stop_shows_the_configured_stop_frame() {
    let mut world = make_world();
    let player = sprites::define_sprite(&mut world, "sheet", 32, 32, Some("player")).unwrap();
    sprites::add_animation(&mut world, &player, "walk", &[0, 1, 2], 8.0, true).unwrap();
    let a = sprites::spawn(&mut world, &player, 0.0, 0.0, 0.0, 0.0).unwrap();

    // Frame 5 of a 4-column sheet sits at column 1, row 1.
    a.set_stop_frame(&mut world, 5).unwrap();
    a.play_animation(&mut world, "walk").unwrap();
    a.stop(&mut world).unwrap();

    let sprite = world.get::<Sprite>(a.entity).unwrap();
    assert_eq!(sprite.offset, (32.0, 32.0));

    let err = a.set_stop_frame(&mut world, 8);
    assert!(matches!(err, Err(EngineError::FrameOutOfRange { .. })));
}

#[test]
fn discarding_a_spec_despawns_instances_and_clears_draw_order() {
    let mut world = make_world();
    let player = sprites::define_sprite(&mut world, "sheet", 32, 32, Some("player")).unwrap();
    let a = sprites::spawn(&mut world, &player, 0.0, 0.0, 0.0, 0.0).unwrap();

    sprites::discard_sprite(&mut world, &player).unwrap();

    assert!(world.get::<Position>(a.entity).is_none());
    assert_eq!(world.resource::<RenderOrder>().index_of("player"), None);
    assert!(matches!(
        world.resource::<SpriteStore>().get("player"),
        Err(EngineError::UnknownSprite { .. })
    ));
}
