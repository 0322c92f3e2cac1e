use crate::components::entity::Entity;
use crate::components::layer::RenderLayer;
use crate::core::scene::Scene;
use crate::renderer::camera::Camera2D;
use crate::renderer::instance::{RenderBuffer, RenderInstance};
use crate::renderer::traits::FrameSnapshot;

fn instance_for(entity: &Entity) -> Option<RenderInstance> {
    if !entity.active {
        return None;
    }
    let sprite = entity.sprite.as_ref()?;
    Some(RenderInstance {
        x: entity.pos.x,
        y: entity.pos.y,
        width: entity.size.x,
        height: entity.size.y,
        sprite: sprite.handle.0 as f32,
        alpha: sprite.alpha,
        layer: entity.layer.as_u8() as f32,
        _pad: 0.0,
    })
}

/// Build the sprite list in draw order: road, player, traffic.
/// Within a layer entities keep spawn order. Inactive and sprite-less
/// entities are skipped; anything beyond `max_instances` is dropped.
pub fn build_render_buffer(scene: &Scene, buffer: &mut RenderBuffer, max_instances: usize) {
    buffer.clear();
    for layer in RenderLayer::SCENE {
        for instance in scene.iter_layer(layer).filter_map(instance_for) {
            if buffer.instances.len() >= max_instances {
                log::warn!("render buffer full ({} instances), dropping sprites", max_instances);
                return;
            }
            buffer.push(instance);
        }
    }
}

/// Refresh the snapshot from the simulation: views from the camera, sprites
/// from the scene. Text is left empty for the game's render pass.
pub fn build_frame(scene: &Scene, camera: &Camera2D, frame: &mut FrameSnapshot, max_instances: usize) {
    frame.clear();
    frame.scene_view = camera.view();
    frame.overlay_view = camera.overlay_view();
    build_render_buffer(scene, &mut frame.sprites, max_instances);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::sprite::{SpriteComponent, SpriteHandle};
    use crate::renderer::camera::ViewRect;
    use glam::Vec2;

    fn sprite_entity(id: u32, layer: RenderLayer) -> Entity {
        Entity::new(EntityId(id))
            .with_layer(layer)
            .with_size(Vec2::new(64.0, 100.0))
            .with_sprite(SpriteComponent::new(SpriteHandle(id)))
    }

    #[test]
    fn buffer_is_ordered_road_player_traffic() {
        let mut scene = Scene::new();
        scene.spawn(sprite_entity(1, RenderLayer::Traffic));
        scene.spawn(sprite_entity(2, RenderLayer::Player));
        scene.spawn(sprite_entity(3, RenderLayer::Road));
        scene.spawn(sprite_entity(4, RenderLayer::Road));

        let mut buffer = RenderBuffer::new();
        build_render_buffer(&scene, &mut buffer, 16);

        let sprites: Vec<f32> = buffer.instances.iter().map(|i| i.sprite).collect();
        assert_eq!(sprites, vec![3.0, 4.0, 2.0, 1.0]);
        assert_eq!(buffer.instances[0].width, 64.0);
    }

    #[test]
    fn inactive_and_invisible_entities_are_skipped() {
        let mut scene = Scene::new();
        let mut hidden = sprite_entity(1, RenderLayer::Road);
        hidden.active = false;
        scene.spawn(hidden);
        scene.spawn(Entity::new(EntityId(2)).with_layer(RenderLayer::Road));

        let mut buffer = RenderBuffer::new();
        build_render_buffer(&scene, &mut buffer, 16);
        assert_eq!(buffer.instance_count(), 0);
    }

    #[test]
    fn buffer_respects_capacity() {
        let mut scene = Scene::new();
        for id in 0..10 {
            scene.spawn(sprite_entity(id, RenderLayer::Road));
        }
        let mut buffer = RenderBuffer::new();
        build_render_buffer(&scene, &mut buffer, 4);
        assert_eq!(buffer.instance_count(), 4);
    }

    #[test]
    fn frame_takes_views_from_camera() {
        let scene = Scene::new();
        let mut camera = Camera2D::follow(1000.0, 800.0, 1.0);
        camera.track(Vec2::new(600.0, 400.0));
        let mut frame = FrameSnapshot::new(1000.0, 800.0);

        build_frame(&scene, &camera, &mut frame, 16);

        assert_eq!(frame.scene_view, ViewRect::new(100.0, 1100.0, 0.0, 800.0));
        assert_eq!(frame.overlay_view, ViewRect::identity(1000.0, 800.0));
    }
}
