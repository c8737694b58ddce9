use glam::Vec3;

use crate::{
    material::presets,
    scene::{Light, Scene},
    shape::{Checkerboard, Sphere},
};

/// Every feature at once: diffuse, glass and mirror spheres above a checkerboard floor.
pub struct ShowcaseScene;
impl From<ShowcaseScene> for Scene {
    fn from(_: ShowcaseScene) -> Self {
        let mut scene = Scene::default();
        scene.insert_sphere(Sphere::new(Vec3::new(-3., 0., -16.), 2., presets::ivory()));
        scene.insert_sphere(Sphere::new(Vec3::new(-1.0, -1.5, -12.), 2., presets::glass()));
        scene.insert_sphere(Sphere::new(Vec3::new(1.5, -0.5, -18.), 3., presets::red_rubber()));
        scene.insert_sphere(Sphere::new(Vec3::new(7., 5., -18.), 4., presets::mirror()));

        scene.insert_light(Light::new(Vec3::new(-20., 20., 20.), 1.5));
        scene.insert_light(Light::new(Vec3::new(30., 50., -25.), 1.8));
        scene.insert_light(Light::new(Vec3::new(30., 20., 30.), 1.7));

        scene.set_floor(Checkerboard::default());
        scene
    }
}
