use glam::Vec3;

use crate::{
    material::presets,
    scene::{Light, Scene},
    shape::Sphere,
};

/// Two Phong spheres side by side, lit by three lights. Nothing reflects or refracts.
pub struct TwoSpheresScene;
impl From<TwoSpheresScene> for Scene {
    fn from(_: TwoSpheresScene) -> Self {
        let mut scene = Scene::default();
        scene.insert_sphere(Sphere::new(Vec3::new(-3., 0., -16.), 2., presets::pewter()));
        scene.insert_sphere(Sphere::new(Vec3::new(3., 0., -16.), 2., presets::brick()));

        scene.insert_light(Light::new(Vec3::new(-20., 20., 20.), 1.5));
        scene.insert_light(Light::new(Vec3::new(30., 50., -25.), 1.8));
        scene.insert_light(Light::new(Vec3::new(30., 20., 30.), 1.7));
        scene
    }
}
