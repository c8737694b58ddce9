mod showcase;
mod two_spheres;

pub use showcase::ShowcaseScene;
pub use two_spheres::TwoSpheresScene;
