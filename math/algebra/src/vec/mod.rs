mod dimension;
mod vec2;
mod vec2i;
mod vec3;
mod vec4;

pub use dimension::*;
pub use vec2::*;
pub use vec2i::*;
pub use vec3::*;
pub use vec4::*;

pub type Vec2f = Vec2<f32>;
pub type Vec3f = Vec3<f32>;
pub type Vec4f = Vec4<f32>;
pub type Vec2d = Vec2<f64>;
pub type Vec3d = Vec3<f64>;
pub type Vec4d = Vec4<f64>;
