mod decompose;
mod dimension;
mod dynamic;
mod mat2;
mod mat3;
mod mat4;

pub use decompose::*;
pub use dimension::*;
pub use dynamic::*;
pub use mat2::*;
pub use mat3::*;
pub use mat4::*;

pub type Mat2f = Mat2<f32>;
pub type Mat3f = Mat3<f32>;
pub type Mat4f = Mat4<f32>;
pub type Mat2d = Mat2<f64>;
pub type Mat3d = Mat3<f64>;
pub type Mat4d = Mat4<f64>;
