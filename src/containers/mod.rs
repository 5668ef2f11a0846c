pub mod compression;
pub mod graphics_got;
