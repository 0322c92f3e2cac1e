pub mod drive;
pub mod motion;
pub mod render;
pub mod text;
