pub mod entity;
pub mod layer;
pub mod motion;
pub mod sprite;
