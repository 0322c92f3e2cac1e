use wasm_bindgen::prelude::*;
use lane_engine::*;

mod game;
use game::NascarFollow;

lane_web::export_game!(NascarFollow, "nascar-follow");
