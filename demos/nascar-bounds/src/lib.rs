use wasm_bindgen::prelude::*;
use lane_engine::*;

mod game;
use game::NascarBounds;

lane_web::export_game!(NascarBounds, "nascar-bounds");
