use wasm_bindgen::prelude::*;
use ledge_engine::*;

mod game;
mod levels;

use game::Cliffside;

ledge_web::export_game!(Cliffside, "cliffside");
