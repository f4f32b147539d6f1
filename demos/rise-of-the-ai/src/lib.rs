use wasm_bindgen::prelude::*;
use ledge_engine::*;

mod game;
use game::RiseOfTheAi;

ledge_web::export_game!(RiseOfTheAi, "rise-of-the-ai");
