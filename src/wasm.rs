use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::api::find_minimum_cover_with;
use crate::config::SearchConfig;
use crate::solution::Solution;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WasmCover {
    terms: Vec<String>,
    total_letters: u32,
    word_count: u32,
    nodes: u64,
    pruned: u64,
}

fn strings_from_js(value: JsValue, what: &str) -> Result<Vec<String>, JsValue> {
    from_value(value)
        .map_err(|e| JsValue::from_str(&format!("{what} must be an array of strings: {e}")))
}

fn summary_from_solution(sol: Solution) -> WasmCover {
    WasmCover {
        total_letters: sol.cost.letters,
        word_count: sol.cost.words,
        nodes: sol.stats.nodes,
        pruned: sol.stats.pruned,
        terms: sol.terms,
    }
}

/// WebAssembly entry point: shortest word sequence covering every key.
/// `config` may be `undefined` for the defaults.
#[wasm_bindgen]
pub fn find_cover(keys: JsValue, words: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let keys = strings_from_js(keys, "Keys")?;
    let words = strings_from_js(words, "Words")?;
    let config: SearchConfig = if config.is_undefined() || config.is_null() {
        SearchConfig::default()
    } else {
        from_value(config).map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?
    };

    let sol = find_minimum_cover_with(&keys, &words, &config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_value(&summary_from_solution(sol))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}
