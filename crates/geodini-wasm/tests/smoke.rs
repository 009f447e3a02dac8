use wasm_bindgen_test::*;

use geodini_wasm::{rank_response, version};
use serde_json::Value;

const RANKED: &str = r#"{
    "results": [
        {"id": "a", "name": "London", "subtype": "locality", "country": "CA",
         "hierarchy": ["Ontario", "Canada"], "geometry": null},
        {"id": "b", "name": "London", "subtype": "locality", "country": "GB",
         "hierarchy": ["England", "United Kingdom"],
         "geometry": {"type": "Point", "coordinates": [-0.1276, 51.5072]}},
        {"id": "c", "name": "London", "subtype": "locality", "country": "US",
         "hierarchy": ["Kentucky", "United States"], "geometry": null}
    ],
    "time_taken": 0.42,
    "most_probable": {"id": "b"},
    "next_probable": [{"id": "c"}]
}"#;

#[wasm_bindgen_test]
fn reports_crate_version() {
    assert_eq!(version(), env!("CARGO_PKG_VERSION"));
}

#[wasm_bindgen_test]
fn ranks_preferred_then_next_probable() {
    #[cfg(target_arch = "wasm32")]
    geodini_wasm::start();

    let rows: Value = serde_wasm_bindgen::from_value(rank_response(RANKED).unwrap()).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);

    let order: Vec<u64> = rows
        .iter()
        .map(|r| r["original_index"].as_u64().unwrap())
        .collect();
    assert_eq!(order, [1, 2, 0]);
    assert_eq!(rows[0]["badge"]["kind"], "preferred");
    assert_eq!(rows[1]["badge"]["kind"], "next_probable");
    assert_eq!(rows[1]["badge"]["rank"], 1);
    assert_eq!(rows[2]["badge"]["kind"], "none");
}

#[wasm_bindgen_test]
fn rejects_malformed_json() {
    assert!(rank_response("{not json").is_err());
}
