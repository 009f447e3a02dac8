// crates/geodini-core/src/common.rs
//! Raw wire types, exactly as the `/search` endpoint sends them.
//!
//! Nothing here is exposed through the public model; [`crate::model::convert`]
//! turns these into [`SearchResponse`](crate::model::SearchResponse).
use serde::Deserialize;
use serde_json::Value;

/// Raw place entry from the `results` array:
/// {
///   "id": "085718f7...",
///   "name": "London",
///   "subtype": "locality",
///   "country": "CA",
///   "source_type": "division_area",
///   "hierarchy": ["Canada", "Ontario", "London"],
///   "geometry": { "type": "Polygon", "coordinates": [...] }
/// }
#[derive(Debug, Deserialize)]
pub struct PlaceRaw {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub hierarchy: Option<Vec<String>>,
    #[serde(default)]
    pub geometry: Option<Value>,
}

/// Raw response body.
///
/// `most_probable` and `next_probable` are kept as untyped JSON: the reranker
/// sends an object, `null`, an empty list, or lists with `null` holes, and all
/// of those must degrade to "no hint" instead of failing the whole response.
#[derive(Debug, Deserialize)]
pub struct SearchResponseRaw {
    #[serde(default)]
    pub results: Option<Vec<PlaceRaw>>,
    #[serde(default)]
    pub time_taken: Option<f64>,
    #[serde(default)]
    pub most_probable: Option<Value>,
    #[serde(default)]
    pub next_probable: Option<Value>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub rephrased_query: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub exact: Option<bool>,
}

/// Pulls the string `id` out of a `{ "id": ... }` reference.
pub(crate) fn place_ref_id(value: &Value) -> Option<&str> {
    value.as_object()?.get("id")?.as_str()
}
