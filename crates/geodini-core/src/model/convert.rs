// crates/geodini-core/src/model/convert.rs
use super::{QueryInterpretation, RankingHint, SearchResponse, SearchResult};
use crate::common::{place_ref_id, PlaceRaw, SearchResponseRaw};
use crate::geometry::Geometry;
use serde_json::Value;

/// **Wire Converter:** Raw -> Model.
///
/// Never fails: every lenient field has already been defaulted by serde, and
/// ranking fields that do not have the expected shape collapse to "no hint".
pub fn from_raw(raw: SearchResponseRaw) -> SearchResponse {
    let results = raw
        .results
        .unwrap_or_default()
        .into_iter()
        .map(place_from_raw)
        .collect();

    let ranking = hint_from_raw(raw.most_probable.as_ref(), raw.next_probable.as_ref());

    SearchResponse::new(results, raw.time_taken.unwrap_or(0.0), ranking).with_interpretation(
        QueryInterpretation {
            query: raw.query,
            rephrased_query: raw.rephrased_query,
            country_code: raw.country_code,
            exact: raw.exact,
        },
    )
}

fn place_from_raw(raw: PlaceRaw) -> SearchResult {
    SearchResult {
        id: raw.id,
        name: raw.name.unwrap_or_default(),
        subtype: raw.subtype.unwrap_or_default(),
        country: raw.country.unwrap_or_default(),
        hierarchy: raw.hierarchy.unwrap_or_default(),
        geometry: raw.geometry.and_then(Geometry::from_value),
        source_type: raw.source_type,
    }
}

/// `most_probable` only counts as `{ "id": "<string>" }`; `next_probable`
/// keeps the well-formed entries of a list, in order.
pub fn hint_from_raw(most: Option<&Value>, next: Option<&Value>) -> Option<RankingHint> {
    let most_probable_id = most.and_then(place_ref_id).map(str::to_string);

    let next_probable_ids = next
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(place_ref_id)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let hint = RankingHint {
        most_probable_id,
        next_probable_ids,
    };
    (!hint.is_empty()).then_some(hint)
}
