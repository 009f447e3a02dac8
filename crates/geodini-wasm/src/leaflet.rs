//! Leaflet bindings and the [`MapWidget`] built on them.
//!
//! Leaflet is loaded by the page (`<script src=".../leaflet.js">`) and
//! reached through the global `L`.
use std::cell::Cell;
use std::rc::Rc;

use geodini_core::prelude::*;
use serde::Serialize;
use serde_wasm_bindgen::{to_value, Serializer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type LeafletMap;

    #[derive(Debug, Clone)]
    pub type Layer;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    fn new_map(container_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8) -> LeafletMap;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &LeafletMap, bounds: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    fn invalidate_size(this: &LeafletMap) -> LeafletMap;

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &LeafletMap, layer: &Layer) -> LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = geoJSON)]
    fn geo_json(data: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap) -> Layer;
}

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Serialize)]
struct TileOptions {
    attribution: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OverlayStyle {
    color: &'static str,
    weight: u8,
    opacity: f32,
    fill_color: &'static str,
    fill_opacity: f32,
}

#[derive(Serialize)]
struct OverlayOptions {
    style: OverlayStyle,
}

const OVERLAY: OverlayOptions = OverlayOptions {
    style: OverlayStyle {
        color: "#3498db",
        weight: 2,
        opacity: 0.8,
        fill_color: "#3498db",
        fill_opacity: 0.2,
    },
};

/// `[[south, west], [north, east]]`
fn bounds_to_js(bounds: Bounds) -> JsValue {
    to_value(&[bounds.south_west(), bounds.north_east()]).unwrap_or(JsValue::NULL)
}

/// The single Leaflet map of the page, created once at mount.
pub struct LeafletWidget {
    map: LeafletMap,
    /// Bounds of the active overlay; read by pending re-measures when they fire.
    active_bounds: Rc<Cell<Option<Bounds>>>,
}

impl LeafletWidget {
    /// Creates the map in `container_id` with the OpenStreetMap base layer.
    pub fn create(container_id: &str) -> Result<Self, JsValue> {
        let map = new_map(container_id)?;
        let center = to_value(&[0.0_f64, 0.0])?;
        map.set_view(&center, 2);
        tile_layer(
            TILE_URL,
            &to_value(&TileOptions {
                attribution: TILE_ATTRIBUTION,
            })?,
        )
        .add_to(&map);
        Ok(Self {
            map,
            active_bounds: Rc::new(Cell::new(None)),
        })
    }
}

impl MapWidget for LeafletWidget {
    type Overlay = Layer;

    fn add_overlay(&mut self, geometry: &Geometry) -> Layer {
        // Plain objects, not JS Maps: Leaflet reads GeoJSON members by name.
        let data = geometry
            .as_value()
            .serialize(&Serializer::json_compatible())
            .unwrap_or(JsValue::NULL);
        let options = to_value(&OVERLAY).unwrap_or(JsValue::UNDEFINED);
        geo_json(&data, &options).add_to(&self.map)
    }

    fn remove_overlay(&mut self, overlay: Layer) {
        self.map.remove_layer(&overlay);
        self.active_bounds.set(None);
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        self.active_bounds.set(Some(bounds));
        self.map.fit_bounds(&bounds_to_js(bounds));
    }

    fn schedule_remeasure(&mut self, delay_ms: u32) {
        let map = self.map.clone();
        let active_bounds = Rc::clone(&self.active_bounds);
        let callback = Closure::once_into_js(move || {
            map.invalidate_size();
            if let Some(bounds) = active_bounds.get() {
                map.fit_bounds(&bounds_to_js(bounds));
            }
        });
        let scheduled = web_sys::window().map(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                i32::try_from(delay_ms).unwrap_or(i32::MAX),
            )
        });
        if !matches!(scheduled, Some(Ok(_))) {
            web_sys::console::warn_1(&"could not schedule map re-measure".into());
        }
    }
}
