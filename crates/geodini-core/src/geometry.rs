// crates/geodini-core/src/geometry.rs
//! GeoJSON geometry carried through untouched, plus bounding boxes.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A GeoJSON geometry (or Feature / FeatureCollection) as sent by the API.
///
/// The value is opaque to ranking and rendering; it is handed to the map
/// widget as-is. Only [`Geometry::bounds`] looks inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Geometry(Value);

impl Geometry {
    /// `None` for JSON `null`; any other value is kept.
    pub fn from_value(value: Value) -> Option<Self> {
        if value.is_null() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// GeoJSON `type` member, if any.
    pub fn kind(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// Bounding box over every position in the geometry.
    ///
    /// Returns `None` when the geometry holds no position at all
    /// (e.g. an empty `GeometryCollection`).
    pub fn bounds(&self) -> Option<Bounds> {
        let mut acc: Option<Bounds> = None;
        collect_positions(&self.0, &mut acc);
        acc
    }
}

/// Axis-aligned box in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl Bounds {
    pub fn point(lon: f64, lat: f64) -> Self {
        Self {
            min_lon: lon,
            min_lat: lat,
            max_lon: lon,
            max_lat: lat,
        }
    }

    pub fn extend(&mut self, lon: f64, lat: f64) {
        self.min_lon = self.min_lon.min(lon);
        self.min_lat = self.min_lat.min(lat);
        self.max_lon = self.max_lon.max(lon);
        self.max_lat = self.max_lat.max(lat);
    }

    /// `[lat, lng]` of the south-west corner (Leaflet order).
    pub fn south_west(&self) -> [f64; 2] {
        [self.min_lat, self.min_lon]
    }

    /// `[lat, lng]` of the north-east corner (Leaflet order).
    pub fn north_east(&self) -> [f64; 2] {
        [self.max_lat, self.max_lon]
    }

    pub fn is_degenerate(&self) -> bool {
        self.min_lon == self.max_lon && self.min_lat == self.max_lat
    }
}

fn push(acc: &mut Option<Bounds>, lon: f64, lat: f64) {
    match acc {
        Some(b) => b.extend(lon, lat),
        None => *acc = Some(Bounds::point(lon, lat)),
    }
}

/// A position is an array whose first two members are numbers.
fn as_position(value: &Value) -> Option<(f64, f64)> {
    let arr = value.as_array()?;
    let lon = arr.first()?.as_f64()?;
    let lat = arr.get(1)?.as_f64()?;
    Some((lon, lat))
}

fn collect_coordinates(value: &Value, acc: &mut Option<Bounds>) {
    if let Some((lon, lat)) = as_position(value) {
        push(acc, lon, lat);
    } else if let Some(items) = value.as_array() {
        for item in items {
            collect_coordinates(item, acc);
        }
    }
}

fn collect_positions(value: &Value, acc: &mut Option<Bounds>) {
    let Some(obj) = value.as_object() else {
        return;
    };
    if let Some(coords) = obj.get("coordinates") {
        collect_coordinates(coords, acc);
    }
    // GeometryCollection / FeatureCollection
    for key in ["geometries", "features"] {
        if let Some(items) = obj.get(key).and_then(Value::as_array) {
            for item in items {
                collect_positions(item, acc);
            }
        }
    }
    // Feature
    if let Some(inner) = obj.get("geometry") {
        collect_positions(inner, acc);
    }
}
