use anyhow::{anyhow, Context};
use geojson::{GeoJson, Geometry};
use pwm_core::field_value::FieldValue;
use serde_json::Value;
use std::collections::HashMap;

/// Property holding the location name on waste boundary features.
pub const REGION_NAME_PROPERTY: &str = "region";
/// Property holding the location name on education aggregate features.
pub const PROVINCE_NAME_PROPERTY: &str = "province";

/// One named administrative boundary: polygon geometry plus the same
/// coerced numeric fields as the tabular records.
///
/// Geometry is carried opaquely; rendering belongs to the map layer.
#[derive(Debug, Clone)]
pub struct Boundary {
    name: String,
    geometry: Geometry,
    fields: HashMap<String, FieldValue>,
}

impl Boundary {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Numeric value of a property; missing or malformed values are 0.
    pub fn field(&self, column: &str) -> f64 {
        self.field_value(column).as_f64()
    }

    pub fn field_value(&self, column: &str) -> FieldValue {
        self.fields
            .get(column)
            .copied()
            .unwrap_or(FieldValue::Missing)
    }

    /// Names of the numeric properties on this boundary.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// A set of named boundaries from one GeoJSON file, indexed by location
/// name for choropleth and ranking builders.
#[derive(Debug, Clone, Default)]
pub struct BoundaryCollection {
    entries: Vec<Boundary>,
}

impl BoundaryCollection {
    /// Parse a GeoJSON FeatureCollection.
    ///
    /// `name_property` selects the feature property used as the location
    /// name. Features without that property or without a geometry are
    /// skipped; numeric properties (including numeric strings) become
    /// coerced fields, everything else is ignored.
    pub fn from_geojson(data: &str, name_property: &str) -> anyhow::Result<BoundaryCollection> {
        let geojson: GeoJson = data
            .parse()
            .context("failed to parse GeoJSON boundary file")?;
        let collection = match geojson {
            GeoJson::FeatureCollection(fc) => fc,
            _ => return Err(anyhow!("boundary GeoJSON must be a FeatureCollection")),
        };

        let mut entries = Vec::new();
        let mut skipped = 0usize;
        for feature in collection.features {
            let name = feature
                .properties
                .as_ref()
                .and_then(|props| props.get(name_property))
                .and_then(property_name);
            let (name, geometry) = match (name, feature.geometry) {
                (Some(name), Some(geometry)) => (name, geometry),
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            let mut fields = HashMap::new();
            if let Some(props) = feature.properties {
                for (key, value) in props {
                    if key == name_property {
                        continue;
                    }
                    if let Some(coerced) = numeric_property(&value) {
                        fields.insert(key, coerced);
                    }
                }
            }
            entries.push(Boundary {
                name,
                geometry,
                fields,
            });
        }

        log::info!(
            "boundary file: loaded {} features ({} skipped)",
            entries.len(),
            skipped
        );
        Ok(BoundaryCollection { entries })
    }

    pub fn entries(&self) -> &[Boundary] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&Boundary> {
        self.entries.iter().find(|b| b.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn property_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn numeric_property(value: &Value) -> Option<FieldValue> {
    match value {
        Value::Number(n) => n.as_f64().map(FieldValue::Number),
        Value::String(s) => match FieldValue::coerce(s) {
            FieldValue::Missing => None,
            number => Some(number),
        },
        Value::Null => Some(FieldValue::Missing),
        _ => None,
    }
}
