//! Fixed lookup tables for cities and sound layers.
//!
//! Both tables are built once at startup and never change. Lookups go
//! through id-keyed maps; an id that is not in the table is an error rather
//! than a missing entry.

mod city;
mod layer;

use std::collections::HashMap;

pub use city::{builtin_cities, City, CityId, Coordinates};
pub use layer::{builtin_layers, LayerColor, SoundLayer};

use crate::error::{Result, ToneError};

pub struct Catalog {
    cities: Vec<City>,
    layers: Vec<SoundLayer>,
    city_index: HashMap<CityId, usize>,
    layer_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from custom tables, rejecting duplicate ids
    pub fn new(cities: Vec<City>, layers: Vec<SoundLayer>) -> Result<Self> {
        let mut city_index = HashMap::with_capacity(cities.len());
        for (i, city) in cities.iter().enumerate() {
            if city_index.insert(city.id, i).is_some() {
                return Err(ToneError::DuplicateId(city.id.to_string()));
            }
        }

        let mut layer_index = HashMap::with_capacity(layers.len());
        for (i, layer) in layers.iter().enumerate() {
            if layer_index.insert(layer.id.clone(), i).is_some() {
                return Err(ToneError::DuplicateId(layer.id.clone()));
            }
        }

        Ok(Self {
            cities,
            layers,
            city_index,
            layer_index,
        })
    }

    /// The ten cities and four layers of the demo
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_cities(), builtin_layers())
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn layers(&self) -> &[SoundLayer] {
        &self.layers
    }

    pub fn city(&self, id: CityId) -> Result<&City> {
        self.city_index
            .get(&id)
            .map(|&i| &self.cities[i])
            .ok_or(ToneError::UnknownCityId(id))
    }

    pub fn layer(&self, id: &str) -> Result<&SoundLayer> {
        self.layer_position(id).map(|i| &self.layers[i])
    }

    /// Position of a layer in catalog order
    pub fn layer_position(&self, id: &str) -> Result<usize> {
        self.layer_index
            .get(id)
            .copied()
            .ok_or_else(|| ToneError::UnknownLayerId(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_have_fixed_sizes() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.cities().len(), 10);
        assert_eq!(catalog.layers().len(), 4);
    }

    #[test]
    fn lookups_by_id() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.city(CityId(1)).unwrap().name, "Tokyo");
        assert_eq!(catalog.layer("green").unwrap().frequency, 440.0);
        assert_eq!(catalog.layer_position("noise").unwrap(), 3);
    }

    #[test]
    fn missing_ids_are_errors() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.city(CityId(99)),
            Err(ToneError::UnknownCityId(CityId(99)))
        );
        assert_eq!(
            catalog.layer("wind").map(|l| l.id.clone()),
            Err(ToneError::UnknownLayerId("wind".to_string()))
        );
    }

    #[test]
    fn duplicate_ids_rejected() {
        let layers = vec![
            SoundLayer::new("air", "Air", 220.0, 0),
            SoundLayer::new("air", "Air again", 330.0, 0),
        ];
        let result = Catalog::new(builtin_cities(), layers);
        assert!(matches!(result, Err(ToneError::DuplicateId(id)) if id == "air"));
    }
}
