//! Sorted city lists with a preview.

use serde::Serialize;

use crate::domain::sort_pt_br;

/// A city list in Portuguese order, split into a preview and the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityList {
    cities: Vec<String>,
    #[serde(skip)]
    preview_len: usize,
}

impl CityList {
    /// Sort `cities` and keep the first `preview_len` as the preview.
    pub fn new(mut cities: Vec<String>, preview_len: usize) -> Self {
        sort_pt_br(&mut cities);
        Self {
            cities,
            preview_len,
        }
    }

    /// Every city, sorted.
    pub fn all(&self) -> &[String] {
        &self.cities
    }

    /// The leading cities shown before the toggle.
    pub fn preview(&self) -> &[String] {
        &self.cities[..self.preview_len.min(self.cities.len())]
    }

    /// Whether the toggle is needed.
    pub fn has_more(&self) -> bool {
        self.cities.len() > self.preview_len
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
