//! Domain types describing bookable venues.

use serde::{Deserialize, Serialize};

use crate::common::*;

/// A bookable venue listed in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    pub capacity: u32,
    pub hourly_price: f64,
    pub rating: f32,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Venue {
    pub fn new(
        id: impl Into<VenueId>,
        name: impl Into<String>,
        location: impl Into<String>,
        capacity: u32,
        hourly_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            location: location.into(),
            capacity,
            hourly_price,
            rating: 0.0,
            image: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the city part of the location (`"Midtown, Chicago"` -> `"Chicago"`).
    pub fn city(&self) -> &str {
        self.location
            .rsplit_once(", ")
            .map(|(_, city)| city)
            .unwrap_or(&self.location)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate.eq_ignore_ascii_case(tag))
    }
}

impl Identifiable for Venue {
    type Id = VenueId;

    fn id(&self) -> &VenueId {
        &self.id
    }
}

impl NamedEntity for Venue {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Priced for Venue {
    fn price(&self) -> f64 {
        self.hourly_price
    }
}

impl Displayable for Venue {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_is_last_location_segment() {
        let venue = Venue::new("1", "Hall", "Harbor District, San Francisco", 150, 950.0);
        assert_eq!(venue.city(), "San Francisco");

        let bare = Venue::new("2", "Loft", "Seattle", 80, 650.0);
        assert_eq!(bare.city(), "Seattle");
    }

    #[test]
    fn tag_lookup_ignores_case() {
        let venue = Venue::new("1", "Hall", "Downtown, New York", 300, 1200.0)
            .with_tags(["Wedding", "Luxury"]);
        assert!(venue.has_tag("luxury"));
        assert!(!venue.has_tag("Outdoor"));
    }
}
