//! Search and facet filtering over the venue listing.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use bhub_domain::Venue;
use strsim::jaro_winkler;

pub const DEFAULT_PRICE_RANGE: RangeInclusive<f64> = 500.0..=2000.0;
pub const DEFAULT_CAPACITY_RANGE: RangeInclusive<u32> = 50..=350;

/// Minimum similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct VenueFilter {
    pub search: String,
    pub price: RangeInclusive<f64>,
    pub capacity: RangeInclusive<u32>,
    pub locations: BTreeSet<String>,
    pub tags: BTreeSet<String>,
}

impl Default for VenueFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            price: DEFAULT_PRICE_RANGE,
            capacity: DEFAULT_CAPACITY_RANGE,
            locations: BTreeSet::new(),
            tags: BTreeSet::new(),
        }
    }
}

impl VenueFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_price(mut self, min: f64, max: f64) -> Self {
        self.price = min..=max;
        self
    }

    pub fn with_capacity(mut self, min: u32, max: u32) -> Self {
        self.capacity = min..=max;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.locations.insert(location.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, venue: &Venue) -> bool {
        self.matches_search(venue)
            && self.price.contains(&venue.hourly_price)
            && self.capacity.contains(&venue.capacity)
            && (self.locations.is_empty()
                || self
                    .locations
                    .iter()
                    .any(|location| venue.location.contains(location.as_str())))
            && (self.tags.is_empty() || self.tags.iter().any(|tag| venue.has_tag(tag)))
    }

    pub fn apply<'a>(&self, venues: &'a [Venue]) -> Vec<&'a Venue> {
        let matched: Vec<_> = venues.iter().filter(|venue| self.matches(venue)).collect();
        tracing::debug!(total = venues.len(), matched = matched.len(), "venue filter applied");
        matched
    }

    fn matches_search(&self, venue: &Venue) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&venue.name, &venue.description, &venue.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Distinct cities across `venues`, sorted.
pub fn locations(venues: &[Venue]) -> Vec<String> {
    venues
        .iter()
        .map(|venue| venue.city().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct tags across `venues`, sorted.
pub fn tags(venues: &[Venue]) -> Vec<String> {
    venues
        .iter()
        .flat_map(|venue| venue.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Closest venue name to `input` when nothing matches exactly.
pub fn suggest_venue<'a>(venues: &'a [Venue], input: &str) -> Option<&'a Venue> {
    let needle = input.trim().to_lowercase();
    if venues.iter().any(|venue| venue.name.to_lowercase() == needle) {
        return None;
    }
    venues
        .iter()
        .map(|venue| (jaro_winkler(&venue.name.to_lowercase(), &needle), venue))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, venue)| venue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogProvider, StaticCatalog};

    fn venues() -> Vec<Venue> {
        StaticCatalog::demo().list_venues()
    }

    fn names(matched: Vec<&Venue>) -> Vec<&str> {
        matched.into_iter().map(|venue| venue.name.as_str()).collect()
    }

    #[test]
    fn default_filter_uses_inclusive_bounds() {
        let venues = venues();
        let matched = VenueFilter::new().apply(&venues);
        // Conference center seats 400, above the default capacity ceiling.
        assert_eq!(matched.len(), 7);
        assert!(!names(matched).contains(&"Metropolitan Conference Center"));
    }

    #[test]
    fn search_covers_name_description_and_location() {
        let venues = venues();
        let by_location = VenueFilter::new().with_search("malibu").apply(&venues);
        assert_eq!(names(by_location), vec!["Beachfront Paradise"]);

        let by_description = VenueFilter::new().with_search("CHANDELIERS").apply(&venues);
        assert_eq!(names(by_description), vec!["Crystal Grand Ballroom"]);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let venues = venues();
        let matched = VenueFilter::new().with_price(650.0, 800.0).apply(&venues);
        assert_eq!(
            names(matched),
            vec!["Garden Pavilion", "Urban Workshop Space"]
        );
    }

    #[test]
    fn location_and_tag_facets_match_any_selected() {
        let venues = venues();
        let matched = VenueFilter::new()
            .with_location("Seattle")
            .with_location("Miami")
            .apply(&venues);
        assert_eq!(matched.len(), 2);

        let matched = VenueFilter::new().with_tag("Scenic").apply(&venues);
        assert_eq!(
            names(matched),
            vec!["Harbor View Terrace", "Mountain View Resort"]
        );
    }

    #[test]
    fn locations_are_distinct_cities() {
        let cities = locations(&venues());
        assert_eq!(cities.len(), 8);
        assert!(cities.contains(&"New York".to_string()));
        assert!(cities.contains(&"California".to_string()));
    }

    #[test]
    fn suggestion_offered_for_near_miss_only() {
        let venues = venues();
        let suggestion = suggest_venue(&venues, "Garden Pavillion").unwrap();
        assert_eq!(suggestion.name, "Garden Pavilion");
        assert!(suggest_venue(&venues, "garden pavilion").is_none());
        assert!(suggest_venue(&venues, "zzz").is_none());
    }
}
