//! Read-only reference data: venues, add-on services and payment methods.

use bhub_domain::{
    AddOnService, Identifiable, NamedEntity, PaymentMethod, PaymentMethodId, ServiceId, Venue,
    VenueId,
};

use crate::CoreError;

/// Supplies immutable catalog listings to the booking flow.
pub trait CatalogProvider {
    fn list_venues(&self) -> Vec<Venue>;
    fn list_services(&self) -> Vec<AddOnService>;
    fn list_payment_methods(&self) -> Vec<PaymentMethod>;
}

/// Catalog backed by fixed in-memory lists.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    venues: Vec<Venue>,
    services: Vec<AddOnService>,
    payment_methods: Vec<PaymentMethod>,
}

impl StaticCatalog {
    pub fn new(
        venues: Vec<Venue>,
        services: Vec<AddOnService>,
        payment_methods: Vec<PaymentMethod>,
    ) -> Self {
        Self {
            venues,
            services,
            payment_methods,
        }
    }

    /// The showcase catalog listed on the public site.
    pub fn demo() -> Self {
        Self::new(demo_venues(), demo_services(), demo_payment_methods())
    }
}

impl CatalogProvider for StaticCatalog {
    fn list_venues(&self) -> Vec<Venue> {
        self.venues.clone()
    }

    fn list_services(&self) -> Vec<AddOnService> {
        self.services.clone()
    }

    fn list_payment_methods(&self) -> Vec<PaymentMethod> {
        self.payment_methods.clone()
    }
}

/// First entry of `items` carrying `id`.
pub fn find_by_id<'a, T>(items: &'a [T], id: &T::Id) -> Option<&'a T>
where
    T: Identifiable,
    T::Id: PartialEq,
{
    items.iter().find(|item| item.id() == id)
}

/// First entry of `items` whose name matches `name`, ignoring ASCII case.
pub fn find_by_name<'a, T: NamedEntity>(items: &'a [T], name: &str) -> Option<&'a T> {
    items
        .iter()
        .find(|item| item.name().eq_ignore_ascii_case(name.trim()))
}

/// Catalog listings captured once, at wizard mount.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub venues: Vec<Venue>,
    pub services: Vec<AddOnService>,
    pub payment_methods: Vec<PaymentMethod>,
}

impl CatalogSnapshot {
    pub fn load(provider: &dyn CatalogProvider) -> Self {
        let snapshot = Self {
            venues: provider.list_venues(),
            services: provider.list_services(),
            payment_methods: provider.list_payment_methods(),
        };
        tracing::debug!(
            venues = snapshot.venues.len(),
            services = snapshot.services.len(),
            payment_methods = snapshot.payment_methods.len(),
            "catalog loaded"
        );
        snapshot
    }

    pub fn venue(&self, id: &VenueId) -> Option<&Venue> {
        find_by_id(&self.venues, id)
    }

    pub fn service(&self, id: &ServiceId) -> Option<&AddOnService> {
        find_by_id(&self.services, id)
    }

    pub fn payment_method(&self, id: &PaymentMethodId) -> Option<&PaymentMethod> {
        find_by_id(&self.payment_methods, id)
    }

    pub fn require_venue(&self, id: &VenueId) -> Result<&Venue, CoreError> {
        self.venue(id)
            .ok_or_else(|| CoreError::VenueNotFound(id.clone()))
    }

    pub fn require_service(&self, id: &ServiceId) -> Result<&AddOnService, CoreError> {
        self.service(id)
            .ok_or_else(|| CoreError::ServiceNotFound(id.clone()))
    }

    pub fn require_payment_method(&self, id: &PaymentMethodId) -> Result<&PaymentMethod, CoreError> {
        self.payment_method(id)
            .ok_or_else(|| CoreError::PaymentMethodNotFound(id.clone()))
    }
}

const IMAGE_BASE: &str = "https://images.unsplash.com";

fn image(photo: &str) -> String {
    format!("{IMAGE_BASE}/{photo}?auto=format&fit=crop&w=1350&q=80")
}

fn demo_venues() -> Vec<Venue> {
    vec![
        Venue::new("1", "Crystal Grand Ballroom", "Downtown, New York", 300, 1200.0)
            .with_description("Elegant ballroom with crystal chandeliers and marble floors, perfect for weddings and galas.")
            .with_rating(4.9)
            .with_image(image("photo-1519167758481-83f550bb49b3"))
            .with_tags(["Wedding", "Luxury"]),
        Venue::new("2", "Harbor View Terrace", "Harbor District, San Francisco", 150, 950.0)
            .with_description("Stunning waterfront venue with panoramic views of the harbor, ideal for outdoor celebrations.")
            .with_rating(4.7)
            .with_image(image("photo-1464366400600-7168b8af9bc3"))
            .with_tags(["Outdoor", "Scenic"]),
        Venue::new("3", "Metropolitan Conference Center", "Midtown, Chicago", 400, 1500.0)
            .with_description("Modern conference center with state-of-the-art technology and flexible spaces for corporate events.")
            .with_rating(4.6)
            .with_image(image("photo-1517457373958-b7bdd4587205"))
            .with_tags(["Corporate", "Modern"]),
        Venue::new("4", "Garden Pavilion", "Botanical Gardens, Miami", 120, 800.0)
            .with_description("Charming garden pavilion surrounded by lush greenery and blooming flowers.")
            .with_rating(4.8)
            .with_image(image("photo-1439539698758-ba2680ecadb9"))
            .with_tags(["Garden", "Intimate"]),
        Venue::new("5", "Mountain View Resort", "Aspen, Colorado", 200, 1800.0)
            .with_description("Breathtaking mountainside resort with spectacular views and luxury accommodations.")
            .with_rating(4.9)
            .with_image(image("photo-1505761671935-60b3a7427bad"))
            .with_tags(["Luxury", "Scenic"]),
        Venue::new("6", "Urban Workshop Space", "Arts District, Seattle", 80, 650.0)
            .with_description("Industrial-chic venue with open floor plan and exposed brick, perfect for creative events.")
            .with_rating(4.5)
            .with_image(image("photo-1497366754035-f200968a6e72"))
            .with_tags(["Modern", "Creative"]),
        Venue::new("7", "Beachfront Paradise", "Malibu, California", 150, 1450.0)
            .with_description("Gorgeous beachfront venue with white sand and azure waters as your backdrop.")
            .with_rating(4.8)
            .with_image(image("photo-1540541338287-41700207dee6"))
            .with_tags(["Beach", "Outdoor"]),
        Venue::new("8", "Historic Opera House", "French Quarter, New Orleans", 350, 1350.0)
            .with_description("Magnificent 19th century opera house with ornate details and rich history.")
            .with_rating(4.9)
            .with_image(image("photo-1507676184212-d03ab07a01bf"))
            .with_tags(["Historic", "Elegant"]),
    ]
}

fn demo_services() -> Vec<AddOnService> {
    vec![
        AddOnService::per_attendee("catering", "Premium Catering", 45.0)
            .with_description("Gourmet food and beverage service"),
        AddOnService::flat_fee("decoration", "Decoration Package", 1200.0)
            .with_description("Custom event decor and floral arrangements"),
        AddOnService::flat_fee("av", "A/V Equipment", 800.0)
            .with_description("Professional sound and lighting"),
        AddOnService::flat_fee("photography", "Photography", 1500.0)
            .with_description("Professional event photography"),
        AddOnService::flat_fee("entertainment", "Entertainment", 1200.0)
            .with_description("Live music or DJ services"),
    ]
}

fn demo_payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod::new("credit", "Credit/Debit Card", "Pay with Visa, Mastercard, etc."),
        PaymentMethod::new("paypal", "PayPal", "Fast and secure payment"),
        PaymentMethod::new("bank", "Bank Transfer", "Direct bank transfer"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use bhub_domain::PricingMode;

    #[test]
    fn demo_catalog_lists_every_section() {
        let snapshot = CatalogSnapshot::load(&StaticCatalog::demo());
        assert_eq!(snapshot.venues.len(), 8);
        assert_eq!(snapshot.services.len(), 5);
        assert_eq!(snapshot.payment_methods.len(), 3);
    }

    #[test]
    fn catering_is_the_only_per_attendee_service() {
        let catalog = StaticCatalog::demo();
        let per_attendee: Vec<_> = catalog
            .list_services()
            .into_iter()
            .filter(|service| service.pricing_mode == PricingMode::PerAttendee)
            .map(|service| service.id)
            .collect();
        assert_eq!(per_attendee, vec![ServiceId::new("catering")]);
    }

    #[test]
    fn require_lookups_name_missing_ids() {
        let snapshot = CatalogSnapshot::load(&StaticCatalog::demo());
        assert!(snapshot.require_venue(&VenueId::new("1")).is_ok());
        let err = snapshot
            .require_payment_method(&PaymentMethodId::new("cheque"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Payment method not found: cheque");
    }

    #[test]
    fn name_lookup_ignores_case_and_padding() {
        let venues = StaticCatalog::demo().list_venues();
        let found = find_by_name(&venues, "  crystal grand BALLROOM ").expect("venue by name");
        assert_eq!(found.id, VenueId::new("1"));
        assert!(find_by_name(&venues, "Crystal").is_none());
        assert_eq!(
            find_by_id(&venues, &VenueId::new("6")).map(|venue| venue.name.as_str()),
            Some("Urban Workshop Space")
        );
    }
}
