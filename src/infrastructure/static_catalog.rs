use crate::domain::locale::Locale;
use crate::domain::ports::{CatalogCategory, CatalogProvider, ServiceCatalog};
use crate::domain::provider::ServiceCategory;

const fn provider(id: &'static str, name: &'static str) -> CatalogProvider {
    CatalogProvider { id, name }
}

/// The widget's built-in list of categories and providers.
///
/// The locale is accepted but not used: labels are localized by the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn new() -> Self {
        Self
    }

    fn providers(category: ServiceCategory) -> Vec<CatalogProvider> {
        match category {
            ServiceCategory::Airtime => vec![
                provider("vodacom", "Vodacom"),
                provider("airtel", "Airtel"),
                provider("orange", "Orange"),
                provider("africell", "Africell"),
            ],
            ServiceCategory::Airlines => vec![
                provider("ethiopian", "Ethiopian Airlines"),
                provider("kenya", "Kenya Airways"),
                provider("rwandair", "RwandAir"),
                provider("air-tanzania", "Air Tanzania"),
            ],
            ServiceCategory::Transfers => vec![provider("gtp", "GTP Transfer")],
            ServiceCategory::Reservations => vec![
                provider("hotels", "Hotels & Lodges"),
                provider("car-rental", "Car Rental"),
                provider("events", "Event Venues"),
                provider("restaurants", "Restaurants"),
            ],
            ServiceCategory::Internet => vec![
                provider("vodacom-net", "Vodacom"),
                provider("airtel-net", "Airtel"),
            ],
            ServiceCategory::Utilities => vec![
                provider("water", "Water Bill"),
                provider("electricity", "Electricity"),
            ],
        }
    }
}

impl ServiceCatalog for StaticCatalog {
    fn categories(&self, _locale: &Locale) -> Vec<CatalogCategory> {
        ServiceCategory::ALL
            .into_iter()
            .map(|category| CatalogCategory {
                category,
                providers: Self::providers(category),
            })
            .collect()
    }
}
