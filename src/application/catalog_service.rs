// Catalog service - Use case for browsing bus and taxi routes
use crate::domain::routes::{BusRoute, RouteFilter};
use crate::domain::taxi::{TaxiRoute, TaxiRouteFilter};
use std::sync::Arc;

#[derive(Clone)]
pub struct CatalogService {
    bus_routes: Arc<Vec<BusRoute>>,
    taxi_routes: Arc<Vec<TaxiRoute>>,
}

impl CatalogService {
    pub fn new(bus_routes: Vec<BusRoute>, taxi_routes: Vec<TaxiRoute>) -> Self {
        Self {
            bus_routes: Arc::new(bus_routes),
            taxi_routes: Arc::new(taxi_routes),
        }
    }

    /// Catalog backed by the built-in sample routes
    pub fn with_samples() -> Self {
        Self::new(BusRoute::samples(), TaxiRoute::samples())
    }

    pub fn routes(&self, filter: &RouteFilter) -> Vec<BusRoute> {
        self.bus_routes
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }

    pub fn taxi_routes(&self, filter: &TaxiRouteFilter) -> Vec<TaxiRoute> {
        self.taxi_routes
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }

    pub fn taxi_route(&self, id: &str) -> Option<&TaxiRoute> {
        self.taxi_routes.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::taxi::TaxiArea;

    #[test]
    fn test_taxi_route_lookup() {
        let catalog = CatalogService::with_samples();

        let route = catalog.taxi_route("TX-004").unwrap();
        assert_eq!(route.pickup, "Bapu Bazar");
        assert_eq!(route.drop, "Celebration Mall");

        assert!(catalog.taxi_route("TX-999").is_none());
    }

    #[test]
    fn test_filters_are_applied() {
        let catalog = CatalogService::with_samples();

        let fateh_sagar = catalog.taxi_routes(&TaxiRouteFilter {
            search: None,
            area: Some(TaxiArea::FatehSagar),
        });
        assert_eq!(fateh_sagar.len(), 2);

        assert_eq!(catalog.routes(&RouteFilter::default()).len(), 3);
    }
}
