// Bus route domain model
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    Active,
    Maintenance,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    Bus,
    Metro,
    Taxi,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusRoute {
    pub id: String,
    pub name: String,
    pub path: String,
    pub status: RouteStatus,
    pub kind: TransportKind,
    pub distance: String,
    pub duration: String,
    pub vehicles: String,
    pub frequency: String,
    pub passengers_today: String,
}

impl BusRoute {
    #[allow(clippy::too_many_arguments)]
    fn bus(
        id: &str,
        path: &str,
        status: RouteStatus,
        distance: &str,
        duration: &str,
        vehicles: &str,
        frequency: &str,
        passengers_today: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: format!("Route {}", id),
            path: path.to_string(),
            status,
            kind: TransportKind::Bus,
            distance: distance.to_string(),
            duration: duration.to_string(),
            vehicles: vehicles.to_string(),
            frequency: frequency.to_string(),
            passengers_today: passengers_today.to_string(),
        }
    }

    /// Sample routes shown on the route management page
    pub fn samples() -> Vec<BusRoute> {
        vec![
            Self::bus(
                "A42",
                "Central Station → Airport",
                RouteStatus::Active,
                "24.5 km",
                "45 min",
                "12 buses",
                "Every 15 min",
                "1,234 passengers today",
            ),
            Self::bus(
                "B15",
                "Tech Park → City Center",
                RouteStatus::Maintenance,
                "18.2 km",
                "32 min",
                "8 buses",
                "Every 20 min",
                "892 passengers today",
            ),
            Self::bus(
                "C23",
                "University → Mall",
                RouteStatus::Active,
                "12.8 km",
                "25 min",
                "6 buses",
                "Every 12 min",
                "567 passengers today",
            ),
        ]
    }
}

/// Route search criteria; `None` means "all"
#[derive(Debug, Clone, Default)]
pub struct RouteFilter {
    pub search: Option<String>,
    pub status: Option<RouteStatus>,
    pub kind: Option<TransportKind>,
}

impl RouteFilter {
    pub fn matches(&self, route: &BusRoute) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                route.name.to_lowercase().contains(&term)
                    || route.path.to_lowercase().contains(&term)
            }
            _ => true,
        };
        let matches_status = self.status.is_none_or(|s| s == route.status);
        let matches_kind = self.kind.is_none_or(|k| k == route.kind);

        matches_search && matches_status && matches_kind
    }
}
