// Taxi route domain model
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxiArea {
    Tourist,
    FatehSagar,
    HiranMagri,
    BapuBazar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxiCategory {
    Airport,
    Sightseeing,
    Residential,
    Shopping,
    Tourist,
    Local,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxiRoute {
    pub id: String,
    pub pickup: String,
    pub drop: String,
    pub area: TaxiArea,
    pub distance: String,
    pub estimated_time: String,
    pub fare: String,
    pub category: TaxiCategory,
}

impl TaxiRoute {
    fn new(
        id: &str,
        (pickup, drop): (&str, &str),
        area: TaxiArea,
        (distance, estimated_time, fare): (&str, &str, &str),
        category: TaxiCategory,
    ) -> Self {
        Self {
            id: id.to_string(),
            pickup: pickup.to_string(),
            drop: drop.to_string(),
            area,
            distance: distance.to_string(),
            estimated_time: estimated_time.to_string(),
            fare: fare.to_string(),
            category,
        }
    }

    pub fn samples() -> Vec<TaxiRoute> {
        use TaxiArea as A;
        use TaxiCategory as C;

        vec![
            Self::new(
                "TX-001",
                ("City Palace", "Maharana Pratap Airport"),
                A::Tourist,
                ("28.5 km", "45-55 min", "₹850-1200"),
                C::Airport,
            ),
            Self::new(
                "TX-002",
                ("Lake Pichola Ghat", "Fateh Sagar Lake"),
                A::FatehSagar,
                ("8.2 km", "18-25 min", "₹280-350"),
                C::Sightseeing,
            ),
            Self::new(
                "TX-003",
                ("Railway Station", "Hiran Magri Sector 4"),
                A::HiranMagri,
                ("12.8 km", "25-35 min", "₹320-450"),
                C::Residential,
            ),
            Self::new(
                "TX-004",
                ("Bapu Bazar", "Celebration Mall"),
                A::BapuBazar,
                ("6.5 km", "15-20 min", "₹180-250"),
                C::Shopping,
            ),
            Self::new(
                "TX-005",
                ("Chetak Circle", "Saheliyon Ki Bari"),
                A::Tourist,
                ("7.3 km", "18-22 min", "₹200-280"),
                C::Sightseeing,
            ),
            Self::new(
                "TX-006",
                ("University Area", "Fateh Sagar Ropeway"),
                A::FatehSagar,
                ("11.2 km", "22-30 min", "₹280-380"),
                C::Sightseeing,
            ),
            Self::new(
                "TX-007",
                ("Hiran Magri Sector 14", "City Palace"),
                A::HiranMagri,
                ("15.7 km", "30-40 min", "₹420-580"),
                C::Tourist,
            ),
            Self::new(
                "TX-008",
                ("Bapu Bazar", "Jagdish Temple"),
                A::BapuBazar,
                ("2.8 km", "8-12 min", "₹120-180"),
                C::Local,
            ),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaxiRouteFilter {
    pub search: Option<String>,
    pub area: Option<TaxiArea>,
}

impl TaxiRouteFilter {
    pub fn matches(&self, route: &TaxiRoute) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                route.pickup.to_lowercase().contains(&term)
                    || route.drop.to_lowercase().contains(&term)
            }
            _ => true,
        };

        matches_search && self.area.is_none_or(|a| a == route.area)
    }
}
