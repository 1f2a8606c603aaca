// Static page content for the Raah site
use super::forms::FeedbackCategory;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutPage {
    pub summary: &'static str,
    pub mission: &'static str,
    pub features: Vec<Feature>,
    pub team: Vec<TeamMember>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactInfo {
    pub title: &'static str,
    pub details: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    pub title: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
    pub trend_up: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub title: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryOption {
    pub value: FeedbackCategory,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentFeedback {
    pub name: &'static str,
    pub rating: u8,
    pub comment: &'static str,
    pub category: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPage {
    pub categories: Vec<CategoryOption>,
    pub recent_feedback: Vec<RecentFeedback>,
}

pub fn home_page() -> HomePage {
    HomePage {
        headline: "Raah - Smart Udaipur Transport",
        tagline: "Connecting the Lake City with intelligent routing, real-time bus tracking, and seamless transportation for Udaipur",
        features: vec![
            Feature {
                title: "AI-Powered Routing",
                description: "Intelligent algorithms optimize routes in real-time, reducing travel time and fuel consumption by up to 30%.",
            },
            Feature {
                title: "Real-time Analytics",
                description: "Comprehensive dashboard with live traffic data, performance metrics, and predictive insights.",
            },
            Feature {
                title: "Mobile Integration",
                description: "Seamless mobile app integration for passengers and drivers with real-time updates and notifications.",
            },
        ],
        stats: vec![
            Stat { value: "150+", label: "Active Buses" },
            Stat { value: "90+", label: "Active Taxis" },
            Stat { value: "45+", label: "Bus Routes" },
            Stat { value: "50K+", label: "Daily Passengers" },
        ],
    }
}

pub fn about_page() -> AboutPage {
    AboutPage {
        summary: "Raah is a smart transportation management system designed to modernize and optimize public transportation in the Lake City of Udaipur.",
        mission: "To transform Udaipur's public transportation into a smart, efficient, and passenger-friendly system that connects every corner of the Lake City while preserving its cultural heritage and natural beauty.",
        features: vec![
            Feature {
                title: "Smart City Initiative",
                description: "Part of Udaipur's transformation into a Smart City with intelligent transportation solutions.",
            },
            Feature {
                title: "Real-time Tracking",
                description: "Live GPS tracking of all buses across Udaipur with accurate arrival predictions.",
            },
            Feature {
                title: "Passenger-Centric",
                description: "Designed with passengers in mind, providing convenient and reliable transportation.",
            },
            Feature {
                title: "Heritage & Technology",
                description: "Combining Udaipur's royal heritage with cutting-edge transportation technology.",
            },
        ],
        team: vec![
            TeamMember {
                name: "Team Pegasus",
                role: "Development Team",
                description: "A passionate team of innovators working on smart transportation solutions for Udaipur and India",
            },
            TeamMember {
                name: "Udaipur Municipal Corporation",
                role: "Project Partner",
                description: "Supporting the digital transformation of public transportation in the Lake City",
            },
        ],
    }
}

pub fn contact_info() -> Vec<ContactInfo> {
    vec![
        ContactInfo {
            title: "Email Us",
            details: "support@raah-udaipur.com",
            description: "Send us an email anytime",
        },
        ContactInfo {
            title: "Call Us",
            details: "+91 294 123 4567",
            description: "Mon-Fri from 9am to 6pm",
        },
        ContactInfo {
            title: "Visit Us",
            details: "Smart City Office, Udaipur",
            description: "City Palace Road, Udaipur, Rajasthan",
        },
        ContactInfo {
            title: "Working Hours",
            details: "Monday - Friday",
            description: "9:00 AM - 6:00 PM",
        },
    ]
}

pub fn metric_cards() -> Vec<MetricCard> {
    vec![
        MetricCard {
            title: "Active Vehicles",
            value: "2,847",
            trend: "+12% from yesterday",
            trend_up: true,
        },
        MetricCard {
            title: "Total Passengers",
            value: "45,291",
            trend: "+8% from yesterday",
            trend_up: true,
        },
        MetricCard {
            title: "Average Delay",
            value: "3.2 min",
            trend: "-15% from yesterday",
            trend_up: false,
        },
        MetricCard {
            title: "Revenue Today",
            value: "₹1,23,450",
            trend: "+22% from yesterday",
            trend_up: true,
        },
    ]
}

pub fn recent_activity() -> Vec<Activity> {
    vec![
        Activity {
            title: "Route B47 completed journey",
            time: "2 minutes ago",
        },
        Activity {
            title: "Traffic congestion detected on MG Road",
            time: "5 minutes ago",
        },
        Activity {
            title: "New driver registered: Amit Kumar",
            time: "12 minutes ago",
        },
    ]
}

pub fn feedback_page() -> FeedbackPage {
    FeedbackPage {
        categories: FeedbackCategory::ALL
            .iter()
            .map(|c| CategoryOption {
                value: *c,
                label: c.label(),
            })
            .collect(),
        recent_feedback: vec![
            RecentFeedback {
                name: "Priya S.",
                rating: 5,
                comment: "Great app for navigating Udaipur! Bus timings are very accurate.",
                category: FeedbackCategory::BusService.label(),
                time: "2 hours ago",
            },
            RecentFeedback {
                name: "Raj M.",
                rating: 4,
                comment: "Taxi booking is convenient, but could use more payment options.",
                category: FeedbackCategory::TaxiService.label(),
                time: "5 hours ago",
            },
            RecentFeedback {
                name: "Anita K.",
                rating: 5,
                comment: "Perfect for tourists! Route planning helped us visit all major attractions.",
                category: FeedbackCategory::RoutePlanning.label(),
                time: "1 day ago",
            },
        ],
    }
}
