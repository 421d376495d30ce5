//! Built-in reference table of Senegal's departments
//!
//! One reference point per department, at the chef-lieu.

use crate::domain::entities::AdministrativeUnit;

/// `(name, latitude, longitude)` for every department, grouped by region.
const SENEGAL_DEPARTMENTS: &[(&str, f64, f64)] = &[
    // Dakar
    ("Dakar", 14.6928, -17.4467),
    ("Pikine", 14.7645, -17.3907),
    ("Guédiawaye", 14.7841, -17.4065),
    ("Rufisque", 14.7156, -17.2736),
    // Diourbel
    ("Diourbel", 14.6556, -16.2346),
    ("Bambey", 14.7000, -16.4667),
    ("Mbacké", 14.7901, -15.9086),
    // Fatick
    ("Fatick", 14.3396, -16.4102),
    ("Foundiougne", 14.1333, -16.4667),
    ("Gossas", 14.4956, -16.0656),
    // Kaffrine
    ("Kaffrine", 14.1050, -15.5500),
    ("Birkilane", 14.3581, -15.3497),
    ("Koungheul", 13.9950, -14.8000),
    ("Malem Hoddar", 14.1833, -15.1167),
    // Kaolack
    ("Kaolack", 14.1460, -16.0726),
    ("Guinguinéo", 14.2667, -15.9500),
    ("Nioro du Rip", 13.7500, -15.8000),
    // Kédougou
    ("Kédougou", 12.5556, -12.1744),
    ("Salémata", 12.7042, -12.6997),
    ("Saraya", 12.8581, -11.8667),
    // Kolda
    ("Kolda", 12.8833, -14.9500),
    ("Médina Yoro Foulah", 13.2167, -14.0833),
    ("Vélingara", 13.1500, -14.1167),
    // Louga
    ("Louga", 15.6144, -16.2286),
    ("Kébémer", 15.3333, -16.4167),
    ("Linguère", 15.3833, -15.1167),
    // Matam
    ("Matam", 15.6559, -13.2554),
    ("Kanel", 15.2261, -13.1806),
    ("Ranérou Ferlo", 15.5000, -13.7000),
    // Saint-Louis
    ("Saint-Louis", 16.0179, -16.4897),
    ("Dagana", 16.0167, -15.0500),
    ("Podor", 16.6667, -14.9667),
    // Sédhiou
    ("Sédhiou", 12.7081, -15.5569),
    ("Bounkiling", 12.8000, -15.2333),
    ("Goudomp", 12.5167, -15.3667),
    // Tambacounda
    ("Tambacounda", 13.7707, -13.6673),
    ("Bakel", 14.9000, -12.4667),
    ("Goudiry", 14.2000, -12.8833),
    ("Koumpentoum", 13.9833, -13.1167),
    // Thiès
    ("Thiès", 14.7910, -16.9256),
    ("Mbour", 14.4205, -16.9644),
    ("Tivaouane", 15.1500, -16.8167),
    // Ziguinchor
    ("Ziguinchor", 12.5833, -16.2719),
    ("Bignona", 12.8081, -16.2269),
    ("Oussouye", 12.4850, -16.5461),
];

/// The 45 departments of Senegal, in table order.
pub fn senegal_departments() -> Vec<AdministrativeUnit> {
    SENEGAL_DEPARTMENTS
        .iter()
        .map(|(name, lat, lng)| AdministrativeUnit::new(*name, *lat, *lng))
        .collect()
}
