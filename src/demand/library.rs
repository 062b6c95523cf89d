//! Built-in appliance library with typical wattages and usage windows.
//!
//! Everything starts unselected; callers pick the subset that applies
//! (see the presets in [`crate::config`]).

use super::load::{Appliance, SlotName};

/// Whether a library entry is a household or office appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Home,
    Office,
}

const ALL_DAY: [SlotName; 4] = [
    SlotName::Morning,
    SlotName::Afternoon,
    SlotName::Evening,
    SlotName::Night,
];
const DAY_ONLY: [SlotName; 2] = [SlotName::Morning, SlotName::Afternoon];
const EVENING_NIGHT: [SlotName; 2] = [SlotName::Evening, SlotName::Night];
const MORNING_EVENING: [SlotName; 2] = [SlotName::Morning, SlotName::Evening];

fn home(name: &str, watts: f32, active: &[SlotName]) -> (Appliance, Category) {
    (Appliance::new(name, watts, active), Category::Home)
}

fn office(name: &str, watts: f32, active: &[SlotName]) -> (Appliance, Category) {
    (Appliance::new(name, watts, active), Category::Office)
}

/// Returns the full library with category tags, in display order.
pub fn catalog() -> Vec<(Appliance, Category)> {
    vec![
        home("LED Bulb", 10.0, &EVENING_NIGHT),
        home("Ceiling Fan", 80.0, &EVENING_NIGHT),
        home("Standing Fan", 90.0, &EVENING_NIGHT),
        home("Table Fan", 40.0, &EVENING_NIGHT),
        home("Pressing Iron", 1200.0, &MORNING_EVENING),
        home("Blender", 350.0, &MORNING_EVENING),
        home("Electric Kettle", 2000.0, &MORNING_EVENING),
        home("Electric Cooker", 2500.0, &MORNING_EVENING),
        home("Microwave Oven", 1300.0, &MORNING_EVENING),
        home("Refrigerator (Small)", 120.0, &ALL_DAY),
        home("Refrigerator (Large)", 250.0, &ALL_DAY),
        home("Freezer (Chest)", 500.0, &ALL_DAY),
        home("TV (32\" LED)", 70.0, &EVENING_NIGHT),
        home("TV (50\" LCD)", 150.0, &EVENING_NIGHT),
        home("Home Theatre", 80.0, &EVENING_NIGHT),
        home("Washing Machine", 800.0, &DAY_ONLY),
        home("Water Dispenser", 600.0, &ALL_DAY),
        home("Laptop", 60.0, &EVENING_NIGHT),
        home("Desktop Computer", 200.0, &EVENING_NIGHT),
        home("Wi-Fi Router", 15.0, &ALL_DAY),
        home("Phone Charger", 10.0, &EVENING_NIGHT),
        office("Desktop Computer + Monitor", 250.0, &DAY_ONLY),
        office("Laptop", 60.0, &DAY_ONLY),
        office("Printer (Inkjet)", 40.0, &DAY_ONLY),
        office("Printer (LaserJet)", 400.0, &DAY_ONLY),
        office("Photocopier", 800.0, &DAY_ONLY),
        office("Projector", 300.0, &DAY_ONLY),
        office("Air Conditioner (1HP)", 1000.0, &DAY_ONLY),
        office("Office Refrigerator", 200.0, &ALL_DAY),
        office("Electric Kettle", 2000.0, &DAY_ONLY),
    ]
}

/// Returns the library entries for one category, untagged.
pub fn appliances_in(category: Category) -> Vec<Appliance> {
    catalog()
        .into_iter()
        .filter(|(_, c)| *c == category)
        .map(|(a, _)| a)
        .collect()
}

/// Looks up a library appliance by name within a category.
pub fn find(category: Category, name: &str) -> Option<Appliance> {
    catalog()
        .into_iter()
        .find(|(a, c)| *c == category && a.name == name)
        .map(|(a, _)| a)
}
