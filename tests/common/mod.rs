//! Shared test fixtures for integration tests.

use solar_sizer::demand::load::{Appliance, SlotName};

/// A selected appliance with the given quantity and active windows.
pub fn selected(name: &str, watts: f32, quantity: u32, active: &[SlotName]) -> Appliance {
    Appliance {
        selected: true,
        quantity,
        ..Appliance::new(name, watts, active)
    }
}

/// A small household load set totalling 5.61 kWh/day.
///
/// Fridge 2.88 + fan 1.04 + TV 0.91 + six bulbs 0.78.
pub fn household_appliances() -> Vec<Appliance> {
    let all_day = [
        SlotName::Morning,
        SlotName::Afternoon,
        SlotName::Evening,
        SlotName::Night,
    ];
    let evening_night = [SlotName::Evening, SlotName::Night];

    let mut fridge = selected("Refrigerator", 120.0, 1, &all_day);
    fridge.critical = true;

    vec![
        fridge,
        selected("Ceiling Fan", 80.0, 1, &evening_night),
        selected("TV", 70.0, 1, &evening_night),
        selected("LED Bulb", 10.0, 6, &evening_night),
    ]
}
