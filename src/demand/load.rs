//! Appliance and time-of-use window value types.
//!
//! These are plain immutable data: the sizing core only ever reads them.
//! "Mutations" (toggling selection, criticality, or a window) are pure
//! functions returning a new collection with one element replaced.

use std::fmt;

use serde::Deserialize;

/// The four standard daily time-of-use windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotName {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl SlotName {
    /// Natural start/end hours of this window on a 24-hour clock.
    ///
    /// Night wraps past midnight (22 → 6).
    pub fn span(self) -> (u32, u32) {
        match self {
            SlotName::Morning => (6, 12),
            SlotName::Afternoon => (12, 17),
            SlotName::Evening => (17, 22),
            SlotName::Night => (22, 6),
        }
    }

    /// All four windows in day order.
    pub const ALL: [SlotName; 4] = [
        SlotName::Morning,
        SlotName::Afternoon,
        SlotName::Evening,
        SlotName::Night,
    ];
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SlotName::Morning => "morning",
            SlotName::Afternoon => "afternoon",
            SlotName::Evening => "evening",
            SlotName::Night => "night",
        };
        write!(f, "{s}")
    }
}

/// One daily usage window of an appliance.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlot {
    /// Which standard window this is.
    pub name: SlotName,
    /// Start hour of day (0–23).
    pub start: u32,
    /// End hour of day (0–23); may be numerically before `start` when the
    /// window crosses midnight.
    pub end: u32,
    /// Whether the appliance runs during this window.
    pub active: bool,
    /// Optional override runtime in minutes for short-use appliances.
    /// Never exceeds the window's natural span (clamped at config load).
    pub duration_minutes: Option<u32>,
}

impl TimeSlot {
    /// Creates the standard (inactive, no override) slot for a window.
    pub fn standard(name: SlotName) -> Self {
        let (start, end) = name.span();
        Self {
            name,
            start,
            end,
            active: false,
            duration_minutes: None,
        }
    }

    /// Natural window length in whole minutes, handling midnight crossing.
    pub fn natural_minutes(&self) -> u32 {
        let hours = if self.end > self.start {
            self.end - self.start
        } else {
            (24 - self.start) + self.end
        };
        hours * 60
    }

    /// Effective runtime in hours: the override when present, else the
    /// window's natural span.
    pub fn effective_hours(&self) -> f32 {
        match self.duration_minutes {
            Some(minutes) => minutes as f32 / 60.0,
            None => self.natural_minutes() as f32 / 60.0,
        }
    }

    /// Returns this slot with any override clamped to the natural span.
    pub fn clamped(mut self) -> Self {
        if let Some(minutes) = self.duration_minutes {
            self.duration_minutes = Some(minutes.min(self.natural_minutes()));
        }
        self
    }
}

/// Returns the four standard windows, all inactive.
pub fn standard_slots() -> Vec<TimeSlot> {
    SlotName::ALL.iter().map(|&n| TimeSlot::standard(n)).collect()
}

/// A consuming appliance with its daily usage windows.
#[derive(Debug, Clone, PartialEq)]
pub struct Appliance {
    /// Display name.
    pub name: String,
    /// Unit power draw (W).
    pub watts: f32,
    /// Number of identical units.
    pub quantity: u32,
    /// Daily usage windows (the four standard slots).
    pub slots: Vec<TimeSlot>,
    /// Whether this appliance participates in demand at all.
    pub selected: bool,
    /// Whether this appliance must stay on backup power.
    pub critical: bool,
}

impl Appliance {
    /// Creates an unselected, non-critical appliance with the given windows
    /// marked active.
    pub fn new(name: impl Into<String>, watts: f32, active: &[SlotName]) -> Self {
        let slots = standard_slots()
            .into_iter()
            .map(|s| TimeSlot {
                active: active.contains(&s.name),
                ..s
            })
            .collect();
        Self {
            name: name.into(),
            watts,
            quantity: 1,
            slots,
            selected: false,
            critical: false,
        }
    }
}

/// Returns a new collection with the item at `index` (de)selected.
///
/// An out-of-range index returns the input unchanged.
pub fn with_selected(items: &[Appliance], index: usize, selected: bool) -> Vec<Appliance> {
    replace_at(items, index, |a| Appliance { selected, ..a })
}

/// Returns a new collection with the item at `index` marked (non-)critical.
pub fn with_critical(items: &[Appliance], index: usize, critical: bool) -> Vec<Appliance> {
    replace_at(items, index, |a| Appliance { critical, ..a })
}

/// Returns a new collection with one window of the item at `index` toggled.
pub fn with_slot_active(
    items: &[Appliance],
    index: usize,
    slot: SlotName,
    active: bool,
) -> Vec<Appliance> {
    replace_at(items, index, |a| {
        let slots = a
            .slots
            .iter()
            .map(|s| {
                if s.name == slot {
                    TimeSlot {
                        active,
                        ..s.clone()
                    }
                } else {
                    s.clone()
                }
            })
            .collect();
        Appliance { slots, ..a }
    })
}

fn replace_at(
    items: &[Appliance],
    index: usize,
    f: impl FnOnce(Appliance) -> Appliance,
) -> Vec<Appliance> {
    let mut out = items.to_vec();
    if let Some(item) = out.get_mut(index) {
        *item = f(item.clone());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_spans() {
        assert_eq!(SlotName::Morning.span(), (6, 12));
        assert_eq!(SlotName::Afternoon.span(), (12, 17));
        assert_eq!(SlotName::Evening.span(), (17, 22));
        assert_eq!(SlotName::Night.span(), (22, 6));
    }

    #[test]
    fn natural_minutes_handles_midnight_crossing() {
        let night = TimeSlot::standard(SlotName::Night);
        // 22:00 → 06:00 is 8 hours
        assert_eq!(night.natural_minutes(), 8 * 60);

        let morning = TimeSlot::standard(SlotName::Morning);
        assert_eq!(morning.natural_minutes(), 6 * 60);
    }

    #[test]
    fn effective_hours_prefers_override() {
        let mut slot = TimeSlot::standard(SlotName::Morning);
        assert_eq!(slot.effective_hours(), 6.0);

        slot.duration_minutes = Some(15);
        assert_eq!(slot.effective_hours(), 0.25);
    }

    #[test]
    fn clamped_limits_override_to_natural_span() {
        let mut slot = TimeSlot::standard(SlotName::Afternoon); // 5h window
        slot.duration_minutes = Some(600);
        let clamped = slot.clamped();
        assert_eq!(clamped.duration_minutes, Some(5 * 60));

        // In-range overrides pass through
        let mut slot = TimeSlot::standard(SlotName::Afternoon);
        slot.duration_minutes = Some(30);
        assert_eq!(slot.clamped().duration_minutes, Some(30));
    }

    #[test]
    fn new_appliance_activates_requested_windows() {
        let a = Appliance::new("Fan", 80.0, &[SlotName::Evening, SlotName::Night]);
        assert_eq!(a.slots.len(), 4);
        for slot in &a.slots {
            let expect = matches!(slot.name, SlotName::Evening | SlotName::Night);
            assert_eq!(slot.active, expect, "slot {}", slot.name);
        }
        assert!(!a.selected);
        assert!(!a.critical);
        assert_eq!(a.quantity, 1);
    }

    #[test]
    fn with_selected_replaces_one_element_and_preserves_input() {
        let items = vec![
            Appliance::new("A", 10.0, &[SlotName::Morning]),
            Appliance::new("B", 20.0, &[SlotName::Evening]),
        ];
        let updated = with_selected(&items, 1, true);
        assert!(!items[1].selected, "input must be untouched");
        assert!(updated[1].selected);
        assert!(!updated[0].selected);
    }

    #[test]
    fn with_selected_out_of_range_is_identity() {
        let items = vec![Appliance::new("A", 10.0, &[])];
        let updated = with_selected(&items, 5, true);
        assert_eq!(updated, items);
    }

    #[test]
    fn with_slot_active_toggles_only_named_window() {
        let items = vec![Appliance::new("A", 10.0, &[])];
        let updated = with_slot_active(&items, 0, SlotName::Night, true);
        for slot in &updated[0].slots {
            assert_eq!(slot.active, slot.name == SlotName::Night);
        }
    }
}
