//! TOML-based site configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::demand::library::{self, Category};
use crate::demand::load::{Appliance, SlotName, TimeSlot, standard_slots};
use crate::sizing::policy::SizingPolicy;
use crate::solar::irradiance::MonthlyYield;
use crate::solar::region::{Region, fallback_series};

/// Top-level site configuration parsed from TOML.
///
/// All sections have defaults. Load from TOML with
/// [`SiteConfig::from_toml_file`] or start from a named preset.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Backup target and location.
    #[serde(default)]
    pub site: SiteSection,
    /// Sizing policy flags.
    #[serde(default)]
    pub policy: SizingPolicy,
    /// Optional measured irradiance series.
    #[serde(default)]
    pub irradiance: IrradianceSection,
    /// Appliances participating in demand.
    #[serde(default, rename = "appliance")]
    pub appliances: Vec<ApplianceConfig>,
}

/// Backup target and location parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Target backup duration (hours).
    pub backup_hours: f32,
    /// Site latitude (degrees); selects the regional fallback series when
    /// no measured irradiance is supplied.
    pub latitude: Option<f32>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            backup_hours: 12.0,
            latitude: None,
        }
    }
}

/// Optional measured irradiance data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IrradianceSection {
    /// Twelve monthly yield totals (kWh/kWp), January first. Takes
    /// precedence over the regional fallback.
    pub monthly: Option<Vec<f32>>,
}

/// One appliance entry. Listed appliances are always part of demand.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplianceConfig {
    /// Display name.
    pub name: String,
    /// Unit power draw (W).
    pub watts: f32,
    /// Number of identical units.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Keep on backup power.
    #[serde(default)]
    pub critical: bool,
    /// Active usage windows.
    #[serde(default)]
    pub slots: Vec<SlotConfig>,
}

fn default_quantity() -> u32 {
    1
}

/// One active usage window of an appliance entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotConfig {
    /// Which standard window.
    pub name: SlotName,
    /// Optional override runtime in minutes.
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"site.backup_hours"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

/// Builds a preset appliance entry from the library.
fn from_library(category: Category, name: &str, quantity: u32, critical: bool) -> ApplianceConfig {
    let item = library::find(category, name)
        .unwrap_or_else(|| panic!("preset references unknown library appliance \"{name}\""));
    ApplianceConfig {
        name: item.name.clone(),
        watts: item.watts,
        quantity,
        critical,
        slots: item
            .slots
            .iter()
            .filter(|s| s.active)
            .map(|s| SlotConfig {
                name: s.name,
                duration_minutes: s.duration_minutes,
            })
            .collect(),
    }
}

impl SiteConfig {
    /// Returns the basic household preset: lighting, fans, fridge, TV.
    pub fn home_basic() -> Self {
        Self {
            site: SiteSection {
                backup_hours: 12.0,
                latitude: Some(9.1),
            },
            policy: SizingPolicy::default(),
            irradiance: IrradianceSection::default(),
            appliances: vec![
                from_library(Category::Home, "LED Bulb", 4, true),
                from_library(Category::Home, "Ceiling Fan", 2, false),
                from_library(Category::Home, "Refrigerator (Small)", 1, true),
                from_library(Category::Home, "TV (32\" LED)", 1, false),
                from_library(Category::Home, "Wi-Fi Router", 1, true),
                from_library(Category::Home, "Phone Charger", 2, false),
            ],
        }
    }

    /// Returns the resilience-focused household preset: long backup with a
    /// critical cold chain.
    pub fn home_backup() -> Self {
        Self {
            site: SiteSection {
                backup_hours: 24.0,
                latitude: Some(6.5),
            },
            policy: SizingPolicy::default(),
            irradiance: IrradianceSection::default(),
            appliances: vec![
                from_library(Category::Home, "LED Bulb", 6, true),
                from_library(Category::Home, "Refrigerator (Large)", 1, true),
                from_library(Category::Home, "Freezer (Chest)", 1, true),
                from_library(Category::Home, "Standing Fan", 2, false),
                from_library(Category::Home, "TV (32\" LED)", 1, false),
                from_library(Category::Home, "Laptop", 1, true),
                from_library(Category::Home, "Wi-Fi Router", 1, true),
            ],
        }
    }

    /// Returns the small-office preset: day-focused loads, short backup.
    pub fn office_small() -> Self {
        Self {
            site: SiteSection {
                backup_hours: 8.0,
                latitude: Some(12.0),
            },
            policy: SizingPolicy::default(),
            irradiance: IrradianceSection::default(),
            appliances: vec![
                from_library(Category::Office, "Desktop Computer + Monitor", 4, true),
                from_library(Category::Office, "Laptop", 2, true),
                from_library(Category::Office, "Printer (Inkjet)", 1, false),
                from_library(Category::Office, "Air Conditioner (1HP)", 1, false),
                from_library(Category::Office, "Office Refrigerator", 1, false),
                from_library(Category::Office, "Electric Kettle", 1, false),
            ],
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["home_basic", "home_backup", "office_small"];

    /// Loads a site configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "home_basic" => Ok(Self::home_basic()),
            "home_backup" => Ok(Self::home_backup()),
            "office_small" => Ok(Self::office_small()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a site configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "site".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a site configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid. Slot override
    /// durations are NOT validated here; they are clamped in
    /// [`SiteConfig::build_appliances`].
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(lat) = self.site.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                errors.push(ConfigError {
                    field: "site.latitude".into(),
                    message: format!("must be in [-90, 90], got {lat}"),
                });
            }
        }

        if let Some(monthly) = &self.irradiance.monthly {
            if monthly.len() != 12 {
                errors.push(ConfigError {
                    field: "irradiance.monthly".into(),
                    message: format!("must contain exactly 12 monthly totals, got {}", monthly.len()),
                });
            }
            if monthly.iter().any(|v| *v < 0.0) {
                errors.push(ConfigError {
                    field: "irradiance.monthly".into(),
                    message: "values must be >= 0".into(),
                });
            }
        }

        for (i, a) in self.appliances.iter().enumerate() {
            if a.watts <= 0.0 {
                errors.push(ConfigError {
                    field: format!("appliance[{i}].watts"),
                    message: "must be > 0".into(),
                });
            }
            if a.quantity == 0 {
                errors.push(ConfigError {
                    field: format!("appliance[{i}].quantity"),
                    message: "must be >= 1".into(),
                });
            }
            for slot in &a.slots {
                if a.slots.iter().filter(|s| s.name == slot.name).count() > 1 {
                    errors.push(ConfigError {
                        field: format!("appliance[{i}].slots"),
                        message: format!("window \"{}\" listed more than once", slot.name),
                    });
                    break;
                }
            }
        }

        errors
    }

    /// Builds the appliance set this configuration describes.
    ///
    /// Every listed appliance is selected; override durations are clamped
    /// to their window's natural span here, upstream of aggregation.
    pub fn build_appliances(&self) -> Vec<Appliance> {
        self.appliances
            .iter()
            .map(|cfg| {
                let slots = standard_slots()
                    .into_iter()
                    .map(|slot| {
                        match cfg.slots.iter().find(|s| s.name == slot.name) {
                            Some(active) => TimeSlot {
                                active: true,
                                duration_minutes: active.duration_minutes,
                                ..slot
                            }
                            .clamped(),
                            None => slot,
                        }
                    })
                    .collect();
                Appliance {
                    name: cfg.name.clone(),
                    watts: cfg.watts,
                    quantity: cfg.quantity,
                    slots,
                    selected: true,
                    critical: cfg.critical,
                }
            })
            .collect()
    }

    /// Resolves the irradiance series: measured data when supplied, else
    /// the regional fallback for the configured latitude, else nothing
    /// (sizing falls back to the fixed conservative yield).
    pub fn irradiance_series(&self) -> Option<Vec<MonthlyYield>> {
        if let Some(monthly) = &self.irradiance.monthly {
            return Some(
                monthly
                    .iter()
                    .enumerate()
                    .map(|(i, &kwh)| MonthlyYield {
                        month: i as u8 + 1,
                        kwh_per_kwp: kwh,
                    })
                    .collect(),
            );
        }
        self.site
            .latitude
            .map(|lat| fallback_series(Region::for_latitude(lat)))
    }
}
