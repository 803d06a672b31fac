//! Planet physical parameters and surface classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Density (g/cm³) below which a planet is treated as a gas giant.
pub const GAS_DENSITY_LIMIT: f64 = 0.5;
/// Density (g/cm³) below which a planet is treated as an ocean world.
pub const OCEANIC_DENSITY_LIMIT: f64 = 1.0;
/// Equilibrium temperature (K) below which a planet is icy.
pub const ICY_TEMPERATURE_LIMIT: f64 = 200.0;
/// Equilibrium temperature (K) above which a planet is molten.
pub const LAVA_TEMPERATURE_LIMIT: f64 = 500.0;

/// Physical inputs for one planet. Values are taken as-is; absent fields fall
/// back to per-consumer defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetParams {
    /// Display name. Only used for logging and output file naming.
    pub name: String,
    /// Bulk density in g/cm³.
    pub density: Option<f64>,
    /// Equilibrium temperature in Kelvin.
    pub temperature: Option<f64>,
    /// Whether the planet has a known atmosphere.
    pub atmosphere: bool,
}

impl PlanetParams {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    pub fn with_temperature(mut self, kelvin: f64) -> Self {
        self.temperature = Some(kelvin);
        self
    }

    pub fn with_atmosphere(mut self, atmosphere: bool) -> Self {
        self.atmosphere = atmosphere;
        self
    }

    /// Surface archetype for these parameters.
    pub fn archetype(&self) -> SurfaceArchetype {
        classify(self.density, self.temperature)
    }
}

/// Discrete surface style driving every downstream color and detail rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceArchetype {
    Gas,
    Oceanic,
    Icy,
    Lava,
    Rocky,
}

impl SurfaceArchetype {
    pub const ALL: [Self; 5] = [Self::Gas, Self::Oceanic, Self::Icy, Self::Lava, Self::Rocky];

    /// Whether the crater overlay applies.
    pub fn is_cratered(self) -> bool {
        matches!(self, Self::Rocky | Self::Icy)
    }
}

impl fmt::Display for SurfaceArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gas => "gas",
            Self::Oceanic => "oceanic",
            Self::Icy => "icy",
            Self::Lava => "lava",
            Self::Rocky => "rocky",
        };
        f.write_str(name)
    }
}

/// Classify a planet. Density rules are checked before temperature rules and
/// the first match wins; anything unmatched is rocky.
pub fn classify(density: Option<f64>, temperature: Option<f64>) -> SurfaceArchetype {
    match (density, temperature) {
        (Some(d), _) if d < GAS_DENSITY_LIMIT => SurfaceArchetype::Gas,
        (Some(d), _) if d < OCEANIC_DENSITY_LIMIT => SurfaceArchetype::Oceanic,
        (_, Some(t)) if t < ICY_TEMPERATURE_LIMIT => SurfaceArchetype::Icy,
        (_, Some(t)) if t > LAVA_TEMPERATURE_LIMIT => SurfaceArchetype::Lava,
        _ => SurfaceArchetype::Rocky,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_density_is_gas_regardless_of_temperature() {
        for density in [0.0, 0.1, 0.3, 0.49] {
            for temperature in [None, Some(10.0), Some(300.0), Some(2000.0)] {
                assert_eq!(
                    classify(Some(density), temperature),
                    SurfaceArchetype::Gas,
                    "density {density}, temperature {temperature:?}"
                );
            }
        }
    }

    #[test]
    fn test_hot_dense_planets_are_lava() {
        for density in [None, Some(1.0), Some(5.5)] {
            assert_eq!(classify(density, Some(500.1)), SurfaceArchetype::Lava);
            assert_eq!(classify(density, Some(1500.0)), SurfaceArchetype::Lava);
        }
    }

    #[test]
    fn test_density_rules_take_priority() {
        assert_eq!(classify(Some(0.3), Some(900.0)), SurfaceArchetype::Gas);
        assert_eq!(classify(Some(0.7), Some(100.0)), SurfaceArchetype::Oceanic);
        assert_eq!(classify(Some(0.7), Some(900.0)), SurfaceArchetype::Oceanic);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(classify(Some(0.5), None), SurfaceArchetype::Oceanic);
        assert_eq!(classify(Some(1.0), None), SurfaceArchetype::Rocky);
        assert_eq!(classify(None, Some(200.0)), SurfaceArchetype::Rocky);
        assert_eq!(classify(None, Some(500.0)), SurfaceArchetype::Rocky);
        assert_eq!(classify(None, Some(199.9)), SurfaceArchetype::Icy);
    }

    #[test]
    fn test_missing_everything_is_rocky() {
        assert_eq!(classify(None, None), SurfaceArchetype::Rocky);
        assert_eq!(PlanetParams::new("x").archetype(), SurfaceArchetype::Rocky);
    }

    #[test]
    fn test_builder_and_archetype() {
        let planet = PlanetParams::new("TRAPPIST-1 f")
            .with_density(1.2)
            .with_temperature(120.0)
            .with_atmosphere(true);
        assert_eq!(planet.archetype(), SurfaceArchetype::Icy);
        assert!(planet.atmosphere);
    }

    #[test]
    fn test_cratered_archetypes() {
        let cratered: Vec<_> = SurfaceArchetype::ALL
            .into_iter()
            .filter(|a| a.is_cratered())
            .collect();
        assert_eq!(cratered, vec![SurfaceArchetype::Icy, SurfaceArchetype::Rocky]);
    }
}
