//! Base and accent color selection per archetype and temperature.

use rand::Rng;

use crate::color::Rgb;
use crate::planet::SurfaceArchetype;

/// Temperature (K) assumed by the color rules when none is known.
pub const DEFAULT_TEMPERATURE: f64 = 300.0;

/// Gas giant base colors; one is drawn per synthesis.
pub const GAS_GIANT_COLORS: [Rgb; 5] = [
    Rgb::from_hex(0xff7733),
    Rgb::from_hex(0xffaa55),
    Rgb::from_hex(0xcc5533),
    Rgb::from_hex(0xffcc99),
    Rgb::from_hex(0xaa7744),
];

/// Base and accent colors for one synthesis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub base: Rgb,
    pub accent: Rgb,
}

impl Palette {
    /// Pick the palette for an archetype. `rng` is only consulted for gas giants.
    pub fn select<R: Rng>(
        archetype: SurfaceArchetype,
        temperature: Option<f64>,
        rng: &mut R,
    ) -> Self {
        let temperature = temperature.unwrap_or(DEFAULT_TEMPERATURE);
        let base = match archetype {
            SurfaceArchetype::Gas => GAS_GIANT_COLORS[rng.random_range(0..GAS_GIANT_COLORS.len())],
            SurfaceArchetype::Oceanic => ocean_color(temperature),
            SurfaceArchetype::Icy => ice_color(temperature),
            SurfaceArchetype::Lava => lava_color(temperature),
            SurfaceArchetype::Rocky => rock_color(temperature),
        };
        Self {
            base,
            accent: accent_color(archetype),
        }
    }
}

/// Fixed highlight color for surface features.
pub fn accent_color(archetype: SurfaceArchetype) -> Rgb {
    match archetype {
        SurfaceArchetype::Gas => Rgb::from_hex(0xffcc00),
        SurfaceArchetype::Oceanic => Rgb::from_hex(0x00ff80),
        SurfaceArchetype::Icy => Rgb::from_hex(0xa0e0ff),
        SurfaceArchetype::Lava => Rgb::from_hex(0xff3300),
        SurfaceArchetype::Rocky => Rgb::from_hex(0xffaa00),
    }
}

fn ocean_color(temperature: f64) -> Rgb {
    if temperature > 320.0 {
        Rgb::from_hex(0x1e90ff)
    } else if temperature > 280.0 {
        Rgb::from_hex(0x00bfff)
    } else {
        Rgb::from_hex(0x4682b4)
    }
}

fn ice_color(temperature: f64) -> Rgb {
    if temperature < 100.0 {
        Rgb::from_hex(0xe0f7ff)
    } else if temperature < 150.0 {
        Rgb::from_hex(0xc0e0ff)
    } else {
        Rgb::from_hex(0xa0c0ff)
    }
}

fn lava_color(temperature: f64) -> Rgb {
    if temperature > 900.0 {
        Rgb::from_hex(0xff3300)
    } else if temperature > 700.0 {
        Rgb::from_hex(0xcc3300)
    } else {
        Rgb::from_hex(0x993300)
    }
}

fn rock_color(temperature: f64) -> Rgb {
    if temperature > 350.0 {
        Rgb::from_hex(0xb5651d)
    } else if temperature > 280.0 {
        Rgb::from_hex(0x8b4513)
    } else {
        Rgb::from_hex(0x5d4037)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pick(archetype: SurfaceArchetype, temperature: Option<f64>) -> Palette {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        Palette::select(archetype, temperature, &mut rng)
    }

    #[test]
    fn test_ocean_bands() {
        assert_eq!(pick(SurfaceArchetype::Oceanic, Some(330.0)).base, Rgb::from_hex(0x1e90ff));
        assert_eq!(pick(SurfaceArchetype::Oceanic, Some(300.0)).base, Rgb::from_hex(0x00bfff));
        assert_eq!(pick(SurfaceArchetype::Oceanic, Some(280.0)).base, Rgb::from_hex(0x4682b4));
    }

    #[test]
    fn test_ice_bands() {
        assert_eq!(pick(SurfaceArchetype::Icy, Some(50.0)).base, Rgb::from_hex(0xe0f7ff));
        assert_eq!(pick(SurfaceArchetype::Icy, Some(120.0)).base, Rgb::from_hex(0xc0e0ff));
        assert_eq!(pick(SurfaceArchetype::Icy, Some(190.0)).base, Rgb::from_hex(0xa0c0ff));
    }

    #[test]
    fn test_lava_bands() {
        assert_eq!(pick(SurfaceArchetype::Lava, Some(1000.0)).base, Rgb::from_hex(0xff3300));
        assert_eq!(pick(SurfaceArchetype::Lava, Some(800.0)).base, Rgb::from_hex(0xcc3300));
        assert_eq!(pick(SurfaceArchetype::Lava, Some(600.0)).base, Rgb::from_hex(0x993300));
    }

    #[test]
    fn test_rock_bands() {
        assert_eq!(pick(SurfaceArchetype::Rocky, Some(400.0)).base, Rgb::from_hex(0xb5651d));
        assert_eq!(pick(SurfaceArchetype::Rocky, Some(300.0)).base, Rgb::from_hex(0x8b4513));
        assert_eq!(pick(SurfaceArchetype::Rocky, Some(250.0)).base, Rgb::from_hex(0x5d4037));
    }

    #[test]
    fn test_missing_temperature_uses_default() {
        // 300 K: temperate ocean, earth-like rock.
        assert_eq!(pick(SurfaceArchetype::Oceanic, None).base, Rgb::from_hex(0x00bfff));
        assert_eq!(pick(SurfaceArchetype::Rocky, None).base, Rgb::from_hex(0x8b4513));
    }

    #[test]
    fn test_accent_ignores_temperature() {
        for archetype in SurfaceArchetype::ALL {
            assert_eq!(pick(archetype, Some(10.0)).accent, pick(archetype, Some(1000.0)).accent);
            assert_eq!(pick(archetype, None).accent, accent_color(archetype));
        }
    }

    #[test]
    fn test_gas_base_drawn_from_fixed_set() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let palette = Palette::select(SurfaceArchetype::Gas, None, &mut rng);
            assert!(GAS_GIANT_COLORS.contains(&palette.base));
            seen.insert(palette.base);
        }
        assert_eq!(seen.len(), GAS_GIANT_COLORS.len(), "all gas colors should appear");
    }

    #[test]
    fn test_non_gas_does_not_consume_rng() {
        use rand::RngCore;
        let mut rng_a = ChaCha8Rng::seed_from_u64(5);
        let mut rng_b = ChaCha8Rng::seed_from_u64(5);
        Palette::select(SurfaceArchetype::Rocky, Some(300.0), &mut rng_a);
        assert_eq!(rng_a.next_u64(), rng_b.next_u64());
    }
}
