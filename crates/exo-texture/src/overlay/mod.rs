//! Overlay passes drawn on top of the detailed surface.

mod atmosphere;
mod craters;
mod storms;

pub use atmosphere::{CloudLayer, HAZE, HAZE_OPACITY, apply_atmosphere, cloud_alpha};
pub use craters::{CRATER_ATTEMPTS, CRATER_RADIUS, Crater, plan_craters};
pub use storms::{STORM_COUNT, STORM_RADIUS, STORM_SPREAD, Storm, plan_storms};

use glam::DVec2;
use rand::Rng;

use crate::buffer::PixelBuffer;
use crate::mask::DiskMask;
use crate::planet::SurfaceArchetype;

/// Discrete shapes chosen for one planet.
#[derive(Clone, Debug, PartialEq)]
pub enum OverlayPlan {
    Craters(Vec<Crater>),
    Storms(Vec<Storm>),
    None,
}

impl OverlayPlan {
    /// Craters for rocky and icy planets, storms for gas giants, nothing otherwise.
    pub fn for_archetype<R: Rng>(
        archetype: SurfaceArchetype,
        rng: &mut R,
        width: u32,
        height: u32,
    ) -> Self {
        match archetype {
            SurfaceArchetype::Gas => Self::Storms(plan_storms(rng, width, height)),
            a if a.is_cratered() => Self::Craters(plan_craters(rng, width, height)),
            _ => Self::None,
        }
    }

    /// Centers of every planned shape, in pixel coordinates.
    pub fn centers(&self) -> Vec<DVec2> {
        match self {
            Self::Craters(craters) => craters.iter().map(|c| c.center).collect(),
            Self::Storms(storms) => storms.iter().map(|s| s.center).collect(),
            Self::None => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Craters(craters) => craters.is_empty(),
            Self::Storms(storms) => storms.is_empty(),
            Self::None => true,
        }
    }

    /// Draw the shapes in placement order.
    pub fn paint(&self, buffer: &mut PixelBuffer, mask: &DiskMask) {
        match self {
            Self::Craters(craters) => craters.iter().for_each(|c| c.paint(buffer, mask)),
            Self::Storms(storms) => storms.iter().for_each(|s| s.paint(buffer, mask)),
            Self::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_plan_kind_per_archetype() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for archetype in SurfaceArchetype::ALL {
            let plan = OverlayPlan::for_archetype(archetype, &mut rng, 128, 128);
            match archetype {
                SurfaceArchetype::Gas => assert!(matches!(plan, OverlayPlan::Storms(_))),
                SurfaceArchetype::Rocky | SurfaceArchetype::Icy => {
                    assert!(matches!(plan, OverlayPlan::Craters(_)))
                }
                _ => assert_eq!(plan, OverlayPlan::None),
            }
        }
    }

    #[test]
    fn test_oceanic_and_lava_do_not_consume_rng() {
        use rand::RngCore;
        let mut rng_a = ChaCha8Rng::seed_from_u64(3);
        let mut rng_b = ChaCha8Rng::seed_from_u64(3);
        OverlayPlan::for_archetype(SurfaceArchetype::Oceanic, &mut rng_a, 64, 64);
        OverlayPlan::for_archetype(SurfaceArchetype::Lava, &mut rng_a, 64, 64);
        assert_eq!(rng_a.next_u32(), rng_b.next_u32());
    }

    #[test]
    fn test_all_centers_on_disk_across_archetypes() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mask = DiskMask::new(100, 60);
        let violations = (0..10_000)
            .flat_map(|i| {
                let archetype = [SurfaceArchetype::Gas, SurfaceArchetype::Rocky][i % 2];
                OverlayPlan::for_archetype(archetype, &mut rng, 100, 60).centers()
            })
            .filter(|c| mask.radius_at(c.x, c.y) > 1.0)
            .count();
        assert_eq!(violations, 0);
    }

    #[test]
    fn test_none_plan_paints_nothing() {
        let mut buffer = PixelBuffer::new(8, 8);
        OverlayPlan::None.paint(&mut buffer, &DiskMask::new(8, 8));
        assert!(buffer.as_raw().iter().all(|&b| b == 0));
        assert!(OverlayPlan::None.is_empty());
    }
}
