//! The synthesis pipeline: classify, pick colors, then run each pass in order.

use rand::Rng;
use tracing::debug;

use crate::base::paint_base;
use crate::buffer::PixelBuffer;
use crate::detail::DetailPass;
use crate::mask::DiskMask;
use crate::noise_field::NoiseField;
use crate::overlay::{CloudLayer, OverlayPlan, apply_atmosphere};
use crate::palette::Palette;
use crate::planet::{PlanetParams, SurfaceArchetype};
use crate::specular::apply_specular;

/// Largest accepted width or height.
pub const MAX_DIMENSION: u32 = 16_384;

/// Errors returned by [`synthesize`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SynthError {
    /// A dimension is zero or larger than [`MAX_DIMENSION`].
    #[error("invalid texture dimensions {width}x{height} (each must be 1..=16384)")]
    InvalidDimension { width: u32, height: u32 },
}

/// A synthesized texture together with the choices that produced it.
#[derive(Clone, Debug)]
pub struct PlanetTexture {
    pub pixels: PixelBuffer,
    pub archetype: SurfaceArchetype,
    pub palette: Palette,
    pub overlays: OverlayPlan,
    /// Present only for planets with an atmosphere.
    pub clouds: Option<CloudLayer>,
    pub ice_caps: bool,
}

impl PlanetTexture {
    pub fn into_pixels(self) -> PixelBuffer {
        self.pixels
    }
}

/// Synthesize the surface texture for `planet`.
///
/// Every random choice is drawn from `rng`, so a seeded RNG gives byte-identical output.
pub fn synthesize<R: Rng>(
    planet: &PlanetParams,
    width: u32,
    height: u32,
    rng: &mut R,
) -> Result<PixelBuffer, SynthError> {
    synthesize_texture(planet, width, height, rng).map(PlanetTexture::into_pixels)
}

/// Like [`synthesize`], but also reports the archetype, palette and overlays used.
///
/// RNG draws happen in a fixed order: palette, terrain noise seed, overlay
/// placement, cloud noise seed.
pub fn synthesize_texture<R: Rng>(
    planet: &PlanetParams,
    width: u32,
    height: u32,
    rng: &mut R,
) -> Result<PlanetTexture, SynthError> {
    if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
        return Err(SynthError::InvalidDimension { width, height });
    }

    let archetype = planet.archetype();
    let palette = Palette::select(archetype, planet.temperature, rng);
    debug!(
        planet = %planet.name,
        %archetype,
        base = ?palette.base,
        accent = ?palette.accent,
        width,
        height,
        "synthesizing planet texture"
    );

    let mask = DiskMask::new(width, height);
    let mut pixels = PixelBuffer::new(width, height);
    paint_base(&mut pixels, &mask, palette.base);

    let terrain = NoiseField::from_rng(rng);
    tracing::trace!(seed = terrain.seed(), "terrain noise seeded");
    let detail = DetailPass::new(archetype, palette, planet.temperature, &terrain);
    detail.apply(&mut pixels, &mask);
    let ice_caps = detail.ice_caps;

    let overlays = OverlayPlan::for_archetype(archetype, rng, width, height);
    overlays.paint(&mut pixels, &mask);

    let clouds = planet.atmosphere.then(|| {
        let cloud_noise = NoiseField::from_rng(rng);
        apply_atmosphere(&mut pixels, &mask, &cloud_noise)
    });

    apply_specular(&mut pixels, &mask);

    Ok(PlanetTexture {
        pixels,
        archetype,
        palette,
        overlays,
        clouds,
        ice_caps,
    })
}
