//! Procedural exoplanet surface textures.
//!
//! A planet's density and equilibrium temperature pick a surface archetype and
//! palette; the texture is then built in fixed passes over an owned RGBA
//! buffer: background gradient, noise terrain, craters or storms, optional
//! atmosphere, and a specular glint. All randomness comes from the caller's RNG.

mod base;
mod buffer;
mod color;
mod detail;
mod gradient;
mod mask;
mod noise_field;
mod palette;
mod planet;
mod specular;
mod synth;

pub mod catalog;
pub mod overlay;
pub mod seed;

pub use base::{base_gradient, paint_base};
pub use buffer::PixelBuffer;
pub use catalog::{Catalog, CatalogError};
pub use color::{Paint, Rgb};
pub use detail::{
    DetailPass, DetailScales, apply_ice, gas_band_delta, has_ice_caps, ice_cap_strength,
};
pub use gradient::{ColorStop, RadialGradient};
pub use mask::DiskMask;
pub use noise_field::NoiseField;
pub use overlay::{CloudLayer, Crater, OverlayPlan, Storm};
pub use palette::{DEFAULT_TEMPERATURE, GAS_GIANT_COLORS, Palette, accent_color};
pub use planet::{PlanetParams, SurfaceArchetype, classify};
pub use specular::apply_specular;
pub use synth::{MAX_DIMENSION, PlanetTexture, SynthError, synthesize, synthesize_texture};
