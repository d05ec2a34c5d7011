use kurbo::Point;
use std::f64::consts::PI;

use crate::curves;
use crate::models::{BoundingRegion, Motif};
use crate::rng::Mulberry32;
use crate::styles::{StyleName, StyleProfile};

/// Motifs generated per 10 points of intricacy.
const MOTIFS_PER_TEN: f64 = 18.0;

/// Motif centers keep this distance from the region edges.
const CENTER_INSET: f64 = 10.0;

/// Chord smoothing used for layout spirals.
const LAYOUT_SMOOTHING: f64 = 0.25;

/// Pseudo-random draws for one spiral, in stream order. Kept separate from
/// curve construction so the draw sequence itself is testable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SpiralParams {
    pub cx: f64,
    pub cy: f64,
    pub turns: f64,
    pub initial_radius: f64,
    pub rotation: f64,
}

pub(crate) fn draw_spiral_params(
    rng: &mut Mulberry32,
    region: &BoundingRegion,
    style: &StyleProfile,
) -> SpiralParams {
    SpiralParams {
        cx: rng.rand_between(region.min_x + CENTER_INSET, region.min_x + region.width - CENTER_INSET),
        cy: rng.rand_between(region.min_y + CENTER_INSET, region.min_y + region.height - CENTER_INSET),
        turns: rng.rand_between(style.spiral_turns.0, style.spiral_turns.1),
        initial_radius: rng.rand_between(style.initial_radius.0, style.initial_radius.1),
        rotation: rng.rand_between(0.0, PI * 2.0),
    }
}

/// Place motifs inside the bounding region, pseudo-randomly but
/// reproducibly.
///
/// The motif order is the generation order: it fixes the PRNG draw
/// sequence, and the renderer paints motifs in the same order. Every draw,
/// including the leaf-count jitter and the leaf flip, comes from the single
/// seeded stream, so a `(region, style, intricacy, seed)` tuple always
/// yields the identical motif sequence.
pub fn layout(region: &BoundingRegion, style: &StyleProfile, intricacy: u32, seed: i32) -> Vec<Motif> {
    let mut rng = Mulberry32::new(seed);
    let motif_count = ((f64::from(intricacy) / 10.0) * MOTIFS_PER_TEN).floor() as usize;
    log::debug!("laying out {motif_count} motifs (intricacy {intricacy}, seed {seed})");

    let mut motifs = Vec::with_capacity(motif_count);
    for _ in 0..motif_count {
        let p = draw_spiral_params(&mut rng, region, style);
        let center = Point::new(p.cx, p.cy);
        let spiral = curves::spiral(center, p.initial_radius, p.turns, p.rotation, LAYOUT_SMOOTHING);

        let jitter = rng.rand_between(0.8, 1.3);
        let leaf_count = (f64::from(intricacy) * style.leaf_frequency * jitter).floor() as usize;
        let mut leaves = Vec::with_capacity(leaf_count);
        for _ in 0..leaf_count {
            let angle = rng.rand_between(0.0, PI * 2.0);
            let length = rng.rand_between(6.0, 12.0) * style.leaf_scale;
            let offset = rng.rand_between(p.initial_radius * 0.5, p.initial_radius * 3.0);
            let origin = Point::new(p.cx + offset * angle.cos(), p.cy + offset * angle.sin());
            let flipped = rng.next_f64() > 0.5;
            let leaf_angle = if flipped { angle + PI } else { angle };
            leaves.push(curves::leaf(origin, leaf_angle, length));
        }

        motifs.push(Motif { spiral, leaves });
    }
    motifs
}

/// Caller-side memoization of `layout`, keyed on structural equality of the
/// four inputs. Holds the most recent result only; any key change
/// recomputes.
#[derive(Debug, Default)]
pub struct LayoutCache {
    key: Option<CacheKey>,
    motifs: Vec<Motif>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CacheKey {
    region: BoundingRegion,
    style: StyleName,
    intricacy: u32,
    seed: i32,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn motifs(
        &mut self,
        region: &BoundingRegion,
        style: StyleName,
        intricacy: u32,
        seed: i32,
    ) -> &[Motif] {
        let key = CacheKey {
            region: *region,
            style,
            intricacy,
            seed,
        };
        if self.key != Some(key) {
            self.motifs = layout(region, style.profile(), intricacy, seed);
            self.key = Some(key);
        }
        &self.motifs
    }
}
