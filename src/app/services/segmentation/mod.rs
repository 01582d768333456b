//! Row tail segmentation
//!
//! The tail of an event row holds free-text particulars and an optional
//! active region number, and fixed columns cannot tell them apart. This
//! module resolves the region first, then segments the particulars using an
//! unseeded resolution of the same rows as their anchor.
//!
//! ## Module Organization
//!
//! - [`region`] - Continuity-checked region resolution
//! - [`particulars`] - Tail token span selection for particulars

pub mod particulars;
pub mod region;

#[cfg(test)]
mod tests;

pub use particulars::{extract_particulars, region_anchor, segment_particulars};
pub use region::{RegionResolver, accepted_regions, resolve_regions};

use crate::app::models::{ActiveRegion, RawRow};

/// Region and particulars columns for one day's rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TailSegments {
    pub regions: Vec<Option<ActiveRegion>>,
    pub particulars: Vec<Option<String>>,
}

/// Segment the tails of a day's rows
///
/// The region column is resolved against `seed`. The particulars anchor is
/// read from an unseeded resolution of the same rows, so a seed that
/// rejects the day's early candidates does not take the anchor away.
pub fn segment_tails(rows: &[RawRow], seed: Option<&[ActiveRegion]>) -> TailSegments {
    let regions = resolve_regions(rows, seed);
    let particulars = extract_particulars(rows, &resolve_regions(rows, None));
    TailSegments {
        regions,
        particulars,
    }
}
