//! Active region resolution with cross-row continuity
//!
//! A trailing four-digit token is only taken as an active region number when
//! it stays close to recent activity. The first candidate of a day is checked
//! against the most recent region carried over from the previous day (when
//! there is one); every later candidate is checked against the region most
//! recently accepted the same day.

use crate::app::models::{ActiveRegion, RawRow};
use tracing::trace;

/// Stateful resolver for one day's row sequence
///
/// Feed rows in file order. Accepted regions move the anchor; rejected
/// candidates leave it where it was.
#[derive(Debug, Clone, Default)]
pub struct RegionResolver {
    /// `Some(None)` is a supplied seed with nothing in it
    seed: Option<Option<ActiveRegion>>,
    anchor: Option<ActiveRegion>,
}

impl RegionResolver {
    /// Create a resolver seeded with the previous day's accepted regions
    ///
    /// Only the most recent seed entry matters. A supplied but empty seed
    /// has no value to be near, so it rejects every candidate until the
    /// day accepts one, which it never does.
    pub fn new(seed: Option<&[ActiveRegion]>) -> Self {
        Self {
            seed: seed.map(|regions| regions.last().cloned()),
            anchor: None,
        }
    }

    /// Resolve the region of a single row
    pub fn resolve_row(&mut self, row: &RawRow) -> Option<ActiveRegion> {
        let candidate = row.last().and_then(ActiveRegion::parse)?;

        if candidate.is_null() {
            trace!("Rejected placeholder region {}", candidate);
            return None;
        }

        // The same-day anchor takes over from the seed once anything is accepted
        let reference = match (&self.anchor, &self.seed) {
            (Some(anchor), _) => Some(anchor),
            (None, Some(Some(seed))) => Some(seed),
            (None, Some(None)) => {
                trace!("Rejected region {}: previous day has no regions", candidate);
                return None;
            }
            (None, None) => None,
        };
        if let Some(reference) = reference {
            if !candidate.is_near(reference) {
                trace!(
                    "Rejected region {}: outside continuity window of {}",
                    candidate, reference
                );
                return None;
            }
        }

        trace!("Accepted region {}", candidate);
        self.anchor = Some(candidate.clone());
        Some(candidate)
    }

    /// Region most recently accepted this day
    pub fn anchor(&self) -> Option<&ActiveRegion> {
        self.anchor.as_ref()
    }
}

/// Resolve one region value (or absent) per row
pub fn resolve_regions(rows: &[RawRow], seed: Option<&[ActiveRegion]>) -> Vec<Option<ActiveRegion>> {
    let mut resolver = RegionResolver::new(seed);
    rows.iter().map(|row| resolver.resolve_row(row)).collect()
}

/// Non-absent regions in row order
pub fn accepted_regions(regions: &[Option<ActiveRegion>]) -> Vec<ActiveRegion> {
    regions.iter().flatten().cloned().collect()
}
