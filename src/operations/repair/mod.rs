mod extract;
mod merge;
mod strip;

pub use extract::{ContourScan, ExtractContours, MarkerTable, ScanEvent};
pub use merge::{CommonLine, MergeOnCommonLine};
pub use strip::StripPassThrough;

use crate::error::{OperationError, Result};
use crate::geometry::Polygon;
use crate::operations::query::IsValid;

/// Tuning knobs for [`Repair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepairOptions {
    /// Maximum number of extract/strip/merge passes. Repair stops earlier once
    /// the polygon validates or a pass leaves it unchanged.
    pub max_passes: usize,
    /// Drop contours with fewer than three distinct vertices, as long as at
    /// least one proper contour remains.
    pub discard_degenerate: bool,
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self {
            max_passes: 4,
            discard_degenerate: true,
        }
    }
}

/// Best-effort repair of a malformed polygon.
///
/// # Algorithm
///
/// 1. Split the point sequence into closed contours at repeated points. A
///    sequence without repeats is treated as a single contour and closed.
/// 2. Strip pass-through vertices from each contour.
/// 3. Discard degenerate contours (see [`RepairOptions::discard_degenerate`]).
/// 4. Return a lone contour as is; otherwise merge the first two contours on
///    a vertical common line. Further contours are dropped.
/// 5. Repeat until the result validates or stops changing. A pass that leaves
///    contours unmerged ends the repair.
///
/// The result is not guaranteed to be valid. Contours without a vertical
/// common line are returned concatenated, and the caller sees a polygon that
/// still fails [`IsValid`].
#[derive(Debug)]
pub struct Repair {
    polygon: Polygon,
    options: RepairOptions,
}

impl Repair {
    /// Creates a new repair operation with default options.
    #[must_use]
    pub fn new(polygon: Polygon) -> Self {
        Self {
            polygon,
            options: RepairOptions::default(),
        }
    }

    /// Replaces the options.
    #[must_use]
    pub fn with_options(mut self, options: RepairOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the repair.
    ///
    /// A polygon that already validates is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::EmptyInput` if the polygon has no points.
    pub fn execute(&self) -> Result<Polygon> {
        if self.polygon.is_empty() {
            return Err(OperationError::EmptyInput.into());
        }

        let mut current = self.polygon.clone();
        for pass in 0..self.options.max_passes {
            if IsValid::new(&current).execute() {
                tracing::debug!(pass, "polygon is valid");
                return Ok(current);
            }
            match self.repair_pass(&current) {
                PassOutcome::Unmerged(contours) => {
                    tracing::debug!(pass, "contours left unmerged, stopping");
                    return Ok(contours);
                }
                PassOutcome::Contour(next) if next == current => {
                    tracing::debug!(pass, "repair reached a fixpoint");
                    break;
                }
                PassOutcome::Contour(next) => current = next,
            }
        }
        Ok(current)
    }

    fn repair_pass(&self, polygon: &Polygon) -> PassOutcome {
        let mut contours = ExtractContours::new(polygon.points()).execute();
        if contours.is_empty() {
            contours.push(polygon.closed());
        }
        tracing::debug!(count = contours.len(), "extracted contours");

        let mut contours: Vec<Polygon> = contours
            .into_iter()
            .map(|c| Polygon::new(StripPassThrough::new(c.into_points()).execute()))
            .collect();

        if self.options.discard_degenerate && contours.iter().any(|c| !is_degenerate(c)) {
            let before = contours.len();
            contours.retain(|c| !is_degenerate(c));
            if contours.len() < before {
                tracing::debug!(
                    discarded = before - contours.len(),
                    "discarded degenerate contours"
                );
            }
        }

        match contours.as_slice() {
            [] => PassOutcome::Contour(polygon.clone()),
            [single] => PassOutcome::Contour(single.clone()),
            [outer, inner, rest @ ..] => match MergeOnCommonLine::new(outer, inner).try_execute() {
                Some(merged) => {
                    if !rest.is_empty() {
                        tracing::warn!(
                            dropped = rest.len(),
                            "only the first two contours are merged, dropping the rest"
                        );
                    }
                    PassOutcome::Contour(Polygon::new(
                        StripPassThrough::new(merged.into_points()).execute(),
                    ))
                }
                None => {
                    tracing::debug!("no vertical common line, contours left unmerged");
                    PassOutcome::Unmerged(Polygon::concat(&contours))
                }
            },
        }
    }
}

/// Result of one repair pass.
#[derive(Debug)]
enum PassOutcome {
    /// A single contour, possibly the product of a merge.
    Contour(Polygon),
    /// Several contours with no vertical common line, concatenated. Final: a
    /// further pass would split the concatenation at points the contours
    /// share.
    Unmerged(Polygon),
}

/// Fewer than three distinct vertices enclose no area.
fn is_degenerate(contour: &Polygon) -> bool {
    contour.distinct_count() < 3
}
