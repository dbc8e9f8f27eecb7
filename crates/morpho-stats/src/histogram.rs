//! Trait histograms written into caller-provided buffers.
//!
//! Every value maps to bin `floor((v - lo) / (hi - lo) * N)`, clamped to
//! `[0, N-1]`. Values at `hi`, values drifting past either bound, and NaN
//! all land in a boundary bin, so every individual is counted exactly once
//! per histogram: the bin total always equals the population size (before
//! any [`HistogramScale::Fraction`] scaling).
//!
//! Buffers are validated in full before the first write. On error the
//! caller's buffer is left untouched; on success every cell is overwritten.

use crate::range::{TraitBounds, TraitRange};
use morpho_core::{StatsError, TraitSnapshot};
use smallvec::SmallVec;

/// Clamped linear bin index of `value` in `[lo, hi]` split into `bins` bins.
///
/// Returns 0 for values at or below `lo` and for NaN, `bins - 1` for
/// values at or above `hi`.
///
/// # Examples
///
/// ```
/// use morpho_stats::histogram::bin_index;
///
/// assert_eq!(bin_index(0.0, 0.0, 10.0, 5), 0);
/// assert_eq!(bin_index(5.0, 0.0, 10.0, 5), 2);
/// assert_eq!(bin_index(10.0, 0.0, 10.0, 5), 4);
/// assert_eq!(bin_index(10.5, 0.0, 10.0, 5), 4);
/// assert_eq!(bin_index(-3.0, 0.0, 10.0, 5), 0);
/// ```
pub fn bin_index(value: f64, lo: f64, hi: f64, bins: usize) -> usize {
    debug_assert!(bins > 0, "bin_index requires at least one bin");
    let x = (value - lo) / (hi - lo) * bins as f64;
    if x.is_nan() || x <= 0.0 {
        return 0;
    }
    // Float-to-int casts saturate, so +inf lands in the last bin too.
    (x as usize).min(bins.saturating_sub(1))
}

/// How bin contents are scaled after counting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistogramScale {
    /// Raw individual counts. Bins sum to the population size.
    #[default]
    Counts,
    /// Counts divided by the population size. Bins sum to 1 for a
    /// non-empty population.
    Fraction,
}

impl HistogramScale {
    fn apply(self, bins: &mut [f64], population: usize) {
        if self == Self::Fraction && population > 0 {
            let inv = 1.0 / population as f64;
            bins.iter_mut().for_each(|b| *b *= inv);
        }
    }
}

/// Outcome of one binning call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinningReport {
    /// Number of individuals binned.
    pub population: usize,
    /// Individuals with at least one binned value outside its trait
    /// bounds (including NaN), counted in a boundary bin.
    pub clamped: usize,
    /// Individuals with at least one binned NaN value.
    pub non_finite: usize,
}

impl BinningReport {
    fn record(&mut self, values: impl IntoIterator<Item = (f64, TraitRange)>) {
        self.population += 1;
        let mut clamped = false;
        let mut nan = false;
        for (v, range) in values {
            clamped |= !range.contains(v);
            nan |= v.is_nan();
        }
        self.clamped += usize::from(clamped);
        self.non_finite += usize::from(nan);
    }
}

fn check_snapshot(snapshot: &TraitSnapshot<'_>, bounds: &TraitBounds) -> Result<(), StatsError> {
    if snapshot.ntraits() != bounds.ntraits() {
        return Err(StatsError::PopulationShape {
            reason: format!(
                "snapshot has {} trait(s) per individual, species has {}",
                snapshot.ntraits(),
                bounds.ntraits()
            ),
        });
    }
    Ok(())
}

/// Bin every trait of every individual into `bins[t]`.
///
/// `bins` must hold one non-empty row per trait; rows may differ in
/// length (each row's length is that trait's bin count).
pub fn histogram_1d_into(
    snapshot: &TraitSnapshot<'_>,
    bounds: &TraitBounds,
    scale: HistogramScale,
    bins: &mut [Vec<f64>],
) -> Result<BinningReport, StatsError> {
    check_snapshot(snapshot, bounds)?;
    if bins.len() != bounds.ntraits() {
        return Err(StatsError::BufferShape {
            reason: format!(
                "expected {} histogram row(s), one per trait, got {}",
                bounds.ntraits(),
                bins.len()
            ),
        });
    }
    if let Some(t) = bins.iter().position(|row| row.is_empty()) {
        return Err(StatsError::BufferShape {
            reason: format!("histogram row for trait {t} has no bins"),
        });
    }

    for row in bins.iter_mut() {
        row.fill(0.0);
    }
    let mut report = BinningReport::default();
    for individual in snapshot.individuals() {
        for ((row, &v), range) in bins.iter_mut().zip(individual).zip(bounds.iter()) {
            let n = row.len();
            row[bin_index(v, range.min, range.max, n)] += 1.0;
        }
        report.record(individual.iter().copied().zip(bounds.iter()));
    }
    for row in bins.iter_mut() {
        scale.apply(row, report.population);
    }
    Ok(report)
}

/// Dimensions of a 2D histogram grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    /// Bins along the row axis.
    pub rows: usize,
    /// Bins along the column axis.
    pub cols: usize,
}

impl GridShape {
    /// An `n x n` grid.
    pub fn square(n: usize) -> Self {
        Self { rows: n, cols: n }
    }

    /// Total number of cells, or `None` on overflow.
    pub fn cells(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// The square grid with exactly `len` cells, if `len` is a non-zero
    /// perfect square.
    ///
    /// ```
    /// use morpho_stats::GridShape;
    ///
    /// assert_eq!(GridShape::infer_square(16), Some(GridShape::square(4)));
    /// assert_eq!(GridShape::infer_square(15), None);
    /// assert_eq!(GridShape::infer_square(0), None);
    /// ```
    pub fn infer_square(len: usize) -> Option<Self> {
        let n = len.isqrt();
        (n > 0 && n * n == len).then_some(Self::square(n))
    }
}

/// Order in which grid cells are flattened into the buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScanOrder {
    /// `idx = row * cols + col`: the lattice scan order.
    #[default]
    RowMajor,
    /// `idx = col * rows + row`.
    ColumnMajor,
}

impl ScanOrder {
    /// Flat buffer index of cell `(row, col)` in a grid of `shape`.
    pub fn flat_index(self, row: usize, col: usize, shape: GridShape) -> usize {
        match self {
            Self::RowMajor => row * shape.cols + col,
            Self::ColumnMajor => col * shape.rows + row,
        }
    }
}

/// Which requested trait drives which grid axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisOrientation {
    /// `trait1` selects the row, `trait2` the column.
    #[default]
    Trait1Rows,
    /// `trait1` selects the column, `trait2` the row.
    Trait1Columns,
}

/// Buffer layout agreed with the rendering side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LatticeLayout {
    /// Flattening order.
    pub order: ScanOrder,
    /// Trait-to-axis assignment.
    pub orientation: AxisOrientation,
}

/// A validated 2D binning request.
///
/// Produced by [`Grid2DPlan::resolve`], which also handles the
/// single-trait fallback: both axes use trait 0 and the grid has one
/// axis of size 1, so the 2D histogram is the 1D histogram in grid form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid2DPlan {
    /// Trait binned along the row axis.
    pub row_trait: usize,
    /// Trait binned along the column axis.
    pub col_trait: usize,
    /// Grid dimensions.
    pub shape: GridShape,
}

impl Grid2DPlan {
    /// Validate a 2D request against the species' trait count and the
    /// caller's buffer length.
    ///
    /// Without an explicit `shape`, multi-trait species require a square
    /// buffer and single-trait species use `buffer_len x 1`.
    pub fn resolve(
        ntraits: usize,
        buffer_len: usize,
        trait1: usize,
        trait2: usize,
        shape: Option<GridShape>,
        orientation: AxisOrientation,
    ) -> Result<Self, StatsError> {
        if buffer_len == 0 {
            return Err(StatsError::BufferShape {
                reason: "2D histogram buffer is empty".into(),
            });
        }
        if let Some(s) = shape {
            if s.rows == 0 || s.cols == 0 || s.cells() != Some(buffer_len) {
                return Err(StatsError::BufferShape {
                    reason: format!(
                        "grid {}x{} does not match buffer length {}",
                        s.rows, s.cols, buffer_len
                    ),
                });
            }
        }

        if ntraits == 1 {
            let shape = match shape {
                Some(s) if s.rows != 1 && s.cols != 1 => {
                    return Err(StatsError::BufferShape {
                        reason: format!(
                            "single-trait species needs a grid with one axis of size 1, got {}x{}",
                            s.rows, s.cols
                        ),
                    });
                }
                Some(s) => s,
                None => GridShape {
                    rows: buffer_len,
                    cols: 1,
                },
            };
            return Ok(Self {
                row_trait: 0,
                col_trait: 0,
                shape,
            });
        }

        for index in [trait1, trait2] {
            if index >= ntraits {
                return Err(StatsError::TraitIndexOutOfRange { index, ntraits });
            }
        }
        let shape = match shape {
            Some(s) => s,
            None => GridShape::infer_square(buffer_len).ok_or_else(|| StatsError::BufferShape {
                reason: format!("buffer length {buffer_len} is not a square number of bins"),
            })?,
        };
        let (row_trait, col_trait) = match orientation {
            AxisOrientation::Trait1Rows => (trait1, trait2),
            AxisOrientation::Trait1Columns => (trait2, trait1),
        };
        Ok(Self {
            row_trait,
            col_trait,
            shape,
        })
    }
}

/// Bin the joint distribution of two traits into a flat grid buffer.
pub fn histogram_2d_into(
    snapshot: &TraitSnapshot<'_>,
    bounds: &TraitBounds,
    plan: &Grid2DPlan,
    order: ScanOrder,
    scale: HistogramScale,
    bins: &mut [f64],
) -> Result<BinningReport, StatsError> {
    check_snapshot(snapshot, bounds)?;
    if plan.shape.cells() != Some(bins.len()) {
        return Err(StatsError::BufferShape {
            reason: format!(
                "buffer length {} != {}x{}",
                bins.len(),
                plan.shape.rows,
                plan.shape.cols
            ),
        });
    }
    let (row_range, col_range) = match (bounds.range(plan.row_trait), bounds.range(plan.col_trait)) {
        (Some(r), Some(c)) => (r, c),
        _ => {
            return Err(StatsError::TraitIndexOutOfRange {
                index: plan.row_trait.max(plan.col_trait),
                ntraits: bounds.ntraits(),
            })
        }
    };

    bins.fill(0.0);
    let mut report = BinningReport::default();
    for individual in snapshot.individuals() {
        let rv = individual[plan.row_trait];
        let cv = individual[plan.col_trait];
        let row = bin_index(rv, row_range.min, row_range.max, plan.shape.rows);
        let col = bin_index(cv, col_range.min, col_range.max, plan.shape.cols);
        bins[order.flat_index(row, col, plan.shape)] += 1.0;
        report.record([(rv, row_range), (cv, col_range)]);
    }
    scale.apply(bins, report.population);
    Ok(report)
}

/// Mean and population standard deviation of one trait.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TraitMoments {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub sdev: f64,
}

/// Per-trait mean and standard deviation over a snapshot.
///
/// An empty snapshot yields all-zero moments.
pub fn trait_moments(snapshot: &TraitSnapshot<'_>) -> SmallVec<[TraitMoments; 4]> {
    let ntraits = snapshot.ntraits();
    // Welford accumulators: (mean, m2).
    let mut acc: SmallVec<[(f64, f64); 4]> = SmallVec::from_elem((0.0, 0.0), ntraits);
    for (n, individual) in snapshot.individuals().enumerate() {
        let k = (n + 1) as f64;
        for ((mean, m2), &v) in acc.iter_mut().zip(individual) {
            let delta = v - *mean;
            *mean += delta / k;
            *m2 += delta * (v - *mean);
        }
    }
    let n = snapshot.len();
    acc.into_iter()
        .map(|(mean, m2)| TraitMoments {
            mean,
            sdev: if n > 0 { (m2 / n as f64).sqrt() } else { 0.0 },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bounds_1d(lo: f64, hi: f64) -> TraitBounds {
        TraitBounds::single(lo, hi).unwrap()
    }

    fn bounds_2d() -> TraitBounds {
        TraitBounds::new([TraitRange::new(0.0, 1.0), TraitRange::new(0.0, 4.0)]).unwrap()
    }

    #[test]
    fn width_two_bins_over_zero_to_ten() {
        let values = [0.0, 2.0, 4.9, 5.0, 9.99, 10.0];
        let snap = TraitSnapshot::new(&values, 1).unwrap();
        let mut bins = vec![vec![0.0; 5]];
        let report =
            histogram_1d_into(&snap, &bounds_1d(0.0, 10.0), HistogramScale::Counts, &mut bins)
                .unwrap();
        // 4.9 and 5.0 share [4,6); 9.99 and the upper bound share [8,10].
        assert_eq!(bins[0], vec![1.0, 1.0, 2.0, 0.0, 2.0]);
        assert_eq!(report.population, 6);
        assert_eq!(report.clamped, 0);
    }

    #[test]
    fn out_of_range_values_are_clamped_not_dropped() {
        let hi = 10.0;
        let values = [hi + 1e-9, -1e-9, f64::INFINITY, f64::NEG_INFINITY];
        let snap = TraitSnapshot::new(&values, 1).unwrap();
        let mut bins = vec![vec![0.0; 5]];
        let report =
            histogram_1d_into(&snap, &bounds_1d(0.0, hi), HistogramScale::Counts, &mut bins)
                .unwrap();
        assert_eq!(bins[0], vec![2.0, 0.0, 0.0, 0.0, 2.0]);
        assert_eq!(report.clamped, 4);
        assert_eq!(report.non_finite, 0);
    }

    #[test]
    fn nan_lands_in_first_bin() {
        let values = [f64::NAN, 0.5];
        let snap = TraitSnapshot::new(&values, 1).unwrap();
        let mut bins = vec![vec![0.0; 2]];
        let report =
            histogram_1d_into(&snap, &bounds_1d(0.0, 1.0), HistogramScale::Counts, &mut bins)
                .unwrap();
        assert_eq!(bins[0], vec![1.0, 1.0]);
        assert_eq!(report.non_finite, 1);
        assert_eq!(report.clamped, 1);
    }

    #[test]
    fn stale_buffers_are_overwritten() {
        let values = [0.1, 0.9];
        let snap = TraitSnapshot::new(&values, 1).unwrap();
        let mut bins = vec![vec![42.0; 4]];
        histogram_1d_into(&snap, &bounds_1d(0.0, 1.0), HistogramScale::Counts, &mut bins).unwrap();
        assert_eq!(bins[0], vec![1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn empty_population_zeroes_every_bin() {
        let snap = TraitSnapshot::new(&[], 2).unwrap();
        let mut bins = vec![vec![7.0; 3], vec![7.0; 2]];
        let report =
            histogram_1d_into(&snap, &bounds_2d(), HistogramScale::Fraction, &mut bins).unwrap();
        assert_eq!(report.population, 0);
        assert!(bins.iter().flatten().all(|&b| b == 0.0));
    }

    #[test]
    fn rows_may_have_different_bin_counts() {
        let values = [0.5, 3.9, 0.0, 0.0];
        let snap = TraitSnapshot::new(&values, 2).unwrap();
        let mut bins = vec![vec![0.0; 2], vec![0.0; 4]];
        histogram_1d_into(&snap, &bounds_2d(), HistogramScale::Counts, &mut bins).unwrap();
        assert_eq!(bins[0], vec![1.0, 1.0]);
        assert_eq!(bins[1], vec![1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn fraction_scale_sums_to_one() {
        let values = [0.1, 0.2, 0.3, 0.9];
        let snap = TraitSnapshot::new(&values, 1).unwrap();
        let mut bins = vec![vec![0.0; 2]];
        histogram_1d_into(&snap, &bounds_1d(0.0, 1.0), HistogramScale::Fraction, &mut bins)
            .unwrap();
        assert_eq!(bins[0], vec![0.75, 0.25]);
    }

    #[test]
    fn wrong_row_count_leaves_buffer_untouched() {
        let values = [0.1, 0.2];
        let snap = TraitSnapshot::new(&values, 2).unwrap();
        let mut bins = vec![vec![9.0; 3]];
        let err =
            histogram_1d_into(&snap, &bounds_2d(), HistogramScale::Counts, &mut bins).unwrap_err();
        assert!(matches!(err, StatsError::BufferShape { .. }));
        assert_eq!(bins[0], vec![9.0; 3]);
    }

    #[test]
    fn empty_row_is_rejected() {
        let snap = TraitSnapshot::new(&[0.1, 0.2], 2).unwrap();
        let mut bins = vec![vec![0.0; 3], vec![]];
        let err =
            histogram_1d_into(&snap, &bounds_2d(), HistogramScale::Counts, &mut bins).unwrap_err();
        assert!(err.to_string().contains("trait 1"), "got: {err}");
    }

    #[test]
    fn snapshot_trait_count_must_match_bounds() {
        let snap = TraitSnapshot::new(&[0.1, 0.2], 1).unwrap();
        let mut bins = vec![vec![0.0; 3], vec![0.0; 3]];
        let err =
            histogram_1d_into(&snap, &bounds_2d(), HistogramScale::Counts, &mut bins).unwrap_err();
        assert!(matches!(err, StatsError::PopulationShape { .. }));
    }

    #[test]
    fn resolve_infers_square_grid() {
        let plan = Grid2DPlan::resolve(2, 9, 0, 1, None, AxisOrientation::Trait1Rows).unwrap();
        assert_eq!(plan.shape, GridShape::square(3));
        assert_eq!((plan.row_trait, plan.col_trait), (0, 1));

        let err = Grid2DPlan::resolve(2, 8, 0, 1, None, AxisOrientation::Trait1Rows).unwrap_err();
        assert!(matches!(err, StatsError::BufferShape { .. }));
    }

    #[test]
    fn resolve_honours_orientation() {
        let plan = Grid2DPlan::resolve(3, 4, 2, 0, None, AxisOrientation::Trait1Columns).unwrap();
        assert_eq!((plan.row_trait, plan.col_trait), (0, 2));
    }

    #[test]
    fn resolve_rejects_bad_trait_index() {
        let err = Grid2DPlan::resolve(2, 4, 0, 2, None, AxisOrientation::Trait1Rows).unwrap_err();
        assert_eq!(
            err,
            StatsError::TraitIndexOutOfRange {
                index: 2,
                ntraits: 2
            }
        );
    }

    #[test]
    fn resolve_single_trait_ignores_trait_indices() {
        let plan = Grid2DPlan::resolve(1, 6, 5, 9, None, AxisOrientation::Trait1Rows).unwrap();
        assert_eq!(plan.shape, GridShape { rows: 6, cols: 1 });
        assert_eq!((plan.row_trait, plan.col_trait), (0, 0));

        let explicit = GridShape { rows: 1, cols: 6 };
        let plan =
            Grid2DPlan::resolve(1, 6, 0, 0, Some(explicit), AxisOrientation::Trait1Rows).unwrap();
        assert_eq!(plan.shape, explicit);

        let err = Grid2DPlan::resolve(
            1,
            6,
            0,
            0,
            Some(GridShape { rows: 2, cols: 3 }),
            AxisOrientation::Trait1Rows,
        )
        .unwrap_err();
        assert!(matches!(err, StatsError::BufferShape { .. }));
    }

    #[test]
    fn resolve_rejects_mismatched_explicit_shape() {
        let err = Grid2DPlan::resolve(
            2,
            12,
            0,
            1,
            Some(GridShape { rows: 3, cols: 3 }),
            AxisOrientation::Trait1Rows,
        )
        .unwrap_err();
        assert!(err.to_string().contains("3x3"), "got: {err}");
    }

    #[test]
    fn resolve_rejects_overflowing_shape() {
        let huge = GridShape {
            rows: usize::MAX / 2 + 2,
            cols: 2,
        };
        assert_eq!(huge.cells(), None);
        let err = Grid2DPlan::resolve(2, 4, 0, 1, Some(huge), AxisOrientation::Trait1Rows)
            .unwrap_err();
        assert!(matches!(err, StatsError::BufferShape { .. }));
    }

    #[test]
    fn rows_are_binned_by_their_own_length() {
        let values = [0.26, 0.26, 0.74, 0.74];
        let snap = TraitSnapshot::new(&values, 2).unwrap();
        let bounds = TraitBounds::new([TraitRange::new(0.0, 1.0), TraitRange::new(0.0, 1.0)])
            .unwrap();
        let mut bins = vec![vec![0.0; 2], vec![0.0; 4]];
        histogram_1d_into(&snap, &bounds, HistogramScale::Counts, &mut bins).unwrap();
        assert_eq!(bins[0], vec![1.0, 1.0]);
        assert_eq!(bins[1], vec![0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn joint_histogram_uses_lattice_scan_order() {
        // (trait0, trait1) pairs on bounds [0,1] x [0,4], 2x2 grid.
        let values = [0.1, 0.5, 0.9, 0.5, 0.9, 3.5];
        let snap = TraitSnapshot::new(&values, 2).unwrap();
        let plan = Grid2DPlan::resolve(2, 4, 0, 1, None, AxisOrientation::Trait1Rows).unwrap();
        let mut bins = vec![0.0; 4];
        let bounds = bounds_2d();
        let counts = HistogramScale::Counts;
        histogram_2d_into(&snap, &bounds, &plan, ScanOrder::RowMajor, counts, &mut bins).unwrap();
        // Rows follow trait 0, columns trait 1.
        assert_eq!(bins, vec![1.0, 0.0, 1.0, 1.0]);

        histogram_2d_into(&snap, &bounds, &plan, ScanOrder::ColumnMajor, counts, &mut bins).unwrap();
        assert_eq!(bins, vec![1.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn joint_histogram_counts_clamped_individuals_once() {
        let values = [2.0, 9.0, 0.5, 1.0];
        let snap = TraitSnapshot::new(&values, 2).unwrap();
        let plan = Grid2DPlan::resolve(2, 4, 0, 1, None, AxisOrientation::Trait1Rows).unwrap();
        let mut bins = vec![0.0; 4];
        let report = histogram_2d_into(
            &snap,
            &bounds_2d(),
            &plan,
            ScanOrder::RowMajor,
            HistogramScale::Counts,
            &mut bins,
        )
        .unwrap();
        assert_eq!(bins, vec![0.0, 0.0, 1.0, 1.0]);
        assert_eq!(report.clamped, 1);
    }

    #[test]
    fn moments_of_known_population() {
        let values = [1.0, 10.0, 3.0, 10.0];
        let snap = TraitSnapshot::new(&values, 2).unwrap();
        let m = trait_moments(&snap);
        assert_eq!(m.len(), 2);
        assert!((m[0].mean - 2.0).abs() < 1e-12);
        assert!((m[0].sdev - 1.0).abs() < 1e-12);
        assert_eq!(m[1], TraitMoments { mean: 10.0, sdev: 0.0 });
    }

    #[test]
    fn moments_of_empty_population_are_zero() {
        let snap = TraitSnapshot::new(&[], 3).unwrap();
        let m = trait_moments(&snap);
        assert_eq!(m.as_slice(), &[TraitMoments::default(); 3]);
    }

    proptest! {
        #[test]
        fn bin_index_is_always_in_range(
            v in prop::num::f64::ANY,
            lo in -100.0f64..100.0,
            width in 1e-6f64..100.0,
            n in 1usize..64,
        ) {
            prop_assert!(bin_index(v, lo, lo + width, n) < n);
        }

        #[test]
        fn bounds_map_to_first_and_last_bin(
            lo in -100.0f64..100.0,
            width in 1e-3f64..100.0,
            n in 1usize..64,
        ) {
            let hi = lo + width;
            prop_assert_eq!(bin_index(lo, lo, hi, n), 0);
            prop_assert_eq!(bin_index(hi, lo, hi, n), n - 1);
        }

        #[test]
        fn histogram_1d_conserves_population(
            values in prop::collection::vec(-2.0f64..12.0, 0..200),
            n in 1usize..32,
        ) {
            let snap = TraitSnapshot::new(&values, 1).unwrap();
            let mut bins = vec![vec![0.0; n]];
            let report =
                histogram_1d_into(&snap, &bounds_1d(0.0, 10.0), HistogramScale::Counts, &mut bins)
                    .unwrap();
            prop_assert_eq!(bins[0].iter().sum::<f64>() as usize, values.len());
            prop_assert_eq!(report.population, values.len());
        }

        #[test]
        fn histogram_2d_conserves_population(
            pairs in prop::collection::vec((-0.5f64..1.5, -1.0f64..5.0), 0..200),
            n in 1usize..16,
            column_major in any::<bool>(),
        ) {
            let values: Vec<f64> = pairs.iter().flat_map(|&(a, b)| [a, b]).collect();
            let snap = TraitSnapshot::new(&values, 2).unwrap();
            let plan =
                Grid2DPlan::resolve(2, n * n, 1, 0, None, AxisOrientation::Trait1Rows).unwrap();
            let order = if column_major { ScanOrder::ColumnMajor } else { ScanOrder::RowMajor };
            let mut bins = vec![0.0; n * n];
            histogram_2d_into(&snap, &bounds_2d(), &plan, order, HistogramScale::Counts, &mut bins)
                .unwrap();
            prop_assert_eq!(bins.iter().sum::<f64>() as usize, pairs.len());
        }

        #[test]
        fn single_trait_grid_matches_1d_histogram(
            values in prop::collection::vec(-1.0f64..11.0, 0..100),
            n in 1usize..32,
            column_major in any::<bool>(),
            wide in any::<bool>(),
        ) {
            let bounds = bounds_1d(0.0, 10.0);
            let snap = TraitSnapshot::new(&values, 1).unwrap();
            let mut rows = vec![vec![0.0; n]];
            histogram_1d_into(&snap, &bounds, HistogramScale::Counts, &mut rows).unwrap();

            let shape = wide.then_some(GridShape { rows: 1, cols: n });
            let plan =
                Grid2DPlan::resolve(1, n, 3, 7, shape, AxisOrientation::Trait1Columns).unwrap();
            let order = if column_major { ScanOrder::ColumnMajor } else { ScanOrder::RowMajor };
            let mut grid = vec![0.0; n];
            histogram_2d_into(&snap, &bounds, &plan, order, HistogramScale::Counts, &mut grid)
                .unwrap();
            prop_assert_eq!(&grid, &rows[0]);
        }
    }
}
