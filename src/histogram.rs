use std::fmt;

/// Fixed-range weighted histogram.
///
/// The domain [low, high) is split into `n_bins` contiguous equal-width bins
/// at construction and never changes. Bin membership is half-open [lo, hi),
/// except the last bin which is closed at the upper range edge. Each bin
/// accumulates its entry count, the sum of fill weights, and the sum of
/// squared fill weights, so the statistical uncertainty of a bin is
/// `sqrt(sum_w2)` (the usual sum-of-squares-of-weights convention, as in
/// ROOT's TH1 with Sumw2).
///
/// Fills outside the range go to scalar underflow/overflow sums and leave the
/// bins untouched.
#[derive(Debug, Clone)]
pub struct Histogram {
    low: f64,
    high: f64,
    /// Per-bin number of fills.
    bin_entries: Vec<u64>,
    /// Per-bin sum of weights.
    sum_w: Vec<f64>,
    /// Per-bin sum of squared weights.
    sum_w2: Vec<f64>,
    /// Weight sum of fills below `low`.
    underflow: f64,
    /// Weight sum of fills at or above `high` (exclusive of `high` itself).
    overflow: f64,
    entries: u64,
}

impl Histogram {
    /// Create a new histogram with `n_bins` equal-width bins over [low, high).
    ///
    /// # Panics
    /// Panics if `n_bins` is zero, if `low >= high`, or if either edge is not
    /// finite.
    pub fn new(n_bins: usize, low: f64, high: f64) -> Self {
        if n_bins == 0 {
            panic!("Histogram requires at least 1 bin");
        }
        if !low.is_finite() || !high.is_finite() {
            panic!("Histogram range edges must be finite");
        }
        if low >= high {
            panic!("Histogram range must satisfy low < high");
        }
        Self {
            low,
            high,
            bin_entries: vec![0; n_bins],
            sum_w: vec![0.0; n_bins],
            sum_w2: vec![0.0; n_bins],
            underflow: 0.0,
            overflow: 0.0,
            entries: 0,
        }
    }

    /// Get the bin index for a value.
    ///
    /// Returns `None` if the value falls outside [low, high]. A value exactly
    /// equal to `high` maps to the last bin.
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        if !(value >= self.low && value <= self.high) {
            return None;
        }
        let n = self.bin_entries.len();
        let idx = ((value - self.low) / self.bin_width()) as usize;
        // A value at (or rounding up to) the top edge belongs to the last bin.
        Some(idx.min(n - 1))
    }

    /// Fill with unit weight.
    pub fn fill(&mut self, value: f64) {
        self.fill_weighted(value, 1.0);
    }

    /// Fill with an explicit weight.
    ///
    /// The bin content is the accumulated sum of weights, not the fill count;
    /// negative weights are accumulated as-is.
    pub fn fill_weighted(&mut self, value: f64, weight: f64) {
        match self.bin_index(value) {
            Some(i) => {
                self.bin_entries[i] += 1;
                self.sum_w[i] += weight;
                self.sum_w2[i] += weight * weight;
                self.entries += 1;
            }
            None => {
                if value < self.low {
                    self.underflow += weight;
                } else {
                    self.overflow += weight;
                }
            }
        }
    }

    /// Number of bins.
    pub fn num_bins(&self) -> usize {
        self.bin_entries.len()
    }

    /// Lower range edge.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper range edge.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Width of one bin.
    pub fn bin_width(&self) -> f64 {
        (self.high - self.low) / self.bin_entries.len() as f64
    }

    /// (low edge, high edge) of bin `i`.
    pub fn bin_edges(&self, i: usize) -> (f64, f64) {
        let w = self.bin_width();
        (self.low + i as f64 * w, self.low + (i + 1) as f64 * w)
    }

    /// Center of bin `i`.
    pub fn bin_center(&self, i: usize) -> f64 {
        let (lo, hi) = self.bin_edges(i);
        0.5 * (lo + hi)
    }

    /// Accumulated weight in bin `i`.
    pub fn bin_content(&self, i: usize) -> f64 {
        self.sum_w[i]
    }

    /// Statistical uncertainty of bin `i`: sqrt of the summed squared weights.
    pub fn bin_error(&self, i: usize) -> f64 {
        self.sum_w2[i].sqrt()
    }

    /// Number of fills that landed in bin `i`.
    pub fn bin_entry_count(&self, i: usize) -> u64 {
        self.bin_entries[i]
    }

    /// Total number of in-range fills.
    pub fn entries(&self) -> u64 {
        self.entries
    }

    /// Total accumulated in-range weight.
    pub fn total_weight(&self) -> f64 {
        self.sum_w.iter().sum()
    }

    /// Weight sum of fills below the range.
    pub fn underflow(&self) -> f64 {
        self.underflow
    }

    /// Weight sum of fills above the range.
    pub fn overflow(&self) -> f64 {
        self.overflow
    }

    /// Largest bin content (0.0 for an empty histogram).
    pub fn max_bin_content(&self) -> f64 {
        self.sum_w.iter().cloned().fold(0.0, f64::max)
    }

    /// Weight-averaged mean of the filled values, computed from bin centers.
    ///
    /// Binned statistics: fills are attributed to their bin center, as is
    /// standard for histograms that do not retain individual samples. Returns
    /// 0.0 when the total weight is not positive.
    pub fn mean(&self) -> f64 {
        let total = self.total_weight();
        if total <= 0.0 {
            return 0.0;
        }
        let weighted_sum: f64 = self
            .sum_w
            .iter()
            .enumerate()
            .map(|(i, &w)| w * self.bin_center(i))
            .sum();
        weighted_sum / total
    }

    /// Weight-averaged standard deviation, computed from bin centers.
    ///
    /// Returns 0.0 when the total weight is not positive.
    pub fn std_dev(&self) -> f64 {
        let total = self.total_weight();
        if total <= 0.0 {
            return 0.0;
        }
        let mean = self.mean();
        let variance: f64 = self
            .sum_w
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                let d = self.bin_center(i) - mean;
                w * d * d
            })
            .sum::<f64>()
            / total;
        // Negative weights can push the binned variance below zero.
        variance.max(0.0).sqrt()
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Histogram: {} bins over [{:.6}, {:.6})",
            self.num_bins(),
            self.low,
            self.high
        )?;
        writeln!(f, "  Entries: {}", self.entries)?;
        writeln!(f, "  Total weight: {:.6}", self.total_weight())?;
        writeln!(f, "  Mean: {:.6}", self.mean())?;
        write!(f, "  Std Dev: {:.6}", self.std_dev())
    }
}
