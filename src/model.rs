use crate::histogram::Histogram;
use crate::settings::Settings;
use crate::source::FlowSource;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Number of azimuthal bins in the output histogram.
pub const PHI_BINS: usize = 100;

/// One generation run: settings in, finalized histogram out.
#[derive(Debug, Clone)]
pub struct Model {
    pub settings: Settings,
}

impl Model {
    /// Run the generation loop and return the filled histogram.
    ///
    /// Events are processed sequentially and independently; the only state
    /// shared across events is the histogram and the RNG. Within an event the
    /// angles for all tracks are drawn first, then weighted and filled, with
    /// the per-event buffer reused across events.
    pub fn run(&self) -> Histogram {
        println!(
            "Generating {} events with {} tracks per event and v2 = {}",
            self.settings.events, self.settings.tracks_per_event, self.settings.v2
        );

        let mut hist = Histogram::new(PHI_BINS, 0.0, 2.0 * std::f64::consts::PI);
        let source = FlowSource::new(self.settings.v2);

        let mut rng = match self.settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut event_phi: Vec<f64> = Vec::with_capacity(self.settings.tracks_per_event);
        for _ in 0..self.settings.events {
            event_phi.clear();
            for _ in 0..self.settings.tracks_per_event {
                event_phi.push(source.sample_phi(&mut rng));
            }

            for &phi in &event_phi {
                hist.fill_weighted(phi, source.weight(phi));
            }
        }

        hist
    }
}

/// Generate the azimuthal-angle histogram for `events` events of
/// `tracks_per_event` tracks each, weighted with anisotropy coefficient `v2`.
///
/// This is the single entry point of the crate; the run is unseeded (OS
/// entropy), so repeated calls with identical parameters produce statistically
/// equivalent but not identical histograms.
pub fn generate(events: usize, tracks_per_event: usize, v2: f64) -> Histogram {
    let model = Model {
        settings: Settings::new(events, tracks_per_event, v2),
    };
    model.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_seeded(events: usize, tracks_per_event: usize, v2: f64, seed: u64) -> Histogram {
        let mut settings = Settings::new(events, tracks_per_event, v2);
        settings.seed = Some(seed);
        Model { settings }.run()
    }

    #[test]
    fn test_single_track_unit_weight() {
        let hist = generate(1, 1, 0.0);

        assert_eq!(hist.entries(), 1);
        assert!((hist.total_weight() - 1.0).abs() < 1e-12);

        let occupied = (0..hist.num_bins())
            .filter(|&i| hist.bin_entry_count(i) > 0)
            .count();
        assert_eq!(occupied, 1, "one sample must land in exactly one bin");
    }

    #[test]
    fn test_zero_events_gives_empty_histogram() {
        let hist = generate(0, 1000, 0.1);
        assert_eq!(hist.entries(), 0);
        assert_eq!(hist.total_weight(), 0.0);
        for i in 0..hist.num_bins() {
            assert_eq!(hist.bin_content(i), 0.0);
        }
    }

    #[test]
    fn test_zero_tracks_gives_empty_histogram() {
        let hist = generate(100, 0, 0.1);
        assert_eq!(hist.entries(), 0);
        assert_eq!(hist.total_weight(), 0.0);
    }

    #[test]
    fn test_entry_count_matches_track_count() {
        let hist = run_seeded(13, 57, 0.1, 42);
        assert_eq!(hist.entries(), 13 * 57);
        assert_eq!(hist.underflow(), 0.0);
        assert_eq!(hist.overflow(), 0.0);
    }

    #[test]
    fn test_isotropic_contents_equal_entry_counts() {
        // With v2 = 0 every weight is exactly 1, so each bin's content must
        // equal its entry count with no floating-point slack.
        let hist = run_seeded(10, 500, 0.0, 7);
        for i in 0..hist.num_bins() {
            assert_eq!(hist.bin_content(i), hist.bin_entry_count(i) as f64);
        }
    }

    #[test]
    fn test_histogram_shape_constants() {
        let hist = generate(1, 1, 0.0);
        assert_eq!(hist.num_bins(), PHI_BINS);
        assert_eq!(hist.low(), 0.0);
        assert!((hist.high() - 2.0 * std::f64::consts::PI).abs() < 1e-12);
    }
}
