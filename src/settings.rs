/// Run parameters for one generation run.
///
/// `events` and `tracks_per_event` are `usize`, so negative counts are
/// unrepresentable. A zero in either slot is a valid run that produces an
/// empty histogram. `v2` is unconstrained; values outside [-0.5, 0.5] make the
/// track weight negative for some angles and are accepted as-is.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Number of simulated events.
    pub events: usize,
    /// Number of tracks generated per event.
    pub tracks_per_event: usize,
    /// Second-order anisotropy (flow) coefficient.
    pub v2: f64,
    /// RNG seed. `None` seeds from OS entropy; runs are then not reproducible.
    pub seed: Option<u64>,
}

impl Settings {
    /// Create settings for an unseeded run.
    pub fn new(events: usize, tracks_per_event: usize, v2: f64) -> Self {
        Self {
            events,
            tracks_per_event,
            v2,
            seed: None,
        }
    }

    /// Total number of tracks the run will generate.
    pub fn total_tracks(&self) -> usize {
        self.events * self.tracks_per_event
    }
}
