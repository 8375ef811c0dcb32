//! Monte Carlo generation of azimuthal particle-emission angles with
//! elliptic-flow weighting, accumulated into a weighted histogram.
//!
//! The canonical run is `generate(events, tracks_per_event, v2)`; the result
//! can be handed to `render_histogram` to produce the image artifact.

// Import the modules and re-export the types for library usage
mod distribution;
mod histogram;
mod model;
mod plot;
mod settings;
mod source;

pub use distribution::AzimuthalDistribution;
pub use histogram::Histogram;
pub use model::{generate, Model, PHI_BINS};
pub use plot::{render_histogram, PlotError, PlotOptions};
pub use settings::Settings;
pub use source::FlowSource;
