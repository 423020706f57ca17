//! # chartprep — Editorial chart-data preparation for Rust
//!
//! Data shaping and classification for editorial data-visualization
//! pipelines: series discovery, value extents, per-series line assembly,
//! highlight-band detection, and Jenks natural-breaks classification for
//! choropleth colour scales.
//!
//! ## What are natural breaks?
//!
//! Jenks natural-breaks classification is an optimal one-dimensional
//! clustering procedure: it partitions a sorted numeric sample into `k`
//! contiguous classes minimizing the total within-class variance. Choropleth
//! maps use the resulting class edges as the domain of a threshold colour
//! scale, so that shading follows the structure of the data rather than
//! arbitrary equal intervals.
//!
//! ## Quick Start
//!
//! ### Classification
//!
//! ```rust
//! use chartprep::prelude::*;
//!
//! let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//!
//! // Build the classifier
//! let model = NaturalBreaks::new()
//!     .classes(3)             // Three colour bands
//!     .return_diagnostics()   // Goodness-of-variance fit
//!     .build()?;
//!
//! // Classify the sample
//! let result = model.classify(&values)?;
//!
//! assert_eq!(result.boundaries, vec![1.0, 3.0, 6.0, 10.0]);
//! assert_eq!(result.interior(), &[3.0, 6.0]); // threshold-scale domain
//! # Result::<(), ChartPrepError>::Ok(())
//! ```
//!
//! ### Shaping rows into chart data
//!
//! ```rust
//! use chartprep::prelude::*;
//!
//! let rows = vec![
//!     Row::new()
//!         .with_text("date", "2016-01-01")
//!         .with_text("UK", "1.42")
//!         .with_text("US", "1.0"),
//!     Row::new()
//!         .with_text("date", "2016-07-01")
//!         .with_text("UK", "1.31")
//!         .with_text("US", "1.0"),
//! ];
//!
//! let shaper = ChartShaper::<f64>::new()
//!     .key_field("date")
//!     .highlight_series(&["UK"])
//!     .build()?;
//!
//! let chart = shaper.shape(&rows)?;
//!
//! assert_eq!(chart.series_names, vec!["UK", "US"]);
//! assert_eq!(chart.highlight_lines.len(), 1);
//! assert_eq!(chart.value_extent, (1.0, 1.42));
//! # Result::<(), ChartPrepError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Both `classify` and `shape` return `Result<_, ChartPrepError>`; the `?`
//! operator is idiomatic. Precondition violations (class count below 2,
//! samples smaller than the class count, non-finite values, unpaired
//! highlight markers) fail with contextual errors rather than producing
//! garbage boundaries.
//!
//! ```rust
//! use chartprep::prelude::*;
//!
//! let model = NaturalBreaks::new().classes(4).build()?;
//!
//! match model.classify(&[1.0_f64, 2.0]) {
//!     Ok(result) => println!("breaks: {:?}", result.interior()),
//!     Err(e) => eprintln!("classification failed: {}", e),
//! }
//! # Result::<(), ChartPrepError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! chartprep = { version = "0.1", default-features = false }
//! ```
//!
//! ## Scope
//!
//! Loading, CSV/JSON parsing, date parsing, rendering, layout, and legends
//! are external collaborators: this crate consumes already-parsed rows and
//! produces plain data structures for them.
//!
//! ## References
//!
//! - Jenks, G. F. (1967). "The Data Model Concept in Statistical Mapping"
//! - Fisher, W. D. (1958). "On Grouping for Maximum Homogeneity"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - rows, cells, errors, and sorting utilities.
mod primitives;

// Layer 2: Shaping - series discovery, extents, lines, highlight bands.
mod shaping;

// Layer 3: Algorithms - Jenks natural-breaks dynamic program.
mod algorithms;

// Layer 4: Evaluation - classification fit diagnostics.
mod evaluation;

// Layer 5: Engine - validation and result types.
mod engine;

// High-level fluent API for classification and shaping.
mod api;

// Standard chartprep prelude.
pub mod prelude {
    pub use crate::api::{
        BreaksFit, BreaksResult, CellValue, ChartData, ChartPrepError,
        ChartShaperBuilder as ChartShaper, HighlightInterval,
        MissingPolicy::{self, Floor, Skip},
        NaturalBreaksBuilder as NaturalBreaks, Row, SeriesLine, SeriesPoint,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod shaping {
        pub use crate::shaping::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
