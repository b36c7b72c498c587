//! Finding detectors over the import graph

mod misplaced;

pub use misplaced::detect_misplaced;
