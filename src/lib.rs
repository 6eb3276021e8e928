//! # ratiopad
//!
//! Batch letterboxer for photo delivery. Point it at a directory of
//! JPEG/PNG shots: every photo is classified against a fixed table of
//! standard aspect ratios, padded with solid bars where a rule says so,
//! and resized to a uniform 1800x1200 delivery copy next to the original.
//!
//! # Architecture: Per-Photo Pipeline
//!
//! ```text
//! decode → orient → classify → pad (rule permitting) → resize → encode
//! ```
//!
//! The batch layer fans photos out to one rayon worker each and collects
//! a [`pipeline::JobResult`] per file. Three properties hold throughout:
//!
//! - **Isolation**: a failed photo is reported and skipped; the batch
//!   always runs to completion.
//! - **Immutability**: originals are never written; the delivery copy is
//!   a new `<ratio>.<name>` file beside them.
//! - **Determinism**: enumeration is sorted and the tables are fixed, so
//!   the same directory always yields the same results in the same order.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`ratio`] | Standard ratio table and nearest-ratio classification |
//! | [`config`] | Built-in padding rules, delivery constants, worker count |
//! | [`scan`] | Flat directory listing of eligible photos |
//! | [`imaging`] | Padding geometry, raster transforms, JPEG/PNG codecs |
//! | [`pipeline`] | Parallel batch driver producing per-file results |
//! | [`classify`] | Header-only classification mode with `mv` suggestions |
//! | [`output`] | Pure `format_*` functions behind the CLI's printing |
//!
//! # Design Decisions
//!
//! ## Pad, Don't Crop
//!
//! Reaching 3:2 by cropping would discard composition at the frame edges.
//! Bars preserve every source pixel, and the delivery resize then works
//! on an already-correct ratio. The exception is 4x3, which has no
//! padding rule and accepts mild distortion in the exact resize instead.
//!
//! ## Fixed Tables Over Config Files
//!
//! The ratio and rule tables are compiled in. A delivery pipeline has one
//! house style; a config file would add a runtime failure mode in exchange
//! for flexibility nobody asked for. The tables are still validated at
//! startup, so a bad edit fails before any photo is touched.
//!
//! ## Rayon Fan-Out, Channel Printing
//!
//! Workers never print. Progress events travel over an `mpsc` channel to
//! a single printer thread in the binary, which keeps ordering concerns
//! out of the workers and leaves [`pipeline::run`] a pure list-in,
//! results-out function that tests call directly.
//!
//! ## Header-Only Classification
//!
//! The classify mode reads image headers instead of decoding pixels.
//! Sorting a multi-gigabyte shoot into ratio buckets touches a few
//! kilobytes per file.

pub mod classify;
pub mod config;
pub mod imaging;
pub mod output;
pub mod pipeline;
pub mod ratio;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
