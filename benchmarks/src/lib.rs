//! Shared setup helpers for telemetry benchmarks.
//!
//! ## Running
//!
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench telemetry
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench telemetry -- recorder

use glam::Vec2;
use rayon::prelude::*;
use testbed_telemetry::contact::{Contact, ContactRecorder, Manifold, ManifoldPoint, ShapeId};
use testbed_telemetry::ProfileSample;

/// A touching contact with one warm-started point.
pub fn sample_contact(shape_a: u32, shape_b: u32) -> Contact {
    let mut manifold = Manifold::new(Vec2::Y);
    manifold.push(ManifoldPoint {
        id: 0,
        position: Vec2::new(shape_b as f32, 0.0),
        normal_impulse: 1.0,
        tangent_impulse: 0.1,
        separation: -0.001,
    });
    Contact {
        shape_a: ShapeId(shape_a),
        shape_b: ShapeId(shape_b),
        manifold,
        touching: true,
    }
}

/// Record `per_lane` pre-solve contacts on each of `threads` lanes in parallel.
pub fn fill_recorder(recorder: &mut ContactRecorder, threads: usize, per_lane: u32) {
    let phase = recorder.begin_phase(threads);
    let policy = phase.policy;
    let mut lanes = phase.lanes;
    let old = Manifold::default();
    lanes.par_iter_mut().for_each(|lane| {
        let tag = lane.index() as u32;
        for i in 0..per_lane {
            policy.record_pre_solve(&sample_contact(tag, i), &old, lane);
        }
    });
}

/// A profile sample with every field set from `seed`.
pub fn sample_profile(seed: u32) -> ProfileSample {
    let base = 0.5 + (seed % 7) as f32 * 0.25;
    ProfileSample::default().map(|_| base)
}
