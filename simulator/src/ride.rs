//! Scripted demo ride.
//!
//! A repeating sequence of riding phases, each a linear ramp between two
//! pitch values. Pitch follows the sensor convention: negative is front
//! wheel up.

use crate::timing::DEMO_RIDE_SECS;

/// One phase of the ride: ramp from `from` to `to` over `secs` seconds.
struct Phase {
    secs: f32,
    from: f32,
    to: f32,
}

const fn phase(
    secs: f32,
    from: f32,
    to: f32,
) -> Phase {
    Phase { secs, from, to }
}

const RIDE: [Phase; 12] = [
    phase(4.0, 0.0, 0.0),
    // Short wheelie through the balance window
    phase(1.0, 0.0, -50.0),
    phase(3.0, -50.0, -55.0),
    phase(1.0, -55.0, 0.0),
    phase(5.0, 0.0, 2.0),
    // Looping it out: past 80 trips the stoppie timer and the overflow bar
    phase(1.5, 2.0, -70.0),
    phase(1.0, -70.0, -100.0),
    phase(2.0, -100.0, -95.0),
    phase(1.0, -95.0, 0.0),
    // Hard braking, rear up
    phase(6.0, 0.0, 8.0),
    phase(2.0, 8.0, 0.0),
    phase(12.5, 0.0, 0.0),
];

const _: () = {
    let mut total = 0.0;
    let mut i = 0;
    while i < RIDE.len() {
        total += RIDE[i].secs;
        i += 1;
    }
    assert!(total == DEMO_RIDE_SECS);
};

/// Pitch of the demo ride `t` seconds in.
pub fn demo_pitch(t: f32) -> f32 {
    let mut t = t.rem_euclid(DEMO_RIDE_SECS);
    for p in &RIDE {
        if t < p.secs {
            return p.from + (p.to - p.from) * (t / p.secs);
        }
        t -= p.secs;
    }
    0.0
}
