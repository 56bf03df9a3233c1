use std::error::Error;

use gnuplot::*;
use jerk_motion::{integrate, JerkSegment, KinematicState};

fn main() -> Result<(), Box<dyn Error>> {
    // -----------------------
    // 1. Describe a profile
    // -----------------------
    // A simple symmetric jerk-limited velocity ramp: build acceleration up,
    // hold it, then bleed it back off. A real planner would compute these
    // jerks and durations from motion limits; here they are hand-picked.
    let segments = [
        JerkSegment::new(20.0, 0.5),  // ramp acceleration up
        JerkSegment::new(0.0, 1.0),   // hold constant acceleration
        JerkSegment::new(-20.0, 0.5), // ramp acceleration back to zero
    ];

    let start = KinematicState::new(0.0, 0.0, 0.0);

    // -------------------------
    // 2. Sample the trajectory
    // -------------------------
    let sampling_rate = 1000.0; // points per second
    let total_time: f64 = segments.iter().map(|s| s.duration).sum();
    let num_points = (sampling_rate * total_time).ceil() as usize;

    // One extra sample so the final point lands exactly on total_time.
    let mut time_axis = Vec::with_capacity(num_points + 1);
    let mut positions = Vec::with_capacity(num_points + 1);
    let mut velocities = Vec::with_capacity(num_points + 1);
    let mut accelerations = Vec::with_capacity(num_points + 1);

    for i in 0..=num_points {
        let t = i as f64 / sampling_rate;
        time_axis.push(t);

        // Walk the segment chain to the one containing t, integrating each
        // boundary state exactly, then evaluate inside it.
        let mut state = start;
        let mut elapsed = 0.0;
        let mut sample = state;
        for segment in &segments {
            if t <= elapsed + segment.duration {
                sample = segment.state_at(state, t - elapsed);
                break;
            }
            state = segment.end_state(state);
            elapsed += segment.duration;
            sample = state;
        }

        positions.push(sample.pos);
        velocities.push(sample.vel);
        accelerations.push(sample.acc);
    }

    // Sanity check against the raw integrator on the first segment.
    let (p, _, _) = integrate(0.25, start.pos, start.vel, start.acc, segments[0].jerk);
    let idx = (0.25 * sampling_rate) as usize;
    if (positions[idx] - p).abs() > 1e-9 {
        return Err("sampled profile disagrees with direct integration".into());
    }

    // --------------
    // 3. Plot data
    // --------------
    let mut fg = Figure::new();
    {
        let axes = fg.axes2d();
        axes.set_title("Constant-jerk segment chain", &[]);
        axes.set_x_label("Time (s)", &[]);
        axes.set_y_label("Position derivatives", &[]);
        axes.lines(&time_axis, &positions, &[Color("blue"), Caption("Position")]);
        axes.lines(&time_axis, &velocities, &[Color("red"), Caption("Velocity")]);
        axes.lines(&time_axis, &accelerations, &[Color("green"), Caption("Acceleration")]);
    }
    fg.show().map_err(|e| format!("Failed to display plot: {e}"))?;

    println!("Plot generated. Total motion time: {:.3} seconds.", total_time);
    Ok(())
}
