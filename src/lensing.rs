//! Standalone gravitational lensing experiment with RK4 integration.
//!
//! Unlike the rest of the crate, this module works in physical units:
//! masses in kilograms, distances in meters, and rays that always move
//! at the speed of light. It is deliberately self-contained - a
//! Newtonian approximation of lensing, not a geodesic integrator, and
//! nothing here feeds back into [`Scene`](crate::Scene).
//!
//! A ray accelerates by `-G·m·r̂ / |r|²` toward each lens mass, is
//! advanced with a fourth-order Runge-Kutta step, and has its speed
//! renormalized to `C` after every step. Tracing stops when the ray
//! passes the observer plane or the step cap runs out.
//!
//! # Example
//!
//! ```
//! use gravlens::lensing::{trace_ray, LensMass, Ray, TraceParams};
//! use glam::DVec3;
//!
//! let masses = [LensMass::new(1e16, DVec3::ZERO)];
//! let ray = Ray::toward(DVec3::new(0.0, -100.0, -500.0), DVec3::new(0.0, 0.0, 500.0));
//! let path = trace_ray(ray, &masses, &TraceParams::default());
//! assert!(path.len() > 1);
//! ```

pub use glam::DVec3;

/// Gravitational constant, m³ kg⁻¹ s⁻².
pub const G: f64 = 6.67430e-11;

/// Speed of light, m/s.
pub const C: f64 = 299_792_458.0;

/// A lensing point mass in physical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LensMass {
    /// Mass in kilograms.
    pub mass: f64,
    /// Position in meters.
    pub position: DVec3,
}

impl LensMass {
    /// A lens of `mass` kilograms at `position`.
    pub fn new(mass: f64, position: DVec3) -> Self {
        Self { mass, position }
    }
}

/// Newtonian gravitational acceleration at `position` from all masses.
///
/// Each term is `-G·m·r̂ / |r|²` pointing toward the mass. A mass
/// coincident with `position` contributes nothing instead of dividing
/// by zero.
pub fn acceleration(position: DVec3, masses: &[LensMass]) -> DVec3 {
    let mut total = DVec3::ZERO;
    for lens in masses {
        let r = position - lens.position;
        let mag = r.length();
        if mag == 0.0 {
            continue;
        }
        total -= r * (G * lens.mass / (mag * mag * mag));
    }
    total
}

/// A light ray in flight. `velocity` always has magnitude [`C`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Position in meters.
    pub position: DVec3,
    /// Velocity in m/s, magnitude [`C`].
    pub velocity: DVec3,
}

impl Ray {
    /// A ray at `position` aimed at `target`, moving at light speed.
    pub fn toward(position: DVec3, target: DVec3) -> Self {
        Self {
            position,
            velocity: renormalize(target - position),
        }
    }
}

/// Rescale to magnitude [`C`] (light always moves at light speed).
fn renormalize(velocity: DVec3) -> DVec3 {
    velocity.normalize() * C
}

/// Parameters for [`trace_ray`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceParams {
    /// Integration time step, seconds.
    pub time_step: f64,
    /// Maximum number of RK4 steps.
    pub max_steps: u32,
    /// Tracing stops once the ray's z reaches this plane.
    pub observer_z: f64,
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            time_step: 0.1,
            max_steps: 5000,
            observer_z: 500.0,
        }
    }
}

/// One fourth-order Runge-Kutta step of `time_step` seconds.
///
/// Velocity estimates feed position estimates stage by stage; the
/// combined velocity is renormalized to keep the speed at [`C`].
pub fn rk4_step(ray: &Ray, time_step: f64, masses: &[LensMass]) -> Ray {
    let dt = time_step;

    let accel1 = acceleration(ray.position, masses);
    let vel1 = ray.velocity;

    let vel2 = vel1 + accel1 * (dt / 2.0);
    let pos2 = ray.position + vel1 * (dt / 2.0);
    let accel2 = acceleration(pos2, masses);

    let vel3 = vel1 + accel2 * (dt / 2.0);
    let pos3 = ray.position + vel2 * (dt / 2.0);
    let accel3 = acceleration(pos3, masses);

    let vel4 = vel1 + accel3 * dt;
    let pos4 = ray.position + vel3 * dt;
    let accel4 = acceleration(pos4, masses);

    let position = ray.position + (vel1 + vel2 * 2.0 + vel3 * 2.0 + vel4) * (dt / 6.0);
    let velocity = ray.velocity + (accel1 + accel2 * 2.0 + accel3 * 2.0 + accel4) * (dt / 6.0);

    Ray {
        position,
        velocity: renormalize(velocity),
    }
}

/// Integrate a ray until it passes the observer plane or the step cap.
///
/// Returns every sampled position, starting with the initial one.
pub fn trace_ray(ray: Ray, masses: &[LensMass], params: &TraceParams) -> Vec<DVec3> {
    let mut current = ray;
    let mut path = vec![current.position];
    for _ in 0..params.max_steps {
        current = rk4_step(&current, params.time_step, masses);
        path.push(current.position);
        if current.position.z >= params.observer_z {
            break;
        }
    }
    path
}

/// A fan of `count` rays spread `spread` meters along the y axis,
/// centered on `source`, all aimed at `observer`.
pub fn ray_fan(source: DVec3, observer: DVec3, count: u32, spread: f64) -> Vec<Ray> {
    // All rays share the source-to-observer heading; only the launch
    // points are offset.
    let velocity = renormalize(observer - source);
    (0..count)
        .map(|i| {
            let offset = if count < 2 {
                0.0
            } else {
                -spread / 2.0 + i as f64 * (spread / (count - 1) as f64)
            };
            Ray {
                position: source + DVec3::new(0.0, offset, 0.0),
                velocity,
            }
        })
        .collect()
}
