//! Asynchronous planet surface generation.
//!
//! Surface maps are expensive enough to stutter a frame, so they are built
//! on a dedicated worker thread and delivered back by seed.  Both channel
//! directions are bounded and non-blocking: a full request queue drops the
//! request (the planet keeps its placeholder and re-requests on the next
//! load), and results for planets that streamed out in the meantime are
//! silently discarded.

use crate::celestial::{BodySeed, Planet};
use crate::constants::SURFACE_QUEUE_CAPACITY;
use bevy::prelude::*;
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A generated heightmap, addressed row-major.
#[derive(Component, Debug, Clone)]
pub struct SurfaceMap {
    pub size: u32,
    /// Heights in `[0, 1]`, `size * size` entries.
    pub heights: Vec<f32>,
}

impl SurfaceMap {
    pub fn height_at(&self, x: u32, y: u32) -> f32 {
        self.heights[(y * self.size + x) as usize]
    }
}

/// Work order sent to the surface thread.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceRequest {
    pub seed: i64,
    pub size: u32,
}

/// Finished surface coming back from the worker, keyed by seed.
#[derive(Debug, Clone)]
pub struct SurfaceReady {
    pub seed: i64,
    pub map: SurfaceMap,
}

/// Handle to the surface worker thread.
///
/// Dropping the resource closes the request channel, which ends the worker
/// loop on shutdown.
#[derive(Resource)]
pub struct SurfaceWorker {
    requests: Sender<SurfaceRequest>,
    results: Receiver<SurfaceReady>,
}

impl SurfaceWorker {
    /// Spawns the worker thread with bounded queues in both directions.
    pub fn spawn() -> Self {
        let (req_tx, req_rx) = bounded::<SurfaceRequest>(SURFACE_QUEUE_CAPACITY);
        let (res_tx, res_rx) = bounded::<SurfaceReady>(SURFACE_QUEUE_CAPACITY);

        std::thread::Builder::new()
            .name("surface-gen".into())
            .spawn(move || {
                while let Ok(request) = req_rx.recv() {
                    let map = generate_surface(request.seed, request.size);
                    let ready = SurfaceReady {
                        seed: request.seed,
                        map,
                    };
                    // A full result queue means the sim thread is behind;
                    // dropping is safe because the planet re-requests.
                    let _ = res_tx.try_send(ready);
                }
            })
            .expect("failed to spawn surface worker thread");

        SurfaceWorker {
            requests: req_tx,
            results: res_rx,
        }
    }

    /// Queues a request, dropping it if the queue is full.  Never blocks.
    pub fn request(&self, request: SurfaceRequest) {
        match self.requests.try_send(request) {
            Ok(()) | Err(TrySendError::Full(_)) => {}
            Err(TrySendError::Disconnected(_)) => {
                warn!("surface worker is gone; request for seed {} dropped", request.seed);
            }
        }
    }

    /// Drains any finished surfaces without blocking.
    pub fn poll(&self) -> impl Iterator<Item = SurfaceReady> + '_ {
        self.results.try_iter()
    }
}

/// Fractal value noise over a seeded lattice.  Pure: one seed, one map.
pub fn generate_surface(seed: i64, size: u32) -> SurfaceMap {
    let size = size.max(2);
    let mut rng = StdRng::seed_from_u64(seed as u64);

    // Coarse lattice of random values, refined through octaves of bilinear
    // interpolation with halving amplitude.
    const OCTAVES: u32 = 4;
    let base = 4_u32;
    let mut lattices: Vec<(u32, Vec<f32>)> = Vec::with_capacity(OCTAVES as usize);
    for octave in 0..OCTAVES {
        let n = base << octave;
        let values: Vec<f32> = (0..n * n).map(|_| rng.gen::<f32>()).collect();
        lattices.push((n, values));
    }

    let mut heights = Vec::with_capacity((size * size) as usize);
    let mut max_amp = 0.0_f32;
    let mut amp = 1.0_f32;
    for _ in 0..OCTAVES {
        max_amp += amp;
        amp *= 0.5;
    }

    for y in 0..size {
        for x in 0..size {
            let u = x as f32 / size as f32;
            let v = y as f32 / size as f32;
            let mut height = 0.0;
            let mut amp = 1.0;
            for (n, values) in &lattices {
                height += amp * sample_lattice(*n, values, u, v);
                amp *= 0.5;
            }
            heights.push(height / max_amp);
        }
    }

    SurfaceMap { size, heights }
}

/// Bilinear sample of a wrapping `n × n` lattice at normalised `(u, v)`.
fn sample_lattice(n: u32, values: &[f32], u: f32, v: f32) -> f32 {
    let fx = u * n as f32;
    let fy = v * n as f32;
    let x0 = fx.floor() as u32 % n;
    let y0 = fy.floor() as u32 % n;
    let x1 = (x0 + 1) % n;
    let y1 = (y0 + 1) % n;
    let tx = fx.fract();
    let ty = fy.fract();

    let at = |x: u32, y: u32| values[(y * n + x) as usize];
    let top = at(x0, y0) * (1.0 - tx) + at(x1, y0) * tx;
    let bottom = at(x0, y1) * (1.0 - tx) + at(x1, y1) * tx;
    top * (1.0 - ty) + bottom * ty
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Queues a surface request for every newly loaded planet.
pub fn surface_request_system(
    worker: Res<SurfaceWorker>,
    new_planets: Query<(&Planet, &BodySeed), (Added<Planet>, Without<SurfaceMap>)>,
) {
    for (planet, seed) in new_planets.iter() {
        worker.request(SurfaceRequest {
            seed: seed.0,
            size: planet.size as u32,
        });
    }
}

/// Attaches finished surfaces to the planets that asked for them.
///
/// Matching is by seed, not entity id: the planet may have been unloaded
/// and reloaded between request and delivery, and the reloaded entity is
/// still the right recipient.  Results with no loaded planet are dropped.
pub fn surface_poll_system(
    mut commands: Commands,
    worker: Res<SurfaceWorker>,
    planets: Query<(Entity, &BodySeed), With<Planet>>,
) {
    for ready in worker.poll() {
        if let Some((entity, _)) = planets.iter().find(|(_, seed)| seed.0 == ready.seed) {
            commands.entity(entity).insert(ready.map);
        }
    }
}
