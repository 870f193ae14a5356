//! Farside — a procedurally generated 2D space exploration sandbox.
//!
//! A seeded galaxy of planetary systems, binary stars, and rogue planets is
//! streamed in and out around the player.  Every body is a pure function of
//! its location seed, so nothing is ever saved: flying back to a system
//! regenerates it exactly.  Asteroid belts feed destructible rocks into the
//! physics simulation, and violent impacts fracture them into convex
//! fragments.

pub mod asteroid;
pub mod celestial;
pub mod config;
pub mod constants;
pub mod contact;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod lifecycle;
pub mod orbit;
pub mod seed;
pub mod shatter;
pub mod ship;
pub mod simulation;
pub mod spectral;
pub mod streaming;
pub mod surface;
