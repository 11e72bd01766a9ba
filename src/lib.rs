//! # Spiking Models
//!
//! Discrete-time spiking threshold neuron models for computational
//! neuroscience simulation.
//!
//! This crate is the numeric core an external simulation driver steps once
//! per tick per neuron:
//!
//! - **LIF**: deterministic leaky integrate-and-fire dynamics with a hard
//!   threshold-crossing spike rule
//! - **GIF**: stochastic generalized integrate-and-fire dynamics where
//!   spiking is sampled from a voltage-dependent probability
//!
//! The driver loop, input-current generation, network wiring, and spike
//! recording all live outside this crate; the models expose a narrow
//! per-tick interface and nothing else.
//!
//! ## Quick Start
//!
//! ```rust
//! use spiking_models::prelude::*;
//!
//! // A neuron at rest: leak reversal -70mV, threshold -55mV.
//! let params = MembraneParameters::new(-70.0, 10.0, 1.0, -55.0, -75.0).unwrap();
//! let mut neuron = LIFNeuron::new(-70.0, params);
//!
//! // One 0.1ms tick with no input current: no net leak, no spike.
//! let spiked = neuron.step(0.0, 0.1);
//! assert!(!spiked);
//! assert_eq!(neuron.voltage(), -70.0);
//! ```
//!
//! Stochastic neurons own a seedable generator, so spike trains are
//! reproducible per instance:
//!
//! ```rust
//! use spiking_models::prelude::*;
//!
//! let params = MembraneParameters::new(0.0, 1.0, 1.0, 10.0, 0.0).unwrap();
//! let neuron = GIFNeuron::seeded(0.0, params, 1.0, 42).unwrap();
//!
//! // Far below threshold the spike probability is tiny but positive.
//! assert!(neuron.spike_probability(1.0) > 0.0);
//! assert!(neuron.spike_probability(1.0) < 1e-6);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): standard library support, `env_logger` hook, OS
//!   entropy for [`GIFNeuron::from_entropy`]
//! - `serde`: serialization support for parameter types

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export important types for convenience
pub use crate::{
    error::{ModelError, Result},
    neuron::{GIFNeuron, LIFNeuron, MembraneParameters, NeuronType, ThresholdModel},
};

// Core modules
pub mod error;
pub mod math;
pub mod neuron;

// Prelude module for common imports
pub mod prelude {
    //! Common imports for simulation drivers

    pub use crate::error::{ModelError, Result};
    pub use crate::neuron::{
        GIFNeuron, LIFNeuron, MembraneParameters, NeuronType, ThresholdModel, BASE_FIRING_RATE,
    };
}

/// The version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
///
/// Optional; call once at the beginning of your application to set up
/// logging. The models themselves never log from the hot path.
pub fn init() -> Result<()> {
    #[cfg(feature = "std")]
    {
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::try_init().ok();

        log::info!("spiking-models v{}", VERSION);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_init() {
        assert!(init().is_ok());
        // Idempotent: a second call must not fail.
        assert!(init().is_ok());
    }
}
