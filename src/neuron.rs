//! Threshold neuron models and dynamics
//!
//! This module provides the discrete-time spiking models driven by an
//! external stepping loop: the deterministic Leaky Integrate-and-Fire (LIF)
//! neuron and the stochastic Generalized Integrate-and-Fire (GIF) neuron,
//! whose spiking is sampled from a voltage-dependent probability. Both
//! implement the [`ThresholdModel`] trait for consistent behavior across
//! drivers.

use crate::error::{ModelError, Result};
use crate::math::exp;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Enumeration of available model variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeuronType {
    /// Deterministic leaky integrate-and-fire neuron
    LIF,
    /// Stochastic generalized integrate-and-fire neuron
    GIF,
}

impl Default for NeuronType {
    fn default() -> Self {
        Self::LIF
    }
}

/// Instantaneous firing rate of a [`GIFNeuron`] sitting exactly at
/// threshold, in spikes per unit of `dt`
pub const BASE_FIRING_RATE: f64 = 0.001;

/// Fixed biophysical parameters shared by all threshold models
///
/// Set once at construction and never mutated afterwards; only the membrane
/// potential changes over a model's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MembraneParameters {
    /// Leak reversal potential (mV)
    pub e_leak: f64,
    /// Leak conductance (µS); positive for stable decay, not enforced
    pub g_leak: f64,
    /// Membrane capacitance (nF); nonzero
    pub capacitance: f64,
    /// Spike threshold (mV): hard threshold for LIF, probability-curve
    /// midpoint for GIF
    pub v_thresh: f64,
    /// Post-spike reset potential (mV)
    pub v_reset: f64,
}

impl MembraneParameters {
    /// Create a validated parameter set.
    ///
    /// Rejects `capacitance == 0`, which would put a division by zero in
    /// every voltage derivative. Other out-of-range values (for example a
    /// negative `g_leak`) are a modeling choice left to the caller.
    pub fn new(
        e_leak: f64,
        g_leak: f64,
        capacitance: f64,
        v_thresh: f64,
        v_reset: f64,
    ) -> Result<Self> {
        if capacitance == 0.0 {
            return Err(ModelError::invalid_parameter("capacitance", "must be nonzero"));
        }
        Ok(Self {
            e_leak,
            g_leak,
            capacitance,
            v_thresh,
            v_reset,
        })
    }
}

impl Default for MembraneParameters {
    fn default() -> Self {
        Self {
            e_leak: -65.0,    // -65mV resting
            g_leak: 10.0,     // 10µS leak conductance
            capacitance: 1.0, // 1nF capacitance
            v_thresh: -55.0,  // -55mV threshold
            v_reset: -70.0,   // -70mV reset
        }
    }
}

/// Core trait for all threshold models
///
/// A driver calls [`step`](ThresholdModel::step) once per simulation tick
/// per neuron instance. A single instance must not be stepped concurrently
/// from two threads (there is no internal synchronization); disjoint
/// instances may be, since each owns its state and, for stochastic
/// variants, its generator.
pub trait ThresholdModel: Send + Sync + Clone {
    /// Current membrane potential, no side effect
    fn voltage(&self) -> f64;

    /// Overwrite the membrane potential, e.g. when resuming a simulation
    /// from a checkpoint. No validation is performed.
    fn set_voltage(&mut self, voltage: f64);

    /// Fixed biophysical parameters
    fn parameters(&self) -> &MembraneParameters;

    /// Which model variant this is
    fn kind(&self) -> NeuronType;

    /// Advance the model by one discrete timestep of length `dt` under
    /// input current `input_current`, returning whether a spike was emitted
    /// on this call.
    ///
    /// Every call mutates the voltage, committing exactly one of two
    /// outcomes: reset to `v_reset` (spike), or a single forward-Euler
    /// increment (no spike). Callers must supply `dt > 0`; the hot path
    /// does not check it.
    fn step(&mut self, input_current: f64, dt: f64) -> bool;

    /// Instantaneous leak-driven voltage derivative at the current voltage:
    /// `( -g_leak * (V - e_leak) + I ) / capacitance`.
    ///
    /// Pure function of the voltage, the input, and the fixed parameters;
    /// exposed for diagnostics and testing.
    fn dv(&self, input_current: f64) -> f64 {
        let p = self.parameters();
        (-p.g_leak * (self.voltage() - p.e_leak) + input_current) / p.capacitance
    }

    /// Leak reversal potential
    fn e_leak(&self) -> f64 {
        self.parameters().e_leak
    }

    /// Leak conductance
    fn g_leak(&self) -> f64 {
        self.parameters().g_leak
    }

    /// Membrane capacitance
    fn capacitance(&self) -> f64 {
        self.parameters().capacitance
    }

    /// Spike threshold
    fn threshold(&self) -> f64 {
        self.parameters().v_thresh
    }

    /// Post-spike reset potential
    fn reset_potential(&self) -> f64 {
        self.parameters().v_reset
    }
}

/// Leaky Integrate-and-Fire neuron model
///
/// The simplest spiking model: the membrane potential integrates input
/// current with an exponential leak toward `e_leak`, and a spike is forced
/// whenever the potential reaches the hard threshold. Given identical
/// voltage, parameters, and input sequence, the trajectory is fully
/// deterministic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LIFNeuron {
    params: MembraneParameters,
    voltage: f64,
}

impl LIFNeuron {
    /// Create a neuron with initial voltage `v0` and validated parameters
    pub fn new(v0: f64, params: MembraneParameters) -> Self {
        Self {
            params,
            voltage: v0,
        }
    }

    /// Positional constructor over raw scalars
    pub fn from_scalars(
        v0: f64,
        e_leak: f64,
        g_leak: f64,
        capacitance: f64,
        v_thresh: f64,
        v_reset: f64,
    ) -> Result<Self> {
        let params = MembraneParameters::new(e_leak, g_leak, capacitance, v_thresh, v_reset)?;
        Ok(Self::new(v0, params))
    }
}

impl Default for LIFNeuron {
    fn default() -> Self {
        let params = MembraneParameters::default();
        Self {
            voltage: params.e_leak,
            params,
        }
    }
}

impl ThresholdModel for LIFNeuron {
    fn voltage(&self) -> f64 {
        self.voltage
    }

    fn set_voltage(&mut self, voltage: f64) {
        self.voltage = voltage;
    }

    fn parameters(&self) -> &MembraneParameters {
        &self.params
    }

    fn kind(&self) -> NeuronType {
        NeuronType::LIF
    }

    fn step(&mut self, input_current: f64, dt: f64) -> bool {
        if self.voltage >= self.params.v_thresh {
            // The reset replaces integration on a spiking tick.
            self.voltage = self.params.v_reset;
            true
        } else {
            self.voltage += self.dv(input_current) * dt;
            false
        }
    }
}

/// Generalized Integrate-and-Fire neuron model
///
/// Spiking is governed by an instantaneous hazard rate rather than a hard
/// threshold, modeling the noisy thresholding observed in biological
/// neurons. The further the potential sits above `v_thresh` (in units of
/// `threshold_width`), the higher the firing rate, and the spike
/// probability over a tick is the discretized survival function of a
/// Poisson process at that rate.
///
/// Each instance owns its random-number generator, so independent neurons
/// are reproducible and safe to step from different threads.
#[derive(Debug, Clone)]
pub struct GIFNeuron<R: Rng = ChaCha8Rng> {
    params: MembraneParameters,
    threshold_width: f64,
    voltage: f64,
    rng: R,
}

impl GIFNeuron<ChaCha8Rng> {
    /// Create a neuron with a generator seeded from `seed`.
    ///
    /// Two neurons built with the same seed, parameters, and input sequence
    /// produce identical spike trains.
    pub fn seeded(
        v0: f64,
        params: MembraneParameters,
        threshold_width: f64,
        seed: u64,
    ) -> Result<Self> {
        Self::with_rng(v0, params, threshold_width, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Create a neuron with a generator seeded from OS entropy
    #[cfg(feature = "std")]
    pub fn from_entropy(v0: f64, params: MembraneParameters, threshold_width: f64) -> Result<Self> {
        Self::with_rng(v0, params, threshold_width, ChaCha8Rng::from_entropy())
    }

    /// Positional constructor over raw scalars, seeded from `seed`
    #[allow(clippy::too_many_arguments)]
    pub fn from_scalars(
        v0: f64,
        e_leak: f64,
        g_leak: f64,
        capacitance: f64,
        v_thresh: f64,
        v_reset: f64,
        threshold_width: f64,
        seed: u64,
    ) -> Result<Self> {
        let params = MembraneParameters::new(e_leak, g_leak, capacitance, v_thresh, v_reset)?;
        Self::seeded(v0, params, threshold_width, seed)
    }
}

impl<R: Rng> GIFNeuron<R> {
    /// Create a neuron owning the caller-supplied generator.
    ///
    /// Rejects `threshold_width == 0`, which would put a division by zero
    /// in every probability evaluation.
    pub fn with_rng(
        v0: f64,
        params: MembraneParameters,
        threshold_width: f64,
        rng: R,
    ) -> Result<Self> {
        if threshold_width == 0.0 {
            return Err(ModelError::invalid_parameter(
                "threshold_width",
                "must be nonzero",
            ));
        }
        Ok(Self {
            params,
            threshold_width,
            voltage: v0,
            rng,
        })
    }

    /// Softness of the probability curve around the threshold
    pub fn threshold_width(&self) -> f64 {
        self.threshold_width
    }

    /// Probability of spiking within a tick of length `dt`, evaluated at an
    /// arbitrary voltage without touching the stored state.
    ///
    /// Pure function; useful for diagnostics or precomputed lookup tables.
    pub fn spike_probability_at(&self, voltage: f64, dt: f64) -> f64 {
        let dist_above_threshold = (voltage - self.params.v_thresh) / self.threshold_width;
        let firing_rate = BASE_FIRING_RATE * exp(dist_above_threshold);
        let p_no_spike = exp(-firing_rate * dt);
        1.0 - p_no_spike
    }

    /// Probability of spiking within a tick of length `dt` at the current
    /// membrane potential
    pub fn spike_probability(&self, dt: f64) -> f64 {
        self.spike_probability_at(self.voltage, dt)
    }
}

impl Default for GIFNeuron<ChaCha8Rng> {
    /// Resting cortical parameters with a fixed seed; use
    /// [`GIFNeuron::seeded`] when each instance needs its own stream.
    fn default() -> Self {
        let params = MembraneParameters::default();
        Self {
            voltage: params.e_leak,
            params,
            threshold_width: 2.0, // 2mV slope factor
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }
}

impl<R: Rng + Send + Sync + Clone> ThresholdModel for GIFNeuron<R> {
    fn voltage(&self) -> f64 {
        self.voltage
    }

    fn set_voltage(&mut self, voltage: f64) {
        self.voltage = voltage;
    }

    fn parameters(&self) -> &MembraneParameters {
        &self.params
    }

    fn kind(&self) -> NeuronType {
        NeuronType::GIF
    }

    fn step(&mut self, input_current: f64, dt: f64) -> bool {
        // Probability is evaluated at the pre-integration voltage.
        let p_spike = self.spike_probability(dt);
        let draw: f64 = self.rng.gen(); // uniform in [0, 1)
        if draw < p_spike {
            self.voltage = self.params.v_reset;
            true
        } else {
            self.voltage += self.dv(input_current) * dt;
            false
        }
    }
}
