//! Fuses POS, PhysNet and EfficientPhys signal estimates into one weighted signal
//! per recording.
pub mod fusion;
