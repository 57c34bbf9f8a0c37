//! Statistical core of a lossless compressor: a context-mixing bit
//! predictor plus the block transforms that run ahead of entropy coding.
//!
//! The [`Predictor`] estimates the probability of the next bit from a
//! bit-history state store shared by seven hashed contexts, an LZ-style
//! match model, a pool of per-context mixers and an adaptive probability
//! map. A range coder (not part of this crate) consumes the probability,
//! codes the bit, and reports it back through [`Predictor::update`].
//!
//! The [`TextCodec`], [`X86Codec`] and [`Rlt`] transforms share the
//! [`Transform`] contract and sit upstream of coding; each is optional
//! and reports a recoverable error when a block does not qualify.
//!
//! Nothing here is thread safe. Every structure owns its state; to work
//! in parallel, run one instance per block.

pub mod apm;
pub mod config;
pub mod error;
pub mod histogram;
pub mod logistic;
pub mod match_model;
pub mod mixer;
pub mod predictor;
pub mod rlt;
pub mod statemap;
pub mod textcodec;
pub mod x86;

pub use crate::{
    config::{PredictorConfig, TextCodecConfig},
    error::TransformError,
    predictor::Predictor,
    rlt::Rlt,
    textcodec::TextCodec,
    x86::X86Codec,
};

/// A byte-block transform with an exact inverse.
///
/// `forward` and `inverse` return the number of bytes read and written.
/// Failure of `forward` is recoverable: the caller emits the block
/// untransformed instead. Failure of `inverse` with
/// [`TransformError::InvalidData`] is fatal for the block.
pub trait Transform {
    fn forward(&mut self, src: &[u8], dst: &mut [u8])
        -> Result<(usize, usize), TransformError>;

    fn inverse(&mut self, src: &[u8], dst: &mut [u8])
        -> Result<(usize, usize), TransformError>;

    /// Destination size that makes `forward` safe for `src_len` input
    /// bytes.
    fn max_encoded_len(&self, src_len: usize) -> usize;
}
