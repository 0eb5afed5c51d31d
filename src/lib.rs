//! Chatter Engine — bidirectional Markov chain text generation for chat bots.
//!
//! Ingests observed chat lines, builds forward and backward word-transition
//! tables plus a word-frequency table, and generates new sentences either
//! unconditionally or anchored on the rarest word of an input sentence.
//! Transport, addressing, and line logging are the caller's concern; the
//! engine only consumes plain-text lines and produces plain-text sentences.

pub mod config;
pub mod core;
