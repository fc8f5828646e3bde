//! # pixelveil
//!
//! Core logic of an LSB steganography tool: a payload is spread over the
//! least-significant bits of an image's channel values, terminated by a
//! single zero byte, and recovered later by reading the same bits back.

pub mod carrier;
pub mod cli;
pub mod codec;
pub mod error;
pub mod handler;
