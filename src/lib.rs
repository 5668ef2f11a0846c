//! Extraction core for the GRAPHICS.GOT container used by the GOT.EXE
//! game engine: descriptor table parsing and the three chunk codecs
//! (raw, LZSS12, byte-run RLE). Decoded bytes come out exactly
//! `out_size` long; rendering them is someone else's job.

pub mod binary_utils;
pub mod containers;
pub mod error;
