//! Recommendation pipeline: sentiment score → category → safe meme batch.

pub mod handlers;
