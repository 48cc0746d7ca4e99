// Skill matching: normalization, overlap scoring, job ranking.
// Pure functions only; handlers are the sole entry point from HTTP.

pub mod handlers;
pub mod recommend;
pub mod scoring;
pub mod skills;
