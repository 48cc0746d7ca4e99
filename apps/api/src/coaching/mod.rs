// Career coaching heuristics: interview answer feedback, career paths, resume builder.
// Fixed rule tables and thresholds, no learned weights.

pub mod career;
pub mod handlers;
pub mod interview;
pub mod resume;
