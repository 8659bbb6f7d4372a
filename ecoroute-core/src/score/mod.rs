mod eco_score;

pub use eco_score::{eco_score, MAX_ECO_SCORE, MIN_ECO_SCORE};
