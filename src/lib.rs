//! AI proposal engine core for a puja content-marketing backend.
//!
//! The HTTP layer, auth, and the Postgres store live in the host service; this
//! crate owns the path from "prompt" to "structured proposal JSON the rest of
//! the system can trust": provider failover, prompt building, response
//! normalization with fallback, and the deterministic template generators
//! used when the model output cannot be salvaged.

pub mod ai;
pub mod fallback;
pub mod normalize;


pub use fallback::{focus_themes_for_date, focus_themes_template, normalize_or, proposal_template};
pub use normalize::{
    is_fallback, normalize, RawOutput, ERROR_KEY, FALLBACK_USED_KEY, RAW_RESPONSE_KEY,
};
