//! Progress and notice rendering for prompt sessions

pub mod reporter;
