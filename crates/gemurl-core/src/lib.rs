pub mod config;
pub mod logging;

pub mod url_model;

pub use url_model::{
    capsule_prefix, capsule_prefix_with, host_port, normalize, CapsulePolicy, HostPort,
    NormalizationError, NormalizedUrl, DEFAULT_PORT, SCHEME,
};
