//! Build-time application metadata
//!
//! All values here are fixed when the crate is compiled. The version can be
//! injected by setting `WTHRR_VERSION` in the build environment; without it
//! the version is `dev`.

/// Application name, used as the prefix of the version line
pub const APP_NAME: &str = "wthrr";

/// First banner line
pub const TITLE: &str = "wthrr - Weather simulation application";

/// Second banner line
pub const DESCRIPTION: &str = "This is a Go port of the wthrr weather effects application.";

/// Version used when no release tag was injected at build time
pub const DEFAULT_VERSION: &str = "dev";

/// Application version
pub const VERSION: &str = match option_env!("WTHRR_VERSION") {
    Some(version) => version,
    None => DEFAULT_VERSION,
};
