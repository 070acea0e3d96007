//! Constants shared with the pre-rendered page.

/// Global binding the page's data-injection step fills with the mirror
/// list before this module runs.
pub const MIRRORS_GLOBAL: &str = "downloadMirrors";

/// Opt-out cookie, written verbatim. Re-opting out rewrites the same
/// value.
pub const OPT_OUT_COOKIE: &str = "ga-disable=true; path=/; max-age=31536000; SameSite=Lax";

/// Window property Google Analytics checks to disable itself.
pub const GA_DISABLE_FLAG: &str = "ga-disable-YOUR_GA4_MEASUREMENT_ID";
