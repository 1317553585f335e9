//! Name sanitization shared by profile filenames and session names.

use regex::Regex;
use std::sync::LazyLock;

/// Characters that are hostile in filenames or session names, plus
/// whitespace. Runs collapse into a single replacement.
static ILLEGAL_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*\s]+"#).expect("static pattern"));

/// Normalize a user-supplied name for use on disk and in session tables.
///
/// Lowercases, trims, and collapses every run of illegal characters into
/// one underscore, so `"My Server"` and `"my  server"` land on the same
/// `my_server`.
pub fn sanitize_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    ILLEGAL_RUNS.replace_all(&lowered, "_").into_owned()
}
