//! Meta-variable Substitution
//!
//! Named placeholders in text, written in any of three forms:
//!
//! - `{% name %}`
//! - `$( name )`
//! - `%( name )`
//!
//! Names are case-sensitive. Spaces and tabs just inside the delimiters are
//! ignored, so `{%name%}` and `{%  name %}` are the same placeholder.

use regex::{NoExpand, Regex};

use crate::error::{reject, InvalidArgument, Result};

/// Replace every occurrence of meta-variable `name` in `text` with
/// `replacement`.
///
/// The name is matched literally and the replacement is inserted literally:
/// `$1` in a replacement is not a capture group reference. Substituted text is
/// not scanned again.
///
/// # Example
///
/// ```
/// let text = "version {% ver %}, built $(ver) / %(  ver\t)";
/// let out = misk_text::replace_metavar("ver", "1.2", text).unwrap();
/// assert_eq!(out, "version 1.2, built 1.2 / 1.2");
/// ```
#[tracing::instrument(level = "debug", skip(replacement, text), fields(bytes = text.len()))]
pub fn replace_metavar(name: &str, replacement: &str, text: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return reject(InvalidArgument::EmptyMetavarName);
    }

    let pattern = metavar_pattern(name);
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            return reject(InvalidArgument::UnmatchableMetavar {
                name: name.to_string(),
                reason: e.to_string(),
            })
        }
    };

    Ok(re.replace_all(text, NoExpand(replacement)).into_owned())
}

/// Regex matching all three placeholder forms for `name`.
fn metavar_pattern(name: &str) -> String {
    let name = regex::escape(name);
    format!(r"\{{%[\t ]*{name}[\t ]*%\}}|[$%]\([\t ]*{name}[\t ]*\)")
}
