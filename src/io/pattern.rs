//! Sequential tile filenames built from a single-placeholder format string
//!
//! A pattern such as `img-{0:05d}.jpg` maps index 7 to `img-00007.jpg`. The
//! placeholder accepts an optional positional `0`, then an optional `:` spec
//! made of a zero flag, a width and a trailing `d`. Examples of accepted
//! placeholders: `{}`, `{0}`, `{:5}`, `{:05}`, `{0:05d}`.

use crate::io::error::{Result, invalid_parameter};

/// Index-to-filename mapping for tile collections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePattern {
    prefix: String,
    suffix: String,
    width: usize,
    zero_pad: bool,
}

impl TilePattern {
    /// Parse a format string holding exactly one index placeholder
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::InvalidParameter`] if the pattern has no
    /// placeholder, more than one, an unbalanced brace or a malformed spec
    pub fn parse(pattern: &str) -> Result<Self> {
        let reject = |reason: &str| invalid_parameter("format", &pattern, &reason);

        let open = pattern
            .find('{')
            .ok_or_else(|| reject("missing '{...}' placeholder for the tile index"))?;
        let (prefix, rest) = pattern.split_at(open);
        let close = rest
            .find('}')
            .ok_or_else(|| reject("placeholder is missing its closing '}'"))?;
        let (placeholder, suffix_with_brace) = rest.split_at(close);
        let suffix = suffix_with_brace.get(1..).unwrap_or_default();

        if prefix.contains('}') || suffix.contains('{') || suffix.contains('}') {
            return Err(reject("exactly one placeholder is allowed"));
        }

        let body = placeholder.get(1..).unwrap_or_default();
        let spec = match body.split_once(':') {
            Some((position, spec)) => {
                if !(position.is_empty() || position == "0") {
                    return Err(reject("only positional argument 0 is available"));
                }
                spec
            }
            None if body.is_empty() || body == "0" => "",
            None => return Err(reject("only positional argument 0 is available")),
        };

        let spec = spec.strip_suffix('d').unwrap_or(spec);
        let zero_pad = spec.len() > 1 && spec.starts_with('0');
        let digits = if zero_pad { spec.get(1..).unwrap_or_default() } else { spec };
        let width = if digits.is_empty() {
            0
        } else if digits.bytes().all(|b| b.is_ascii_digit()) {
            digits
                .parse::<usize>()
                .map_err(|e| reject(&format!("invalid width: {e}")))?
        } else {
            return Err(reject("placeholder spec must look like '05d'"));
        };

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            width,
            zero_pad,
        })
    }

    /// File name for tile `index`
    pub fn file_name(&self, index: usize) -> String {
        let width = self.width;
        let number = if self.zero_pad {
            format!("{index:0width$}")
        } else {
            format!("{index:width$}")
        };
        format!("{}{number}{}", self.prefix, self.suffix)
    }

    /// File names for indices `0..count`
    pub fn file_names(&self, count: usize) -> impl Iterator<Item = String> + '_ {
        (0..count).map(move |index| self.file_name(index))
    }
}
