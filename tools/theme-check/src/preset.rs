//! `.env` preset reader
//!
//! Follows the viewer's rules: blank and `#` lines are skipped, an `export `
//! prefix is ignored, `unset KEY` removes an earlier assignment and a value
//! wrapped in matching quotes is unwrapped.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

pub type PresetVars = BTreeMap<String, String>;

pub fn parse_preset(content: &str) -> PresetVars {
    let mut vars = PresetVars::new();
    for raw_line in content.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);
        if let Some(key) = line.strip_prefix("unset ") {
            vars.remove(key.trim());
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            vars.insert(key.to_string(), trim_wrapping_quotes(value.trim()).to_string());
        }
    }
    vars
}

pub fn read_preset(path: &Path) -> io::Result<PresetVars> {
    Ok(parse_preset(&fs::read_to_string(path)?))
}

fn trim_wrapping_quotes(raw: &str) -> &str {
    let wrapped = raw.len() >= 2
        && ((raw.starts_with('"') && raw.ends_with('"'))
            || (raw.starts_with('\'') && raw.ends_with('\'')));
    if wrapped { &raw[1..raw.len() - 1] } else { raw }
}
