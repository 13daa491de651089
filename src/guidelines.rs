use std::fs;
use std::path::Path;

/// A single accessibility guideline parsed from a guidelines file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guideline {
    /// Compact numeric key: the dotted id with the dots removed, e.g.
    /// `"3.2.1"` -> `321`.
    pub key: u32,
    /// The dotted id as written in the file.
    pub id: String,
    /// Human-readable guideline text.
    pub description: String,
}

/// Reads a guidelines file and parses it with [`parse_guidelines`].
pub fn load_guidelines(path: &Path) -> Result<Vec<Guideline>, String> {
    let input =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {:?}: {}", path, e))?;
    parse_guidelines(&input)
}

/// Parses a guidelines listing with one `"<dotted-numeric-id> <description>"`
/// per line. Blank lines are skipped; input order is preserved.
pub fn parse_guidelines(input: &str) -> Result<Vec<Guideline>, String> {
    let mut guidelines = Vec::new();

    for (line_idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (id, description) = line
            .split_once(' ')
            .ok_or_else(|| format!("Line {}: expected \"<id> <description>\"", line_idx + 1))?;

        let key = compact_key(id)
            .ok_or_else(|| format!("Line {}: invalid guideline id {:?}", line_idx + 1, id))?;

        guidelines.push(Guideline {
            key,
            id: id.to_string(),
            description: description.trim().to_string(),
        });
    }

    Ok(guidelines)
}

/// Collapses a dotted-numeric id into its compact key, e.g. `"3.2.1"` -> `321`.
/// Returns `None` if anything but digits and dots remains.
pub fn compact_key(id: &str) -> Option<u32> {
    let digits = id.replace('.', "");
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
