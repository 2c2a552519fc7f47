use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Replacement {
    pub pattern: String,
    pub replacement: String,
}

fn rep(pattern: &str, replacement: &str) -> Replacement {
    Replacement {
        pattern: pattern.to_string(),
        replacement: replacement.to_string(),
    }
}

// Double-encoded UTF-8 (bytes re-read as Windows-1252). Entries are applied
// in order and each step sees the previous step's output, so longer patterns
// must come before any shorter pattern they contain. The bare "ðŸ" fallback
// sits after every four-char emoji pattern it prefixes, and the "Â" spacer
// strip runs last.
static BUILTIN: Lazy<Vec<Replacement>> = Lazy::new(|| {
    vec![
        rep("Ã¡", "á"),
        rep("Ã¢", "â"),
        rep("Ã£", "ã"),
        rep("Ã©", "é"),
        rep("Ãª", "ê"),
        // soft hyphen U+00AD is the garbled second byte of "í"
        rep("Ã\u{ad}", "í"),
        rep("Ã³", "ó"),
        rep("Ãµ", "õ"),
        rep("Ãº", "ú"),
        rep("Ã§", "ç"),
        rep("Ã€", "À"),
        rep("Ã‰", "É"),
        rep("ÃŠ", "Ê"),
        rep("Ã“", "Ó"),
        rep("Ã”", "Ô"),
        rep("Ã‘", "Ñ"),
        rep("Ã±", "ñ"),
        rep("âœ¨", "✨"),
        rep("ðŸ\u{20}¥", "🏥"),
        rep("ðŸ“š", "📚"),
        rep("ðŸŒ\u{20}", "🌐"),
        rep("âš–ï¸", "⚖️"),
        rep("â†’", "→"),
        rep("ðŸ\u{20}›ï¸\u{20}", "🛡️"),
        rep("ðŸ“Š", "📊"),
        rep("ðŸ§\u{a0}", "🧠"),
        rep("ðŸ", "🔬"),
        rep("â˜…", "★"),
        rep("â†‘", "↑"),
        rep("âœ“", "✓"),
        rep("Â", ""),
    ]
});

pub fn builtin_table() -> Vec<Replacement> {
    BUILTIN.clone()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableIssue {
    #[error("entries {first} and {second} share the pattern {pattern:?}")]
    DuplicatePattern {
        pattern: String,
        first: usize,
        second: usize,
    },
    #[error(
        "entry {earlier} ({earlier_pattern:?}) rewrites part of entry {later} \
         ({later_pattern:?}) before it can match"
    )]
    ShadowedPattern {
        earlier: usize,
        earlier_pattern: String,
        later: usize,
        later_pattern: String,
    },
    #[error(
        "entry {entry} writes {replacement:?}, which contains the pattern of \
         entry {reintroduced} ({pattern:?}); repeated runs will keep rewriting"
    )]
    ReintroducedPattern {
        entry: usize,
        replacement: String,
        reintroduced: usize,
        pattern: String,
    },
}

/// Checks a table for the silent hazards of ordered literal substitution:
/// duplicate patterns, an earlier entry consuming part of a later entry's
/// pattern, and a replacement that reintroduces some entry's pattern (which
/// breaks idempotence). Issues are advisory; the table still runs.
pub fn validate_table(table: &[Replacement]) -> Vec<TableIssue> {
    let mut issues = Vec::new();

    for (i, a) in table.iter().enumerate() {
        for (j, b) in table.iter().enumerate().skip(i + 1) {
            if a.pattern == b.pattern {
                issues.push(TableIssue::DuplicatePattern {
                    pattern: a.pattern.clone(),
                    first: i,
                    second: j,
                });
            } else if b.pattern.contains(&a.pattern) {
                issues.push(TableIssue::ShadowedPattern {
                    earlier: i,
                    earlier_pattern: a.pattern.clone(),
                    later: j,
                    later_pattern: b.pattern.clone(),
                });
            }
        }
    }

    for (i, a) in table.iter().enumerate() {
        for (j, b) in table.iter().enumerate() {
            if !b.pattern.is_empty() && a.replacement.contains(&b.pattern) {
                issues.push(TableIssue::ReintroducedPattern {
                    entry: i,
                    replacement: a.replacement.clone(),
                    reintroduced: j,
                    pattern: b.pattern.clone(),
                });
            }
        }
    }

    issues
}
