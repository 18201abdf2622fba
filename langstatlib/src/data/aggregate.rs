//! Grouping file records into per-language statistics.

use std::collections::BTreeMap;

use crate::data::stats::{ExtensionIndex, LanguageStat, LanguageStats};
use crate::languages::language_for_extension;

/// Fold a scan's records into per-language totals and line shares.
///
/// Several extensions may land on one label (`.ts` and `.tsx` are both
/// `TypeScript`). Percentages are each language's share of all lines; when
/// no lines were counted at all every percentage is 0.
pub fn aggregate(index: ExtensionIndex) -> LanguageStats {
    let mut languages: BTreeMap<String, LanguageStat> = BTreeMap::new();

    for (extension, records) in index {
        let label = language_for_extension(&extension);
        let stat = languages
            .entry(label.to_string())
            .or_insert_with(|| LanguageStat::new(label));
        for record in &records {
            stat.add_record(record);
        }
    }

    let total_lines: u64 = languages.values().map(|s| s.total_lines).sum();
    for stat in languages.values_mut() {
        stat.percentage = percentage(stat.total_lines, total_lines);
    }

    LanguageStats::from_map(languages)
}

fn percentage(lines: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (lines as f64 / total as f64) * 100.0
    }
}
