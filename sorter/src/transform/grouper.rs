//! Group active patrons by tier and format the report text.
//!
//! ```text
//! Sorted rows                    →  Report text
//! ┌───────────────────────┐        ┌─────────────────────────────┐
//! │ Tier: Gold,   Alice   │        │ --------------------------- │
//! │ Tier: Gold,   Eve     │   →    │ Alice                       │
//! │ Tier: Silver, Bob     │        │ Eve                         │
//! └───────────────────────┘        │ --------------------------- │
//!                                  │ Bob                         │
//!                                  └─────────────────────────────┘
//! ```

use crate::models::{PatronRow, TierGroup, SEPARATOR};

/// Stable sort by the raw tier value, byte-wise.
///
/// Rows sharing a tier keep their input order. No tier ranking is
/// applied: "Gold" sorts before "Platinum" before "Silver".
pub fn sort_by_tier(rows: &mut [PatronRow<'_>]) {
    rows.sort_by(|a, b| a.tier.cmp(b.tier));
}

/// Collapse runs of equal tiers into groups.
///
/// Expects rows already passed through [`sort_by_tier`]; each run of
/// consecutive equal tiers becomes one group.
pub fn group_by_tier(rows: &[PatronRow<'_>]) -> Vec<TierGroup> {
    let mut groups: Vec<TierGroup> = Vec::new();

    for row in rows {
        match groups.last_mut() {
            Some(group) if group.tier == row.tier => group.names.push(row.name.to_string()),
            _ => groups.push(TierGroup {
                tier: row.tier.to_string(),
                names: vec![row.name.to_string()],
            }),
        }
    }

    groups
}

/// Render groups as text: a separator line, then one name per line.
///
/// No groups yields an empty string.
pub fn format_report(groups: &[TierGroup]) -> String {
    let mut out = String::new();

    for group in groups {
        out.push_str(SEPARATOR);
        out.push('\n');
        for name in &group.names {
            out.push_str(name);
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row<'a>(name: &'a str, tier: &'a str) -> PatronRow<'a> {
        PatronRow { tier, status: "Active Patron", name }
    }

    fn names(rows: &[PatronRow<'_>]) -> Vec<String> {
        rows.iter().map(|r| r.name.to_string()).collect()
    }

    #[test]
    fn test_sort_is_stable() {
        let mut rows = vec![
            row("s1", "Silver"),
            row("g1", "Gold"),
            row("s2", "Silver"),
            row("g2", "Gold"),
            row("g3", "Gold"),
        ];
        sort_by_tier(&mut rows);

        assert_eq!(names(&rows), vec!["g1", "g2", "g3", "s1", "s2"]);
    }

    #[test]
    fn test_sort_is_lexicographic() {
        let mut rows = vec![
            row("a", "Silver"),
            row("b", "Platinum"),
            row("c", "Gold"),
            row("d", "10"),
            row("e", "9"),
            row("f", "gold"),
        ];
        sort_by_tier(&mut rows);

        let tiers: Vec<&str> = rows.iter().map(|r| r.tier).collect();
        assert_eq!(tiers, vec!["10", "9", "Gold", "Platinum", "Silver", "gold"]);
    }

    #[test]
    fn test_one_group_per_distinct_tier() {
        let mut rows = vec![
            row("a", "B"),
            row("b", "A"),
            row("c", "B"),
            row("d", "C"),
            row("e", "A"),
        ];
        sort_by_tier(&mut rows);
        let groups = group_by_tier(&rows);

        let tiers: Vec<&str> = groups.iter().map(|g| g.tier.as_str()).collect();
        assert_eq!(tiers, vec!["A", "B", "C"]);
        assert_eq!(groups[0].names, vec!["b", "e"]);
        assert_eq!(groups[1].names, vec!["a", "c"]);
    }

    #[test]
    fn test_format_report() {
        let groups = vec![
            TierGroup { tier: "Gold".into(), names: vec!["Alice".into(), "Eve".into()] },
            TierGroup { tier: "Silver".into(), names: vec!["Bob".into()] },
        ];

        assert_eq!(
            format_report(&groups),
            "---------------------------\nAlice\nEve\n---------------------------\nBob\n"
        );
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_report(&[]), "");
    }

    #[test]
    fn test_empty_tier_still_gets_separator() {
        let rows = vec![row("Nobody", ""), row("Alice", "Gold")];
        let text = format_report(&group_by_tier(&rows));

        assert_eq!(text.matches(SEPARATOR).count(), 2);
        assert!(text.starts_with(SEPARATOR));
    }

    #[test]
    fn test_separator_count_matches_distinct_tiers() {
        let tiers = ["Gold", "Silver", "Gold", "Bronze", "Silver", "Gold"];
        let mut rows: Vec<PatronRow> = tiers.iter().map(|t| row("x", t)).collect();
        sort_by_tier(&mut rows);

        let text = format_report(&group_by_tier(&rows));
        assert_eq!(text.matches(SEPARATOR).count(), 3);
        assert_eq!(text.lines().count(), 3 + tiers.len());
    }
}
