
use chrono::{DateTime, Duration, Utc};

/// Hours added to API timestamps before display.
pub const DISPLAY_OFFSET_HOURS: i64 = 7;

/// Summarize alliance names for titles and list rows.
///
/// More than four names collapse to the first three plus a count of the names
/// from index 4 onward. The name at index 3 is neither shown nor counted; that
/// matches what the site has always rendered.
pub fn format_alliance_names(names: &[String]) -> String {
    if names.is_empty() {
        return "Unallied".to_string();
    }
    if names.len() > 4 {
        return format!("{} and {} more", names[..3].join(", "), names[4..].len());
    }
    names.join(", ")
}

fn display_time(time: DateTime<Utc>) -> DateTime<Utc> {
    time + Duration::hours(DISPLAY_OFFSET_HOURS)
}

/// Start time label used in the detail page description (`MM-DD: HH:mm`).
pub fn battle_time_label(time: DateTime<Utc>) -> String {
    display_time(time).format("%m-%d: %H:%M").to_string()
}

/// Date column of the battle list (`MM-DD HH:mm`).
pub fn format_date(time: DateTime<Utc>) -> String {
    display_time(time).format("%m-%d %H:%M").to_string()
}

/// One-line meta description for a battle report.
pub fn format_description(names: &[String], time_label: &str, players: usize, kills: u32) -> String {
    format!(
        "Battle: {} at {} - {} players and {} kills",
        format_alliance_names(names),
        time_label,
        players,
        kills
    )
}

/// Compact fame value (e.g. 12300 -> "12.3k").
pub fn format_fame(fame: u64) -> String {
    const THOUSAND: u64 = 1_000;
    const MILLION: u64 = 1_000_000;
    const BILLION: u64 = 1_000_000_000;
    if fame >= BILLION {
        format!("{:.1}b", fame as f64 / BILLION as f64)
    } else if fame >= MILLION {
        format!("{:.1}m", fame as f64 / MILLION as f64)
    } else if fame >= THOUSAND {
        format!("{:.1}k", fame as f64 / THOUSAND as f64)
    } else {
        format!("{fame}")
    }
}

/// Format seconds into fixed-width HH:MM:SS with cumulative hours.
pub fn format_duration(total_secs: i64) -> String {
    let secs = total_secs.max(0);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_alliances_are_unallied() {
        assert_eq!(format_alliance_names(&[]), "Unallied");
    }

    #[test]
    fn single_alliance_is_shown_as_is() {
        assert_eq!(format_alliance_names(&names(&["A"])), "A");
    }

    #[test]
    fn four_alliances_are_not_truncated() {
        assert_eq!(
            format_alliance_names(&names(&["A", "B", "C", "D"])),
            "A, B, C, D"
        );
    }

    #[test]
    fn five_alliances_count_from_index_four() {
        assert_eq!(
            format_alliance_names(&names(&["A", "B", "C", "D", "E"])),
            "A, B, C and 1 more"
        );
    }

    #[test]
    fn six_alliances_drop_the_fourth_name() {
        assert_eq!(
            format_alliance_names(&names(&["A", "B", "C", "D", "E", "F"])),
            "A, B, C and 2 more"
        );
    }

    #[test]
    fn time_label_applies_display_offset() {
        let time = "2024-03-02T18:04:11Z".parse().expect("timestamp");
        assert_eq!(battle_time_label(time), "03-03: 01:04");
        assert_eq!(format_date(time), "03-03 01:04");
    }

    #[test]
    fn description_reads_as_one_line() {
        let text = format_description(&names(&["ARCH", "OWL"]), "03-03: 01:04", 61, 42);
        assert_eq!(text, "Battle: ARCH, OWL at 03-03: 01:04 - 61 players and 42 kills");
    }

    #[test]
    fn description_for_unallied_battle() {
        let text = format_description(&[], "01-01: 00:00", 3, 1);
        assert_eq!(text, "Battle: Unallied at 01-01: 00:00 - 3 players and 1 kills");
    }

    #[test]
    fn fame_is_compacted_by_magnitude() {
        assert_eq!(format_fame(950), "950");
        assert_eq!(format_fame(12_300), "12.3k");
        assert_eq!(format_fame(4_500_000), "4.5m");
        assert_eq!(format_fame(1_200_000_000), "1.2b");
    }

    #[test]
    fn duration_formats_cumulative_hours() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(3661), "01:01:01");
        assert_eq!(format_duration(90061), "25:01:01");
    }

    #[test]
    fn duration_clamps_negative() {
        assert_eq!(format_duration(-5), "00:00:00");
    }
}
