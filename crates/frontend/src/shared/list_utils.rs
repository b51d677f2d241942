//! Small helpers shared by sortable list headers

/// Sort indicator for a column header
pub fn get_sort_indicator(current_key: Option<&str>, key: &str, ascending: bool) -> &'static str {
    if current_key == Some(key) {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class of the indicator span (active column is highlighted)
pub fn get_sort_class(current_key: Option<&str>, key: &str) -> &'static str {
    if current_key == Some(key) {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_tracks_active_column_and_direction() {
        assert_eq!(get_sort_indicator(Some("rate"), "rate", true), " ▲");
        assert_eq!(get_sort_indicator(Some("rate"), "rate", false), " ▼");
        assert_eq!(get_sort_indicator(Some("rate"), "lane", true), " ⇅");
        assert_eq!(get_sort_indicator(None, "lane", true), " ⇅");
    }

    #[test]
    fn active_column_gets_highlight_class() {
        assert!(get_sort_class(Some("rate"), "rate").contains("--active"));
        assert!(!get_sort_class(None, "rate").contains("--active"));
    }
}
