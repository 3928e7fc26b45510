//! Sort-order translation for meal listings.
//!
//! Maps a (sort field, direction) selection to the ORDER BY clause the
//! storage gateway executes. Whatever the primary field, ties always break
//! by name ascending, so a listing is totally ordered and stable across
//! fetches.

/// Field a listing is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Stars,
    Cost,
    PrepTime,
    /// No primary field; the listing is ordered by name alone.
    None,
}

impl SortField {
    /// Sort code from the query command. Unrecognized codes fall back to
    /// preparation time.
    pub fn from_code(code: &str) -> Self {
        match code {
            "s" => Self::Stars,
            "c" => Self::Cost,
            _ => Self::PrepTime,
        }
    }

    /// Column backing this field, if any.
    fn column(self) -> Option<&'static str> {
        match self {
            Self::Stars => Some("stars"),
            Self::Cost => Some("cost"),
            Self::PrepTime => Some("prep_time"),
            Self::None => None,
        }
    }

    /// Name shown in the status line above the listing.
    pub fn label(self) -> &'static str {
        match self {
            Self::Stars => "Stars",
            Self::Cost => "Cost",
            Self::PrepTime => "Time",
            Self::None => "None",
        }
    }
}

/// Direction a listing is sorted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HigherToLower,
    LowerToHigher,
}

impl Direction {
    /// Direction code from the query command. Anything other than `h`
    /// sorts lower-to-higher.
    pub fn from_code(code: &str) -> Self {
        match code {
            "h" => Self::HigherToLower,
            _ => Self::LowerToHigher,
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            Self::HigherToLower => "DESC",
            Self::LowerToHigher => "ASC",
        }
    }

    /// Name shown in the status line above the listing.
    pub fn label(self) -> &'static str {
        match self {
            Self::HigherToLower => "Higher to Lower",
            Self::LowerToHigher => "Lower to Higher",
        }
    }
}

/// ORDER BY clause for a sort selection.
///
/// Built entirely from fixed fragments; no user-supplied text reaches the
/// statement.
pub fn order_by(field: SortField, direction: Direction) -> String {
    match field.column() {
        Some(column) => format!("{column} {}, name ASC", direction.keyword()),
        None => "name ASC".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_by_appends_name_tie_break() {
        let inputs = vec![
            (SortField::Stars, Direction::HigherToLower, "stars DESC, name ASC"),
            (SortField::Cost, Direction::LowerToHigher, "cost ASC, name ASC"),
            (SortField::PrepTime, Direction::HigherToLower, "prep_time DESC, name ASC"),
        ];

        for (field, direction, expected) in inputs {
            assert_eq!(order_by(field, direction), expected);
        }
    }

    #[test]
    fn order_by_without_field_is_name_only() {
        assert_eq!(order_by(SortField::None, Direction::HigherToLower), "name ASC");
        assert_eq!(order_by(SortField::None, Direction::LowerToHigher), "name ASC");
    }

    #[test]
    fn sort_codes_default_to_prep_time() {
        assert_eq!(SortField::from_code("s"), SortField::Stars);
        assert_eq!(SortField::from_code("c"), SortField::Cost);
        assert_eq!(SortField::from_code("t"), SortField::PrepTime);
        assert_eq!(SortField::from_code("zzz"), SortField::PrepTime);
    }

    #[test]
    fn direction_codes_default_to_ascending() {
        assert_eq!(Direction::from_code("h"), Direction::HigherToLower);
        assert_eq!(Direction::from_code("l"), Direction::LowerToHigher);
        assert_eq!(Direction::from_code("?"), Direction::LowerToHigher);
    }

    #[test]
    fn labels_match_status_line_wording() {
        assert_eq!(SortField::Stars.label(), "Stars");
        assert_eq!(SortField::PrepTime.label(), "Time");
        assert_eq!(Direction::HigherToLower.label(), "Higher to Lower");
    }
}
