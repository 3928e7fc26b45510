//! Plain-text table rendering for meal listings.
use crate::storage::Meal;

/// Formats an ordered listing as an aligned table.
///
/// The ID column holds the row's 1-based display position in this listing,
/// not the durable storage id; positions are what delete and update
/// commands take.
pub fn render(meals: &[Meal]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>3}  {:>5}  {:>5}  {:>5}  {}\n",
        "ID", "Stars", "Cost", "Time", "Name"
    ));
    out.push_str(&format!(
        "{:>3}  {:>5}  {:>5}  {:>5}  {}\n",
        "---", "-----", "-----", "-----", "--------------------"
    ));
    for (index, meal) in meals.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:>5}  {:>5}  {:>5}  {}\n",
            index + 1,
            meal.stars,
            meal.cost,
            meal.prep_time,
            meal.name
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(id: i64, name: &str, prep_time: i64, cost: i64, stars: i64) -> Meal {
        Meal {
            id,
            name: name.to_string(),
            prep_time,
            cost,
            stars,
        }
    }

    #[test]
    fn empty_listing_renders_header_only() {
        let out = render(&[]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], " ID  Stars   Cost   Time  Name");
    }

    #[test]
    fn rows_use_display_positions_not_ids() {
        // Durable ids deliberately nowhere near 1 and 2.
        let meals = vec![
            meal(42, "Tacos", 20, 10, 5),
            meal(7, "Curry", 40, 12, 3),
        ];

        let out = render(&meals);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2], "  1      5     10     20  Tacos");
        assert_eq!(lines[3], "  2      3     12     40  Curry");
    }

    #[test]
    fn render_does_not_reorder_input() {
        let meals = vec![
            meal(1, "Zucchini Bake", 30, 6, 2),
            meal(2, "Apple Pie", 60, 8, 5),
        ];

        let out = render(&meals);
        let zucchini = out.find("Zucchini Bake").unwrap();
        let pie = out.find("Apple Pie").unwrap();
        assert!(zucchini < pie);
    }
}
