//! Class name composition.
//!
//! Pages style themselves by combining class names from several stylesheet
//! modules on a single element. `classes` joins them into one attribute
//! value, skipping empty fragments.

/// Join class name fragments with single spaces, dropping empty ones.
pub fn classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut joined = String::new();
    for part in parts {
        if part.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(part);
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_with_spaces() {
        assert_eq!(classes(["section", "section--center"]), "section section--center");
    }

    #[test]
    fn test_skips_empty_fragments() {
        assert_eq!(classes(["section", "", "jumbotron"]), "section jumbotron");
    }

    #[test]
    fn test_single_class() {
        assert_eq!(classes(["chart"]), "chart");
    }

    #[test]
    fn test_no_classes() {
        let none: [&str; 0] = [];
        assert_eq!(classes(none), "");
    }
}
