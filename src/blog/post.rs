//! Display-only records for the blog page. Supplied once at startup and
//! never mutated.

#[derive(Debug, Clone)]
pub struct BlogPost {
    pub title: String,
    pub author: String,
    pub date: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct RelatedPost {
    pub title: String,
    pub href: String,
}

/// Splits a post body into paragraphs: one per non-blank line, trimmed,
/// in original order.
pub fn paragraphs(body: &str) -> Vec<&str> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_and_edge_whitespace_are_dropped() {
        let split = paragraphs("Line one\n\nLine two  \n");
        assert_eq!(split, ["Line one", "Line two"]);
    }

    #[test]
    fn order_is_preserved() {
        assert_eq!(paragraphs("a\n \nb\nc"), ["a", "b", "c"]);
    }

    #[test]
    fn empty_body_yields_no_paragraphs() {
        assert!(paragraphs("").is_empty());
        assert!(paragraphs(" \n\t\n").is_empty());
    }
}
