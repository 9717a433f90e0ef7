//! Rendering of generation results into host-consumable markdown.

/// Render image URLs as a markdown message, one image line per URL.
///
/// Each URL becomes the literal pattern `![image](<url>)` followed by a line
/// break, concatenated in slice order with no other separators. An empty
/// slice renders as the empty string.
#[must_use]
pub fn image_markdown(urls: &[String]) -> String {
    let mut message = String::new();
    for url in urls {
        message.push_str(&format!("![image]({url})\n"));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_url_in_order() {
        let urls = vec!["https://img/1.png".to_string(), "https://img/2.png".to_string()];
        assert_eq!(
            image_markdown(&urls),
            "![image](https://img/1.png)\n![image](https://img/2.png)\n"
        );
    }

    #[test]
    fn empty_slice_renders_empty() {
        assert_eq!(image_markdown(&[]), "");
    }

    #[test]
    fn single_url() {
        let urls = vec!["https://img/only.png".to_string()];
        assert_eq!(image_markdown(&urls), "![image](https://img/only.png)\n");
    }

    #[test]
    fn urls_pass_through_unescaped() {
        // The markdown pattern is literal; URLs are not encoded or altered.
        let urls = vec!["https://img/a b(c).png?x=1&y=2".to_string()];
        assert_eq!(image_markdown(&urls), "![image](https://img/a b(c).png?x=1&y=2)\n");
    }
}
