/// Placeholder replaced with the extracted page title.
pub const TITLE_TOKEN: &str = "{{ Title }}";

/// Placeholder replaced with the rendered document HTML.
pub const CONTENT_TOKEN: &str = "{{ Content }}";

/// Root-relative URL prefixes rewritten to the configured base path.
const HREF_ROOT: &str = "href=\"/";
const SRC_ROOT: &str = "src=\"/";

/// Fills the shared page template and rewrites root-relative URLs.
///
/// Both placeholder tokens are replaced literally, then every `href="/`
/// and `src="/` occurrence is rebased onto `base_path`.
pub fn apply_template(template: &str, title: &str, content: &str, base_path: &str) -> String {
    let base = normalize_base_path(base_path);
    template
        .replace(TITLE_TOKEN, title)
        .replace(CONTENT_TOKEN, content)
        .replace(HREF_ROOT, &format!("href=\"{base}"))
        .replace(SRC_ROOT, &format!("src=\"{base}"))
}

/// Base paths always end with `/` so rewritten URLs stay well-formed.
pub fn normalize_base_path(base_path: &str) -> String {
    if base_path.ends_with('/') {
        base_path.to_string()
    } else {
        format!("{base_path}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str =
        "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";

    #[test]
    fn replaces_both_tokens() {
        let page = apply_template(TEMPLATE, "Home", "<div><p>hi</p></div>", "/");
        assert_eq!(
            page,
            "<html><head><title>Home</title></head><body><div><p>hi</p></div></body></html>"
        );
    }

    #[test]
    fn default_base_path_leaves_urls_untouched() {
        let page = apply_template("{{ Content }}", "t", "<a href=\"/docs\">d</a>", "/");
        assert_eq!(page, "<a href=\"/docs\">d</a>");
    }

    #[test]
    fn rewrites_root_relative_urls() {
        let content = "<a href=\"/docs\">d</a><img src=\"/logo.png\">";
        let page = apply_template("{{ Content }}", "t", content, "/my-site/");
        assert_eq!(
            page,
            "<a href=\"/my-site/docs\">d</a><img src=\"/my-site/logo.png\">"
        );
    }

    #[test]
    fn base_path_gains_trailing_slash() {
        let page = apply_template("{{ Content }}", "t", "<a href=\"/x\">x</a>", "/repo");
        assert_eq!(page, "<a href=\"/repo/x\">x</a>");
    }

    #[test]
    fn absolute_urls_are_untouched() {
        let content = "<a href=\"https://example.com/x\">x</a>";
        let page = apply_template("{{ Content }}", "t", content, "/repo/");
        assert_eq!(page, content);
    }

    #[test]
    fn template_urls_are_also_rebased() {
        let template = "<link rel=\"stylesheet\" href=\"/index.css\">{{ Content }}";
        let page = apply_template(template, "t", "c", "/repo/");
        assert_eq!(page, "<link rel=\"stylesheet\" href=\"/repo/index.css\">c");
    }
}
