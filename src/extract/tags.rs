use regex::Regex;

/// Lowercased attribute names paired with their raw values; valueless
/// attributes (`async`, `data-theme`) carry `None`.
pub type Attrs = Vec<(String, Option<String>)>;

/// Compiled tag patterns, built once per run. Scanning is intentionally
/// forgiving: malformed markup yields fewer matches, never an error.
pub struct TagScanner {
    comment: Regex,
    img: Regex,
    script: Regex,
    link: Regex,
    meta: Regex,
    body: Regex,
    attr: Regex,
    data_theme: Regex,
    dark_class: Regex,
    black_background: Regex,
}

impl TagScanner {
    pub fn new() -> Self {
        Self {
            comment: pattern(r"(?s)<!--.*?-->"),
            img: pattern(r"(?i)<img\b[^>]*>"),
            script: pattern(r"(?i)<script\b[^>]*>"),
            link: pattern(r"(?i)<link\b[^>]*>"),
            meta: pattern(r"(?i)<meta\b[^>]*>"),
            body: pattern(r"(?i)<body\b[^>]*>"),
            attr: pattern(
                r#"(?i)([a-z][a-z0-9:_-]*)\s*(?:=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#,
            ),
            data_theme: pattern(r"(?i)<[^>]*\bdata-theme\b[^>]*>"),
            dark_class: pattern(r#"(?i)class\s*=\s*["'][^"']*\bdark-mode\b[^"']*["']"#),
            black_background: pattern(
                r"(?i)background(?:-color)?\s*:\s*(?:#000000\b|#000\b|black\b|rgb\(\s*0\s*,\s*0\s*,\s*0\s*\))",
            ),
        }
    }

    /// Markup with comments removed, so commented-out tags are not counted.
    pub fn strip_comments<'a>(&self, html: &'a str) -> std::borrow::Cow<'a, str> {
        self.comment.replace_all(html, "")
    }

    pub fn img_tags(&self, html: &str) -> Vec<Attrs> {
        self.collect_tags(&self.img, html)
    }

    pub fn script_tags(&self, html: &str) -> Vec<Attrs> {
        self.collect_tags(&self.script, html)
    }

    pub fn link_tags(&self, html: &str) -> Vec<Attrs> {
        self.collect_tags(&self.link, html)
    }

    pub fn meta_tags(&self, html: &str) -> Vec<Attrs> {
        self.collect_tags(&self.meta, html)
    }

    pub fn body_tag(&self, html: &str) -> Option<Attrs> {
        self.body.find(html).map(|tag| self.parse_attrs(tag.as_str()))
    }

    pub fn has_data_theme(&self, html: &str) -> bool {
        self.data_theme.is_match(html)
    }

    pub fn has_dark_mode_class(&self, html: &str) -> bool {
        self.dark_class.is_match(html)
    }

    pub fn declares_black_background(&self, style: &str) -> bool {
        self.black_background.is_match(style)
    }

    fn collect_tags(&self, tag: &Regex, html: &str) -> Vec<Attrs> {
        tag.find_iter(html)
            .map(|found| self.parse_attrs(found.as_str()))
            .collect()
    }

    fn parse_attrs(&self, tag: &str) -> Attrs {
        // Skip past the tag name itself before matching attributes.
        let inner = tag
            .trim_start_matches('<')
            .trim_end_matches('>')
            .trim_end_matches('/');
        let body = match inner.find(char::is_whitespace) {
            Some(end) => &inner[end..],
            None => return Vec::new(),
        };

        self.attr
            .captures_iter(body)
            .map(|capture| {
                let name = capture[1].to_ascii_lowercase();
                let value = capture
                    .get(2)
                    .or_else(|| capture.get(3))
                    .or_else(|| capture.get(4))
                    .map(|found| found.as_str().to_string());
                (name, value)
            })
            .collect()
    }
}

impl Default for TagScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("tag pattern is valid")
}

/// First value for `name`, if the attribute is present with a value.
pub fn attr_value<'a>(attrs: &'a Attrs, name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(attr, _)| attr == name)
        .and_then(|(_, value)| value.as_deref())
}

/// True when `name` appears at all, valueless forms included.
pub fn has_attr(attrs: &Attrs, name: &str) -> bool {
    attrs.iter().any(|(attr, _)| attr == name)
}
