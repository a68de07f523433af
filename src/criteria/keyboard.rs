// SPDX-License-Identifier: PMPL-1.0-or-later
//! Keyboard Operability - WCAG 2.1.1 (Level A)
//!
//! Elements that are not natively interactive (`div`, `span`, `p`, `img`)
//! but carry an `onclick` handler must be reachable from the keyboard. An
//! element is focusable when it declares `tabindex` with an integer value
//! of zero or more; anything else (missing, negative, non-numeric) leaves
//! it unreachable.

use crate::criteria::Criterion;
use crate::dom::{DocumentTree, ElementNode, ElementQuery};
use crate::result::Violation;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

pub const ID: &str = "2.1.1";

/// Tags that are not keyboard-interactive on their own
pub const NON_INTERACTIVE_TAGS: &[&str] = &["div", "span", "p", "img"];

/// Roles that promise button/link behaviour and therefore need focus
pub const INTERACTIVE_ROLES: &[&str] = &["button", "link", "menuitem"];

/// Attribute marking an element as clickable
pub const CLICK_ATTR: &str = "onclick";

static INT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?)([0-9]+)").expect("valid regex"));

/// Keyboard operability criterion
pub struct KeyboardCriterion;

impl Criterion for KeyboardCriterion {
    fn id(&self) -> &str {
        ID
    }

    fn name(&self) -> &str {
        "Keyboard Operability"
    }

    fn description(&self) -> &str {
        "Checks that click-only, non-native controls are keyboard focusable (WCAG 2.1.1)"
    }

    fn check(&self, tree: &dyn DocumentTree) -> anyhow::Result<Vec<Violation>> {
        let query = ElementQuery::tags(NON_INTERACTIVE_TAGS).with_attr(CLICK_ATTR);
        let clickables = tree.select(&query)?;
        trace!(elements = clickables.len(), "Checking click handlers on non-interactive elements");

        Ok(clickables.iter().filter_map(check_clickable).collect())
    }
}

fn check_clickable(el: &ElementNode) -> Option<Violation> {
    if is_focusable(el) {
        return None;
    }

    let tag = el.tag_name().to_ascii_uppercase();
    let message = match el.role().filter(|role| INTERACTIVE_ROLES.contains(role)) {
        Some(role) => format!(
            "Criterion 2.1.1 (Keyboard): The <{}> element with role=\"{}\" and 'onclick' is not focusable (missing tabindex=\"0\").",
            tag, role
        ),
        None => format!(
            "Criterion 2.1.1 (Keyboard): The <{}> element has 'onclick' but is neither natively interactive nor has tabindex=\"0\".",
            tag
        ),
    };

    Some(Violation::new(ID, message))
}

/// Whether the element declares a tabindex of zero or more
pub fn is_focusable(el: &ElementNode) -> bool {
    el.tabindex()
        .and_then(parse_int_prefix)
        .map_or(false, |value| value >= 0)
}

/// Read a leading base-10 integer the way HTML attribute parsing does:
/// skip leading whitespace, accept one sign, then take the run of digits
/// and ignore whatever follows. Overflow saturates.
pub fn parse_int_prefix(value: &str) -> Option<i64> {
    let caps = INT_PREFIX.captures(value)?;
    let negative = &caps[1] == "-";
    let digits = &caps[2];

    let magnitude = digits
        .bytes()
        .try_fold(0i64, |acc, b| {
            acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
        })
        .unwrap_or(i64::MAX);

    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::html::HtmlDocument;
    use crate::dom::memory::MemoryDocument;

    fn check_html(html: &str) -> Vec<Violation> {
        KeyboardCriterion.check(&HtmlDocument::parse(html)).unwrap()
    }

    #[test]
    fn test_role_button_with_tabindex_zero() {
        let found = check_html(r#"<html><body><div onclick="go()" role="button" tabindex="0">OK</div></body></html>"#);
        assert!(found.is_empty());
    }

    #[test]
    fn test_role_button_without_tabindex() {
        let found = check_html(r#"<html><body><div onclick="go()" role="button">Go</div></body></html>"#);
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].description(),
            "Criterion 2.1.1 (Keyboard): The <DIV> element with role=\"button\" and 'onclick' is not focusable (missing tabindex=\"0\")."
        );
    }

    #[test]
    fn test_span_without_role_or_tabindex() {
        let found = check_html(r#"<html><body><span onclick="go()">Go</span></body></html>"#);
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].description(),
            "Criterion 2.1.1 (Keyboard): The <SPAN> element has 'onclick' but is neither natively interactive nor has tabindex=\"0\"."
        );
    }

    #[test]
    fn test_focusable_never_reported_regardless_of_role() {
        let html = r#"<html><body>
            <p onclick="a()" tabindex="0">a</p>
            <img onclick="b()" tabindex="3" role="link" alt="">
            <span onclick="c()" tabindex="1" role="tab">c</span>
        </body></html>"#;
        assert!(check_html(html).is_empty());
    }

    #[test]
    fn test_negative_tabindex_not_focusable() {
        let found = check_html(r#"<html><body><div onclick="a()" role="link" tabindex="-1">x</div></body></html>"#);
        assert_eq!(found.len(), 1);
        assert!(found[0].description().contains("role=\"link\""));
    }

    #[test]
    fn test_non_numeric_tabindex_not_focusable() {
        let found = check_html(r#"<html><body><div onclick="a()" tabindex="auto">x</div></body></html>"#);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_other_role_uses_plain_message() {
        let found = check_html(r#"<html><body><div onclick="a()" role="tab">x</div></body></html>"#);
        assert_eq!(found.len(), 1);
        assert!(found[0].description().contains("neither natively interactive"));
    }

    #[test]
    fn test_role_match_is_case_sensitive() {
        let doc = MemoryDocument::new().with_element(
            ElementNode::new("div").with_attr("onclick", "x()").with_attr("role", "Button"),
        );
        let found = KeyboardCriterion.check(&doc).unwrap();
        assert!(found[0].description().contains("neither natively interactive"));
    }

    #[test]
    fn test_native_controls_ignored() {
        let html = r##"<html><body>
            <button onclick="a()">a</button>
            <a href="#" onclick="b()">b</a>
            <li onclick="c()">c</li>
        </body></html>"##;
        assert!(check_html(html).is_empty());
    }

    #[test]
    fn test_document_order_preserved() {
        let html = r#"<html><body>
            <p onclick="a()">a</p>
            <img onclick="b()" src="x.png" alt="">
            <div onclick="c()">c</div>
        </body></html>"#;
        let found = check_html(html);
        let tags: Vec<_> = found
            .iter()
            .map(|v| v.description().split_whitespace().nth(4).unwrap_or("").to_string())
            .collect();
        assert_eq!(tags, vec!["<P>", "<IMG>", "<DIV>"]);
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("0"), Some(0));
        assert_eq!(parse_int_prefix("  2"), Some(2));
        assert_eq!(parse_int_prefix("+4"), Some(4));
        assert_eq!(parse_int_prefix("-1"), Some(-1));
        assert_eq!(parse_int_prefix("0abc"), Some(0));
        assert_eq!(parse_int_prefix("1.5"), Some(1));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("- 1"), None);
        assert_eq!(parse_int_prefix("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("-99999999999999999999999"), Some(-i64::MAX));
    }
}
