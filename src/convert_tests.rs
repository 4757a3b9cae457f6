#[cfg(test)]
mod tests {
    use crate::convert::{convert, ConvertError, ConvertOptions, HtmlToJsx};

    #[test]
    fn test_empty_input_is_noop() {
        assert_eq!(convert("").unwrap(), "");
    }

    #[test]
    fn test_script_is_rejected() {
        let err = convert("<div><script>alert(1)</script></div>").unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedContent { .. }));

        // deeply nested and external scripts are rejected the same way
        let err = convert("<p><span><script src=\"x.js\"></script></span></p>").unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedContent { .. }));
    }

    #[test]
    fn test_single_root_is_not_wrapped() {
        assert_eq!(convert("<p>x</p>").unwrap(), "<p>{'x'}</p>");
    }

    #[test]
    fn test_multiple_roots_get_wrapper() {
        assert_eq!(
            convert("<p>a</p><p>b</p>").unwrap(),
            "<div>\n  <p>{'a'}</p>\n  <p>{'b'}</p>\n</div>"
        );
    }

    #[test]
    fn test_top_level_text_gets_wrapper() {
        assert_eq!(convert("hello").unwrap(), "<div>{'hello'}</div>");
    }

    #[test]
    fn test_comment_sibling_gets_wrapper() {
        let jsx = convert("<!-- top --><p>x</p>").unwrap();
        assert!(jsx.starts_with("<div>"));
        assert!(jsx.ends_with("</div>"));
        assert!(jsx.contains("{/* top */}"));
    }

    #[test]
    fn test_svg_tag_casing() {
        assert_eq!(convert("<clippath></clippath>").unwrap(), "<clipPath />");
        assert_eq!(convert("<CLIPPATH></CLIPPATH>").unwrap(), "<clipPath />");
    }

    #[test]
    fn test_reserved_word_props_renamed() {
        assert_eq!(
            convert("<label for=\"x\" class=\"a\">y</label>").unwrap(),
            "<label htmlFor=\"x\" className=\"a\">{'y'}</label>"
        );
    }

    #[test]
    fn test_input_becomes_uncontrolled() {
        assert_eq!(
            convert("<input value=\"5\">").unwrap(),
            "<input defaultValue={5} />"
        );
        assert_eq!(
            convert("<input checked=\"checked\">").unwrap(),
            "<input defaultChecked=\"checked\" />"
        );
    }

    #[test]
    fn test_style_attribute_translated() {
        assert_eq!(
            convert("<div style=\"font-size:12px; color:RED\"></div>").unwrap(),
            "<div style={{ fontSize: '12px', color: 'red' }} />"
        );
    }

    #[test]
    fn test_empty_style_attribute() {
        assert_eq!(convert("<div style=\"\"></div>").unwrap(), "<div style={{  }} />");
    }

    #[test]
    fn test_text_special_characters_escaped() {
        assert_eq!(
            convert("<p>a {b} 'c'</p>").unwrap(),
            "<p>{'a \\{b\\} \\'c\\''}</p>"
        );
    }

    #[test]
    fn test_entities_reescaped() {
        assert_eq!(
            convert("<p>&amp; &lt;tag&gt;</p>").unwrap(),
            "<p>{'&amp; &lt;tag&gt;'}</p>"
        );
    }

    #[test]
    fn test_comment_slashes_escaped() {
        assert_eq!(
            convert("<div><!-- a/b --></div>").unwrap(),
            "<div>\n  {/* a\\/b */}</div>"
        );
    }

    #[test]
    fn test_empty_alt_survives_other_empty_attributes_dropped() {
        assert_eq!(
            convert("<img alt=\"\" data-x=\"\">").unwrap(),
            "<img alt=\"\" />"
        );
    }

    #[test]
    fn test_textarea_content_relocated() {
        assert_eq!(
            convert("<textarea>hello</textarea>").unwrap(),
            "<textarea defaultValue={\"hello\"} />"
        );
        // attributes come first, in document order
        assert_eq!(
            convert("<textarea rows=\"4\">hi</textarea>").unwrap(),
            "<textarea rows={4} defaultValue={\"hi\"} />"
        );
    }

    #[test]
    fn test_style_tag_content_relocated() {
        assert_eq!(
            convert("<style>.a { color: red }</style>").unwrap(),
            "<style dangerouslySetInnerHTML={{__html: \".a { color: red }\" }} />"
        );
    }

    #[test]
    fn test_multiline_text_layout() {
        assert_eq!(
            convert("<p>line one\nline two</p>").unwrap(),
            "<p>\n  {'line one'}\n  {'line two'}\n</p>"
        );
    }

    #[test]
    fn test_single_nested_child_closes_inline() {
        assert_eq!(
            convert("<div><span>a</span></div>").unwrap(),
            "<div>\n  <span>{'a'}</span></div>"
        );
    }

    #[test]
    fn test_deep_nesting_indents_per_level() {
        assert_eq!(
            convert("<div><ul><li>a</li><li>b</li></ul></div>").unwrap(),
            "<div>\n  <ul>\n    <li>{'a'}</li>\n    <li>{'b'}</li>\n  </ul></div>"
        );
    }

    #[test]
    fn test_custom_indent_unit() {
        let converter = HtmlToJsx::with_options(ConvertOptions {
            indent: "    ".to_string(),
        });
        assert_eq!(
            converter.convert("<p>a</p><p>b</p>").unwrap(),
            "<div>\n    <p>{'a'}</p>\n    <p>{'b'}</p>\n</div>"
        );
    }
}
