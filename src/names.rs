//! Tag and attribute name resolution.
//!
//! HTML is case-insensitive and flat-namespaced; JSX wants camelCased SVG
//! tag names and renamed props where the HTML name collides with a
//! JavaScript reserved word (`class`, `for`). The tables here are built
//! once and never mutated.

use lazy_static::lazy_static;
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════════════
// NAME TABLES
// ═══════════════════════════════════════════════════════════════════════════════

lazy_static! {
    /// html5ever lowercases tag names during parsing; SVG tag names that
    /// carry camelCase in JSX are restored from this table. Names not
    /// present map to themselves.
    static ref TAG_NAME_MAP: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("altglyph", "altGlyph");
        m.insert("altglyphdef", "altGlyphDef");
        m.insert("altglyphitem", "altGlyphItem");
        m.insert("animatecolor", "animateColor");
        m.insert("animatemotion", "animateMotion");
        m.insert("animatetransform", "animateTransform");
        m.insert("clippath", "clipPath");
        m.insert("color-profile", "colorProfile");
        m.insert("feblend", "feBlend");
        m.insert("fecolormatrix", "feColorMatrix");
        m.insert("fecomponenttransfer", "feComponentTransfer");
        m.insert("fecomposite", "feComposite");
        m.insert("feconvolvematrix", "feConvolveMatrix");
        m.insert("fediffuselighting", "feDiffuseLighting");
        m.insert("fedisplacementmap", "feDisplacementMap");
        m.insert("fedistantlight", "feDistantLight");
        m.insert("fedropshadow", "feDropShadow");
        m.insert("feflood", "feFlood");
        m.insert("fefunca", "feFuncA");
        m.insert("fefuncb", "feFuncB");
        m.insert("fefuncg", "feFuncG");
        m.insert("fefuncr", "feFuncR");
        m.insert("fegaussianblur", "feGaussianBlur");
        m.insert("feimage", "feImage");
        m.insert("femerge", "feMerge");
        m.insert("femergenode", "feMergeNode");
        m.insert("femorphology", "feMorphology");
        m.insert("feoffset", "feOffset");
        m.insert("fepointlight", "fePointLight");
        m.insert("fespecularlighting", "feSpecularLighting");
        m.insert("fespotlight", "feSpotLight");
        m.insert("fetile", "feTile");
        m.insert("feturbulence", "feTurbulence");
        m.insert("font-face", "fontFace");
        m.insert("font-face-format", "fontFaceFormat");
        m.insert("font-face-name", "fontFaceName");
        m.insert("font-face-src", "fontFaceSrc");
        m.insert("font-face-uri", "fontFaceUri");
        m.insert("foreignobject", "foreignObject");
        m.insert("glyphref", "glyphRef");
        m.insert("lineargradient", "linearGradient");
        m.insert("missing-glyph", "missingGlyph");
        m.insert("radialgradient", "radialGradient");
        m.insert("textpath", "textPath");
        m
    };

    /// Global HTML attribute → JSX prop renames.
    static ref ATTRIBUTE_MAP: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("for", "htmlFor");
        m.insert("class", "className");
        m
    };

    /// Per-element prop renames; these win over the global table. Inputs
    /// get the uncontrolled-component prop names so the emitted JSX does
    /// not pin the field value.
    static ref ELEMENT_ATTRIBUTE_MAP: HashMap<&'static str, HashMap<&'static str, &'static str>> = {
        let mut input = HashMap::new();
        input.insert("checked", "defaultChecked");
        input.insert("value", "defaultValue");

        let mut m = HashMap::new();
        m.insert("input", input);
        m
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// LOOKUPS
// ═══════════════════════════════════════════════════════════════════════════════

/// Resolve a raw (case-insensitive) tag name to its JSX form.
pub fn jsx_tag_name(raw: &str) -> String {
    let lower = raw.to_lowercase();
    match TAG_NAME_MAP.get(lower.as_str()) {
        Some(mapped) => (*mapped).to_string(),
        None => lower,
    }
}

/// Resolve an attribute name to its JSX prop name for the given element.
/// Per-element renames win over the global table; unmapped names pass
/// through unchanged.
pub fn jsx_attribute_name(tag_lower: &str, attribute: &str) -> String {
    if let Some(per_tag) = ELEMENT_ATTRIBUTE_MAP.get(tag_lower) {
        if let Some(mapped) = per_tag.get(attribute) {
            return (*mapped).to_string();
        }
    }
    match ATTRIBUTE_MAP.get(attribute) {
        Some(mapped) => (*mapped).to_string(),
        None => attribute.to_string(),
    }
}
