//! Base colors for well-known tag names
//!
//! Order matters: the palette's fallback list follows this table.

pub const KNOWN_TAG_COLORS: &[(&str, &str)] = &[
    ("area", "#47ff6d"),
    ("base", "#aeff00"),
    ("blockquote", "#ffb7ad"),
    ("q", "#ffb7ad"),
    ("caption", "#6dd"),
    ("sub", "#add"),
    ("summary", "#fc0"),
    ("sup", "#cdf"),
    ("i", "#fffe80"),
    ("ins", "#ffccf1"),
    ("kbd", "#9fc"),
    ("legend", "#afe"),
    ("map", "#fff000"),
    ("mark", "#fcff00"),
    ("menu", "#3bf"),
    ("noscript", "#ff7979"),
    ("object", "#ff7e7e"),
    ("rb", "#dac"),
    ("rp", "#fdc"),
    ("rt", "#afb"),
    ("ruby", "#dea"),
    ("s", "#bbb3d7"),
    ("samp", "#fe3"),
    ("small", "#aaf"),
    ("source", "#48dfff"),
    ("strong", "#fc9"),
    ("wbr", "#fcdfb5"),
    ("abbr", "#fff600"),
    ("address", "#ee6"),
    ("article", "#fc0"),
    ("aside", "#ffca96"),
    ("audio", "#a1ffd0"),
    ("b", "#eaf"),
    ("br", "#afa"),
    ("button", "#fbb"),
    ("canvas", "#6cf"),
    ("cite", "#ff8888"),
    ("code", "#adda04"),
    ("col", "#a4d5ff"),
    ("colgroup", "#acb5ff"),
    ("dd", "#dd9"),
    ("del", "#dcc"),
    ("dfn", "#bfa"),
    ("dl", "#e93"),
    ("dt", "#9df"),
    ("em", "#ef71ff"),
    ("fieldset", "#fce"),
    ("figcaption", "#aaf"),
    ("figure", "#e6eecc"),
    ("footer", "#ffe400"),
    ("form", "#00ffc6"),
    ("svg", "#6fd"),
    ("hgroup", "#fac"),
    ("hr", "#fc7"),
    ("html", "#cac"),
    ("iframe", "#ff80c2"),
    ("image", "#48dfff"),
    ("img", "#48dfff"),
    ("input", "#dcc"),
    ("label", "#ff7e00"),
    ("li", "#fbb"),
    ("link", "rgb(156, 255, 131)"),
    ("main", "#42ff00"),
    ("meta", "#aff"),
    ("nav", "#00ffff"),
    ("ol", "#9ac"),
    ("option", "#edd"),
    ("p", "#ffcc00"),
    ("pre", "#ffb304"),
    ("script", "rgb(66, 224, 255)"),
    ("section", "#ffccdd"),
    ("select", "#cff"),
    ("table", "#ef9"),
    ("tbody", "#fcb"),
    ("td", "#ff8"),
    ("textarea", "#ed9"),
    ("tfoot", "rgb(35, 226, 255)"),
    ("th", "#ff99f2"),
    ("thead", "#f88"),
    ("time", "#9eff6f"),
    ("title", "#fcc"),
    ("tr", "#aaeec4"),
    ("ul", "#ffa"),
    ("video", "#efc"),
    ("span", "#aaeeff"),
    ("div", "rgb(255, 255, 200)"),
    ("style", "#ffa200"),
    ("a", "rgb(90, 255, 123)"),
    ("head", "#dda"),
    ("header", "#faa"),
    ("h1", "rgb(255, 130, 130)"),
    ("h2", "rgb(255, 138, 216)"),
    ("h3", "#e7e578"),
    ("h4", "#a3ff99"),
    ("h5", "rgb(94, 223, 255)"),
    ("h6", "rgb(204, 160, 255)"),
    ("body", "#a9ffb3"),
];
