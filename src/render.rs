#![allow(non_snake_case)]

use crate::palette::ColorRecord;

pub const ENUM_NAME: &str = "Color256";
pub const ARRAY_NAME: &str = "s_indexedColors";

const INDENT: &str = "\t";

pub fn renderEnum<S: AsRef<str>>(identifiers: &[S]) -> String {
    let mut out = format!("public enum {} {{\n", ENUM_NAME);
    for identifier in identifiers {
        out.push_str(&format!("{}{},\n", INDENT, identifier.as_ref()));
    }
    out.push_str("}\n");
    out
}

pub fn renderArray(records: &[ColorRecord]) -> String {
    let mut out = format!("internal static Color[] {} = [\n", ARRAY_NAME);
    for record in records {
        out.push_str(&format!("{}{},\n", INDENT, constructor(record)));
    }
    out.push_str("];\n");
    out
}

fn constructor(record: &ColorRecord) -> String {
    let rgb = record.rgb;
    format!("Color.FromArgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
}
