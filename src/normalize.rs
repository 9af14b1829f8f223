//
// Copyright (c) Pirmin Kalberer. All rights reserved.
//

/// Collapses line breaks, tabs and runs of spaces into single spaces and
/// trims both ends.
///
/// Only whitespace is touched, so keywords, numbers, commas and parentheses
/// come out in the same order they went in. Never fails; an empty or
/// all-blank string yields an empty string.
pub fn normalize(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    for segment in raw.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}


#[test]
fn test_collapse_line_breaks() {
    assert_eq!(normalize("POINT (\n  1   2 \n)"), "POINT ( 1 2 )");
    assert_eq!(normalize("LINESTRING(1 2,\r\n\t3 4)"), "LINESTRING(1 2, 3 4)");
    assert_eq!(normalize("  POLYGON ((0 0, 1 0, 1 1, 0 0))  "), "POLYGON ((0 0, 1 0, 1 1, 0 0))");
}

#[test]
fn test_empty_input() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize(" \n\t\r "), "");
}

#[test]
fn test_idempotent() {
    let inputs = [
        "",
        "POINT (1 2)",
        "\tMULTIPOINT ((1 2),\n (3 4))\n",
        "GEOMETRYCOLLECTION (POINT (1 2),\r\n  LINESTRING (1 2, 3 4))",
        "   a   b\n\nc  ",
    ];
    for s in inputs.iter() {
        let once = normalize(s);
        assert_eq!(normalize(&once), once);
    }
}
