#![expect(missing_docs)]

use filterview::{FilteredStringView, split};

#[test]
fn serializes_filtered_content_as_a_string() {
    let view = FilteredStringView::with_predicate("a-b-c", |c| c != b'-');
    assert_eq!(serde_json::to_string(&view).unwrap(), r#""abc""#);
    assert_eq!(serde_json::to_string(&FilteredStringView::default()).unwrap(), r#""""#);
}

#[test]
fn serializes_invalid_utf8_as_bytes() {
    let bytes = [b'a', 0xff, b'b'];
    let view = FilteredStringView::new(&bytes);
    assert_eq!(serde_json::to_string(&view).unwrap(), "[97,255,98]");

    let view = FilteredStringView::with_predicate(&bytes, |c| c.is_ascii());
    assert_eq!(serde_json::to_string(&view).unwrap(), r#""ab""#);
}

#[test]
fn serializes_split_segments() {
    let view = FilteredStringView::new("x,y,,z");
    let parts = split(&view, &FilteredStringView::new(","));
    let json = serde_json::to_value(parts.to_vec()).unwrap();
    assert_eq!(json, serde_json::json!(["x", "y", "", "z"]));
}
