pub mod geo;

pub use geo::*;

/// Lower-cases text so that name and address lookups ignore case.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

#[test]
fn normalize_ascii() {
    assert_eq!(normalize("YouBike Station"), "youbike station");
}

#[test]
fn normalize_leaves_cjk_untouched() {
    assert_eq!(normalize("捷運科技大樓站"), "捷運科技大樓站");
}
