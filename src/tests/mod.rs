use super::*;

#[cfg(feature = "loader")]
mod load;
#[cfg(feature = "serde")]
mod native;
#[cfg(feature = "loader")]
mod preprocess;

#[cfg(feature = "loader")]
const TEST_DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/tests/data");

/// The nested map from the crate documentation, `b` fails at its third element.
fn nested_failure() -> Node {
    node!({
        "a" => node!({
            "b" => node!([1, 2, "x"]),
        }),
    })
}
