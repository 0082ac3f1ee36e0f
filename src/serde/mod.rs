//! The native conversion of nodes, implemented as a [`serde`](::serde) deserializer.
//!
//! This is the counterpart of [`FromNode`](crate::FromNode) for types that already implement
//! [`Deserialize`](::serde::Deserialize).
//! Its errors carry no trace, [`convert_child`](crate::convert_child) turns them into a
//! [`ConvertError`](crate::ConvertError) at the boundary.
//!
//! ```
//! use serde::Deserialize;
//! use yaml_param::{node, serde::from_node};
//!
//! #[derive(Deserialize)]
//! struct Exposure {
//!     auto: bool,
//!     gain: f32,
//!     limits: [u32; 2],
//! }
//!
//! let n = node!({"auto" => false, "gain" => 1.5, "limits" => node!([100, 20000])});
//! let exposure = from_node::<Exposure>(&n).unwrap();
//! assert!(!exposure.auto);
//! assert_eq!(exposure.limits, [100, 20000]);
//!
//! // Only real booleans pass, `yes` is a string here
//! let n = node!({"auto" => "yes", "gain" => 1.5, "limits" => node!([100, 20000])});
//! let err = from_node::<Exposure>(&n).err().unwrap();
//! assert_eq!(err.to_string(), "invalid type: string \"yes\", expected a boolean");
//! ```
pub use self::de::from_node;
pub use self::error::SerdeError;

mod de;
mod error;
