//! # kson
//!
//! Immutable, typed JSON value trees.
//!
//! Build trees from native values, query them with indexer-style access and
//! move them through JSON text with `serde_json`.
//!
//! ```
//! use kson::{js_array, js_object, JsValue};
//!
//! let person = JsValue::from(js_object! {
//!     "firstName" => "Andrew",
//!     "age" => 21,
//!     "pets" => js_array![
//!         js_object! { "kind" => "dog", "name" => "Rover" },
//!         js_object! { "kind" => "cat", "name" => "Kitty" },
//!     ],
//! });
//!
//! assert_eq!(person["firstName"].as_str(), Some("Andrew"));
//! assert_eq!(person["firstName"].as_int(), None);
//! let names: Vec<_> = person["pets"].as_list().map(|pet| pet["name"].as_str()).collect();
//! assert_eq!(names, [Some("Rover"), Some("Kitty")]);
//! ```
//!
//! Structural access fails at the first missing key or index: `get` and
//! `pointer` return an [`AccessError`], `[]` panics with it. Scalar
//! extraction on a different variant returns `None`.
mod convert;
mod de;
mod error;
mod impls;
pub mod json;
mod ser;
mod value;

pub use convert::{from_js_value, to_js_value, FromJsValue, ToJs};
pub use error::{AccessError, Error};
pub use ser::to_value;
pub use value::{AsList, JsArray, JsIndex, JsObject, JsString, JsValue, Kind, ObjectIter};
