//! Set many attributes at once from a keyed property bag.
//!
//! Any [`Serialize`] struct or map works as a bag. Field names have `_`
//! turned into `-`, so `aria_label` sets `aria-label`. Strings are used as
//! is, numbers and booleans are stringified and `null` entries are skipped.
//!
//! ```
//! use serde::Serialize;
//! use tagwright_dom::{bind, tags};
//!
//! #[derive(Serialize)]
//! struct Links<'a> {
//!     index_url: &'a str,
//!     about_url: &'a str,
//! }
//!
//! let a = bind::data_from(&tags::a(), &Links { index_url: "/index", about_url: "/about" }, true)?;
//! assert_eq!(a.get("data-index-url"), Some("/index"));
//! assert_eq!(a.get("data-about-url"), Some("/about"));
//! # Ok::<(), tagwright_dom::Error>(())
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::element::Element;
use crate::error::{Error, Result};

/// Flatten a bag into `(name, value)` pairs in field order.
fn entries<T>(bag: &T) -> Result<Vec<(String, String)>>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(bag)
        .map_err(|e| Error::invalid_argument(format!("property bag does not serialize: {e}")))?;
    let Value::Object(map) = value else {
        return Err(Error::invalid_argument(
            "property bag must be a struct or a map",
        ));
    };

    let mut out = Vec::with_capacity(map.len());
    for (key, value) in map {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(Error::invalid_argument(format!(
                    "property '{key}' is not a scalar value"
                )));
            }
        };
        out.push((key.replace('_', "-"), value));
    }
    Ok(out)
}

/// Set one attribute per entry of `bag` through [`Element::attribute_with`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `bag` is not a struct or map,
/// holds a nested value, or has an empty key.
pub fn attributes_from<T>(element: &Element, bag: &T, replace_existing: bool) -> Result<Element>
where
    T: Serialize + ?Sized,
{
    entries(bag)?
        .into_iter()
        .try_fold(element.clone(), |el, (key, value)| {
            el.attribute_with(&key, value, replace_existing)
        })
}

/// Like [`attributes_from`], but every entry goes through
/// [`Element::data_with`] and gains the `data-` prefix.
///
/// # Errors
///
/// See [`attributes_from`].
pub fn data_from<T>(element: &Element, bag: &T, replace_existing: bool) -> Result<Element>
where
    T: Serialize + ?Sized,
{
    entries(bag)?
        .into_iter()
        .try_fold(element.clone(), |el, (key, value)| {
            el.data_with(&key, value, replace_existing)
        })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Field<'a> {
        aria_label: &'a str,
        tabindex: u32,
        required: bool,
        placeholder: Option<&'a str>,
    }

    #[test]
    fn test_struct_bag() {
        let bag = Field {
            aria_label: "Search",
            tabindex: 2,
            required: true,
            placeholder: None,
        };
        let el = attributes_from(&Element::new("input").unwrap(), &bag, true).unwrap();
        assert_eq!(el.get("aria-label"), Some("Search"));
        assert_eq!(el.get("tabindex"), Some("2"));
        assert_eq!(el.get("required"), Some("true"));
        assert!(!el.has_attribute("placeholder"));
    }

    #[test]
    fn test_replace_existing_is_honored() {
        let el = Element::new("a").unwrap().attribute("href", "/old").unwrap();
        let mut bag = BTreeMap::new();
        let _ = bag.insert("href", "/new");
        assert_eq!(
            attributes_from(&el, &bag, false).unwrap().get("href"),
            Some("/old")
        );
        assert_eq!(
            attributes_from(&el, &bag, true).unwrap().get("href"),
            Some("/new")
        );
    }

    #[test]
    fn test_data_prefix() {
        let mut bag = BTreeMap::new();
        let _ = bag.insert("data-id", "1");
        let _ = bag.insert("user_name", "ada");
        let el = data_from(&Element::new("div").unwrap(), &bag, true).unwrap();
        assert_eq!(el.get("data-id"), Some("1"));
        assert_eq!(el.get("data-user-name"), Some("ada"));
    }

    #[test]
    fn test_non_map_bag_is_rejected() {
        let el = Element::new("div").unwrap();
        assert!(matches!(
            attributes_from(&el, &[1, 2], true),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            attributes_from(&el, "text", true),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_nested_value_is_rejected() {
        let mut bag = BTreeMap::new();
        let _ = bag.insert("list", vec![1, 2]);
        let el = Element::new("div").unwrap();
        assert!(matches!(
            attributes_from(&el, &bag, true),
            Err(Error::InvalidArgument(_))
        ));
    }
}
