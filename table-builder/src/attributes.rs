use std::fmt;

use crate::template::escape_html;

/// Ordered set of HTML attributes of an element.
///
/// Attributes are rendered in insertion order, setting an attribute that is
/// already defined overrides its value without changing its position.
///
/// ```
/// use table_builder::Attributes;
///
/// let mut attrs = Attributes::from([("id", "cal"), ("class", "month")]);
/// attrs.insert("id", "calendar");
/// assert_eq!(attrs.len(), 2);
/// assert_eq!(attrs.to_string(), r#" id="calendar" class="month""#);
/// ```
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute and return the updated set.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an attribute, overriding its previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        if let Some((_, old)) = self.0.iter_mut().find(|(key, _)| *key == name) {
            *old = value;
        } else {
            self.0.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Drop all attributes with an empty or whitespace-only value.
    ///
    /// ```
    /// use table_builder::Attributes;
    ///
    /// let mut attrs = Attributes::from([("class", " "), ("id", "day_01")]);
    /// attrs.remove_blank();
    /// assert_eq!(attrs, Attributes::from([("id", "day_01")]));
    /// ```
    pub fn remove_blank(&mut self) {
        self.0.retain(|(_, value)| !value.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut res = Self::new();

        for (name, value) in iter {
            res.insert(name, value);
        }

        res
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Attributes are written with a leading space, ready to be inserted right
/// after the tag name.
impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            write!(f, " {name}=\"{}\"", escape_html(value))?;
        }

        Ok(())
    }
}
