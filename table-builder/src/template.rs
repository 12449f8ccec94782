//! Output collaborator used by builders to produce markup.

use std::borrow::Cow;

use crate::Attributes;

/// Escape text so that it can be inserted in HTML content or in a quoted
/// attribute value.
///
/// ```
/// use table_builder::escape_html;
///
/// assert_eq!(escape_html("plain"), "plain");
/// assert_eq!(escape_html(r#"John "Stumpy" <Pepys>"#), "John &quot;Stumpy&quot; &lt;Pepys&gt;");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut res = String::with_capacity(text.len() + 16);

    for c in text.chars() {
        match c {
            '&' => res.push_str("&amp;"),
            '<' => res.push_str("&lt;"),
            '>' => res.push_str("&gt;"),
            '"' => res.push_str("&quot;"),
            '\'' => res.push_str("&#39;"),
            _ => res.push(c),
        }
    }

    Cow::Owned(res)
}

/// A templating engine able to build elements and collect the rendered
/// output.
///
/// Content handed to [`Template::content_tag`] is considered to be markup
/// already and must not be escaped again, attribute values are raw text.
pub trait Template {
    /// Build the markup of an element without emitting it.
    fn content_tag(&self, name: &str, content: &str, attributes: &Attributes) -> String;

    /// Append markup to the rendered output.
    fn concat(&mut self, markup: &str);
}

impl<T: Template + ?Sized> Template for &mut T {
    fn content_tag(&self, name: &str, content: &str, attributes: &Attributes) -> String {
        (**self).content_tag(name, content, attributes)
    }

    fn concat(&mut self, markup: &str) {
        (**self).concat(markup)
    }
}

/// Render HTML into an in-memory buffer.
///
/// ```
/// use table_builder::{Attributes, HtmlBuffer, Template};
///
/// let mut html = HtmlBuffer::new();
/// let cell = html.content_tag("td", "1", &Attributes::from([("class", "weekend")]));
/// html.concat(&cell);
/// assert_eq!(html.as_str(), r#"<td class="weekend">1</td>"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlBuffer {
    output: String,
}

impl HtmlBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_string(self) -> String {
        self.output
    }
}

impl Template for HtmlBuffer {
    fn content_tag(&self, name: &str, content: &str, attributes: &Attributes) -> String {
        format!("<{name}{attributes}>{content}</{name}>")
    }

    fn concat(&mut self, markup: &str) {
        self.output.push_str(markup)
    }
}
