use crate::error::Result;
use crate::template::Template;
use crate::Attributes;

/// Options of [`table_for`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// Attributes of the `<table>` element.
    pub html: Attributes,
}

impl TableOptions {
    /// Set the attributes of the `<table>` element.
    pub fn with_html(self, html: impl Into<Attributes>) -> Self {
        Self { html: html.into() }
    }
}

/// Render a table for a list of objects.
///
/// The builder handed to `block` collects the content of the table, which is
/// then wrapped into a `<table>` element and appended to the template output.
/// Nothing is appended if `block` fails.
///
/// ```
/// use table_builder::{table_for, HtmlBuffer, TableOptions};
///
/// let drummers = [(1, "Pepys"), (2, "Childs")];
/// let mut html = HtmlBuffer::new();
///
/// table_for(&mut html, &drummers, TableOptions::default(), |t| {
///     let tags = t.tags();
///
///     t.body_r(&Default::default(), |(id, name)| {
///         tags.d(&id.to_string(), &Default::default()) + &tags.d(name, &Default::default())
///     });
///
///     Ok(())
/// })
/// .unwrap();
///
/// assert_eq!(
///     html.as_str(),
///     "<table><tbody><tr><td>1</td><td>Pepys</td></tr><tr><td>2</td><td>Childs</td></tr></tbody></table>",
/// );
/// ```
pub fn table_for<O, T, F>(
    template: &mut T,
    objects: &[O],
    options: TableOptions,
    block: F,
) -> Result<()>
where
    T: Template + ?Sized,
    F: FnOnce(&mut TableBuilder<'_, O, T>) -> Result<()>,
{
    let table =
        table_for_with::<TableBuilder<'_, O, T>, _, _, _>(&*template, objects, &options, block)?;

    template.concat(&table);
    Ok(())
}

/// Construction contract of builders handed to [`table_for_with`].
pub trait FromObjects<'a, O, T: ?Sized>: Sized {
    fn from_objects(objects: &'a [O], template: &'a T) -> Self;

    /// Consume the builder into the content of the `<table>` element.
    fn into_content(self) -> String;
}

/// Build the markup of a table with an alternate builder. The result is
/// returned instead of being appended to the template.
///
/// ```
/// use table_builder::{table_for_with, FromObjects, HtmlBuffer, TableOptions};
///
/// /// Renders each object as a caption line.
/// struct Captions<'a> {
///     names: &'a [&'static str],
///     content: String,
/// }
///
/// impl<'a, T: ?Sized> FromObjects<'a, &'static str, T> for Captions<'a> {
///     fn from_objects(names: &'a [&'static str], _template: &'a T) -> Self {
///         Self { names, content: String::new() }
///     }
///
///     fn into_content(self) -> String {
///         self.content
///     }
/// }
///
/// let html = HtmlBuffer::new();
///
/// let options = TableOptions::default();
///
/// let res = table_for_with::<Captions, _, _, _>(&html, &["a", "b"], &options, |c| {
///     c.content = c.names.join("|");
///     Ok(())
/// })
/// .unwrap();
///
/// assert_eq!(res, "<table>a|b</table>");
/// ```
pub fn table_for_with<'a, B, O, T, F>(
    template: &'a T,
    objects: &'a [O],
    options: &TableOptions,
    block: F,
) -> Result<String>
where
    B: FromObjects<'a, O, T>,
    T: Template + ?Sized,
    F: FnOnce(&mut B) -> Result<()>,
{
    #[cfg(feature = "log")]
    log::debug!("Rendering table for {} objects", objects.len());

    let mut builder = B::from_objects(objects, template);
    block(&mut builder)?;
    Ok(template.content_tag("table", &builder.into_content(), &options.html))
}

/// Builds elements through a template, can be copied into render closures
/// while the [`TableBuilder`] it comes from is borrowed mutably.
pub struct Tags<'a, T: ?Sized> {
    template: &'a T,
}

impl<T: ?Sized> Clone for Tags<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Tags<'_, T> {}

impl<'a, T: Template + ?Sized> Tags<'a, T> {
    pub fn new(template: &'a T) -> Self {
        Self { template }
    }

    /// Build an arbitrary element.
    pub fn tag(&self, name: &str, content: &str, attributes: &Attributes) -> String {
        self.template.content_tag(name, content, attributes)
    }

    /// Build a `<thead>` containing a single row of header cells.
    ///
    /// ```
    /// use table_builder::{Attributes, HtmlBuffer, Tags};
    ///
    /// let html = HtmlBuffer::new();
    ///
    /// assert_eq!(
    ///     Tags::new(&html).head(&["a", "b"], &Attributes::from([("class", "head")])),
    ///     r#"<thead class="head"><tr><th>a</th><th>b</th></tr></thead>"#,
    /// );
    /// ```
    pub fn head(&self, cells: &[impl AsRef<str>], attributes: &Attributes) -> String {
        let cells: String = cells
            .iter()
            .map(|cell| self.h(cell.as_ref(), &Attributes::new()))
            .collect();

        let row = self.r(&cells, &Attributes::new());
        self.tag("thead", &row, attributes)
    }

    /// Build a `<tr>` element.
    pub fn r(&self, content: &str, attributes: &Attributes) -> String {
        self.tag("tr", content, attributes)
    }

    /// Build a `<th>` element.
    pub fn h(&self, content: &str, attributes: &Attributes) -> String {
        self.tag("th", content, attributes)
    }

    /// Build a `<td>` element.
    pub fn d(&self, content: &str, attributes: &Attributes) -> String {
        self.tag("td", content, attributes)
    }
}

/// Collects the content of a table built from a list of objects.
///
/// Methods that take a closure or a content append markup to the table,
/// element constructors (`head`, `r`, `h` and `d`) only return markup to be
/// composed by the caller.
pub struct TableBuilder<'a, O, T: ?Sized> {
    objects: &'a [O],
    tags: Tags<'a, T>,
    content: String,
}

impl<'a, O, T: Template + ?Sized> TableBuilder<'a, O, T> {
    pub fn new(objects: &'a [O], template: &'a T) -> Self {
        Self { objects, tags: Tags::new(template), content: String::new() }
    }

    pub fn objects(&self) -> &'a [O] {
        self.objects
    }

    /// Element constructors that don't borrow the builder.
    pub fn tags(&self) -> Tags<'a, T> {
        self.tags
    }

    /// Markup collected so far.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Append raw markup to the table.
    pub fn concat(&mut self, markup: &str) {
        self.content.push_str(markup)
    }

    /// Append a `<tbody>` with the markup rendered for each object.
    pub fn body(&mut self, attributes: &Attributes, mut render: impl FnMut(&'a O) -> String) {
        let content: String = self.objects.iter().map(|obj| render(obj)).collect();
        let tbody = self.tags.tag("tbody", &content, attributes);
        self.concat(&tbody);
    }

    /// Append a `<tbody>` with a row for each object, `attributes` are set on
    /// each row.
    pub fn body_r(&mut self, attributes: &Attributes, mut render: impl FnMut(&'a O) -> String) {
        let rows: String = self
            .objects
            .iter()
            .map(|obj| self.tags.r(&render(obj), attributes))
            .collect();

        let tbody = self.tags.tag("tbody", &rows, &Attributes::new());
        self.concat(&tbody);
    }

    /// Append a `<thead>` wrapping given markup.
    pub fn head_with(&mut self, attributes: &Attributes, content: &str) {
        let thead = self.tags.tag("thead", content, attributes);
        self.concat(&thead);
    }

    /// Append a `<thead>` with a single row wrapping given markup,
    /// `attributes` are set on the row.
    pub fn head_r(&mut self, attributes: &Attributes, content: &str) {
        let row = self.tags.r(content, attributes);
        self.head_with(&Attributes::new(), &row);
    }

    pub fn head(&self, cells: &[impl AsRef<str>], attributes: &Attributes) -> String {
        self.tags.head(cells, attributes)
    }

    pub fn r(&self, content: &str, attributes: &Attributes) -> String {
        self.tags.r(content, attributes)
    }

    pub fn h(&self, content: &str, attributes: &Attributes) -> String {
        self.tags.h(content, attributes)
    }

    pub fn d(&self, content: &str, attributes: &Attributes) -> String {
        self.tags.d(content, attributes)
    }
}

impl<'a, O, T: Template + ?Sized> FromObjects<'a, O, T> for TableBuilder<'a, O, T> {
    fn from_objects(objects: &'a [O], template: &'a T) -> Self {
        Self::new(objects, template)
    }

    fn into_content(self) -> String {
        self.content
    }
}
