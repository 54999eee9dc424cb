use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::attribute::Attribute;
use crate::encoding::Encoding;

/// A single markup element: name, attributes, and closing behavior,
/// independent of its position in any document tree.
///
/// Attribute keys are ASCII-lowercased on every write and lookup, so
/// `Href`/`HREF`/`href` address the same entry. Insertion order is preserved
/// and drives [`Tag::make_opening_tag`] output; overwriting an existing key
/// keeps its original position.
pub struct Tag {
    name: String,
    attributes: IndexMap<String, Attribute>,
    self_closing: bool,
    trailing_slash: bool,
    noise: String,
    encoding: Option<Rc<dyn Encoding>>,
}

impl Tag {
    /// Creates a tag with the given element name, stored verbatim.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            self_closing: false,
            trailing_slash: true,
            noise: String::new(),
            encoding: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Marks the tag as self-closing.
    pub fn self_closing(&mut self) -> &mut Self {
        self.self_closing = true;
        self
    }

    /// Renders the self-closing form as `<name ...>` instead of
    /// `<name ... />`. Has no effect unless the tag is self-closing.
    pub fn no_trailing_slash(&mut self) -> &mut Self {
        self.trailing_slash = false;
        self
    }

    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// Installs the shared encoding converter. Stored values are untouched
    /// until the next read.
    pub fn set_encoding(&mut self, encoding: Rc<dyn Encoding>) {
        self.encoding = Some(encoding);
    }

    /// Stores auxiliary raw text for this tag (comment body, doctype text).
    /// The payload is held verbatim and never interpreted here.
    pub fn set_noise(&mut self, noise: impl Into<String>) -> &mut Self {
        self.noise = noise.into();
        self
    }

    pub fn noise(&self) -> &str {
        &self.noise
    }

    /// Sets an attribute, lowercasing the key. Plain strings wrap as
    /// double-quoted values via the `From` impls on [`Attribute`].
    ///
    /// Overwriting an existing key keeps its insertion-order position.
    pub fn set_attribute(&mut self, key: &str, value: impl Into<Attribute>) -> &mut Self {
        let key = key.to_ascii_lowercase();
        log::trace!(target: "tag", "set attribute on <{}>: {key}", self.name);
        self.attributes.insert(key, value.into());
        self
    }

    /// Sets every `(key, value)` pair in iteration order.
    pub fn set_attributes<K, V, I>(&mut self, attributes: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Attribute>,
    {
        for (key, value) in attributes {
            self.set_attribute(key.as_ref(), value);
        }
        self
    }

    /// Looks up an attribute by key, case-insensitively.
    ///
    /// Takes `&mut self`: when an encoding converter is installed, the stored
    /// value is converted in place on first read and the converted form is
    /// what every later read returns.
    pub fn get_attribute(&mut self, key: &str) -> Option<&Attribute> {
        let key = key.to_ascii_lowercase();
        let encoding = self.encoding.clone();
        let attr = self.attributes.get_mut(&key)?;
        if let Some(encoding) = encoding {
            if attr.convert_with(encoding.as_ref()) {
                log::trace!(target: "tag", "converted attribute value: {key}");
            }
        }
        Some(&*attr)
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(&key.to_ascii_lowercase())
    }

    /// Removes an attribute if present; removing a missing key is a no-op.
    pub fn remove_attribute(&mut self, key: &str) {
        self.attributes.shift_remove(&key.to_ascii_lowercase());
    }

    pub fn remove_all_attributes(&mut self) {
        self.attributes.clear();
    }

    /// Returns the full attribute map, running every stored value through the
    /// same conversion path as [`Tag::get_attribute`].
    pub fn get_attributes(&mut self) -> &IndexMap<String, Attribute> {
        if let Some(encoding) = self.encoding.clone() {
            for (key, attr) in self.attributes.iter_mut() {
                if attr.convert_with(encoding.as_ref()) {
                    log::trace!(target: "tag", "converted attribute value: {key}");
                }
            }
        }
        &self.attributes
    }

    /// Inserts or overwrites one property in the `style` attribute, keeping
    /// the existing properties and their order.
    pub fn set_style_attribute_value(&mut self, property: &str, value: &str) -> &mut Self {
        let mut styles = self.get_style_attribute_array().unwrap_or_default();
        styles.insert(property.to_string(), value.to_string());

        let mut serialized = String::new();
        for (property, value) in &styles {
            serialized.push_str(property);
            serialized.push(':');
            serialized.push_str(value);
            serialized.push(';');
        }
        self.set_attribute("style", serialized)
    }

    /// Parses the `style` attribute into an ordered property map.
    ///
    /// Returns `None` when the attribute is absent or valueless. The value is
    /// expected in the strict `k1:v1;k2:v2;...;` form; parsing is best-effort,
    /// and pieces without a `:` are skipped rather than rejected.
    pub fn get_style_attribute_array(&mut self) -> Option<IndexMap<String, String>> {
        let attr = self.get_attribute("style")?;
        let trimmed = attr.value()?.trim();

        // Drop the expected trailing ';' before splitting.
        let mut chars = trimmed.chars();
        chars.next_back();
        let body = chars.as_str();

        let mut styles = IndexMap::new();
        for piece in body.split(';') {
            let Some((property, value)) = piece.split_once(':') else {
                continue;
            };
            styles.insert(property.to_string(), value.to_string());
        }
        Some(styles)
    }

    /// Renders the opening markup, e.g. `<img src="a.png" />`.
    ///
    /// Attributes are emitted in insertion order, each read through the
    /// conversion path (hence `&mut self`). A valueless attribute emits the
    /// bare key; otherwise the value is wrapped in the quote style it was
    /// stored with. The tag closes with ` />` only when self-closing with a
    /// trailing slash; every other disposition closes with plain `>`.
    pub fn make_opening_tag(&mut self) -> String {
        let mut markup = String::with_capacity(self.name.len() + 2);
        markup.push('<');
        markup.push_str(&self.name);

        for (key, attr) in self.get_attributes() {
            markup.push(' ');
            markup.push_str(key);
            if let Some(value) = attr.value() {
                let quote = if attr.uses_double_quote() { '"' } else { '\'' };
                markup.push('=');
                markup.push(quote);
                markup.push_str(value);
                markup.push(quote);
            }
        }

        if self.self_closing && self.trailing_slash {
            markup.push_str(" />");
        } else {
            markup.push('>');
        }
        markup
    }

    /// Renders the closing markup, `</name>`, or the empty string for a
    /// self-closing tag.
    pub fn make_closing_tag(&self) -> String {
        if self.self_closing {
            return String::new();
        }
        format!("</{}>", self.name)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .field("self_closing", &self.self_closing)
            .field("trailing_slash", &self.trailing_slash)
            .field("noise", &self.noise)
            .field("encoding", &self.encoding.is_some())
            .finish()
    }
}

/// Whether `name` is an HTML void element (never has children or closing
/// markup). ASCII-case-insensitive; the parser collaborator uses this to
/// decide which tags to mark self-closing.
pub fn is_void_element(name: &str) -> bool {
    const VOID_ELEMENTS: &[&str] = &[
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
        "source", "track", "wbr",
    ];
    VOID_ELEMENTS.iter().any(|v| name.eq_ignore_ascii_case(v))
}
