use crate::encoding::Encoding;

/// A single attribute entry: the optional value plus the quote style it was
/// written with, so serialization can reproduce the source form.
///
/// `value: None` is a bare/valueless attribute (`disabled`, `checked`) and
/// renders as the key alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    value: Option<String>,
    double_quote: bool,
    // Set once the stored value has been run through the tag's encoding
    // converter; guards against converting the same value twice.
    converted: bool,
}

impl Attribute {
    pub fn new(value: Option<String>, double_quote: bool) -> Self {
        Self {
            value,
            double_quote,
            converted: false,
        }
    }

    /// A valueless attribute, rendered as the bare key.
    pub fn bare() -> Self {
        Self::new(None, true)
    }

    /// A single-quoted value; the default wrapping is double-quoted.
    pub fn single_quoted(value: impl Into<String>) -> Self {
        Self::new(Some(value.into()), false)
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn uses_double_quote(&self) -> bool {
        self.double_quote
    }

    /// Runs the stored value through `encoding` in place, at most once per
    /// stored value. Returns whether a conversion actually ran.
    pub(crate) fn convert_with(&mut self, encoding: &dyn Encoding) -> bool {
        if self.converted {
            return false;
        }
        let Some(value) = self.value.as_deref() else {
            return false;
        };
        self.value = Some(encoding.convert(value));
        self.converted = true;
        true
    }
}

impl From<&str> for Attribute {
    fn from(value: &str) -> Self {
        Self::new(Some(value.to_string()), true)
    }
}

impl From<String> for Attribute {
    fn from(value: String) -> Self {
        Self::new(Some(value), true)
    }
}

impl From<Option<String>> for Attribute {
    fn from(value: Option<String>) -> Self {
        Self::new(value, true)
    }
}
