//! Label encoder for a single categorical column

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

/// Fitted label encoder for one column
///
/// The code of a class is its position in the fitted class list, so the class
/// order must be preserved exactly as exported after training.
#[derive(Debug, Clone)]
pub struct CategoricalEncoder {
    classes: Vec<String>,
    codes: FxHashMap<String, u32>,
}

impl CategoricalEncoder {
    /// Create an encoder from its ordered class list
    ///
    /// Fails when the list is empty or contains duplicates.
    pub fn new<I, S>(classes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let classes: Vec<String> = classes.into_iter().map(Into::into).collect();
        if classes.is_empty() {
            return Err(Error::configuration("Encoder has no classes"));
        }

        let mut codes = FxHashMap::default();
        for (code, class) in classes.iter().enumerate() {
            let code = u32::try_from(code)
                .map_err(|_| Error::configuration("Encoder has too many classes"))?;
            if codes.insert(class.clone(), code).is_some() {
                return Err(Error::configuration(format!(
                    "Encoder class '{class}' appears more than once"
                )));
            }
        }

        Ok(Self { classes, codes })
    }

    /// Integer code for `value`, if it is a known class
    #[must_use]
    pub fn encode(&self, value: &str) -> Option<u32> {
        self.codes.get(value).copied()
    }

    /// Class string for `code`
    #[must_use]
    pub fn decode(&self, code: u32) -> Option<&str> {
        self.classes.get(code as usize).map(String::as_str)
    }

    /// Whether `value` was seen at training time
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.codes.contains_key(value)
    }

    /// Known classes in code order
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of known classes
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always false for a constructed encoder
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
