//! Built-in template functions.
//!
//! The full function set, registered once at startup via
//! [`Registry::with_builtins`](crate::registry::Registry::with_builtins):
//!
//! | name(s)           | result                                      |
//! |-------------------|---------------------------------------------|
//! | `byteRange`       | every byte in an inclusive range            |
//! | `charRange`       | every code point in an inclusive range      |
//! | `randomBytes`     | uniform random bytes                        |
//! | `randomChars`     | uniform random code points below 0x10000    |
//! | `time`, `now`     | Unix time in seconds, as text               |
//! | `hex`             | hex string decoded to bytes                 |
//! | `file`            | bytes of a user-selected file               |
//! | `bin`/`text`/`var`| a stored value, with a declared type        |

pub mod clock;
pub mod file;
pub mod hexdec;
pub mod random;
pub mod ranges;
pub mod stored;

pub use clock::Time;
pub use file::FileContents;
pub use hexdec::HexDecode;
pub use random::{RandomBytes, RandomChars};
pub use ranges::{ByteRange, CharRange};
pub use stored::StoredValue;

use std::sync::Arc;

use crate::picker::FilePicker;
use crate::registry::TemplateFunction;

/// The static list of built-in function implementations.
pub fn builtin_functions(picker: Arc<dyn FilePicker>) -> Vec<Arc<dyn TemplateFunction>> {
    vec![
        Arc::new(ByteRange),
        Arc::new(CharRange),
        Arc::new(RandomBytes),
        Arc::new(RandomChars),
        Arc::new(Time),
        Arc::new(HexDecode),
        Arc::new(FileContents::new(picker)),
        Arc::new(StoredValue::binary()),
        Arc::new(StoredValue::text()),
        Arc::new(StoredValue::any()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::MockPicker;
    use crate::registry::Registry;

    #[test]
    fn all_builtins_are_registered() {
        let picker = Arc::new(MockPicker::new(vec![]));
        let registry = Registry::with_builtins(picker);

        for name in [
            "byteRange",
            "charRange",
            "randomBytes",
            "randomChars",
            "time",
            "now",
            "hex",
            "file",
            "bin",
            "text",
            "var",
        ] {
            assert!(registry.function(name).is_some(), "missing builtin {name}");
        }
    }

    #[test]
    fn help_listing_dedupes_aliases() {
        let picker = Arc::new(MockPicker::new(vec![]));
        let registry = Registry::with_builtins(picker);
        // 10 implementations; time/now collapse to one row.
        assert_eq!(registry.functions().len(), 10);
    }
}
