// Views serialize as their filtered content: a string when it is valid
// UTF-8, raw bytes otherwise.

use serde::{Serialize, Serializer};

use crate::FilteredStringView;

impl Serialize for FilteredStringView<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let bytes = self.to_vec();
        match core::str::from_utf8(&bytes) {
            Ok(text) => serializer.serialize_str(text),
            Err(_) => serializer.serialize_bytes(&bytes),
        }
    }
}
