//! `serde` support: an [`Optional`] is encoded exactly like an [`Option`].
//!
//! Decoding goes through `deserialize_option`, so a struct field that is
//! missing from the input decodes to `Absent` without `#[serde(default)]`,
//! the same as an `Option` field does.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Optional;

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Optional::Present(value) => serializer.serialize_some(value),
            Optional::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use crate::{absent, present, Optional};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Settings {
        name: Optional<String>,
        #[serde(default)]
        retries: Optional<u32>,
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&present(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&absent::<i32>()).unwrap(), "null");
    }

    #[test]
    fn test_deserialize() {
        let p: Optional<i32> = serde_json::from_str("5").unwrap();
        assert_eq!(p, present(5));
        let a: Optional<i32> = serde_json::from_str("null").unwrap();
        assert_eq!(a, absent());
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Plain {
        id: u32,
        label: Optional<String>,
    }

    #[test]
    fn test_missing_field_is_absent() {
        let plain: Plain = serde_json::from_str(r#"{"id":3}"#).unwrap();
        assert_eq!(plain, Plain { id: 3, label: absent() });

        let plain: Plain = serde_json::from_str(r#"{"id":3,"label":"x"}"#).unwrap();
        assert_eq!(plain.label, present(String::from("x")));

        assert!(
            serde_json::from_str::<Plain>(r#"{"label":"x"}"#).is_err(),
            "a missing non-optional field is still an error"
        );
    }

    #[test]
    fn test_struct_fields() {
        let settings: Settings = serde_json::from_str(r#"{"name":"rom"}"#).unwrap();
        assert_eq!(
            settings,
            Settings {
                name: present(String::from("rom")),
                retries: absent(),
            }
        );
        assert_eq!(
            serde_json::to_string(&settings).unwrap(),
            r#"{"name":"rom","retries":null}"#
        );
    }
}
