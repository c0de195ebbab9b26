//! Typed ID definitions for checklist resources.

use crate::define_id;

define_id!(ListId, "lst");
define_id!(ItemId, "itm");
define_id!(RequestId, "req");

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_list_id_roundtrip() {
        let id = ListId::new();
        let parsed: ListId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_item_id_prefix() {
        let id = ItemId::new();
        assert!(id.to_string().starts_with("itm_"));
    }

    #[test]
    fn test_list_id_rejects_item_prefix() {
        let item = ItemId::new().to_string();
        let err = item.parse::<ListId>().unwrap_err();
        assert!(err.is_prefix_error());
        assert_eq!(
            err,
            crate::IdError::InvalidPrefix {
                expected: "lst",
                actual: "itm".to_string(),
            }
        );
    }

    #[test]
    fn test_list_id_missing_separator() {
        let result: Result<ListId, _> = "lst01HV4Z2WQXKJNM8GPQY6VBKC3D".parse();
        assert!(matches!(
            result.unwrap_err(),
            crate::IdError::MissingSeparator
        ));
    }

    #[test]
    fn test_list_id_empty() {
        let result: Result<ListId, _> = "".parse();
        assert!(matches!(result.unwrap_err(), crate::IdError::Empty));
    }

    #[test]
    fn test_list_id_invalid_ulid() {
        let result: Result<ListId, _> = "lst_invalid".parse();
        assert!(matches!(
            result.unwrap_err(),
            crate::IdError::InvalidUlid(_)
        ));
    }

    #[test]
    fn test_item_id_serializes_as_string() {
        let id: ItemId = "itm_01HV4Z3MXNKPQR9HSTZ7WCMD4E".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"itm_01HV4Z3MXNKPQR9HSTZ7WCMD4E\"");
        let parsed: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_all_id_prefixes_unique() {
        let prefixes = [ListId::PREFIX, ItemId::PREFIX, RequestId::PREFIX];
        let unique: std::collections::HashSet<_> = prefixes.iter().collect();
        assert_eq!(prefixes.len(), unique.len(), "Duplicate ID prefixes found!");
    }

    proptest! {
        #[test]
        fn parse_never_panics(s in "\\PC*") {
            let _ = ListId::parse(&s);
        }

        #[test]
        fn foreign_prefix_is_rejected(prefix in "[a-z]{1,6}") {
            prop_assume!(prefix != ListId::PREFIX);
            let candidate = format!("{prefix}_{}", ListId::new().ulid());
            prop_assert!(ListId::parse(&candidate).unwrap_err().is_prefix_error());
        }
    }
}
