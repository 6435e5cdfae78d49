#[cfg(test)]
mod tests {
    use crate::error::MerchantError;
    use crate::schema::{FieldSchema, FieldType};
    use crate::validate::{filter, validate, FieldBag};
    use proptest::collection::btree_map;
    use proptest::prelude::*;
    use proptest::sample::Index;
    use serde_json::{json, Value};
    use std::collections::BTreeSet;

    fn field_type() -> impl Strategy<Value = FieldType> {
        prop_oneof![
            Just(FieldType::String),
            Just(FieldType::Number),
            Just(FieldType::Boolean),
            Just(FieldType::Object),
        ]
    }

    // A value of the given type
    fn value_of(field_type: FieldType) -> BoxedStrategy<Value> {
        match field_type {
            FieldType::String => "[a-zA-Z0-9 ]{0,12}".prop_map(Value::from).boxed(),
            FieldType::Number => any::<i64>().prop_map(Value::from).boxed(),
            FieldType::Boolean => any::<bool>().prop_map(Value::Bool).boxed(),
            FieldType::Object => btree_map("[a-z]{1,5}", "[a-z]{0,5}", 0..3)
                .prop_map(|m| {
                    Value::Object(m.into_iter().map(|(k, v)| (k, Value::String(v))).collect())
                })
                .boxed(),
        }
    }

    // A value that never matches the given type
    fn wrong_value_for(field_type: FieldType) -> Value {
        match field_type {
            FieldType::String => json!(42),
            FieldType::Number => json!("42"),
            FieldType::Boolean => json!("true"),
            FieldType::Object => Value::Null,
        }
    }

    // A schema together with data that satisfies it
    fn schema_with_data() -> impl Strategy<Value = (Vec<(String, FieldType)>, FieldBag)> {
        btree_map("[a-z]{1,8}", field_type(), 1..8).prop_flat_map(|schema| {
            let entries: Vec<(String, FieldType)> = schema.into_iter().collect();
            let values: Vec<BoxedStrategy<Value>> =
                entries.iter().map(|(_, t)| value_of(*t)).collect();
            (Just(entries), values).prop_map(|(entries, values)| {
                let data: FieldBag = entries
                    .iter()
                    .map(|(key, _)| key.clone())
                    .zip(values)
                    .collect();
                (entries, data)
            })
        })
    }

    fn as_fields(entries: &[(String, FieldType)]) -> Vec<(&str, FieldType)> {
        entries.iter().map(|(k, t)| (k.as_str(), *t)).collect()
    }

    proptest! {
        // Filtering keeps exactly the keys both sides know and drops the rest
        #[test]
        fn test_filter_keeps_intersection(
            schema_keys in btree_map("[a-d]{1,2}", field_type(), 0..8),
            raw in btree_map("[a-d]{1,2}", any::<i64>(), 0..8),
        ) {
            let entries: Vec<(String, FieldType)> = schema_keys.into_iter().collect();
            let fields = as_fields(&entries);
            let schema = FieldSchema::new("generated", &fields);
            let raw: FieldBag = raw.into_iter().map(|(k, v)| (k, Value::from(v))).collect();

            let filtered = filter(&raw, &schema);

            for (key, value) in &raw {
                if schema.contains(key) {
                    prop_assert_eq!(filtered.data.get(key), Some(value));
                } else {
                    prop_assert!(!filtered.data.contains_key(key));
                    prop_assert!(filtered.dropped.contains(key));
                }
            }
            prop_assert!(filtered.data.keys().all(|k| schema.contains(k)));
            prop_assert_eq!(filtered.data.len() + filtered.dropped.len(), raw.len());
        }

        // Complete, well-typed data passes, with or without extra keys
        #[test]
        fn test_complete_data_validates(
            (entries, data) in schema_with_data(),
            extra in btree_map("[A-Z][a-z]{0,6}", any::<i64>(), 0..4),
        ) {
            let fields = as_fields(&entries);
            let schema = FieldSchema::new("generated", &fields);
            prop_assert!(validate(&data, &schema).is_ok());

            let mut with_extra = data.clone();
            with_extra.extend(extra.into_iter().map(|(k, v)| (k, Value::from(v))));
            prop_assert!(validate(&with_extra, &schema).is_ok());
            prop_assert_eq!(filter(&with_extra, &schema).data, data);
        }

        // Removing any one field is reported as missing
        #[test]
        fn test_absent_field_is_missing(
            (entries, mut data) in schema_with_data(),
            index in any::<Index>(),
        ) {
            let fields = as_fields(&entries);
            let schema = FieldSchema::new("generated", &fields);
            let (key, _) = &entries[index.index(entries.len())];
            data.remove(key);

            match validate(&data, &schema) {
                Err(MerchantError::MissingParameters(missing)) => {
                    prop_assert_eq!(missing, vec![key.clone()]);
                }
                other => prop_assert!(false, "expected MissingParameters, got {:?}", other),
            }
        }

        // A mistyped field is reported as invalid even when another field is absent
        #[test]
        fn test_wrong_type_wins_over_missing(
            (entries, mut data) in schema_with_data(),
            wrong in any::<Index>(),
            absent in any::<Index>(),
        ) {
            let fields = as_fields(&entries);
            let schema = FieldSchema::new("generated", &fields);
            let wrong = wrong.index(entries.len());
            let absent = absent.index(entries.len());
            let (wrong_key, wrong_type) = &entries[wrong];
            data.insert(wrong_key.clone(), wrong_value_for(*wrong_type));
            if absent != wrong {
                data.remove(&entries[absent].0);
            }

            match validate(&data, &schema) {
                Err(MerchantError::InvalidParameters(invalid)) => {
                    prop_assert_eq!(invalid, vec![wrong_key.clone()]);
                }
                other => prop_assert!(false, "expected InvalidParameters, got {:?}", other),
            }
        }

        // Validation only ever names schema fields
        #[test]
        fn test_reported_fields_belong_to_schema(
            (entries, _) in schema_with_data(),
            raw in btree_map("[a-z]{1,8}", prop_oneof![Just(json!(null)), Just(json!(1)), Just(json!("s"))], 0..8),
        ) {
            let fields = as_fields(&entries);
            let schema = FieldSchema::new("generated", &fields);
            let known: BTreeSet<&str> = fields.iter().map(|(k, _)| *k).collect();
            let raw: FieldBag = raw.into_iter().collect();

            if let Err(err) = validate(&raw, &schema) {
                let reported = err.fields().unwrap_or_default();
                prop_assert!(!reported.is_empty());
                prop_assert!(reported.iter().all(|k| known.contains(k.as_str())));
            }
        }
    }
}
