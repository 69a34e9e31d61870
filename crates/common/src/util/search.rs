use crate::structure::{Mapping, Structure};

/// Whether `item` is a mapping holding every key of `part` with an equal value
pub fn matches_part(item: &Structure, part: &Mapping) -> bool {
    match item {
        Structure::Object(map) => part.iter().all(|(key, value)| map.get(key) == Some(value)),
        _ => false,
    }
}

/// Position of the first mapping in `items` that contains all of `part`.
///
/// An empty `part` matches the first mapping. Items that are not mappings
///  never match.
///
/// ```
/// use common::util::search_by_parts;
/// use serde_json::json;
///
/// let people = json!([
///     {"id": 3, "name": "John", "age": 23},
///     {"id": 5, "name": "Mary", "age": 22},
///     {"id": 9, "name": "Matt", "age": 25},
/// ]);
/// let part = json!({"id": 5});
/// let index = search_by_parts(people.as_array().unwrap(), part.as_object().unwrap());
/// assert_eq!(index, Some(1));
/// ```
pub fn search_by_parts<'a, I>(items: I, part: &Mapping) -> Option<usize>
where
    I: IntoIterator<Item = &'a Structure>,
{
    items.into_iter().position(|item| matches_part(item, part))
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn people() -> Vec<Structure> {
        vec![
            json!({"id": 3, "name": "John", "age": 23}),
            json!({"id": 5, "name": "Mary", "age": 22}),
            json!({"id": 9, "name": "Matt", "age": 22}),
        ]
    }

    fn part(value: Structure) -> Mapping {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(search_by_parts(&people(), &part(json!({"age": 22}))), Some(1));
    }

    #[test]
    fn test_all_keys_must_match() {
        let found = search_by_parts(&people(), &part(json!({"age": 22, "name": "Matt"})));
        assert_eq!(found, Some(2));

        let missing = search_by_parts(&people(), &part(json!({"age": 22, "name": "John"})));
        assert_eq!(missing, None);
    }

    #[test]
    fn test_missing_key_does_not_match_null() {
        let found = search_by_parts(&people(), &part(json!({"email": null})));
        assert_eq!(found, None);
    }

    #[test]
    fn test_empty_part_and_non_mappings() {
        let items = vec![json!(1), json!("x"), json!({"a": 1})];
        assert_eq!(search_by_parts(&items, &Mapping::new()), Some(2));
        assert_eq!(search_by_parts(&Vec::new(), &part(json!({"a": 1}))), None);
    }
}
