pub mod error;
pub mod field;
pub mod schema;
pub mod value;

pub use error::{ModelError, Result};
pub use field::FieldDescriptor;
pub use schema::ContentSchema;
pub use value::FieldValue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_round_trips_through_json() {
        let schema = ContentSchema::new(
            "en-US",
            vec![
                FieldDescriptor::new("title"),
                FieldDescriptor {
                    widget_id: Some("dropdown".to_string()),
                    ..FieldDescriptor::new("postVariant")
                },
            ],
        );
        let json = serde_json::to_string(&schema).expect("serialize schema");
        let round: ContentSchema = serde_json::from_str(&json).expect("deserialize schema");
        assert_eq!(round, schema);
    }
}
