#[cfg(test)]
mod tests {
    use crate::errors::internal::{EntityKind, InternalError, RecordError, ValidationError};
    use sea_orm::DbErr;

    #[test]
    fn test_database_error_includes_operation() {
        let db_err = DbErr::RecordNotFound("test record".to_string());
        let error = InternalError::database("insert_owner", db_err);

        let error_string = error.to_string();
        assert!(error_string.contains("insert_owner"));
        assert!(error_string.contains("Database error"));
    }

    #[test]
    fn test_storage_error_includes_operation() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let error = InternalError::storage("write_media_file", io_err);

        let error_string = error.to_string();
        assert!(error_string.contains("write_media_file"));
        assert!(error_string.contains("read-only"));
    }

    #[test]
    fn test_not_found_names_entity_and_id() {
        let error = InternalError::not_found(EntityKind::WasteItem, 42);

        assert_eq!(error.to_string(), "Waste item with ID 42 not found");
        assert!(matches!(
            error,
            InternalError::Record(RecordError::NotFound { entity: EntityKind::WasteItem, id: 42 })
        ));
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let error = InternalError::from(ValidationError::single("phone", "bad"));

        assert_eq!(error.to_string(), "Validation failed for: phone");
    }
}
