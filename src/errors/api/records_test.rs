#[cfg(test)]
mod tests {
    use crate::errors::ApiError;
    use crate::errors::internal::{
        DatabaseError, EntityKind, InternalError, RecordError, ValidationError,
    };
    use sea_orm::DbErr;

    #[test]
    fn test_validation_error_keeps_every_field() {
        let mut errors = ValidationError::new();
        errors.add("name", "Name must be at least 3 characters long.");
        errors.add("phone", "Phone number must be exactly 10 digits.");

        let api_err = ApiError::from_internal_error(InternalError::Validation(errors));

        assert_eq!(api_err.status_code(), 400);
        assert_eq!(api_err.kind(), "validation_error");
        let fields = api_err.fields().expect("validation errors carry fields");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["phone"], vec!["Phone number must be exactly 10 digits.".to_string()]);
    }

    #[test]
    fn test_not_found_names_entity_and_id() {
        let api_err = ApiError::from_internal_error(InternalError::not_found(EntityKind::WasteItem, 99));

        assert_eq!(api_err.status_code(), 404);
        assert_eq!(api_err.kind(), "not_found");
        assert_eq!(api_err.message(), "Waste item with ID 99 not found");
        assert!(api_err.fields().is_none());
    }

    #[test]
    fn test_permission_denied_converts_to_forbidden() {
        let internal_err = InternalError::Record(RecordError::PermissionDenied {
            reason: "Not the item owner".to_string(),
        });
        let api_err = ApiError::from_internal_error(internal_err);

        assert_eq!(api_err.status_code(), 403);
        assert_eq!(api_err.kind(), "permission_denied");
        assert_eq!(api_err.message(), "Not the item owner");
    }

    #[test]
    fn test_database_error_converts_to_internal_server_error() {
        let db_err = DbErr::Custom("disk I/O error at /var/lib/ewaste.db".to_string());
        let api_err = ApiError::from_internal_error(InternalError::database("insert_owner", db_err));

        assert_eq!(api_err.status_code(), 500);
        assert_eq!(api_err.kind(), "internal_error");
        assert_eq!(api_err.message(), "An unexpected error occurred.");
    }

    #[test]
    fn test_transaction_error_does_not_leak_details() {
        let internal_err = InternalError::Database(DatabaseError::TransactionCommit {
            source: DbErr::Custom("database is locked".to_string()),
        });
        let api_err = ApiError::from_internal_error(internal_err);

        assert!(!api_err.message().contains("locked"));
        assert_eq!(api_err.status_code(), 500);
    }

    #[test]
    fn test_storage_error_converts_to_internal_server_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "no space left on device");
        let api_err = ApiError::from_internal_error(InternalError::storage("write_media_file", io_err));

        assert_eq!(api_err.status_code(), 500);
        assert_eq!(api_err.message(), "An unexpected error occurred.");
    }
}
