#[cfg(test)]
mod tests {
    use students::libs::student::{StudentForm, COURSES, COURSE_PLACEHOLDER};
    use students::libs::validator::{Field, Validator};

    #[test]
    fn test_valid_form_passes() {
        let report = Validator::new().validate(&StudentForm::new("John Doe", "Math", "12345678"));
        assert!(report.is_ok());
        assert!(report.errors().is_empty());
        assert_eq!(report.first_invalid_field(), None);
    }

    #[test]
    fn test_name_rules() {
        let validator = Validator::new();
        assert!(validator.is_valid_name("John Doe"));
        assert!(validator.is_valid_name("jane roe"));

        assert!(!validator.is_valid_name("John"));
        assert!(!validator.is_valid_name("John3 Doe"));
        assert!(!validator.is_valid_name("John  Doe"));
        assert!(!validator.is_valid_name("John Ronald Doe"));
        assert!(!validator.is_valid_name(" John Doe"));
        assert!(!validator.is_valid_name(""));
    }

    #[test]
    fn test_mobile_rules() {
        let validator = Validator::new();
        assert!(validator.is_valid_mobile("12345678"));

        assert!(!validator.is_valid_mobile("1234567"));
        assert!(!validator.is_valid_mobile("123456789"));
        assert!(!validator.is_valid_mobile("1234567a"));
        assert!(!validator.is_valid_mobile("+216 12345678"));
    }

    #[test]
    fn test_course_placeholder_is_rejected() {
        let report = Validator::new().validate(&StudentForm::new("John Doe", COURSE_PLACEHOLDER, "12345678"));
        assert!(!report.is_ok());
        assert!(report.has_error(Field::Course));
        assert_eq!(report.first_invalid_field(), Some(Field::Course));
    }

    #[test]
    fn test_unknown_course_is_rejected() {
        let report = Validator::new().validate(&StudentForm::new("John Doe", "Chemistry", "12345678"));
        assert_eq!(report.errors().len(), 1);
        assert!(report.has_error(Field::Course));

        for course in &COURSES[1..] {
            assert!(Validator::new().validate(&StudentForm::new("John Doe", course, "12345678")).is_ok());
        }
    }

    #[test]
    fn test_every_violation_is_reported_in_form_order() {
        let report = Validator::new().validate(&StudentForm::new("john", COURSE_PLACEHOLDER, "123"));

        let fields: Vec<Field> = report.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Course, Field::Mobile]);
        assert_eq!(report.first_invalid_field(), Some(Field::Name));

        let message = report.message();
        assert_eq!(message.lines().count(), 3);
        assert!(message.contains("Name"));
        assert!(message.contains("Phone number"));
    }

    #[test]
    fn test_first_invalid_field_skips_valid_fields() {
        let report = Validator::new().validate(&StudentForm::new("John Doe", "Math", "12"));
        assert_eq!(report.first_invalid_field(), Some(Field::Mobile));
        assert!(!report.has_error(Field::Name));
    }

    #[test]
    fn test_country_code_prefix() {
        let validator = Validator::with_country_code(Some("+216".to_string()));
        assert!(validator.is_valid_mobile("12345678"));
        assert!(validator.is_valid_mobile("+216 12345678"));
        assert!(validator.is_valid_mobile("+21612345678"));

        assert!(!validator.is_valid_mobile("+216 1234567"));
        assert!(!validator.is_valid_mobile("+33 12345678"));

        let report = validator.validate(&StudentForm::new("John Doe", "Math", "+33 12345678"));
        assert!(report.errors()[0].message.contains("+216"));
    }
}
