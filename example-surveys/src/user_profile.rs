use surveykit::{Field, FieldKind, Survey};

/// A simple user profile survey.
pub fn user_profile() -> Survey {
    Survey {
        title: "User profile".to_string(),
        description: String::new(),
        form_fields: vec![
            Field::new(FieldKind::Text)
                .with_question("What is your name?")
                .with_required(true),
            Field::new(FieldKind::Number).with_question("How old are you?"),
            Field::new(FieldKind::Email)
                .with_question("What is your email?")
                .with_required(true),
            Field::new(FieldKind::Radio)
                .with_question("Would you like to receive our newsletter?")
                .with_options(["Yes", "No"]),
        ],
    }
}
