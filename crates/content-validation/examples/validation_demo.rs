//! Walkthrough of every check the entity validator offers

use content_validation::{
    inspect_fields, EntityValidation, EntityValidator, ValidationError, ValidatorConfig,
};
use serde::Serialize;

#[derive(Serialize)]
struct RegisterUserRequest {
    username: String,
    email: String,
    phone: String,
}

inspect_fields!(RegisterUserRequest {
    username,
    email,
    phone
});

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("🦀 content-validation Demo");
    println!("==========================\n");

    let config = ValidatorConfig::from_env()?;
    let validator = EntityValidator::with_config(config);

    demo_content_checks(&validator);
    demo_format_checks(&validator);
    demo_request_checks(&validator);

    println!("✅ All validation demos completed successfully!");
    Ok(())
}

fn report(label: &str, result: Result<(), ValidationError>) {
    match result {
        Ok(()) => println!("  ✅ {}", label),
        Err(error) => println!("  ❌ {} -> [{}] {}", label, error.code(), error),
    }
}

fn demo_content_checks(validator: &EntityValidator) {
    println!("📝 Demo 1: Content Checks");
    println!("-------------------------");

    report(
        "title + description",
        validator.validate_title_and_description("Release notes", "What changed in 0.1"),
    );
    report(
        "blank description",
        validator.validate_title_and_description("Release notes", "   "),
    );
    report("content id", validator.validate_content_id("post-42"));
    report("missing content id", validator.validate_content_id(None));

    match validator.validate_optional_exists(Some("post body")) {
        Ok(body) => println!("  ✅ found content: {}", body),
        Err(error) => println!("  ❌ {}", error),
    }
    if let Err(error) = validator.validate_optional_exists::<&str>(None) {
        println!("  ❌ lookup miss -> {}", error.to_json());
    }
    println!();
}

fn demo_format_checks(validator: &EntityValidator) {
    println!("📧 Demo 2: Format Checks");
    println!("------------------------");

    for email in ["user@example.com", "user@example", "user@@example.com", ""] {
        report(&format!("email {:?}", email), validator.validate_email_format(email));
    }
    for phone in ["5551234567", "555-123", " 12345"] {
        report(&format!("phone {:?}", phone), validator.validate_phone_format(phone));
    }
    println!();
}

fn demo_request_checks(validator: &EntityValidator) {
    println!("📋 Demo 3: Request Checks");
    println!("-------------------------");

    let complete = RegisterUserRequest {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        phone: "5551234567".to_string(),
    };
    report("complete request", validator.check_all_fields_non_empty(&complete));

    let partial = RegisterUserRequest {
        username: "bob".to_string(),
        email: String::new(),
        phone: String::new(),
    };
    report("partial request", validator.check_all_fields_non_empty(&partial));
    println!();
}
