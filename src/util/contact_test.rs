use pretty_assertions::assert_eq;

use super::*;

const DEFAULT_SUBJECT: &str = "Contact depuis le portfolio";

fn fields(name: &str, email: &str, subject: &str, message: &str) -> ContactFields {
    ContactFields {
        name: name.to_owned(),
        email: email.to_owned(),
        subject: subject.to_owned(),
        message: message.to_owned(),
    }
}

fn decode(encoded: &str) -> String {
    urlencoding::decode(encoded).map(|s| s.into_owned()).unwrap()
}

// --- email pattern ---

#[test]
fn email_pattern_accepts_simple_addresses() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("first.last+tag@sub.example.org"));
}

#[test]
fn email_pattern_rejects_malformed_addresses() {
    for bad in ["not-an-email", "a@b", "@b.com", "a@.com", "a b@c.com", "a@@b.com", "a@b.", "a@b.c d"] {
        assert!(!is_valid_email(bad), "{bad} should be rejected");
    }
}

// --- validation ---

#[test]
fn valid_submission_trims_fields() {
    let msg = fields("  Ann ", " a@b.com ", " Hello ", "\n Hi \n").validate(DEFAULT_SUBJECT).unwrap();
    assert_eq!(
        msg,
        ContactMessage {
            name: "Ann".to_owned(),
            email: "a@b.com".to_owned(),
            subject: "Hello".to_owned(),
            message: "Hi".to_owned(),
        }
    );
}

#[test]
fn blank_subject_uses_default() {
    let msg = fields("Ann", "a@b.com", "   ", "Hi").validate(DEFAULT_SUBJECT).unwrap();
    assert_eq!(msg.subject, DEFAULT_SUBJECT);
}

#[test]
fn missing_required_fields_rejected() {
    assert_eq!(fields("", "a@b.com", "", "Hi").validate(DEFAULT_SUBJECT), Err(ContactError::MissingFields));
    assert_eq!(fields("Ann", "  ", "", "Hi").validate(DEFAULT_SUBJECT), Err(ContactError::MissingFields));
    assert_eq!(fields("Ann", "a@b.com", "Subj", " ").validate(DEFAULT_SUBJECT), Err(ContactError::MissingFields));
}

#[test]
fn missing_fields_checked_before_email_shape() {
    assert_eq!(fields("", "nope", "", "").validate(DEFAULT_SUBJECT), Err(ContactError::MissingFields));
}

#[test]
fn invalid_email_rejected() {
    assert_eq!(
        fields("Ann", "not-an-email", "", "Hi").validate(DEFAULT_SUBJECT),
        Err(ContactError::InvalidEmail)
    );
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(ContactError::MissingFields.to_string(), "Veuillez remplir tous les champs obligatoires (*)");
    assert_eq!(ContactError::InvalidEmail.to_string(), "Veuillez entrer une adresse email valide");
}

// --- body and mailto ---

#[test]
fn body_contains_all_fields() {
    let msg = fields("Ann", "a@b.com", "", "Hi").validate(DEFAULT_SUBJECT).unwrap();
    let body = msg.body();
    assert!(body.starts_with("Bonjour Max,\n\nJe vous contacte depuis votre portfolio.\n\n"));
    assert!(body.contains("Nom: Ann\n"));
    assert!(body.contains("Email: a@b.com\n\n"));
    assert!(body.contains("Message:\nHi\n\n"));
    assert!(body.ends_with("---\nCe message a été envoyé depuis le formulaire de contact de votre portfolio."));
}

#[test]
fn mailto_encodes_subject_and_body() {
    let msg = fields("Ann", "a@b.com", "", "Hi & bye?").validate(DEFAULT_SUBJECT).unwrap();
    let uri = msg.mailto("me@example.org");

    let rest = uri.strip_prefix("mailto:me@example.org?subject=").unwrap();
    let (subject, body) = rest.split_once("&body=").unwrap();
    assert!(!subject.contains(' '));
    assert!(!body.contains('\n'));
    assert!(!body.contains('&'));
    assert_eq!(decode(subject), DEFAULT_SUBJECT);
    assert_eq!(decode(body), msg.body());
    assert!(decode(body).contains("Message:\nHi & bye?"));
}

#[test]
fn confirmation_restates_subject_and_message() {
    let msg = fields("Ann", "a@b.com", "Projet", "Hi").validate(DEFAULT_SUBJECT).unwrap();
    let text = msg.confirmation("me@example.org");
    assert!(text.contains("directement à me@example.org"));
    assert!(text.contains("Sujet: Projet"));
    assert!(text.ends_with("Message: Hi"));
}

// --- submit ---

#[test]
fn submit_accepts_reference_example() {
    let config = ContactConfig::default();
    let Submission::Accepted { mailto, confirmation } = submit(&fields("Ann", "a@b.com", "", "Hi"), &config) else {
        panic!("expected acceptance");
    };
    assert!(mailto.starts_with("mailto:maxsogbossi@gmail.com?subject="));
    assert!(decode(&mailto).contains("Nom: Ann"));
    assert!(confirmation.contains("Sujet: Contact depuis le portfolio"));
}

#[test]
fn submit_blocks_invalid_email_without_mailto() {
    let config = ContactConfig::default();
    assert_eq!(
        submit(&fields("Ann", "not-an-email", "", "Hi"), &config),
        Submission::Rejected(ContactError::InvalidEmail)
    );
}
