//! Integration tests for entity generation.

use ceg_core::{Declaration, DeclarationKind, generate_all, generate_entity};
use ceg_model::{AttributeMetadata, AttributeTypeCode, EntityMetadata, OptionMetadata};

fn account() -> EntityMetadata {
    EntityMetadata::new("account")
        .with_display_name("Account")
        .with_attribute(AttributeMetadata::new("name", "Name"))
        .with_attribute(
            AttributeMetadata::new("statuscode", "StatusCode")
                .with_type(AttributeTypeCode::Status)
                .with_options(vec![
                    OptionMetadata::new("Active", 1),
                    OptionMetadata::new("Inactive", 2),
                ]),
        )
}

#[test]
fn account_constants_artifact() {
    let generated = generate_entity(&account()).expect("generate account");
    assert_eq!(generated.name, "Account");
    assert_eq!(
        generated.constants.relative_path().to_string_lossy(),
        "constants/Account.ts"
    );

    let declarations = generated.constants.declarations();
    let Declaration::TypeAlias(field) = &declarations[0] else {
        panic!("expected Field type alias, got {:?}", declarations[0]);
    };
    assert_eq!(field.name, "Field");
    assert_eq!(field.members, vec!["name", "statuscode"]);
    assert_eq!(field.docs.as_ref().unwrap().as_str(), "Account (account)");

    let constants: Vec<(&str, &str)> = declarations
        .iter()
        .filter_map(|d| match d {
            Declaration::Constant(c) => Some((c.name.as_str(), c.value.as_str())),
            _ => None,
        })
        .collect();
    assert_eq!(constants, vec![("Name", "name"), ("StatusCode", "statuscode")]);
}

#[test]
fn account_enums_artifact() {
    let generated = generate_entity(&account()).expect("generate account");
    assert_eq!(
        generated.enums.relative_path().to_string_lossy(),
        "enums/Account.ts"
    );

    let declarations = generated.enums.declarations();
    assert_eq!(declarations.len(), 1);
    let Declaration::Enumeration(status) = &declarations[0] else {
        panic!("expected enumeration, got {:?}", declarations[0]);
    };
    assert_eq!(status.name, "StatusCode");
    let members: Vec<(&str, i64)> = status
        .members
        .iter()
        .map(|m| (m.name.as_str(), m.value))
        .collect();
    assert_eq!(members, vec![("Active", 1), ("Inactive", 2)]);
    assert_eq!(generated.enum_count(), 1);
    assert_eq!(generated.flag_holder_count(), 0);
}

#[test]
fn attributes_without_options_never_reach_enums() {
    let entity = EntityMetadata::new("contact")
        .with_attribute(AttributeMetadata::new("donotemail", "DoNotEMail").with_type(AttributeTypeCode::Boolean))
        .with_attribute(AttributeMetadata::new("gendercode", "GenderCode").with_type(AttributeTypeCode::Picklist));
    let generated = generate_entity(&entity).unwrap();
    assert!(generated.enums.is_empty());
    assert_eq!(generated.constants.count(DeclarationKind::Constant), 2);
}

#[test]
fn mixed_entity_keeps_attribute_order() {
    let entity = EntityMetadata::new("contact")
        .with_display_name("Contact")
        .with_attribute(
            AttributeMetadata::new("preferredcontactmethodcode", "PreferredContactMethodCode")
                .with_display_name("Preferred Method of Contact")
                .with_type(AttributeTypeCode::Picklist)
                .with_options(vec![
                    OptionMetadata::new("Any", 1),
                    OptionMetadata::new("Email", 2),
                    OptionMetadata::new("Phone", 3),
                ]),
        )
        .with_attribute(
            AttributeMetadata::new("donotemail", "DoNotEMail")
                .with_display_name("Do not allow Emails")
                .with_type(AttributeTypeCode::Boolean)
                .with_options(vec![
                    OptionMetadata::new("Allow", 0),
                    OptionMetadata::new("Do Not Allow", 1),
                ]),
        )
        .with_attribute(
            AttributeMetadata::new("creditonhold", "CreditOnHold")
                .with_display_name("Credit Hold")
                .with_type(AttributeTypeCode::Boolean)
                .with_options(vec![OptionMetadata::new("No", 0), OptionMetadata::new("Yes", 1)]),
        );
    let plan = generate_all(&[entity]).unwrap();
    let names: Vec<&str> = plan.entities[0]
        .enums
        .declarations()
        .iter()
        .map(Declaration::name)
        .collect();
    assert_eq!(
        names,
        vec!["PreferredMethodOfContact", "DoNotAllowEmails", "IsCreditHold"]
    );

    let Declaration::FlagHolder(emails) = &plan.entities[0].enums.declarations()[1] else {
        panic!("expected flag-holder");
    };
    let members: Vec<(&str, bool)> = emails
        .members
        .iter()
        .map(|m| (m.name.as_str(), m.value))
        .collect();
    assert_eq!(members, vec![("Allow", false), ("DoNotAllow", true)]);
}
