//! End-to-end scenario: inspector ids correlated with validation messages,
//! the way a rendering layer would highlight invalid fields.

use focal::prelude::*;
use focal::validation::rules;

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
    age: i64,
}

fn name_lens() -> Lens<Person, String> {
    Lens::new(
        "name",
        |p: &Person| p.name.clone(),
        |p: &Person, name| Person { name, ..p.clone() },
    )
}

fn age_lens() -> Lens<Person, i64> {
    Lens::new(
        "age",
        |p: &Person| p.age,
        |p: &Person, age| Person { age, ..p.clone() },
    )
}

#[derive(Debug, Clone, PartialEq)]
struct Finding {
    id: String,
    text: String,
}

impl ValidationMessage for Finding {
    fn id(&self) -> &str {
        &self.id
    }

    fn failed(&self) -> bool {
        true
    }
}

struct PersonForm {
    validator: Validator<Person, Finding, ()>,
}

impl PersonForm {
    fn new() -> Self {
        Self {
            validator: Validator::new(|person: &Person, _: &()| {
                let mut findings = Vec::new();
                if !rules::required(&person.name) {
                    findings.push(Finding {
                        id: "name".to_string(),
                        text: "please enter a name".to_string(),
                    });
                }
                if person.age < 0 {
                    findings.push(Finding {
                        id: "age".to_string(),
                        text: "age must not be negative".to_string(),
                    });
                }
                findings
            }),
        }
    }
}

impl Validation<Person, Finding, ()> for PersonForm {
    fn validator(&self) -> &Validator<Person, Finding, ()> {
        &self.validator
    }
}

#[tokio::test]
async fn test_messages_match_inspector_ids() {
    let person = Person {
        name: String::new(),
        age: -1,
    };

    let root = inspect(person.clone());
    let name = root.sub(name_lens());
    assert_eq!(name.id(), "name");
    assert_eq!(name.data(), "");

    let form = PersonForm::new();
    let mut msgs = form.msgs();

    assert!(!form.validate(&person, &()));
    assert!(!form.validator().is_valid());

    // the rendering layer filters messages by inspector id
    let findings = msgs.recv().await.expect("validator alive");
    let for_name: Vec<_> = findings.iter().filter(|f| f.id() == name.id()).collect();
    assert_eq!(for_name.len(), 1);
    assert_eq!(for_name[0].text, "please enter a name");
    assert!(findings.iter().any(|f| f.id() == "age"));
}

#[tokio::test]
async fn test_edit_flow_revalidates_to_valid() {
    let person = Person {
        name: String::new(),
        age: -1,
    };
    let form = PersonForm::new();
    assert!(!form.validate(&person, &()));

    // a UI edit writes back through the root-composed lens, producing a new
    // root which is re-wrapped and re-validated
    let named = inspect(person).sub(name_lens()).update("Ada".to_string());
    let aged = inspect(named).sub(age_lens()).update(36);

    assert!(form.validate(&aged, &()));
    assert!(form.validator().is_valid());
    assert_eq!(form.validator().current(), Some(Vec::new()));
}
