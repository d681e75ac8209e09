use serde::Serialize;

use ajaxlab_core::RecordId;

/// User as served by the first chapter.
///
/// `secret` is serialized on purpose: this is the "before DTOs" example of
/// leaking an internal field to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoUser {
    pub id: RecordId,
    pub name: String,
    pub skills: Vec<String>,
    pub secret: String,
}

impl DemoUser {
    fn new(id: u64, name: &str, skills: &[&str], secret: &str) -> Self {
        Self {
            id: RecordId::new(id),
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            secret: secret.to_string(),
        }
    }
}

pub fn demo_users() -> Vec<DemoUser> {
    vec![
        DemoUser::new(1, "Alice", &["Java", "Spring Boot"], "I love coding"),
        DemoUser::new(2, "Bob", &["HTML", "CSS"], "I hate bugs"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_is_exposed_in_json() {
        let json = serde_json::to_value(demo_users()).unwrap();
        assert_eq!(json[0]["secret"], "I love coding");
        assert_eq!(json[1]["skills"][1], "CSS");
    }
}
