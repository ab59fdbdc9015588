use serde::{Deserialize, Serialize};

/// Persona registrada en el backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_count: u32,
}

/// Persona destino del modal de subida de imágenes
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedPerson {
    pub id: String,
    pub name: String,
}

impl From<&Person> for SelectedPerson {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id.clone(),
            name: person.name.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NewPersonRequest {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonsPayload {
    pub persons: Vec<Person>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatedPerson {
    pub person_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::api::decode_envelope;

    #[test]
    fn missing_image_count_defaults_to_zero() {
        let body = r#"{"status":"success","persons":[{"id":"person_1","name":"Alice"}]}"#;
        let response = decode_envelope::<PersonsPayload>(200, "OK", body).unwrap();
        assert_eq!(response.data.persons[0].image_count, 0);
        let selected = SelectedPerson::from(&response.data.persons[0]);
        assert_eq!(selected.id, "person_1");
        assert_eq!(selected.name, "Alice");
    }
}
