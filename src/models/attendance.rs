use serde::{Deserialize, Serialize};
use crate::models::api::{ApiError, ApiResult, ApiStatus};
use crate::utils::time::format_log_time;

/// Registro de asistencia de un día
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceLog {
    pub person_name: String,
    pub timestamp: String,
    #[serde(default)]
    pub checkout_time: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

impl AttendanceLog {
    pub fn check_in_label(&self) -> String {
        format_log_time(Some(&self.timestamp))
    }

    pub fn check_out_label(&self) -> String {
        format_log_time(self.checkout_time.as_deref())
    }

    pub fn duration_label(&self) -> String {
        match self.duration.as_deref() {
            Some(d) if !d.trim().is_empty() => d.to_string(),
            _ => "-".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogsPayload {
    pub logs: Vec<AttendanceLog>,
}

/// Filtro de `/attendance-logs`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogsQuery {
    pub date: String,
    /// El backend filtra `person_id` contra el nombre de la persona
    pub person: Option<String>,
}

impl LogsQuery {
    pub fn new(date: impl Into<String>, person: Option<String>) -> Self {
        let person = person
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        Self {
            date: date.into(),
            person,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![("date", self.date.as_str())];
        if let Some(person) = &self.person {
            pairs.push(("person_id", person.as_str()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AttendanceStats {
    pub date: Option<String>,
    pub total_present: u32,
    pub total_marked: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AttendanceStatsPayload {
    pub stats: Option<AttendanceStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModelStats {
    pub total_persons: u32,
    pub total_encoded_faces: u32,
    pub persons_trained: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModelStatusPayload {
    pub is_trained: bool,
    pub stats: Option<ModelStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrainStats {
    pub faces_encoded: u32,
    pub persons: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TrainPayload {
    pub stats: Option<TrainStats>,
}

#[derive(Debug, Serialize)]
pub struct MarkAttendanceRequest<'a> {
    pub image: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MarkAttendancePayload {
    pub person: Option<String>,
    pub timestamp: Option<String>,
}

/// Resultado de un intento de marcar asistencia (uno por captura)
#[derive(Debug, Clone, PartialEq)]
pub enum AttendanceOutcome {
    Recognized { person: String },
    NotRecognized,
    Failed { message: String },
}

impl AttendanceOutcome {
    pub fn from_result(result: ApiResult<MarkAttendancePayload>) -> Self {
        match result {
            Ok(response) => match response.status {
                ApiStatus::Success => match response.data.person {
                    Some(person) if !person.is_empty() => AttendanceOutcome::Recognized { person },
                    _ => AttendanceOutcome::Failed {
                        message: "Response without person".to_string(),
                    },
                },
                ApiStatus::Warning => AttendanceOutcome::NotRecognized,
                status => AttendanceOutcome::Failed {
                    message: ApiError::Rejected {
                        status,
                        message: response.message,
                    }
                    .user_message(),
                },
            },
            Err(e) => AttendanceOutcome::Failed {
                message: e.user_message(),
            },
        }
    }

    /// Texto del label de estado en la sección de asistencia
    pub fn status_label(&self) -> &'static str {
        match self {
            AttendanceOutcome::Recognized { .. } => "✅ Marked!",
            AttendanceOutcome::NotRecognized => "⚠️ Not Recognized",
            AttendanceOutcome::Failed { .. } => "❌ Error",
        }
    }
}

/// Contadores del dashboard (None = aún no cargado)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardCounters {
    pub total_persons: Option<usize>,
    pub model_trained: Option<bool>,
    pub faces_encoded: Option<u32>,
    pub present_today: Option<u32>,
}

impl DashboardCounters {
    pub fn total_persons_label(&self) -> String {
        self.total_persons.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
    }

    pub fn model_status_label(&self) -> &'static str {
        match self.model_trained {
            Some(true) => "✅ Trained",
            Some(false) => "⚠️ Not Trained",
            None => "-",
        }
    }

    pub fn faces_encoded_label(&self) -> String {
        self.faces_encoded.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
    }

    pub fn present_today_label(&self) -> String {
        self.present_today.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
    }
}
