// ============================================================================
// TASK SCOPES - Cancelación cooperativa por generación
// ============================================================================
// Las peticiones no se abortan: cada tarea toma un token al empezar y, cuando
// llega la respuesta, solo la aplica si su token sigue siendo el vigente.
// `begin()` invalida todos los tokens anteriores del mismo scope.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct TaskScope {
    name: &'static str,
    generation: Rc<Cell<u64>>,
}

impl TaskScope {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            generation: Rc::new(Cell::new(0)),
        }
    }

    /// Nueva tarea: reemplaza a cualquier tarea anterior del scope
    pub fn begin(&self) -> TaskToken {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        TaskToken {
            scope: self.name,
            generation: next,
            current: self.generation.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TaskToken {
    scope: &'static str,
    generation: u64,
    current: Rc<Cell<u64>>,
}

impl TaskToken {
    pub fn is_current(&self) -> bool {
        self.current.get() == self.generation
    }

    pub fn scope(&self) -> &'static str {
        self.scope
    }
}

/// Vigente si el token de la vista lo es y, si hay, también el de navegación
pub fn still_wanted(view: &TaskToken, navigation: Option<&TaskToken>) -> bool {
    let wanted = view.is_current() && navigation.map_or(true, TaskToken::is_current);
    if !wanted {
        log::debug!("⏭️ [TASKS] Respuesta descartada ({})", view.scope());
    }
    wanted
}

/// Un scope por recurso que se puede refrescar
#[derive(Clone, Debug)]
pub struct TaskScopes {
    pub navigation: TaskScope,
    pub persons: TaskScope,
    pub logs: TaskScope,
    pub datasets: TaskScope,
    pub settings: TaskScope,
    pub person_count: TaskScope,
    pub model_status: TaskScope,
    pub present_today: TaskScope,
}

impl TaskScopes {
    pub fn new() -> Self {
        Self {
            navigation: TaskScope::new("navigation"),
            persons: TaskScope::new("persons"),
            logs: TaskScope::new("logs"),
            datasets: TaskScope::new("datasets"),
            settings: TaskScope::new("settings"),
            person_count: TaskScope::new("person_count"),
            model_status: TaskScope::new("model_status"),
            present_today: TaskScope::new("present_today"),
        }
    }
}

impl Default for TaskScopes {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_task_supersedes_older() {
        let scope = TaskScope::new("logs");
        let first = scope.begin();
        assert!(first.is_current());
        let second = scope.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert_eq!(second.scope(), "logs");
    }

    #[test]
    fn navigation_token_gates_view_token() {
        let nav = TaskScope::new("navigation");
        let logs = TaskScope::new("logs");
        let nav_token = nav.begin();
        let logs_token = logs.begin();
        assert!(still_wanted(&logs_token, Some(&nav_token)));
        assert!(still_wanted(&logs_token, None));
        nav.begin();
        assert!(!still_wanted(&logs_token, Some(&nav_token)));
        assert!(still_wanted(&logs_token, None));
    }
}
