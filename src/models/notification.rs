// ============================================================================
// NOTIFICATIONS - Toasts transitorios con severidad
// ============================================================================
// Cada toast tiene su propio ciclo: visible durante `display_ms`, animación de
// salida durante `exit_ms`, luego se elimina. Sin cola, sin de-duplicación.
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Success => "#51cf66",
            Severity::Error => "#ff6b6b",
            Severity::Warning => "#ffa500",
            Severity::Info => "#4dabf7",
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Severity::Success => "toast toast--success",
            Severity::Error => "toast toast--error",
            Severity::Warning => "toast toast--warning",
            Severity::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationTiming {
    pub display_ms: u32,
    pub exit_ms: u32,
}

impl NotificationTiming {
    pub fn total_ms(&self) -> u32 {
        self.display_ms + self.exit_ms
    }
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            display_ms: 3000,
            exit_ms: 300,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    Leaving,
    Gone,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub created_at_ms: f64,
}

impl Notification {
    pub fn phase_at(&self, now_ms: f64, timing: NotificationTiming) -> NotificationPhase {
        let elapsed = now_ms - self.created_at_ms;
        if elapsed < timing.display_ms as f64 {
            NotificationPhase::Visible
        } else if elapsed < timing.total_ms() as f64 {
            NotificationPhase::Leaving
        } else {
            NotificationPhase::Gone
        }
    }
}

/// Toasts vivos en pantalla
#[derive(Debug, Default)]
pub struct NotificationStack {
    next_id: u64,
    live: Vec<Notification>,
    timing: NotificationTiming,
}

impl NotificationStack {
    pub fn new(timing: NotificationTiming) -> Self {
        Self {
            next_id: 0,
            live: Vec::new(),
            timing,
        }
    }

    pub fn timing(&self) -> NotificationTiming {
        self.timing
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity, now_ms: f64) -> Notification {
        self.next_id += 1;
        let notification = Notification {
            id: self.next_id,
            message: message.into(),
            severity,
            created_at_ms: now_ms,
        };
        self.live.push(notification.clone());
        notification
    }

    /// Cierre manual (click sobre el toast)
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.live.len();
        self.live.retain(|n| n.id != id);
        self.live.len() != before
    }

    /// Eliminar los toasts terminados; devuelve sus ids
    pub fn sweep(&mut self, now_ms: f64) -> Vec<u64> {
        let timing = self.timing;
        let (gone, keep): (Vec<_>, Vec<_>) = self
            .live
            .drain(..)
            .partition(|n| n.phase_at(now_ms, timing) == NotificationPhase::Gone);
        self.live = keep;
        gone.into_iter().map(|n| n.id).collect()
    }

    #[cfg(test)]
    pub fn live(&self) -> &[Notification] {
        &self.live
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
