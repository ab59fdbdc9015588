// ============================================================================
// NAVIGATION VIEWMODEL - Sección activa + hooks de entrada
// ============================================================================
// Exactamente una sección activa. Cada navegación toma un token nuevo del
// scope `navigation`, lo que invalida las cargas de entrada anteriores.
// ============================================================================

use crate::models::Section;
use crate::services::platform::Platform;
use crate::state::{IncrementalUpdate, TaskToken};
use crate::viewmodels::attendance_viewmodel::AttendanceViewModel;
use crate::viewmodels::context::AppContext;
use crate::viewmodels::logs_viewmodel::LogsViewModel;
use crate::viewmodels::settings_viewmodel::SettingsViewModel;

/// Efecto a lanzar tras entrar en una sección
#[derive(Debug, Clone)]
pub enum EntryHook {
    None,
    StartCamera,
    ReloadLogs(TaskToken),
    LoadSettings(TaskToken),
}

pub struct NavigationViewModel<P: Platform> {
    ctx: AppContext<P>,
}

impl<P: Platform> NavigationViewModel<P> {
    pub fn new(ctx: AppContext<P>) -> Self {
        Self { ctx }
    }

    #[cfg(test)]
    pub fn active(&self) -> Section {
        self.ctx.state.active_section()
    }

    /// Cambio síncrono de sección; el hook devuelto lo ejecuta `run_entry_hook`
    pub fn navigate_to(&self, section: Section) -> EntryHook {
        let previous = self.ctx.state.active_section.replace(section);
        let token = self.ctx.state.scopes.navigation.begin();
        log::info!("🧭 [NAV] {} → {}", previous.key(), section.key());

        if previous == Section::Attendance
            && section != Section::Attendance
            && self.ctx.options.release_camera_on_leave
        {
            self.ctx.camera.release();
            self.ctx.refresh(IncrementalUpdate::Camera);
        }

        self.ctx.refresh(IncrementalUpdate::Navigation);

        match section {
            Section::Attendance => EntryHook::StartCamera,
            Section::Logs => EntryHook::ReloadLogs(token),
            Section::Settings => EntryHook::LoadSettings(token),
            Section::Dashboard | Section::Persons | Section::Datasets => EntryHook::None,
        }
    }

    /// Claves desconocidas navegan al dashboard
    pub fn navigate_to_key(&self, key: &str) -> EntryHook {
        let section = Section::from_key(key).unwrap_or_else(|| {
            log::warn!("⚠️ [NAV] Sección desconocida {:?}, usando dashboard", key);
            Section::Dashboard
        });
        self.navigate_to(section)
    }

    pub async fn run_entry_hook(&self, hook: EntryHook) {
        match hook {
            EntryHook::None => {}
            EntryHook::StartCamera => {
                AttendanceViewModel::new(self.ctx.clone()).ensure_camera().await;
            }
            EntryHook::ReloadLogs(token) => {
                LogsViewModel::new(self.ctx.clone())
                    .load_for_navigation(token)
                    .await;
            }
            EntryHook::LoadSettings(token) => {
                SettingsViewModel::new(self.ctx.clone())
                    .load_for_navigation(token)
                    .await;
            }
        }
    }

    pub async fn navigate(&self, section: Section) {
        let hook = self.navigate_to(section);
        self.run_entry_hook(hook).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CameraPhase;
    use crate::testing::{context, context_with, TEST_LOG_DATE};
    use crate::viewmodels::context::ControllerOptions;
    use futures::executor::block_on;

    #[test]
    fn every_section_becomes_the_only_active_one() {
        let ctx = context();
        let nav = NavigationViewModel::new(ctx.clone());
        for section in Section::ALL {
            nav.navigate_to(section);
            assert_eq!(nav.active(), section);
            let active: Vec<Section> = Section::ALL
                .into_iter()
                .filter(|s| *s == ctx.state.active_section())
                .collect();
            assert_eq!(active, vec![section]);
        }
        assert!(ctx.ui.saw(IncrementalUpdate::Navigation));
    }

    #[test]
    fn unknown_key_falls_back_to_dashboard() {
        let ctx = context();
        let nav = NavigationViewModel::new(ctx.clone());
        nav.navigate_to(Section::Persons);
        assert!(matches!(nav.navigate_to_key("reports"), EntryHook::None));
        assert_eq!(nav.active(), Section::Dashboard);
        assert_eq!(ctx.state.active_section().title(), "Dashboard");
    }

    #[test]
    fn entering_attendance_starts_camera_once() {
        let ctx = context();
        let nav = NavigationViewModel::new(ctx.clone());
        block_on(nav.navigate(Section::Attendance));
        block_on(nav.navigate(Section::Dashboard));
        block_on(nav.navigate(Section::Attendance));
        assert_eq!(ctx.camera.phase(), CameraPhase::Active);
        assert_eq!(ctx.camera.device().requests(), 1);
        assert_eq!(ctx.camera.device().released(), 0);
    }

    #[test]
    fn leaving_attendance_releases_when_configured() {
        let options = ControllerOptions {
            release_camera_on_leave: true,
            ..ControllerOptions::default()
        };
        let ctx = context_with(options);
        let nav = NavigationViewModel::new(ctx.clone());
        block_on(nav.navigate(Section::Attendance));
        block_on(nav.navigate(Section::Persons));
        assert_eq!(ctx.camera.phase(), CameraPhase::Absent);
        assert_eq!(ctx.camera.device().released(), 1);

        block_on(nav.navigate(Section::Attendance));
        assert_eq!(ctx.camera.device().requests(), 2);
    }

    #[test]
    fn entering_logs_reloads_current_date() {
        let ctx = context();
        let nav = NavigationViewModel::new(ctx.clone());
        block_on(nav.navigate(Section::Logs));
        block_on(nav.navigate(Section::Logs));
        assert_eq!(
            ctx.api.count(&format!("GET /attendance-logs?date={}", TEST_LOG_DATE)),
            2
        );
    }

    #[test]
    fn entering_settings_loads_them() {
        let ctx = context();
        let nav = NavigationViewModel::new(ctx.clone());
        block_on(nav.navigate(Section::Settings));
        assert_eq!(ctx.api.count("GET /settings"), 1);
        assert!(ctx.ui.saw(IncrementalUpdate::Settings));
    }

    #[test]
    fn navigating_away_drops_pending_logs() {
        let ctx = context();
        let nav = NavigationViewModel::new(ctx.clone());
        let hook = nav.navigate_to(Section::Logs);
        block_on(async {
            let pending = nav.run_entry_hook(hook);
            futures::pin_mut!(pending);
            assert!(futures::poll!(pending.as_mut()).is_pending());
            nav.navigate_to(Section::Persons);
            pending.await;
        });
        assert!(!ctx.ui.saw(IncrementalUpdate::Logs));
        assert_eq!(*ctx.state.logs_loaded_for.borrow(), None);
    }
}
