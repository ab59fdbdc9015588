// Reloj del header y de la sección de asistencia

use chrono::{Local, NaiveTime};
use crate::services::platform::Platform;
use crate::state::IncrementalUpdate;
use crate::utils::time::format_clock;
use crate::viewmodels::context::AppContext;

pub struct ClockViewModel<P: Platform> {
    ctx: AppContext<P>,
}

impl<P: Platform> ClockViewModel<P> {
    pub fn new(ctx: AppContext<P>) -> Self {
        Self { ctx }
    }

    pub fn tick_now(&self) {
        self.tick(Local::now().time());
    }

    pub fn tick(&self, time: NaiveTime) {
        let label = format_clock(time);
        let changed = *self.ctx.state.clock_label.borrow() != label;
        if changed {
            *self.ctx.state.clock_label.borrow_mut() = label;
            self.ctx.refresh(IncrementalUpdate::Clock);
        }
    }
}
