// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + scopes de cancelación
// ============================================================================

pub mod tasks;
pub mod app_state;

pub use tasks::*;
pub use app_state::*;
