pub mod command;
pub mod query;
pub mod render;
pub mod session;
pub mod storage;

pub use command::{Command, CommandError};
pub use query::{Direction, SortField};
pub use render::render;
pub use session::{Flow, Session, SessionError};
pub use storage::{Meal, MealStore, StorageError};
