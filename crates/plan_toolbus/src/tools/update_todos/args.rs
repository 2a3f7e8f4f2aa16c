/// Arguments for `update_todos`: one update of the plan.
pub use plan_core::UpdateRequest as UpdateTodosArgs;
