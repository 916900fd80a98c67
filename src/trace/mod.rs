mod formatter;

pub use formatter::PlanFormatter;
