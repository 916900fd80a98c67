use crate::error::PlanError;
use crate::inventory::ItemRegistry;
use crate::search::Plan;

/// Formats plans into human-readable strings
pub struct PlanFormatter;

impl PlanFormatter {
    /// Format a plan as numbered steps followed by a one-line summary.
    ///
    /// Each line shows the action taken and the inventory it leads to, with
    /// empty slots left out.
    pub fn format_plan(plan: &Plan, registry: &ItemRegistry) -> String {
        let mut lines = Vec::with_capacity(plan.steps.len() + 1);
        for (index, step) in plan.steps.iter().enumerate() {
            let action = step.action.as_deref().unwrap_or("(start)");
            lines.push(format!(
                "{:>4}. {} -> {}",
                index,
                action,
                step.state.display(registry)
            ));
        }
        lines.push(Self::format_summary(plan));
        lines.join("\n")
    }

    /// Format the cost and search statistics of a plan.
    pub fn format_summary(plan: &Plan) -> String {
        format!(
            "Total cost {} over {} actions ({} states expanded, {} discovered, in {:?})",
            Self::format_cost(plan.total_cost),
            plan.len(),
            plan.stats.expansions,
            plan.stats.discovered,
            plan.stats.elapsed
        )
    }

    /// Format a failed search.
    pub fn format_failure(error: &PlanError) -> String {
        match error {
            PlanError::NotFound { reason, stats } => format!(
                "Failed to find a plan: {} after {} expansions in {:?}",
                reason, stats.expansions, stats.elapsed
            ),
            other => format!("Search failed: {}", other),
        }
    }

    /// Format a cost, dropping the fraction when it is whole.
    fn format_cost(cost: f64) -> String {
        if cost.fract() == 0.0 {
            format!("{}", cost as i64)
        } else {
            format!("{}", cost)
        }
    }
}
