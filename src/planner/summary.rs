//! Plain-text summary for copying or sharing

use super::recommendation::Recommendation;
use crate::money::{format_baht, format_baht_whole, format_grouped};
use crate::rules::Tier;

pub const DISCLAIMER: &str = "Note: this is a preliminary planning aid, not a quotation.";

/// Six lines: budget, life base, one per tier, disclaimer
pub fn render(rec: &Recommendation) -> String {
    let mut lines = Vec::with_capacity(6);

    lines.push(format!(
        "Recommended budget/month: {} (≈ {}% of income; reference range {}–{})",
        format_baht(rec.budget),
        rec.used_rate.percent_one_decimal(),
        format_baht(rec.budget_range_min),
        format_baht(rec.budget_range_max),
    ));
    lines.push(format!(
        "Base life cover (total debt + income × {} years): {}",
        rec.life_years,
        format_baht_whole(rec.life_base),
    ));
    for tier in Tier::ALL {
        let plan = rec.plan(tier);
        lines.push(format!(
            "{}: Life {} | CI {} | PA {} | Cash {} THB/day",
            tier.as_str(),
            format_baht_whole(plan.life),
            format_baht_whole(plan.critical_illness),
            format_baht_whole(plan.personal_accident),
            format_grouped(plan.hospital_cash_per_day),
        ));
    }
    lines.push(DISCLAIMER.to_string());

    lines.join("\n")
}
