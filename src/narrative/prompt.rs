//! Prompt rendering for language-model generators.

use core::fmt::Write;

use crate::report;

use super::{MAX_RECOMMENDATIONS, NarrativeRequest};

pub(super) fn render(req: &NarrativeRequest<'_>) -> String {
    let mut out = String::with_capacity(2048);

    out.push_str(
        "You advise the owner of an aquarium monitoring system. The figures below were \
         measured or computed by the system. Treat them as facts and do not recompute them.\n\n",
    );

    // writeln! into a String cannot fail.
    let _ = writeln!(
        out,
        "History ({} day{}, oldest first):",
        req.entries.len(),
        if req.entries.len() == 1 { "" } else { "s" }
    );
    for entry in req.entries {
        let _ = writeln!(out, "- {}", entry.date);
        let _ = writeln!(out, "  Water quality: {}", report::water_quality(&entry.water_quality));
        let _ = writeln!(out, "  Feeding times: {}", report::feeding_times(&entry.feeding_events));
        let _ = writeln!(
            out,
            "  pH balancer triggered: {}",
            if entry.ph_balancer_triggered { "yes" } else { "no" }
        );
        // Optional fields appear only when recorded.
        if entry.auto_feeding_enabled.is_some() {
            let _ = writeln!(
                out,
                "  Auto feeding: {}",
                report::automation_status(entry.auto_feeding_enabled)
            );
        }
        if entry.auto_ph_enabled.is_some() {
            let _ = writeln!(
                out,
                "  Auto pH: {}",
                report::automation_status(entry.auto_ph_enabled)
            );
        }
        if entry.food_level_start.is_some() || entry.food_level_end.is_some() {
            let _ = writeln!(
                out,
                "  Food level: {}",
                report::container_levels(entry.food_level_start, entry.food_level_end)
            );
        }
        if entry.ph_level_start.is_some() || entry.ph_level_end.is_some() {
            let _ = writeln!(
                out,
                "  pH solution level: {}",
                report::container_levels(entry.ph_level_start, entry.ph_level_end)
            );
        }
    }

    out.push_str("\nCurrent container levels:\n");
    match req.current {
        Some(c) => {
            let _ = writeln!(out, "- Food: {}", level(c.food_pct));
            let _ = writeln!(out, "- pH solution: {}", level(c.ph_solution_pct));
        }
        None => out.push_str("- not available\n"),
    }

    out.push_str("\nDepletion estimates (computed):\n");
    let _ = writeln!(out, "- Food container empty: {}", req.estimates.food);
    let _ = writeln!(out, "- pH solution container empty: {}", req.estimates.ph);

    if req.is_limited() {
        let _ = writeln!(
            out,
            "\nOnly {} of the {} days needed for a reliable trend are available. \
             Say so, and keep recommendations general or focused on building a baseline.",
            req.signals.observed_days, req.full_confidence_days
        );
    }

    let _ = write!(
        out,
        "\nWrite at most {MAX_RECOMMENDATIONS} short, actionable recommendations, one per line, \
         most important first. Look for persistently high turbidity, pH swings, missed feedings \
         while auto feeding was enabled, frequent balancer activation while auto pH was enabled, \
         and unusually fast container consumption. Do not restate the estimates as your own \
         calculation.\n"
    );

    out
}

fn level(pct: Option<f64>) -> String {
    match pct {
        Some(_) => format!("{}%", report::reading(pct)),
        None => "not recorded".to_string(),
    }
}
