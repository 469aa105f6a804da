use ottawa_rules::ResultSummary;

/// Plain-text rendering of a result summary.
pub fn render_summary(summary: &ResultSummary) -> String {
    let mut output = format!("\n== {} ==\n\n", summary.headline);

    for stat in &summary.stats {
        output.push_str(&format!("{:<12} {}\n", stat.label, stat.value));
    }

    output.push_str("\nAssessment Breakdown\n");
    for row in &summary.breakdown {
        output.push_str(&format!(
            "  [{:<5}] {} ({})\n",
            row.badge.as_str(),
            row.label,
            row.subtitle
        ));
    }

    output.push_str(&format!("\n{}\n", summary.protocol.title));
    for step in &summary.protocol.steps {
        output.push_str(&format!(
            "  {}  {}: {}. {}\n",
            step.letter, step.title, step.subtitle, step.detail
        ));
    }

    output.push_str(&format!("\n{}\n", summary.disclaimer));
    output
}
