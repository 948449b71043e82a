use super::walk::Step;

/// Render steps the way the editor reports a run:
/// `1. [TIMER] Every 5 minutes (timer-1)`, one per line.
pub fn render(steps: &[Step]) -> String {
    if steps.is_empty() {
        return "No steps executed.".to_string();
    }

    steps
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "{}. [{}] {} ({})",
                i + 1,
                s.kind.as_str().to_uppercase(),
                s.label,
                s.id
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeKind;

    #[test]
    fn numbers_steps_and_uppercases_kind() {
        let steps = vec![
            Step {
                id: "timer-1".into(),
                kind: NodeKind::Timer,
                label: "Every 5 minutes".into(),
            },
            Step {
                id: "log-1".into(),
                kind: NodeKind::Output,
                label: "Log fill".into(),
            },
        ];
        assert_eq!(
            render(&steps),
            "1. [TIMER] Every 5 minutes (timer-1)\n2. [OUTPUT] Log fill (log-1)"
        );
    }

    #[test]
    fn empty_path() {
        assert_eq!(render(&[]), "No steps executed.");
    }
}
